pub mod parse;
pub mod scrape;

pub use parse::{
    default_fallback, normalize, normalize_body, normalize_keys, parse_content, safe_parse,
    safe_parse_value, CanonicalResponse,
};
pub use scrape::{decode_escapes, scrape_pairs};
