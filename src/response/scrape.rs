use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use crate::util::text::underscore_whitespace;

use super::parse::CanonicalResponse;

static QUOTED_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"\s*:\s*"([^"]*)""#).expect("regex"));

/// Recovers `"key": "value"` string pairs from text that failed strict
/// decoding. Matches never overlap and a later duplicate key overwrites the
/// earlier value. Non-string values are not recovered.
pub fn scrape_pairs(text: &str) -> CanonicalResponse {
    let mut out = CanonicalResponse::new();
    for cap in QUOTED_PAIR.captures_iter(text) {
        let key = underscore_whitespace(&cap[1]);
        let value = decode_escapes(&cap[2]);
        out.insert(key, Value::String(value));
    }
    out
}

pub fn decode_escapes(raw: &str) -> String {
    match serde_json::from_str::<String>(&format!("\"{raw}\"")) {
        Ok(decoded) => decoded,
        Err(err) => {
            trace!("keeping raw scraped value {raw:?}: {err}");
            raw.to_string()
        }
    }
}
