use serde_json::{Map, Value};
use tracing::debug;

use crate::util::text::underscore_whitespace;

use super::scrape::scrape_pairs;

pub type CanonicalResponse = Map<String, Value>;

pub fn default_fallback() -> Value {
    Value::Object(Map::new())
}

pub fn safe_parse(text: &str, fallback: Value) -> Value {
    try_parse(text).unwrap_or(fallback)
}

pub fn safe_parse_value(value: &Value, fallback: Value) -> Value {
    match value {
        Value::String(text) => safe_parse(text, fallback),
        Value::Null | Value::Bool(_) | Value::Number(_) => safe_parse(&value.to_string(), fallback),
        Value::Array(_) | Value::Object(_) => fallback,
    }
}

fn try_parse(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn normalize_keys(map: Map<String, Value>) -> CanonicalResponse {
    let mut out = CanonicalResponse::new();
    for (key, value) in map {
        out.insert(underscore_whitespace(&key), value);
    }
    out
}

fn index_keys(items: Vec<Value>) -> CanonicalResponse {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

pub fn parse_content(content: &Value) -> CanonicalResponse {
    if !is_truthy(content) {
        return CanonicalResponse::new();
    }

    let coerced;
    let text = match content {
        Value::Object(map) => return map.clone(),
        Value::String(raw) => raw.as_str(),
        other => {
            coerced = other.to_string();
            coerced.as_str()
        }
    }
    .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    match try_parse(text) {
        Some(Value::Object(map)) => normalize_keys(map),
        Some(Value::Array(items)) => index_keys(items),
        Some(other) => {
            debug!("content decoded to a non-object ({}), scraping pairs", kind(&other));
            scrape_pairs(text)
        }
        None => {
            debug!("content is not strict JSON, scraping pairs");
            scrape_pairs(text)
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Turns a decoded backend response into the shape the UI consumes.
///
/// A truthy `content` field replaces the whole envelope with its decoded
/// payload, even when that payload is empty. Without one the envelope is
/// returned as is. Non-object input yields an empty map.
pub fn normalize(raw: &Value) -> CanonicalResponse {
    let Value::Object(envelope) = raw else {
        return CanonicalResponse::new();
    };
    match envelope.get("content") {
        Some(content) if is_truthy(content) => parse_content(content),
        _ => envelope.clone(),
    }
}

pub fn normalize_body(body: &str) -> CanonicalResponse {
    normalize(&safe_parse(body, default_fallback()))
}
