use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("regex"));

pub fn underscore_whitespace(key: &str) -> String {
  WHITESPACE_RUN.replace_all(key, "_").into_owned()
}

pub fn join_url(base: &str, path: &str) -> String {
  let base = base.trim_end_matches('/');
  if path.is_empty() {
    return base.to_string();
  }
  if path.starts_with('/') {
    format!("{base}{path}")
  } else {
    format!("{base}/{path}")
  }
}

#[cfg(test)]
mod tests {
  use super::{join_url, underscore_whitespace};

  #[test]
  fn collapses_whitespace_runs() {
    assert_eq!(underscore_whitespace("room id2"), "room_id2");
    assert_eq!(underscore_whitespace("step \t seq"), "step_seq");
    assert_eq!(underscore_whitespace("already_clean"), "already_clean");
    assert_eq!(underscore_whitespace(" lead"), "_lead");
  }

  #[test]
  fn joins_without_doubling_slashes() {
    assert_eq!(join_url("http://h:1/", "/a/b"), "http://h:1/a/b");
    assert_eq!(join_url("http://h:1", "a"), "http://h:1/a");
    assert_eq!(join_url("http://h:1//", ""), "http://h:1");
  }
}
