use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_BACKEND_BASE: &str = "http://116.204.65.72:8881";
pub const DEFAULT_REVIEW_NOTICE_BASE: &str = "http://36.103.203.206:8000";
pub const BACKEND_BASE_ENV: &str = "BACKEND_BASE_URL";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub backend_base: String,
    pub review_notice_base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_stream_url: Option<String>,
}

impl ApiConfig {
    pub fn defaults_with(backend_override: Option<String>) -> Self {
        let backend_base = backend_override
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_BASE.to_string());
        Self {
            backend_base,
            review_notice_base: DEFAULT_REVIEW_NOTICE_BASE.to_string(),
            video_stream_url: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::defaults_with(std::env::var(BACKEND_BASE_ENV).ok())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_config: ApiConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Url(String),
}

impl ConfigSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_json::from_str(raw)?)
}

fn fetch_config_text(url: &str) -> Result<String, ConfigError> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client
        .get(url)
        .header(USER_AGENT, concat!("washmon/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()?;
    if !response.status().is_success() {
        return Err(ConfigError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    Ok(response.text()?)
}

pub fn read_config(source: &ConfigSource) -> Result<AppConfig, ConfigError> {
    let raw = match source {
        ConfigSource::File(path) => fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?,
        ConfigSource::Url(url) => fetch_config_text(url)?,
    };
    parse_config(&raw)
}

pub fn load_config(source: &ConfigSource) -> AppConfig {
    match read_config(source) {
        Ok(config) => {
            info!(
                source = %source,
                backend = %config.api_config.backend_base,
                review_notice = %config.api_config.review_notice_base,
                "config loaded"
            );
            config
        }
        Err(err) => {
            warn!(source = %source, "config load failed, using defaults: {err}");
            AppConfig::default()
        }
    }
}

// Tests that read or write BACKEND_BASE_URL hold this lock.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn temp_file(contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("washmon-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("mkdir");
        let path = dir.join("config.json");
        fs::write(&path, contents).expect("write");
        path
    }

    #[test]
    fn source_parse_detects_urls() {
        assert_eq!(
            ConfigSource::parse(" https://ui.local/config.json "),
            ConfigSource::Url("https://ui.local/config.json".to_string())
        );
        assert_eq!(
            ConfigSource::parse("public/config.json"),
            ConfigSource::File(PathBuf::from("public/config.json"))
        );
    }

    #[test]
    fn defaults_respect_backend_override() {
        let api = ApiConfig::defaults_with(Some("http://10.0.0.2:9000".to_string()));
        assert_eq!(api.backend_base, "http://10.0.0.2:9000");
        assert_eq!(api.review_notice_base, DEFAULT_REVIEW_NOTICE_BASE);
        assert!(api.video_stream_url.is_none());

        let blank = ApiConfig::defaults_with(Some("  ".to_string()));
        assert_eq!(blank.backend_base, DEFAULT_BACKEND_BASE);
    }

    #[test]
    fn default_reads_backend_override_from_env() {
        let _env = env_guard();
        let previous = std::env::var(BACKEND_BASE_ENV).ok();

        std::env::set_var(BACKEND_BASE_ENV, "http://env-backend:7000");
        let api = ApiConfig::default();
        assert_eq!(api.backend_base, "http://env-backend:7000");
        assert_eq!(api.review_notice_base, DEFAULT_REVIEW_NOTICE_BASE);

        std::env::set_var(BACKEND_BASE_ENV, " ");
        assert_eq!(ApiConfig::default().backend_base, DEFAULT_BACKEND_BASE);

        std::env::remove_var(BACKEND_BASE_ENV);
        assert_eq!(ApiConfig::default().backend_base, DEFAULT_BACKEND_BASE);

        if let Some(value) = previous {
            std::env::set_var(BACKEND_BASE_ENV, value);
        }
    }

    #[test]
    fn reads_camel_case_file() {
        let path = temp_file(
            r#"{"apiConfig": {"backendBase": "http://b:1", "reviewNoticeBase": "http://r:2", "videoStreamUrl": "ws://v:3/stream"}}"#,
        );
        let config = read_config(&ConfigSource::File(path.clone())).expect("read");
        assert_eq!(config.api_config.backend_base, "http://b:1");
        assert_eq!(config.api_config.review_notice_base, "http://r:2");
        assert_eq!(config.api_config.video_stream_url.as_deref(), Some("ws://v:3/stream"));
        let _ = fs::remove_dir_all(path.parent().expect("parent"));
    }

    #[test]
    fn partial_file_keeps_default_review_base() {
        let config = parse_config(r#"{"apiConfig": {"backendBase": "http://b:1"}}"#).expect("parse");
        assert_eq!(config.api_config.backend_base, "http://b:1");
        assert_eq!(config.api_config.review_notice_base, DEFAULT_REVIEW_NOTICE_BASE);
    }

    #[test]
    fn invalid_json_is_an_error_for_read_but_not_load() {
        let _env = env_guard();
        let path = temp_file("{ not json");
        let source = ConfigSource::File(path.clone());
        let err = read_config(&source).expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(load_config(&source), AppConfig::default());
        let _ = fs::remove_dir_all(path.parent().expect("parent"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let _env = env_guard();
        let source = ConfigSource::File(
            std::env::temp_dir().join(format!("washmon-missing-{}.json", uuid::Uuid::new_v4())),
        );
        assert!(matches!(read_config(&source), Err(ConfigError::Read { .. })));
        assert_eq!(load_config(&source), AppConfig::default());
    }

    #[test]
    fn serializes_without_absent_video_url() {
        let config = AppConfig {
            api_config: ApiConfig::defaults_with(None),
        };
        let text = serde_json::to_string(&config).expect("serialize");
        assert!(text.contains("\"apiConfig\""));
        assert!(text.contains("\"backendBase\""));
        assert!(!text.contains("videoStreamUrl"));
    }
}
