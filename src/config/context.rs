use once_cell::sync::OnceCell;

use crate::error::ConfigError;
use crate::routes;

use super::settings::{load_config, ApiConfig, AppConfig, ConfigSource};

#[derive(Debug, Default)]
pub struct AppContext {
    config: OnceCell<AppConfig>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: OnceCell::with_value(config),
        }
    }

    /// Loads from `source` on the first call; later calls return the
    /// already-loaded config and ignore `source`.
    pub fn initialize(&self, source: &ConfigSource) -> &AppConfig {
        self.config.get_or_init(|| load_config(source))
    }

    pub fn is_initialized(&self) -> bool {
        self.config.get().is_some()
    }

    pub fn config(&self) -> Result<&AppConfig, ConfigError> {
        self.config.get().ok_or(ConfigError::NotLoaded)
    }

    pub fn api_config(&self) -> Result<&ApiConfig, ConfigError> {
        Ok(&self.config()?.api_config)
    }

    pub fn backend_base(&self) -> Result<&str, ConfigError> {
        Ok(self.api_config()?.backend_base.as_str())
    }

    pub fn review_notice_base(&self) -> Result<&str, ConfigError> {
        Ok(self.api_config()?.review_notice_base.as_str())
    }

    pub fn video_stream_url(&self) -> Result<Option<&str>, ConfigError> {
        Ok(self.api_config()?.video_stream_url.as_deref())
    }

    pub fn resolve(&self, path: &str) -> Result<String, ConfigError> {
        routes::resolve(self.api_config()?, path)
    }
}
