use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration has not been loaded; call AppContext::initialize first")]
    NotLoaded,
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("config request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no proxy route for {0}")]
    Unrouted(String),
}
