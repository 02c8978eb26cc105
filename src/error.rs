use reqwest::StatusCode;
use thiserror::Error;

/// Every way a vacancy load can fail. The loader treats all of them alike.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(StatusCode),

    #[error("Malformed vacancy list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Empty vacancy list")]
    Empty,
}
