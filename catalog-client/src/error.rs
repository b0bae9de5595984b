use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("produto {0} not found")]
    NotFound(i32),

    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
}
