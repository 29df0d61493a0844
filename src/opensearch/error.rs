//! Errors surfaced by the OpenSearch client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenSearchError {
    /// Connection refused, TLS failure, timeout
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The cluster answered with a non-success status
    #[error("opensearch returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl OpenSearchError {
    /// `error.type` reported by the cluster, if the body carries one
    pub fn error_type(&self) -> Option<String> {
        match self {
            OpenSearchError::Status { body, .. } => {
                let json: serde_json::Value = serde_json::from_str(body).ok()?;
                json.get("error")
                    .and_then(|e| e.get("type"))
                    .and_then(|t| t.as_str())
                    .map(|t| t.to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OpenSearchError>;
