//! Consumer error types.

use thiserror::Error;

/// Errors that can occur while checking a provider's health.
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// The request never produced a response (connection refused, DNS, body I/O).
    #[error("Transport error calling {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a JSON object.
    #[error("Decode error for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConsumerError {
    /// Short label used for the failure metric.
    pub fn kind(&self) -> &'static str {
        match self {
            ConsumerError::Transport { .. } => "transport",
            ConsumerError::Decode { .. } => "decode",
        }
    }
}

/// Convenience type alias for consumer results.
pub type Result<T> = std::result::Result<T, ConsumerError>;
