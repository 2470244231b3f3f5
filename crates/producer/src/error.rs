//! Server startup errors.

use thiserror::Error;

/// Errors that stop the producer before or while serving.
///
/// The `/health` handler itself cannot fail; these only come from process setup.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `HOST` did not resolve to a socket address.
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::io::Error,
    },

    /// Binding the listener or running the server failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Metrics recorder error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Convenience type alias for producer results.
pub type Result<T> = std::result::Result<T, ServerError>;
