//! Demo health endpoint provider.
//!
//! Serves a fixed JSON payload on `GET /health` for consumers to write
//! contracts against, with request tracing and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{Result, ServerError};
pub use routes::health::HealthCheck;

/// Creates the router serving `/health` only.
///
/// Used on its own by tests that have no metrics recorder installed.
pub fn health_router() -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .layer(TraceLayer::new_for_http())
}

/// Creates the full application router, including `/metrics`.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    health_router().merge(metrics_router)
}

/// Binds `listener` and serves `app` until `shutdown` resolves.
pub async fn serve<F>(listener: tokio::net::TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
