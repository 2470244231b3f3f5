//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Payload served by `GET /health`.
///
/// Every field carries a fixed example value so consumers have something
/// of each JSON type to decode.
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    #[serde(rename = "Status")]
    pub status: String,
    pub message: String,
    pub integer: i64,
    pub float: f64,
    pub boolean: bool,
}

impl HealthCheck {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Testing Testing 123".to_string(),
            integer: 42,
            float: std::f64::consts::PI,
            boolean: true,
        }
    }
}

/// GET /health — returns the canned health payload.
pub async fn check() -> Json<HealthCheck> {
    metrics::counter!("health_checks_total").increment(1);
    Json(HealthCheck::ok())
}
