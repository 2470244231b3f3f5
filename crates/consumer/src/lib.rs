//! Health checker client for the demo health endpoint.
//!
//! [`HealthChecker`] issues `GET {host}/health` with `Accept: application/json`
//! and the caller's request id, then decodes the JSON body into a
//! [`HealthResponse`].

pub mod context;
pub mod error;
pub mod health;

pub use context::RequestContext;
pub use error::{ConsumerError, Result};
pub use health::{HealthChecker, HealthResponse};
