//! Per-call request metadata.

/// Header value sent when the caller supplied no request id.
pub const MISSING_REQUEST_ID: &str = "<nil>";

/// Caller-supplied values forwarded with each health check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Option<String>,
}

impl RequestContext {
    /// Creates a context with no request id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context carrying the given request id.
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }

    /// Creates a context with a fresh random request id.
    pub fn generate() -> Self {
        Self::with_request_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Value for the `X-Request-Id` header.
    ///
    /// The header is always sent; an absent id renders as `<nil>`.
    pub fn request_id_header(&self) -> &str {
        self.request_id().unwrap_or(MISSING_REQUEST_ID)
    }
}
