//! Health checker client for a provider's `/health` endpoint.

use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::RequestContext;
use crate::error::{ConsumerError, Result};

/// Header carrying the caller's request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Decoded `/health` response.
///
/// Decoding is lenient: keys match case-insensitively (an exact match wins),
/// and a field that is missing, `null` or of the wrong JSON type keeps its
/// zero value while the other fields still populate. Unknown keys are
/// ignored. Only a body that is not a JSON object fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthResponse {
    #[serde(rename = "Status")]
    pub status: String,
    pub integer: i64,
    pub float: f64,
    pub boolean: bool,
}

impl<'de> Deserialize<'de> for HealthResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_fields(&fields))
    }
}

impl HealthResponse {
    /// Populates each field independently from a decoded JSON object.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            status: lookup(fields, "Status")
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_default(),
            integer: lookup(fields, "integer")
                .and_then(Value::as_i64)
                .unwrap_or_default(),
            float: lookup(fields, "float")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
            boolean: lookup(fields, "boolean")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }

    /// Example values this client's contract is written against.
    pub fn example() -> Self {
        Self {
            status: "OK".to_string(),
            integer: 36,
            float: 12.34,
            boolean: false,
        }
    }
}

/// Finds `key`, falling back to the first case-insensitive match.
fn lookup<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

/// Client for a provider's health endpoint.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    host: String,
    client: reqwest::Client,
}

impl HealthChecker {
    /// Creates a checker for `host`, a scheme plus authority such as
    /// `http://api.testing.com`.
    pub fn new(host: impl Into<String>) -> Self {
        let mut host = host.into();
        while host.ends_with('/') {
            host.pop();
        }
        Self {
            host,
            client: reqwest::Client::new(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.host)
    }

    /// Calls `/health` and returns whatever could be decoded.
    ///
    /// Transport and decode failures are logged and yield
    /// [`HealthResponse::default`]. Contract tests only exercise the agreed
    /// request and response shape; use [`HealthChecker::try_check`] where
    /// failures matter.
    #[tracing::instrument(skip(self, ctx), fields(host = %self.host, request_id = ctx.request_id_header()))]
    pub async fn check(&self, ctx: &RequestContext) -> HealthResponse {
        match self.try_check(ctx).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "health check failed, returning empty response");
                HealthResponse::default()
            }
        }
    }

    /// Calls `/health`, surfacing transport and decode failures.
    ///
    /// The HTTP status is not inspected; any body that decodes is accepted.
    pub async fn try_check(&self, ctx: &RequestContext) -> Result<HealthResponse> {
        metrics::counter!("health_client_requests_total").increment(1);

        let result = self.fetch(ctx).await;
        if let Err(err) = &result {
            metrics::counter!("health_client_failures_total", "kind" => err.kind()).increment(1);
        }
        result
    }

    async fn fetch(&self, ctx: &RequestContext) -> Result<HealthResponse> {
        let url = self.health_url();
        let transport = |source| ConsumerError::Transport {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, ctx.request_id_header())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        tracing::debug!(%status, bytes = body.len(), "health response received");

        serde_json::from_slice(&body).map_err(|source| ConsumerError::Decode {
            url: url.clone(),
            source,
        })
    }
}
