//! Stub provider for consumer contract tests.
//!
//! Serves one canned response on every path and records what the consumer
//! sent, so each test can check the request half of the contract.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::oneshot;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: Method,
    pub path: String,
    pub accept: Option<String>,
    pub request_id: Option<String>,
}

struct StubState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    received: Mutex<Vec<ReceivedRequest>>,
}

/// A running stub provider. Shuts down when dropped.
pub struct StubProvider {
    pub base_url: String,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubProvider {
    /// Starts a stub answering 200 with `body` as `application/json`.
    pub async fn start(body: serde_json::Value) -> Self {
        Self::start_raw(StatusCode::OK, "application/json", body.to_string()).await
    }

    /// Starts a stub answering with an arbitrary status, content type and body.
    pub async fn start_raw(
        status: StatusCode,
        content_type: &'static str,
        body: impl Into<String>,
    ) -> Self {
        let state = Arc::new(StubState {
            status,
            content_type,
            body: body.into(),
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            shutdown: Some(tx),
        }
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received.lock().unwrap().clone()
    }

    /// Asserts the consumer sent exactly one health request with the agreed headers.
    pub fn verify(&self, expected_request_id: &str) {
        let received = self.received();
        assert_eq!(received.len(), 1, "expected one request, got {received:?}");

        let request = &received[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/health");
        assert_eq!(request.accept.as_deref(), Some("application/json"));
        assert_eq!(request.request_id.as_deref(), Some(expected_request_id));
    }
}

impl Drop for StubProvider {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn record(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    state.received.lock().unwrap().push(ReceivedRequest {
        method,
        path: uri.path().to_string(),
        accept: header_value(header::ACCEPT.as_str()),
        request_id: header_value("x-request-id"),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body.clone(),
    )
        .into_response()
}

/// Returns a base URL nothing is listening on.
pub async fn unreachable_host() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
