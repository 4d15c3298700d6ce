//! Mock cart and checkout services plus a recording notifier for handler tests.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{
        header::{CONTENT_TYPE, COOKIE},
        HeaderMap, HeaderName, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use reqwest::Url;
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::{cart::CART_ADD_PATH, checkout::CHECKOUT_PATH, notifier::Notifier};

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Clone)]
pub struct CannedResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    pub fn text(status: StatusCode, body: &str) -> Self {
        CannedResponse {
            status: status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }

    pub fn json(status: StatusCode, body: Value) -> Self {
        CannedResponse {
            status: status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct MockState {
    response: CannedResponse,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockService {
    addr: SocketAddr,
    state: MockState,
}

impl MockService {
    /// Serves both endpoints on an ephemeral local port, answering every request with `response`.
    pub async fn start(response: CannedResponse) -> Self {
        let state = MockState {
            response: response,
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let router = Router::new()
            .route(CART_ADD_PATH, post(record))
            .route(CHECKOUT_PATH, post(record))
            .with_state(state.clone())
            .layer(CorsLayer::very_permissive());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockService {
            addr: addr,
            state: state,
        }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// A local URL with nothing listening on it.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{}", addr)).unwrap()
}

async fn record(State(state): State<MockState>, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        content_type: header(CONTENT_TYPE),
        cookie: header(COOKIE),
        body: body,
    });

    (
        state.response.status,
        [(CONTENT_TYPE, state.response.content_type)],
        state.response.body.clone(),
    )
        .into_response()
}
