//! Fake IP-asset API for integration tests.
//!
//! Serves the collection endpoint on a random local port, answers with a
//! scripted reply, and counts every request it receives.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;

pub const COLLECTION_ID: &str = "test-collection";
pub const API_KEY: &str = "sk_test_0123456789";

/// What the fake answers to `POST .../ipassets`.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
    Slow(Duration),
}

#[derive(Debug, Default)]
pub struct Received {
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Option<Value>,
}

pub struct Upstream {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
    received: Arc<Mutex<Received>>,
}

impl Upstream {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn received<T>(&self, f: impl FnOnce(&Received) -> T) -> T {
        f(&self.received.lock().unwrap())
    }
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    requests: Arc<AtomicUsize>,
    received: Arc<Mutex<Received>>,
}

/// Find a free port on localhost
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Base URL of a port nothing listens on.
pub fn dead_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub async fn start_upstream(reply: Reply) -> Upstream {
    let requests = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Received::default()));
    let state = FakeState {
        reply,
        requests: Arc::clone(&requests),
        received: Arc::clone(&received),
    };

    let app = Router::new()
        .route(
            &format!("/api/v1/ip/collections/{}/ipassets", COLLECTION_ID),
            post(create_ip_asset),
        )
        .route("/assets/voice.mp3", get(asset))
        .route("/assets/image.jpg", get(asset))
        .fallback(missing)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    Upstream {
        base_url: format!("http://127.0.0.1:{port}"),
        requests,
        received,
    }
}

async fn create_ip_asset(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let mut received = state.received.lock().unwrap();
        received.api_key = header("x-api-key");
        received.content_type = header("content-type");
        received.accept = header("accept");
        received.body = serde_json::from_str(&body).ok();
    }

    match state.reply {
        Reply::Json(value) => (StatusCode::OK, axum::Json(value)).into_response(),
        Reply::Status(code, text) => {
            (StatusCode::from_u16(code).unwrap(), text).into_response()
        }
        Reply::Slow(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, "{}").into_response()
        }
    }
}

async fn asset(State(state): State<FakeState>) -> StatusCode {
    state.requests.fetch_add(1, Ordering::SeqCst);
    StatusCode::OK
}

async fn missing(State(state): State<FakeState>) -> StatusCode {
    state.requests.fetch_add(1, Ordering::SeqCst);
    StatusCode::NOT_FOUND
}
