//! # Fake REST Backend
//!
//! An in-process HTTP server for integration tests. Every request is recorded (method, path
//! and JSON body) and answered from a table of canned responses keyed by method and path.
//! Unknown routes answer `404` with `{}`.
//!
//! ```rust
//! use rest_actor::fake_backend::FakeBackend;
//! use rest_actor::{Backend, FrameworkError};
//! use axum::http::Method;
//! use serde_json::{json, Value};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fake = FakeBackend::start().await.unwrap();
//!     fake.respond_json(Method::GET, "/users/u1", json!({ "id": "u1", "name": "Ann" }));
//!
//!     let backend = Backend::new(&fake.base_url(), None).unwrap();
//!     let user: Value = backend.get(&["users", "u1"]).await.unwrap();
//!     assert_eq!(user["name"], "Ann");
//!
//!     let missing: Result<Value, _> = backend.get(&["users", "u2"]).await;
//!     assert!(missing.unwrap_err().is_not_found());
//!     assert_eq!(fake.count(Method::GET, "/users/u1"), 1);
//! }
//! ```

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// One request as the fake backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    /// The decoded JSON body, `None` when the request had no body.
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Canned {
    Reply {
        status: StatusCode,
        body: Option<Value>,
    },
    /// Accepts the request and never answers.
    Stall,
}

#[derive(Default)]
struct FakeState {
    routes: HashMap<(Method, String), Canned>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<FakeState>>;

/// A loopback HTTP server standing in for the REST backend.
///
/// The server task is aborted when the `FakeBackend` is dropped.
pub struct FakeBackend {
    state: SharedState,
    address: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    /// Binds an ephemeral port on 127.0.0.1 and starts serving.
    pub async fn start() -> std::io::Result<Self> {
        let state = SharedState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let address = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!(error = %e, "Fake backend stopped");
            }
        });
        debug!(%address, "Fake backend listening");
        Ok(Self {
            state,
            address,
            handle,
        })
    }

    /// The base address to hand to [`Backend::new`](crate::Backend::new).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// Answers `method path` with `status` and a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) -> &Self {
        self.insert(method, path, status, Some(body))
    }

    /// Answers `method path` with `200 OK` and a JSON body.
    pub fn respond_json(&self, method: Method, path: &str, body: Value) -> &Self {
        self.insert(method, path, StatusCode::OK, Some(body))
    }

    /// Answers `method path` with `status` and no body at all.
    pub fn respond_empty(&self, method: Method, path: &str, status: StatusCode) -> &Self {
        self.insert(method, path, status, None)
    }

    /// Accepts `method path` and never answers, for exercising client timeouts.
    pub fn stall(&self, method: Method, path: &str) -> &Self {
        lock(&self.state)
            .routes
            .insert((method, path.to_string()), Canned::Stall);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state).requests.clone()
    }

    /// How many times `method path` was requested.
    pub fn count(&self, method: Method, path: &str) -> usize {
        lock(&self.state)
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn insert(&self, method: Method, path: &str, status: StatusCode, body: Option<Value>) -> &Self {
        lock(&self.state)
            .routes
            .insert((method, path.to_string()), Canned::Reply { status, body });
        self
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(State(state): State<SharedState>, method: Method, uri: Uri, body: Bytes) -> Response {
    let body = if body.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())),
        )
    };
    let path = uri.path().to_string();

    let canned = {
        let mut state = lock(&state);
        let canned = state.routes.get(&(method.clone(), path.clone())).cloned();
        state.requests.push(RecordedRequest { method, path, body });
        canned
    };

    match canned {
        Some(Canned::Reply {
            status,
            body: Some(body),
        }) => (status, Json(body)).into_response(),
        Some(Canned::Reply { status, body: None }) => status.into_response(),
        Some(Canned::Stall) => std::future::pending().await,
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

fn lock(state: &SharedState) -> MutexGuard<'_, FakeState> {
    match state.lock() {
        Ok(state) => state,
        Err(poisoned) => poisoned.into_inner(),
    }
}
