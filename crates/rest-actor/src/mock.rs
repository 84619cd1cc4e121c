//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a backend. It lets you assert exactly which requests a
//! piece of code issues (and how many) without any HTTP at all.
//!
//! ## When to use Mocks vs a Fake Backend
//!
//! | Feature | MockClient | [`FakeBackend`](crate::fake_backend::FakeBackend) + real actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (loopback HTTP) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **What is tested** | Logic *around* the client | Actor, URL building and wire bodies |
//! | **Error Injection** | Easy (`return_err`) | Canned status codes |
//!
//! ## Example
//!
//! ```rust
//! use rest_actor::mock::MockClient;
//! use rest_actor::{FrameworkError, RestEntity};
//! use serde::Deserialize;
//!
//! #[derive(Clone, Debug, PartialEq, Deserialize)]
//! struct Tag { id: String }
//!
//! impl RestEntity for Tag {
//!     type Id = String;
//!     type Create = ();
//!     type Update = ();
//!     const COLLECTION: &'static str = "tags";
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get("rust".to_string())
//!         .return_ok(Some(Tag { id: "rust".into() }));
//!     mock.expect_get("go".to_string())
//!         .return_err(FrameworkError::Status { status: 404, body: String::new() });
//!
//!     let client = mock.client();
//!     assert_eq!(client.get("rust".into()).await.unwrap().unwrap().id, "rust");
//!     assert!(client.get("go".into()).await.unwrap_err().is_not_found());
//!
//!     mock.verify(); // Ensures all expectations were met, and nothing else was sent
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::RestEntity;
use crate::error::FrameworkError;
use crate::message::{ParentRef, ResourceRequest};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: RestEntity> {
    List {
        parent: Option<ParentRef>,
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: String,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: String,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: String,
        response: Result<Option<T>, FrameworkError>,
    },
}

impl<T: RestEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::List { parent: None, .. } => "List".to_string(),
            Expectation::List {
                parent: Some(parent),
                ..
            } => format!("List under {}/{}", parent.collection, parent.id),
            Expectation::Get { id, .. } => format!("Get {id}"),
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::Update { id, .. } => format!("Update {id}"),
            Expectation::Delete { id, .. } => format!("Delete {id}"),
        }
    }
}

struct MockState<T: RestEntity> {
    expectations: VecDeque<Expectation<T>>,
    received: usize,
    payloads: Vec<Value>,
    mismatches: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in the order they were declared. A request
/// that does not match is recorded, its response channel is dropped (the caller sees
/// [`FrameworkError::ActorDropped`]) and [`MockClient::verify`] panics with the details.
pub struct MockClient<T: RestEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RestEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RestEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: 0,
            payloads: Vec::new(),
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = match task_state.lock() {
                    Ok(state) => state,
                    Err(poisoned) => poisoned.into_inner(),
                };
                answer(&mut state, request);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` of the whole collection.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(|response| Expectation::List {
            parent: None,
            response,
        }))
    }

    /// Expects a `list_under` scoped to `parent`.
    pub fn expect_list_under(&mut self, parent: ParentRef) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(move |response| Expectation::List {
            parent: Some(parent),
            response,
        }))
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        let id = id.to_string();
        self.builder(Box::new(move |response| Expectation::Get { id, response }))
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(|response| Expectation::Create { response }))
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        let id = id.to_string();
        self.builder(Box::new(move |response| Expectation::Update { id, response }))
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        let id = id.to_string();
        self.builder(Box::new(move |response| Expectation::Delete { id, response }))
    }

    /// Number of requests the mock has received so far, matched or not.
    pub fn received(&self) -> usize {
        self.lock().received
    }

    /// The JSON bodies of every create/update request received, in order.
    pub fn payloads(&self) -> Vec<Value> {
        self.lock().payloads.clone()
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let state = self.lock();
        if !state.mismatches.is_empty() {
            panic!("Unexpected requests: {}", state.mismatches.join("; "));
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<String> = state.expectations.iter().map(|e| e.describe()).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                remaining.len(),
                remaining.join(", ")
            );
        }
    }

    fn builder<R>(
        &mut self,
        build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            build,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState<T>> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with a response.
pub struct ExpectationBuilder<T: RestEntity, R> {
    state: SharedState<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: RestEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.expectations.push_back(expectation);
    }
}

fn answer<T: RestEntity>(state: &mut MockState<T>, request: ResourceRequest<T>) {
    state.received += 1;
    let expectation = state.expectations.pop_front();

    match (request, expectation) {
        (
            ResourceRequest::List { parent, respond_to },
            Some(Expectation::List {
                parent: expected,
                response,
            }),
        ) => {
            if parent != expected {
                state
                    .mismatches
                    .push(format!("List parent {parent:?}, expected {expected:?}"));
                return;
            }
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get {
                id: expected,
                response,
            }),
        ) => {
            if id.to_string() != expected {
                state.mismatches.push(format!("Get {id}, expected Get {expected}"));
                return;
            }
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { params, respond_to }, Some(Expectation::Create { response })) => {
            state.payloads.push(to_payload(&params));
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            },
            Some(Expectation::Update {
                id: expected,
                response,
            }),
        ) => {
            state.payloads.push(to_payload(&update));
            if id.to_string() != expected {
                state
                    .mismatches
                    .push(format!("Update {id}, expected Update {expected}"));
                return;
            }
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete {
                id: expected,
                response,
            }),
        ) => {
            if id.to_string() != expected {
                state
                    .mismatches
                    .push(format!("Delete {id}, expected Delete {expected}"));
                return;
            }
            let _ = respond_to.send(response);
        }
        (request, Some(expected)) => {
            state.mismatches.push(format!(
                "{} request, expected {}",
                request.verb(),
                expected.describe()
            ));
        }
        (request, None) => {
            state
                .mismatches
                .push(format!("{} request with no expectation left", request.verb()));
        }
    }
}

fn to_payload<P: serde::Serialize>(payload: &P) -> Value {
    serde_json::to_value(payload).unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of a real actor, the client sends messages to a channel we control (`receiver`).
/// We inspect the messages arriving on that channel, assert they are correct and answer
/// through the enclosed responder. This lets a test simulate the backend's behavior
/// (success, failure, delays) deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: RestEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: RestEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Option<ParentRef>,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { parent, respond_to }) => Some((parent, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: RestEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: RestEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: RestEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: RestEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    #[derive(Debug, Serialize)]
    struct NoteCreate {
        text: String,
    }

    impl RestEntity for Note {
        type Id = String;
        type Create = NoteCreate;
        type Update = NoteCreate;
        const COLLECTION: &'static str = "notes";
    }

    impl Note {
        fn new(id: &str, text: &str) -> Self {
            Self {
                id: id.to_string(),
                text: text.to_string(),
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(NoteCreate {
                    text: "hello".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.text, "hello");
        responder.send(Ok(Note::new("n1", "hello"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), Note::new("n1", "hello"));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_create().return_ok(Note::new("n1", "hello"));
        mock.expect_get("n1".to_string())
            .return_ok(Some(Note::new("n1", "hello")));
        mock.expect_list_under(ParentRef {
            collection: "boards",
            id: "b1".to_string(),
        })
        .return_ok(vec![Note::new("n1", "hello")]);
        mock.expect_delete("n1".to_string()).return_ok(None);

        let client = mock.client();
        let created = client
            .create(NoteCreate {
                text: "hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "n1");

        let fetched = client.get("n1".to_string()).await.unwrap();
        assert_eq!(fetched.map(|n| n.text), Some("hello".to_string()));

        let listed = client
            .list_under(ParentRef {
                collection: "boards",
                id: "b1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        assert_eq!(client.delete("n1".to_string()).await.unwrap(), None);

        assert_eq!(mock.received(), 4);
        assert_eq!(mock.payloads(), vec![serde_json::json!({ "text": "hello" })]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_reported() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_get("n1".to_string())
            .return_ok(Some(Note::new("n1", "hello")));

        let client = mock.client();
        let result = client.get("n2".to_string()).await;
        assert_eq!(result.unwrap_err(), FrameworkError::ActorDropped);

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err(), "verify should flag the mismatched id");
    }

    #[tokio::test]
    async fn test_unmet_expectation_is_reported() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_list().return_ok(vec![]);

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err());
        assert_eq!(mock.received(), 0);
    }
}
