//! # REST Actor Framework
//!
//! This crate provides the building blocks for talking to a REST backend through typed,
//! actor-backed clients. It keeps the **Resource-Oriented Architecture (ROA)** shape of a
//! CRUD API and puts an **actor** between callers and HTTP.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`RestEntity`]) - which collection a type lives in and its payloads
//! 2. **Transport Layer** ([`Backend`]) - one HTTP call per request, errors as [`FrameworkError`]
//! 3. **Runtime Layer** ([`ResourceActor`]) - turns typed requests into backend calls
//! 4. **Interface Layer** ([`ResourceClient`], [`EntityClient`]) - type-safe, cloneable handles
//!
//! Callers never see HTTP: they hold a client, and the client's only dependency is a
//! channel. That makes every layer above the transport testable with the [`mock`] module,
//! and the transport itself testable with the [`fake_backend`] module.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rest_actor::{Backend, ParentRef, ResourceActor, RestEntity};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Deserialize)]
//! struct Board { id: String }
//!
//! #[derive(Clone, Debug, Deserialize)]
//! struct Card { id: String, title: String }
//!
//! #[derive(Debug, Serialize)]
//! struct CardCreate { title: String }
//!
//! impl RestEntity for Board {
//!     type Id = String; type Create = (); type Update = ();
//!     const COLLECTION: &'static str = "boards";
//! }
//!
//! impl RestEntity for Card {
//!     type Id = String; type Create = CardCreate; type Update = CardCreate;
//!     const COLLECTION: &'static str = "cards";
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = Backend::new("http://localhost:3300", None).unwrap();
//!     let (actor, cards) = ResourceActor::<Card>::new(32, backend);
//!     tokio::spawn(actor.run());
//!
//!     // GET /boards/b1/cards
//!     let on_board = cards.list_under(ParentRef::of::<Board>(&"b1".to_string())).await.unwrap();
//!     // POST /cards
//!     let card = cards.create(CardCreate { title: "Ship it".into() }).await.unwrap();
//!     println!("{} cards, created {}", on_board.len(), card.id);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and owns its receiver
//! - Each request is spawned onto its own task, so concurrent callers never queue
//!   behind a slow backend call
//! - Nothing is cached: every client call is exactly one backend request
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, counts them and
//! records create/update payloads. [`fake_backend::FakeBackend`] is a loopback HTTP server
//! that records real wire requests.

pub mod actor;
pub mod backend;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod fake_backend;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use backend::Backend;
pub use client::ResourceClient;
pub use client_trait::EntityClient;
pub use entity::RestEntity;
pub use error::FrameworkError;
pub use message::{ParentRef, ResourceRequest, Response};
