//! # System Lifecycle & Orchestration
//!
//! This module wires the gateway together: one backend connection pool, one actor per
//! REST collection, the GraphQL schema on top, and an HTTP server in front.
//!
//! ## The GatewaySystem Pattern
//!
//! ```rust,ignore
//! impl GatewaySystem {
//!     pub fn new(options: &GatewayOptions) -> Result<Self, LifecycleError> {
//!         // 1. One Backend, shared by every actor (reqwest pools connections)
//!         let backend = Backend::new(&options.backend_url, options.request_timeout())?;
//!
//!         // 2. Create actors and their clients
//!         let (user_actor, user_client) = users::new(backend.clone(), capacity);
//!         let (post_actor, post_client) = posts::new(backend.clone(), capacity);
//!         let (comment_actor, comment_client) = comments::new(backend, capacity);
//!
//!         // 3. Start actors, then hand the clients to the schema
//!         let handles = vec![tokio::spawn(user_actor.run()), /* ... */];
//!         let schema = build_schema(user_client.clone(), post_client.clone(), comment_client.clone());
//!         // ...
//!     }
//! }
//! ```
//!
//! Actors never depend on each other: relation fields are resolved in the GraphQL layer,
//! which holds all three clients.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - [`GatewaySystem::serve`] returns once its shutdown future resolves
//! 2. **Drop all clients** - the system's own clients and the schema's copies
//! 3. **Actors detect closure** - `receiver.recv()` returns `None`
//! 4. **Await completion** - in-flight backend calls finish, then every actor task is joined
//!
//! A panicked actor task is reported as [`LifecycleError::ActorPanicked`].
//!
//! ## Observability & Tracing
//!
//! Call [`rest_actor::tracing::setup_tracing`] once before building the system:
//!
//! ```bash
//! RUST_LOG=info cargo run -p blog-gateway      # Compact logs
//! RUST_LOG=debug cargo run -p blog-gateway     # Every backend call
//! ```

pub mod gateway_system;

pub use gateway_system::*;
