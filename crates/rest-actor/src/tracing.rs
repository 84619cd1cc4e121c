//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for any binary
//! built on this framework.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); every log line
//! carries an `entity_type` field instead, which is the REST collection the line is about.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` per collection (`info`)
//! - **Requests**: one `Dispatch` per request and the method/path of each backend call (`debug`)
//! - **Outcomes**: `Fetched`, `Listed`, `Created`, `Updated`, `Deleted` (`info`)
//! - **Errors**: unreachable backend, error statuses and decode failures (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show payloads and backend paths
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=rest_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a `post { author { name } }` query shows:
//!
//! ```text
//! DEBUG Dispatch entity_type="posts" verb="Get"
//! DEBUG Backend request method=GET path="/posts/1"
//! INFO Fetched entity_type="posts" id="1"
//! DEBUG Dispatch entity_type="users" verb="Get"
//! DEBUG Backend request method=GET path="/users/u1"
//! INFO Fetched entity_type="users" id="u1"
//! ```

/// Initializes the global tracing subscriber, filtered by `RUST_LOG`.
///
/// Calling it twice panics, as with any global subscriber; call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
