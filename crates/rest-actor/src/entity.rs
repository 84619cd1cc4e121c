//! # RestEntity Trait
//!
//! The `RestEntity` trait defines the contract every resource (User, Post, Comment, …) must
//! implement to be served by the generic `ResourceActor`. It names the REST collection the
//! resource lives under and the payload types used to create and update it.
//!
//! # Architecture Note
//! By defining a contract (`RestEntity`) that all our resource types satisfy, the
//! `ResourceActor` knows how to turn *any* typed request into the right HTTP call:
//!
//! | Request | HTTP call |
//! |---|---|
//! | `List` | `GET /{collection}` |
//! | `List` under a parent | `GET /{parent}/{parent_id}/{collection}` |
//! | `Get` | `GET /{collection}/{id}` |
//! | `Create` | `POST /{collection}` with the `Create` payload |
//! | `Update` | `PATCH /{collection}/{id}` with the `Update` payload |
//! | `Delete` | `DELETE /{collection}/{id}` |
//!
//! Associated types keep this type safe: a `Post` update takes a `PostUpdate` payload,
//! and you can't accidentally send it to the users collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any resource must implement to be served by ResourceActor.
///
/// The entity itself is the response shape: it is decoded from the backend's JSON body.
pub trait RestEntity: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// The identifier used in the resource path (`/{collection}/{id}`).
    type Id: Clone + Debug + Display + Send + Sync + 'static;

    /// The body sent with `POST /{collection}`.
    type Create: Serialize + Debug + Send + Sync + 'static;

    /// The body sent with `PATCH /{collection}/{id}`.
    type Update: Serialize + Debug + Send + Sync + 'static;

    /// The collection path segment, e.g. `"posts"`.
    const COLLECTION: &'static str;
}
