//! # GraphQL Layer
//!
//! Maps the GraphQL schema onto the typed clients:
//!
//! | Field | Backend call |
//! |---|---|
//! | `greeting` | none |
//! | `posts` | `GET /posts` |
//! | `post(id)` | `GET /posts/{id}` |
//! | `Post.author`, `Comment.author` | `GET /users/{author}` |
//! | `Post.comments` | `GET /posts/{id}/comments` |
//! | `createPost` | `POST /posts` |
//! | `updatePost` | `PATCH /posts/{id}` |
//! | `deletePost` | `DELETE /posts/{id}` |
//!
//! Each occurrence of a field in a query is one backend call. Nothing is cached or
//! batched, so aliasing `comments` twice fetches them twice.
//!
//! Resolver failures become field errors: the failing field is `null` and the response
//! carries an `errors` entry, while sibling fields resolve normally.

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{build_schema, BlogSchema};
