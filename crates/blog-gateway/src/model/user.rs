use async_graphql::SimpleObject;
use serde::Deserialize;

/// A blog author, as returned by `GET /users/{id}`.
///
/// # Actor Framework
/// This struct implements the [`RestEntity`](rest_actor::RestEntity) trait (see
/// [`crate::users`]), so it can be fetched through a
/// [`ResourceActor`](rest_actor::ResourceActor).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, SimpleObject)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: Option<String>,
    pub name: Option<String>,
}
