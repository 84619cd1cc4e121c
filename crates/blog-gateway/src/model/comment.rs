use async_graphql::SimpleObject;
use serde::Deserialize;

/// A comment on a post, as returned by `GET /posts/{id}/comments`.
///
/// `author` is resolved on demand, see [`crate::graphql::types`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, SimpleObject)]
#[graphql(complex)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: Option<String>,
    pub content: Option<String>,
    /// Raw id of the commenting user.
    #[serde(rename = "author", deserialize_with = "super::opaque_id")]
    #[graphql(skip)]
    pub author_id: Option<String>,
}
