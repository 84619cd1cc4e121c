use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A blog post, as returned by `GET /posts` and `GET /posts/{id}`.
///
/// # Actor Framework
/// This struct implements the [`RestEntity`](rest_actor::RestEntity) trait (see
/// [`crate::posts`]):
/// - Creation payload ([`PostCreate`])
/// - Update payload ([`PostUpdate`])
///
/// `author` and `comments` are resolved on demand, see [`crate::graphql::types`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, SimpleObject)]
#[graphql(complex)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Raw id of the author; the GraphQL `author` field turns it into a [`User`](super::User).
    #[serde(rename = "author", deserialize_with = "super::opaque_id")]
    #[graphql(skip)]
    pub author_id: Option<String>,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Body of `PATCH /posts/{id}`.
///
/// The outer `Option` says whether a field was supplied at all: `None` leaves the key out
/// of the body, `Some(None)` sends an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<String>>,
}

impl PostUpdate {
    /// An update that changes nothing but still names the post.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
            author: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_body_omits_unsupplied_fields() {
        let update = PostUpdate::new("1");
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "id": "1" }));

        let update = PostUpdate {
            title: Some(Some("New".to_string())),
            content: Some(None),
            ..PostUpdate::new("1")
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "id": "1", "title": "New", "content": null })
        );
    }
}
