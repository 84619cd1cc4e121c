//! # Domain Model
//!
//! Response shapes decoded from the REST backend, and the payloads sent to it.
//!
//! Every field is optional: the backend may answer with a partial shape (a delete can echo
//! `{}`), and keys the gateway does not know about are ignored. Relation keys (`author`)
//! are kept as raw ids and only turned into full objects by the GraphQL layer.

mod comment;
mod post;
mod user;

pub use comment::Comment;
pub use post::{Post, PostCreate, PostUpdate};
pub use user::User;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads an identifier that the backend may send as a string or as a number.
///
/// json-server style backends hand out numeric ids; the gateway treats every id as an
/// opaque string.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id)),
        Some(Value::Number(id)) => Ok(Some(id.to_string())),
        Some(Value::Bool(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected an id, found {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_ids_become_strings() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "title": "T",
            "author": 3
        }))
        .unwrap();
        assert_eq!(post.id.as_deref(), Some("7"));
        assert_eq!(post.author_id.as_deref(), Some("3"));
        assert_eq!(post.content, None);
    }

    #[test]
    fn test_partial_and_unknown_keys() {
        let post: Post = serde_json::from_value(json!({})).unwrap();
        assert_eq!(post, Post::default());

        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "name": "Ann",
            "email": "ann@example.com"
        }))
        .unwrap();
        assert_eq!(user.name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_structured_id_is_rejected() {
        let result: Result<Comment, _> = serde_json::from_value(json!({ "id": { "nested": 1 } }));
        assert!(result.is_err());
    }
}
