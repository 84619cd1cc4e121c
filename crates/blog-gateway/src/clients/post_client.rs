//! # Post Client
//!
//! Provides a high‑level API for interacting with the `Post` actor: everything the query
//! and mutation roots do with posts goes through here.
use crate::model::{Post, PostCreate, PostUpdate};
use crate::posts::PostError;
use async_trait::async_trait;
use rest_actor::{EntityClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Post actor.
#[derive(Clone)]
pub struct PostClient {
    inner: ResourceClient<Post>,
}

impl PostClient {
    pub fn new(inner: ResourceClient<Post>) -> Self {
        Self { inner }
    }

    /// `GET /posts`, in backend order.
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        debug!("Sending request");
        self.list().await
    }

    /// `GET /posts/{id}`. `None` when the backend answers `null`.
    #[instrument(skip(self))]
    pub async fn fetch_post(&self, id: &str) -> Result<Option<Post>, PostError> {
        debug!("Sending request");
        self.get(id.to_string()).await
    }

    /// `POST /posts`
    #[instrument(skip(self))]
    pub async fn create_post(&self, params: PostCreate) -> Result<Post, PostError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// `PATCH /posts/{id}`; the body is the whole `update`, `id` included.
    #[instrument(skip(self))]
    pub async fn update_post(&self, update: PostUpdate) -> Result<Post, PostError> {
        debug!("Sending request");
        self.inner
            .update(update.id.clone(), update)
            .await
            .map_err(Self::map_error)
    }

    /// `DELETE /posts/{id}`. `None` when the backend answered with an empty body.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: &str) -> Result<Option<Post>, PostError> {
        debug!("Sending request");
        self.delete(id.to_string()).await
    }
}

#[async_trait]
impl EntityClient<Post> for PostClient {
    type Error = PostError;

    fn inner(&self) -> &ResourceClient<Post> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PostError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_actor::mock::{create_mock_client, expect_update, MockClient};
    use serde_json::json;

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            ..Post::default()
        }
    }

    #[tokio::test]
    async fn test_update_post_uses_id_for_path_and_body() {
        let (client, mut receiver) = create_mock_client::<Post>(10);
        let posts = PostClient::new(client);

        let update = PostUpdate {
            title: Some(Some("New".to_string())),
            ..PostUpdate::new("1")
        };
        let update_task = tokio::spawn(async move { posts.update_post(update).await });

        let (id, body, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, "1");
        assert_eq!(body.id, "1");
        assert_eq!(body.title, Some(Some("New".to_string())));
        assert_eq!(body.content, None);
        responder.send(Ok(post("1", "New"))).unwrap();

        assert_eq!(update_task.await.unwrap().unwrap(), post("1", "New"));
    }

    #[tokio::test]
    async fn test_post_client_with_expectations() {
        let mut mock = MockClient::<Post>::new();
        mock.expect_list()
            .return_ok(vec![post("1", "A"), post("2", "B")]);
        mock.expect_create().return_ok(post("3", "C"));
        mock.expect_get("9".to_string()).return_err(FrameworkError::Status {
            status: 404,
            body: "{}".to_string(),
        });
        mock.expect_delete("3".to_string()).return_ok(None);

        let posts = PostClient::new(mock.client());

        let listed = posts.list_posts().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].title.as_deref(), Some("B"));

        let created = posts
            .create_post(PostCreate {
                title: "C".to_string(),
                content: "body".to_string(),
                author: "u1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id.as_deref(), Some("3"));

        let missing = posts.fetch_post("9").await.unwrap_err();
        assert!(matches!(missing, PostError::NotFound(_)));

        assert_eq!(posts.delete_post("3").await.unwrap(), None);

        assert_eq!(mock.received(), 4);
        assert_eq!(
            mock.payloads(),
            vec![json!({ "title": "C", "content": "body", "author": "u1" })]
        );
        mock.verify();
    }
}
