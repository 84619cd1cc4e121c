//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::model::User;
use crate::users::UserError;
use async_trait::async_trait;
use rest_actor::{EntityClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// `GET /users/{id}`, used to resolve every `author` field.
    #[instrument(skip(self))]
    pub async fn fetch_user(&self, id: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.get(id.to_string()).await
    }
}

#[async_trait]
impl EntityClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_actor::mock::{create_mock_client, expect_get};

    #[tokio::test]
    async fn test_fetch_user() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let users = UserClient::new(client);

        let fetch_task = tokio::spawn(async move { users.fetch_user("u1").await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, "u1");
        responder
            .send(Ok(Some(User {
                id: Some("u1".to_string()),
                name: Some("Ann".to_string()),
            })))
            .unwrap();

        let user = fetch_task.await.unwrap().unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_fetch_user_not_found() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let users = UserClient::new(client);

        let fetch_task = tokio::spawn(async move { users.fetch_user("ghost").await });

        let (_, responder) = expect_get(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::Status {
                status: 404,
                body: "{}".to_string(),
            }))
            .unwrap();

        let error = fetch_task.await.unwrap().unwrap_err();
        assert_eq!(error, UserError::NotFound("{}".to_string()));
    }
}
