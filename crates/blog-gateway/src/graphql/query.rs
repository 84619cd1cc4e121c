use crate::clients::PostClient;
use crate::model::Post;
use crate::posts::PostError;
use async_graphql::{Context, Object, Result};

/// The root GraphQL query type.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A constant greeting. Never touches the backend.
    async fn greeting(&self) -> &'static str {
        "hello~"
    }

    /// All posts, in backend order.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Post>>>> {
        let posts = ctx.data::<PostClient>()?.list_posts().await?;
        Ok(Some(posts.into_iter().map(Some).collect()))
    }

    /// One post by id. `null` when the backend has no such post.
    async fn post(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Post>> {
        let id = id.ok_or(PostError::MissingArgument("id"))?;
        Ok(ctx.data::<PostClient>()?.fetch_post(&id).await?)
    }
}
