use crate::clients::PostClient;
use crate::model::{Post, PostCreate, PostUpdate};
use async_graphql::{Context, MaybeUndefined, Object, Result};

/// The root GraphQL mutation type.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a post and returns it as the backend stored it.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author: String,
    ) -> Result<Option<Post>> {
        let params = PostCreate {
            title,
            content,
            author,
        };
        let post = ctx.data::<PostClient>()?.create_post(params).await?;
        Ok(Some(post))
    }

    /// Patches a post. Arguments left out of the query are left out of the request.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: String,
        title: MaybeUndefined<String>,
        content: MaybeUndefined<String>,
        author: MaybeUndefined<String>,
    ) -> Result<Option<Post>> {
        let update = PostUpdate {
            title: supplied(title),
            content: supplied(content),
            author: supplied(author),
            ..PostUpdate::new(id)
        };
        let post = ctx.data::<PostClient>()?.update_post(update).await?;
        Ok(Some(post))
    }

    /// Deletes a post, returning whatever the backend echoed (`null` for an empty body).
    async fn delete_post(&self, ctx: &Context<'_>, id: String) -> Result<Option<Post>> {
        Ok(ctx.data::<PostClient>()?.delete_post(&id).await?)
    }
}

fn supplied<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(value) => Some(Some(value)),
    }
}
