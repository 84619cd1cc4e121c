//! Relation fields of the object types.
//!
//! [`Post`] and [`Comment`] keep their author as a raw id; these resolvers fetch the
//! related objects on demand, one backend call per field occurrence.

use crate::clients::{CommentClient, UserClient};
use crate::comments::CommentError;
use crate::model::{Comment, Post, User};
use crate::users::UserError;
use async_graphql::{ComplexObject, Context, Result};

#[ComplexObject]
impl Post {
    /// The post's author, fetched from `/users/{author}`.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let author = self
            .author_id
            .as_deref()
            .ok_or(UserError::MissingField("author"))?;
        Ok(ctx.data::<UserClient>()?.fetch_user(author).await?)
    }

    /// The post's comments, in backend order.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Comment>>>> {
        let id = self.id.as_deref().ok_or(CommentError::MissingField("id"))?;
        let comments = ctx.data::<CommentClient>()?.comments_for_post(id).await?;
        Ok(Some(comments.into_iter().map(Some).collect()))
    }
}

#[ComplexObject]
impl Comment {
    /// The comment's author, fetched from `/users/{author}`.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let author = self
            .author_id
            .as_deref()
            .ok_or(UserError::MissingField("author"))?;
        Ok(ctx.data::<UserClient>()?.fetch_user(author).await?)
    }
}
