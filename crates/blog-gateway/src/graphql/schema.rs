//! Schema assembly.

use super::{MutationRoot, QueryRoot};
use crate::clients::{CommentClient, PostClient, UserClient};
use async_graphql::{EmptySubscription, Schema};

/// The gateway schema: no subscriptions.
pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the three clients injected as schema data.
pub fn build_schema(users: UserClient, posts: PostClient, comments: CommentClient) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .data(posts)
        .data(comments)
        .finish()
}
