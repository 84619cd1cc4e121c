use crate::clients::{CommentClient, PostClient, UserClient};
use crate::config::GatewayOptions;
use crate::graphql::{build_schema, BlogSchema};
use crate::{comments, posts, users};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Router};
use rest_actor::{Backend, FrameworkError};
use std::future::Future;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while starting, serving or stopping the gateway.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The configured backend address is unusable.
    #[error("Invalid backend configuration: {0}")]
    Backend(#[from] FrameworkError),

    /// Binding or serving the HTTP listener failed.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    /// An actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}

/// The runtime orchestrator of the gateway.
///
/// `GatewaySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the three resource actors
/// - **Schema Assembly**: Injecting the clients into the GraphQL schema
/// - **Serving**: Exposing the schema (and GraphiQL) over HTTP
///
/// # Example
///
/// ```ignore
/// let system = GatewaySystem::new(&GatewayOptions::default())?;
///
/// // Execute GraphQL in-process...
/// let response = system.schema().execute("{ posts { title } }").await;
///
/// // ...or serve it until Ctrl-C
/// let listener = TcpListener::bind(options.listen_address()).await?;
/// system.serve(listener, async { let _ = tokio::signal::ctrl_c().await; }).await?;
///
/// system.shutdown().await?;
/// ```
pub struct GatewaySystem {
    /// Client for the users collection
    pub user_client: UserClient,

    /// Client for the posts collection
    pub post_client: PostClient,

    /// Client for the comments collection
    pub comment_client: CommentClient,

    schema: BlogSchema,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl GatewaySystem {
    /// Creates the backend, spawns one actor per collection and builds the schema.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(options: &GatewayOptions) -> Result<Self, LifecycleError> {
        let backend = Backend::new(&options.backend_url, options.request_timeout())?;
        let capacity = options.channel_capacity.get();

        let (user_actor, user_client) = users::new(backend.clone(), capacity);
        let (post_actor, post_client) = posts::new(backend.clone(), capacity);
        let (comment_actor, comment_client) = comments::new(backend, capacity);

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(post_actor.run()),
            tokio::spawn(comment_actor.run()),
        ];

        let schema = build_schema(
            user_client.clone(),
            post_client.clone(),
            comment_client.clone(),
        );

        info!(backend = %options.backend_url, "Gateway system started");

        Ok(Self {
            user_client,
            post_client,
            comment_client,
            schema,
            handles,
        })
    }

    /// The assembled schema, for in-process execution.
    pub fn schema(&self) -> &BlogSchema {
        &self.schema
    }

    /// `GET /` serves GraphiQL, `POST /` executes GraphQL, `GET /ready` answers `ready!`.
    ///
    /// The router holds a copy of the schema, and through it a handle to every actor.
    /// Drop it (and anything serving it) before calling [`shutdown`](Self::shutdown),
    /// which otherwise waits forever for the actors to stop.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(graphiql).post(graphql_handler))
            .route("/ready", get(|| async { "ready!" }))
            .layer(Extension(self.schema.clone()))
    }

    /// Serves [`router`](Self::router) on `listener` until `shutdown` resolves.
    #[tracing::instrument(name = "GatewaySystem::serve", skip_all)]
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), LifecycleError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = listener.local_addr()?;
        info!("GraphiQL IDE: http://{}", address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }

    /// Gracefully shuts down the actors.
    ///
    /// Dropping the clients (including the schema's copies) closes every actor's channel;
    /// each actor then finishes its in-flight requests and exits.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.schema);
        drop(self.user_client);
        drop(self.post_client);
        drop(self.comment_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::ActorPanicked(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Returns an HTML response constructing the GraphiQL web page for the given URI.
async fn graphiql(uri: Uri) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(uri.path()).finish())
}

async fn graphql_handler(
    Extension(schema): Extension<BlogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}
