use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::{Extension, Router, response::Html, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shell::config::Config;
use crate::shell::graphql::AppSchema;

/// GraphQL over HTTP at `graphql_path` (POST executes, GET serves GraphiQL)
/// and GraphQL over WebSocket at `subscriptions_path`.
pub fn router(schema: AppSchema, config: &Config) -> Router {
    let explorer = GraphiQLSource::build()
        .endpoint(&config.graphql_path)
        .subscription_endpoint(&config.subscriptions_path)
        .finish();

    Router::new()
        .route(
            &config.graphql_path,
            get(move || {
                let page = explorer.clone();
                async move { Html(page) }
            })
            .post(graphql),
        )
        .route_service(
            &config.subscriptions_path,
            GraphQLSubscription::new(schema.clone()),
        )
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
