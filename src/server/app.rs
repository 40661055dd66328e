use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{graphql, health};
use crate::config::ServerConfig;
use crate::graphql::{build_schema, GraphQLSchema};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct AppState {
    pub schema: GraphQLSchema,
    pub store: Arc<EntityStore>,
}

pub async fn create_app(store: Arc<EntityStore>, config: &ServerConfig) -> Result<Router> {
    let state = AppState {
        schema: build_schema(store.clone()),
        store,
    };

    let cors = match config.cors_origin.as_deref() {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
    };

    let graphql_route = if config.graphiql {
        get(graphql::graphiql).post(graphql::graphql_handler)
    } else {
        post(graphql::graphql_handler)
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/graphql", graphql_route)
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
