use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html, response::IntoResponse};
use tracing::debug;

use crate::server::app::AppState;

pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    let operation = request
        .operation_name
        .clone()
        .unwrap_or_else(|| "anonymous".to_string());
    debug!("GraphQL request received: {}", operation);

    let response = state.schema.execute(request).await;
    if response.is_err() {
        debug!(
            "GraphQL request {} completed with {} error(s)",
            operation,
            response.errors.len()
        );
    } else {
        debug!("GraphQL request {} completed", operation);
    }

    response.into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
