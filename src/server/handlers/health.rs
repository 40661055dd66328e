use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::server::app::AppState;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let (developers, projects) = state.store.counts().await;

    Ok(Json(json!({
        "status": "healthy",
        "service": "devgraph",
        "version": env!("CARGO_PKG_VERSION"),
        "developers": developers,
        "projects": projects
    })))
}
