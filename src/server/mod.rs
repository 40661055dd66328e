pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::ServerConfig;
use crate::store::EntityStore;

pub async fn start_server(config: ServerConfig) -> Result<()> {
    let store = Arc::new(if config.seed {
        EntityStore::seeded()
    } else {
        EntityStore::new()
    });

    let (developers, projects) = store.counts().await;
    info!(
        "Entity store ready: {} developers, {} projects",
        developers, projects
    );

    let app = app::create_app(store, &config).await?;

    log_routes(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes(config: &ServerConfig) {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    if config.graphiql {
        info!("  /graphql                    - GraphQL API (POST) & GraphiQL (GET)");
    } else {
        info!("  /graphql                    - GraphQL API (POST)");
    }
}
