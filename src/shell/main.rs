use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use events_mock::shared::infrastructure::event_store::EventStore;
use events_mock::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use events_mock::shell::config::AppConfig;
use events_mock::shell::graphql::{build_schema, graphiql, graphql};
use events_mock::shell::http::router;
use events_mock::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn EventStore> = if config.seed_fixtures {
        Arc::new(InMemoryEventStore::new())
    } else {
        Arc::new(InMemoryEventStore::empty())
    };
    let state = AppState::new(store);
    let schema = build_schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(seeded = config.seed_fixtures, "events endpoint: http://{}/events", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
