use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use timesheet_reconciliation::shared::infrastructure::entry_store::in_memory::InMemoryEntryStore;
use timesheet_reconciliation::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use timesheet_reconciliation::shell::config::Config;
use timesheet_reconciliation::shell::graphql::{self, GRAPHQL_PATH};
use timesheet_reconciliation::shell::http;
use timesheet_reconciliation::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .init();

    // In-memory deps for now
    let users = config.load_users()?;
    tracing::info!(users = users.len(), "seeding user directory");
    let store = Arc::new(InMemoryEntryStore::new());
    let directory = Arc::new(InMemoryUserDirectory::with_users(users));
    let state = AppState::new(store, directory);

    let schema = graphql::schema(state.clone());

    let app = http::router(state)
        .merge(graphql::router(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_address();
    tracing::info!("HTTP API on http://{addr}, GraphQL endpoint: http://{addr}{GRAPHQL_PATH}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
