// Foodie Express catalog server - read-only REST API over the restaurant
// catalog, backed by the fixture store or the sqlite document store.

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foodie_express::{app_state::AppState, config::Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config.clone()).await?;

    let app = routes::api_router(state).layer(CorsLayer::permissive());

    let address = config.server_address();
    info!("Catalog server listening on http://{}", address);
    info!("  GET /api/restaurants");
    info!("  GET /api/restaurants/name/{{name}}");
    info!("  GET /api/cuisines");

    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
