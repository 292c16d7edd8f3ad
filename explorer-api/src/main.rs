use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use explorer_api::app::AppState;
use explorer_api::routes;
use explorer_providers::config::ProvidersConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let config = ProvidersConfig::from_env();
    if !config.is_configured() {
        tracing::warn!(
            "Resource explorer configuration is missing. The server will start but provider \
             routes will return errors until endpoints are configured."
        );
    }
    let state = AppState::new(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors) // Apply CORS to ALL routes
        .with_state(state);

    let port = std::env::var("EXPLORER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(7007);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Resource explorer backend listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
