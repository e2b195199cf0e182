use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use shared::repositories::game_repository::PgGameRepository;
use shared::repositories::player_repository::PgPlayerRepository;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Elo rating service...");

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL environment variable must be set");
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("failed to connect to database");
    info!("Connection to database successfully established");

    // Set up repositories; the pool is injected rather than held globally.
    let player_repository = Arc::new(PgPlayerRepository::new(pool.clone()));
    let game_repository = Arc::new(PgGameRepository::new(pool.clone()));

    let app_state = state::AppState {
        player_repository,
        game_repository,
        pool,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Merge routes
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::players::routes())
        .merge(routes::games::routes())
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::store_health::require_store,
        ))
        .layer(cors)
        .with_state(app_state);

    info!(addr = %bind_addr, "REST router initialized successfully");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
