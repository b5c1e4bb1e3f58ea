use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod models;
mod password;
mod repositories;
mod routes;

use common::{
    config::ServerConfig,
    database::{self, DatabaseConfig},
    jwt::{JwtConfig, TokenService},
};
use tokio::net::TcpListener;

use crate::repositories::UserRepository;

const DEFAULT_PORT: u16 = 3000;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub token_service: TokenService,
    pub user_repository: UserRepository,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting authentication service");

    let server_config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    database::run_migrations(&pool).await?;

    let app_state = AppState {
        token_service: TokenService::new(jwt_config),
        user_repository: UserRepository::new(pool),
    };

    info!("Authentication service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let address = server_config.bind_address(DEFAULT_PORT);
    let listener = TcpListener::bind(&address).await?;
    info!("Authentication service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down authentication service");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
