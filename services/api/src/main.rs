use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod middleware;
mod models;
mod repositories;
mod routes;
mod state;

use common::{
    config::ServerConfig,
    database::{DatabaseConfig, health_check, init_pool, run_migrations},
    jwt::{JwtConfig, TokenService},
    pagination::PaginationConfig,
};
use tokio::net::TcpListener;

use crate::{
    repositories::{AuthorRepository, UserRepository},
    state::AppState,
};

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting API service");

    let server_config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let pagination = PaginationConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool).await?;

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let author_repository = AuthorRepository::new(pool);

    let app_state = AppState {
        token_service: TokenService::new(jwt_config),
        pagination,
        user_repository,
        author_repository,
    };

    info!("API service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let address = server_config.bind_address(DEFAULT_PORT);
    let listener = TcpListener::bind(&address).await?;
    info!("API service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down API service");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
