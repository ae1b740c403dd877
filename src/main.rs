//! Goal Breaker API server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use goal_breaker::adapters::http::{app_router, GoalAppState};
use goal_breaker::adapters::PostgresGoalRepository;
use goal_breaker::application::GoalDecomposer;
use goal_breaker::config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig, ValidationError};
use goal_breaker::ports::AIError;

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("failed to build generator client: {0}")]
    Generator(#[from] AIError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let decomposer = GoalDecomposer::from_config(&config.ai)?;
    if decomposer.is_external() {
        tracing::info!(model = %config.ai.model, "Using Groq for goal decomposition");
    } else {
        tracing::info!("No Groq API key configured, using local decomposition");
    }

    let pool = connect(&config.database).await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let state = GoalAppState::new(
        Arc::new(PostgresGoalRepository::new(pool)),
        Arc::new(decomposer),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting Goal Breaker API on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Goal Breaker API stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn connect(database: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
