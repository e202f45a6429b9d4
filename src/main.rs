use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schools_backend::controllers::school::SchoolController;
use schools_backend::domain::school::SchoolService;
use schools_backend::infrastructure::config::{Config, LogFormat};
use schools_backend::infrastructure::db::{check_connection, create_pool};
use schools_backend::infrastructure::http::start_http_server;
use schools_backend::infrastructure::repositories::SchoolRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Schools Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // Repositories, services and controllers are wired by hand, leaves first
    let school_repo = Arc::new(SchoolRepository::new(pool.clone()));
    let school_service = Arc::new(SchoolService::new(school_repo));
    let school_controller = Arc::new(SchoolController::new(school_service));

    // Start HTTP server with all routes
    start_http_server(pool, config, school_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "schools_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "schools_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
