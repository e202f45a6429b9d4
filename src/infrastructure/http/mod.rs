use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, school::SchoolController};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with all routes configured.
///
/// Layers are registered explicitly; each `layer` call wraps the ones
/// before it, so the trace layer is outermost.
pub fn build_router(pool: Arc<DbPool>, school_controller: Arc<SchoolController>) -> Router {
    let school_routes = Router::new()
        .route(
            "/schools",
            get(SchoolController::list_schools).post(SchoolController::create_school),
        )
        .route(
            "/schools/:schoolId",
            get(SchoolController::get_school)
                .put(SchoolController::update_school)
                .delete(SchoolController::delete_school),
        )
        .with_state(school_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(school_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    school_controller: Arc<SchoolController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, school_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
