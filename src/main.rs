//! Sportsy service
//!
//! Main application entry point

use std::sync::Arc;

use tracing::info;

use sportsy::{
    api::{self, AppState},
    config::Settings,
    database::{connection, DatabaseService},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting Sportsy service...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = connection::create_pool(&settings.database).await?;

    // Run database migrations
    connection::run_migrations(&db_pool).await?;

    // Initialize database service and business services
    let database_service = DatabaseService::new(db_pool.clone());
    let services = ServiceFactory::new(&database_service);

    let state = AppState {
        services: Arc::new(services),
        pool: db_pool,
    };
    let app = api::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Sportsy listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    info!("Sportsy service has been shut down.");

    Ok(())
}
