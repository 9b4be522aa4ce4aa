mod observability;

pub mod utility;

pub use hostelry_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env, spawn_background_tasks};
use eyre::Report;
use hostelry_core::clients::push::spawn_push_dispatcher;
use hostelry_core::AppState;
use hostelry_primitives::models::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Hostelry application...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. start the push-notification dispatcher
    let push = spawn_push_dispatcher(reqwest::Client::new(), &config);

    // 6. build application state
    let state = AppState::new(pool, config, push)?;

    // 7. start background maintenance tasks
    spawn_background_tasks(state.clone());

    // 8. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 9. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 10. start HTTP server
    serve(app).await?;

    info!("Hostelry application shut down gracefully");
    Ok(())
}
