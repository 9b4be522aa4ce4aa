use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use diesel::prelude::*;
use eyre::Report;
use hostelry_core::AppState;
use hostelry_primitives::schema::notifications;
use http::HeaderValue;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

pub fn build_cors() -> Result<CorsLayer, Report> {
    let origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into());

    let allowed_origins = origins
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(allowed_origins))
}

pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

pub fn build_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Result<Router, Report> {
    let cors = build_cors()?;

    Ok(hostelry_api::app::create_router(state, metric_layer, metric_handle).layer(cors))
}

const DAILY_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);
const READ_NOTIFICATION_RETENTION_DAYS: i64 = 90;

pub fn spawn_background_tasks(state: Arc<AppState>) {
    tokio::spawn(async move {
        info!("Starting daily read-notification cleanup task");
        cleanup_read_notifications(state).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn cleanup_read_notifications(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Notification cleanup: DB connection failed");
            continue;
        };

        let cutoff = chrono::Utc::now() - chrono::Duration::days(READ_NOTIFICATION_RETENTION_DAYS);

        match diesel::delete(
            notifications::table
                .filter(notifications::is_read.eq(true))
                .filter(notifications::created_at.lt(cutoff)),
        )
        .execute(&mut conn)
        {
            Ok(0) => debug!("No stale read notifications"),
            Ok(n) => info!("Removed {} stale read notifications", n),
            Err(e) => error!("Notification cleanup failed: {}", e),
        }
    }
}
