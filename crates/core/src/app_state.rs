use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::push::PushSender;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::AppConfig;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub push: PushSender,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig, push: PushSender) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
            push,
        }))
    }

    pub fn conn(&self) -> Result<DbConn, ApiError> {
        self.db.get().map_err(|e| {
            tracing::error!("failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })
    }
}
