use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use hostelry_core::clients::push::spawn_push_dispatcher;
use hostelry_core::AppState;
use hostelry_primitives::models::app_config::{AppConfig, GatewayInfo, JwtInfo, PushInfo};
use secrecy::SecretString;
use std::sync::Arc;

pub mod fixtures;

/// A pool that only fails when a connection is actually requested, so
/// tests that never touch the database can still build an AppState.
#[allow(dead_code)]
pub fn create_test_db_pool() -> Pool<ConnectionManager<PgConnection>> {
    Pool::builder()
        .max_size(1)
        .build_unchecked(ConnectionManager::<PgConnection>::new("postgres://invalid"))
}

#[allow(dead_code)]
pub fn create_test_config(qr_ttl_seconds: i64) -> AppConfig {
    AppConfig {
        jwt: JwtInfo {
            secret: SecretString::new(Box::from(
                "test_secret_key_minimum_32_characters_long_for_testing",
            )),
            issuer: "hostelry-test".into(),
            audience: "hostelry-test-clients".into(),
            expiration_hours: 1,
            qr_ttl_seconds,
        },
        gateway: GatewayInfo {
            api_url: "http://localhost:9999".into(),
            key_id: "test_key".into(),
            key_secret: SecretString::new(Box::from("test_gateway_secret")),
        },
        push: PushInfo { endpoint_url: None },
        app_url: "http://localhost:8080".into(),
    }
}

#[allow(dead_code)]
pub fn create_test_app_state(qr_ttl_seconds: i64) -> Arc<AppState> {
    let config = create_test_config(qr_ttl_seconds);
    let push = spawn_push_dispatcher(reqwest::Client::new(), &config);
    AppState::new(create_test_db_pool(), config, push).expect("test app state")
}
