mod common;

use hostelry_core::security::QrTokenService;
use hostelry_primitives::error::ApiError;

#[tokio::test]
async fn qr_token_round_trips_username() {
    let state = common::create_test_app_state(120);

    let token = QrTokenService::issue(&state, "rahul.sharma").unwrap();
    let username = QrTokenService::validate(&state, &token).unwrap();

    assert_eq!(username, "rahul.sharma");
}

#[tokio::test]
async fn expired_qr_token_is_rejected() {
    // negative TTL puts the expiry beyond the decoder's leeway
    let state = common::create_test_app_state(-120);

    let token = QrTokenService::issue(&state, "rahul.sharma").unwrap();
    let err = QrTokenService::validate(&state, &token).unwrap_err();

    assert!(matches!(err, ApiError::Token(_)));
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let state = common::create_test_app_state(120);

    let err = QrTokenService::validate(&state, "not-a-jwt-at-all").unwrap_err();
    assert!(matches!(err, ApiError::Token(_)));
}

#[tokio::test]
async fn session_token_is_not_a_valid_qr_token() {
    use hostelry_core::security::SecurityConfig;
    use hostelry_primitives::models::entities::enum_types::UserRole;

    let state = common::create_test_app_state(120);

    let session_token = SecurityConfig::create_token(
        &state,
        uuid::Uuid::new_v4(),
        "rahul.sharma",
        UserRole::Student,
    )
    .unwrap();

    // wrong shape for the QR purpose claim
    assert!(QrTokenService::validate(&state, &session_token).is_err());
}
