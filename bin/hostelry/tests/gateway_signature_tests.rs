mod common;

use hmac::{Hmac, Mac};
use hostelry_core::clients::gateway::GatewayClient;
use sha2::Sha256;

fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[tokio::test]
async fn valid_signature_is_accepted() {
    let state = common::create_test_app_state(120);

    let signature = sign("test_gateway_secret", "order_123", "pay_456");
    assert!(GatewayClient::verify_signature(&state, "order_123", "pay_456", &signature).is_ok());
}

#[tokio::test]
async fn tampered_signature_is_rejected() {
    let state = common::create_test_app_state(120);

    let signature = sign("test_gateway_secret", "order_123", "pay_456");
    // confirmation for a different payment must not verify
    assert!(GatewayClient::verify_signature(&state, "order_123", "pay_999", &signature).is_err());
}

#[tokio::test]
async fn signature_from_wrong_secret_is_rejected() {
    let state = common::create_test_app_state(120);

    let signature = sign("some_other_secret", "order_123", "pay_456");
    assert!(GatewayClient::verify_signature(&state, "order_123", "pay_456", &signature).is_err());
}
