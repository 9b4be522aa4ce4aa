use hmac::{Hmac, Mac};
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::error;

use crate::app_state::AppState;
use hostelry_primitives::error::ApiError;

type HmacSha256 = Hmac<Sha256>;

/// Opaque payment-gateway collaborator: order creation over HTTP plus
/// HMAC signature verification of payment confirmations.
pub struct GatewayClient;

impl GatewayClient {
    pub async fn create_order(state: &AppState, amount: i64) -> Result<String, ApiError> {
        let gateway = &state.config.gateway;

        let resp = state
            .http_client
            .post(format!("{}/orders", gateway.api_url))
            .basic_auth(&gateway.key_id, Some(gateway.key_secret.expose_secret()))
            .json(&json!({
                "amount": amount * 100,
                "currency": "INR",
                "receipt": format!("hostel_rcpt_{}", uuid::Uuid::new_v4()),
            }))
            .send()
            .await
            .map_err(|e| {
                error!("Gateway order request failed: {}", e);
                ApiError::Gateway("Failed to create payment order".into())
            })?;

        let status = resp.status();
        let body = resp.json::<Value>().await.map_err(|e| {
            error!("Gateway order response parsing failed: {}", e);
            ApiError::Gateway("Invalid gateway response".into())
        })?;

        if !status.is_success() {
            error!("Gateway order creation rejected: {:?}", body);
            return Err(ApiError::Gateway("Failed to create payment order".into()));
        }

        body["id"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::Gateway("Order id missing from gateway response".into()))
    }

    /// Verifies the `HMAC-SHA256(order_id|payment_id)` confirmation signature.
    pub fn verify_signature(
        state: &AppState,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), ApiError> {
        let secret = state.config.gateway.key_secret.expose_secret();

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| ApiError::Internal("Invalid gateway secret".into()))?;

        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
        let expected = hex::encode(mac.finalize().into_bytes());

        if expected.as_bytes().ct_eq(signature.as_bytes()).unwrap_u8() != 1 {
            return Err(ApiError::Gateway(
                "Payment signature verification failed".into(),
            ));
        }

        Ok(())
    }
}
