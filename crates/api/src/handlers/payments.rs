use axum::extract::{Extension, Json, State};
use std::sync::Arc;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::payment_service::PaymentService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::payment_dto::{
    CashPaymentRequest, ConfirmPaymentRequest, CreateOrderRequest, CreateOrderResponse, PaymentDto,
    WalletFeePaymentRequest,
};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    post,
    path = "/api/payments/order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Gateway order created", body = CreateOrderResponse),
        (status = 502, description = "Gateway error")
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(PaymentService::create_order(&state, &req).await?))
}

#[utoipa::path(
    post,
    path = "/api/payments/confirm",
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Payment confirmed and applied", body = PaymentDto),
        (status = 502, description = "Signature verification failed")
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn confirm_payment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ConfirmPaymentRequest>,
) -> Result<Json<PaymentDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(PaymentService::confirm(&state, &claims.username, &req)?))
}

#[utoipa::path(
    post,
    path = "/api/payments/cash",
    request_body = CashPaymentRequest,
    responses((status = 200, description = "Cash payment recorded", body = PaymentDto)),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn add_cash_payment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CashPaymentRequest>,
) -> Result<Json<PaymentDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(PaymentService::add_cash_payment(&state, &req)?))
}

#[utoipa::path(
    post,
    path = "/api/payments/wallet_fee",
    request_body = WalletFeePaymentRequest,
    responses(
        (status = 200, description = "Fee paid from wallet", body = PaymentDto),
        (status = 402, description = "Insufficient wallet balance")
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn pay_fee_from_wallet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<WalletFeePaymentRequest>,
) -> Result<Json<PaymentDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(PaymentService::pay_fee_from_wallet(
        &state,
        &claims.username,
        &req,
    )?))
}

#[utoipa::path(
    get,
    path = "/api/payments/history",
    responses((status = 200, description = "The caller's payment ledger", body = [PaymentDto])),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn payment_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<PaymentDto>>, ApiError> {
    Ok(Json(PaymentService::history(&state, &claims.username)?))
}
