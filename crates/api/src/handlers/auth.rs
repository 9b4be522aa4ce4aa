use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use hostelry_core::services::admission_service::AdmissionService;
use hostelry_core::services::auth_service::AuthService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::auth_dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("register validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(AdmissionService::register(&state, &req)?))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(AuthService::login(&state, &req)?))
}
