use axum::extract::{Extension, Json, Path, State};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::laundry_service::LaundryService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::laundry_dto::{
    LaundryBookingDto, LaundryBookingRequest, UpdateLaundryStatusRequest,
};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    post,
    path = "/api/laundry/book",
    request_body = LaundryBookingRequest,
    responses(
        (status = 200, description = "Laundry booked", body = LaundryBookingDto),
        (status = 402, description = "Insufficient wallet balance")
    ),
    security(("bearerAuth" = [])),
    tag = "Laundry"
)]
pub async fn book_laundry(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<LaundryBookingRequest>,
) -> Result<Json<LaundryBookingDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(LaundryService::book(&state, &claims.username, &req)?))
}

#[utoipa::path(
    put,
    path = "/api/laundry/{booking_id}/status",
    request_body = UpdateLaundryStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = LaundryBookingDto),
        (status = 402, description = "Insufficient wallet balance for the wash charge")
    ),
    security(("bearerAuth" = [])),
    tag = "Laundry"
)]
pub async fn update_laundry_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<UpdateLaundryStatusRequest>,
) -> Result<Json<LaundryBookingDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;

    Ok(Json(LaundryService::update_status(&state, booking_id, &req)?))
}

#[utoipa::path(
    get,
    path = "/api/laundry/history",
    responses((status = 200, description = "The caller's bookings", body = [LaundryBookingDto])),
    security(("bearerAuth" = [])),
    tag = "Laundry"
)]
pub async fn laundry_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<LaundryBookingDto>>, ApiError> {
    Ok(Json(LaundryService::history(&state, &claims.username)?))
}

#[utoipa::path(
    get,
    path = "/api/laundry/all",
    responses((status = 200, description = "All bookings", body = [LaundryBookingDto])),
    security(("bearerAuth" = [])),
    tag = "Laundry"
)]
pub async fn all_laundry_bookings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<LaundryBookingDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;

    Ok(Json(LaundryService::list_all(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/laundry/building/{building_id}",
    responses((status = 200, description = "Bookings for the building", body = [LaundryBookingDto])),
    security(("bearerAuth" = [])),
    tag = "Laundry"
)]
pub async fn laundry_by_building(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(building_id): Path<Uuid>,
) -> Result<Json<Vec<LaundryBookingDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;

    Ok(Json(LaundryService::by_building(&state, building_id)?))
}
