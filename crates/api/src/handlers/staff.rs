use axum::extract::{Extension, Json, State};
use std::sync::Arc;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::staff_service::StaffService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::attendance_dto::StaffAttendanceDto;
use hostelry_primitives::models::dtos::staff_dto::{AddStaffRequest, StaffDto};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    post,
    path = "/api/staff",
    request_body = AddStaffRequest,
    responses(
        (status = 200, description = "Staff profile created", body = StaffDto),
        (status = 404, description = "No such user"),
        (status = 409, description = "Profile already exists")
    ),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn add_staff(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddStaffRequest>,
) -> Result<Json<StaffDto>, ApiError> {
    claims.require_role(&[UserRole::Admin])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(StaffService::add(&state, &req)?))
}

#[utoipa::path(
    get,
    path = "/api/staff",
    responses((status = 200, description = "All staff", body = [StaffDto])),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn list_staff(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<StaffDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;

    Ok(Json(StaffService::list(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/staff/profile",
    responses(
        (status = 200, description = "The caller's staff profile", body = StaffDto),
        (status = 404, description = "No staff profile")
    ),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn staff_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<StaffDto>, ApiError> {
    Ok(Json(StaffService::profile(&state, &claims.username)?))
}

#[utoipa::path(
    get,
    path = "/api/staff/attendance",
    responses((status = 200, description = "The caller's attendance history", body = [StaffAttendanceDto])),
    security(("bearerAuth" = [])),
    tag = "Staff"
)]
pub async fn staff_attendance_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<StaffAttendanceDto>>, ApiError> {
    Ok(Json(StaffService::attendance_history(
        &state,
        &claims.username,
    )?))
}
