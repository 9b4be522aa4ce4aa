use axum::extract::{Extension, Json, State};
use std::sync::Arc;
use validator::Validate;

use hostelry_core::security::{Claims, QrTokenService};
use hostelry_core::services::attendance_service::AttendanceService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::attendance_dto::{
    AttendanceDto, MarkAttendanceRequest, QrCodeResponse, QrMarkRequest, StaffAttendanceDto,
    StaffMarkRequest,
};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    get,
    path = "/api/attendance/qr",
    responses(
        (status = 200, description = "Fresh QR attendance token", body = QrCodeResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Attendance"
)]
pub async fn issue_qr_token(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<QrCodeResponse>, ApiError> {
    let token = QrTokenService::issue(&state, &claims.username)?;

    Ok(Json(QrCodeResponse {
        token,
        expires_in_seconds: state.config.jwt.qr_ttl_seconds,
    }))
}

#[utoipa::path(
    post,
    path = "/api/attendance/mark",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 200, description = "Attendance marked", body = AttendanceDto),
        (status = 402, description = "Insufficient wallet balance"),
        (status = 409, description = "Duplicate mark or mess closed")
    ),
    security(("bearerAuth" = [])),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<MarkAttendanceRequest>,
) -> Result<Json<AttendanceDto>, ApiError> {
    let dto = AttendanceService::mark_for_username(&state, &claims.username, req.kind)?;
    Ok(Json(dto))
}

#[utoipa::path(
    post,
    path = "/api/attendance/scan",
    request_body = QrMarkRequest,
    responses(
        (status = 200, description = "Attendance marked via QR", body = AttendanceDto),
        (status = 401, description = "Invalid or expired QR token"),
        (status = 409, description = "Duplicate mark or mess closed")
    ),
    security(("bearerAuth" = [])),
    tag = "Attendance"
)]
pub async fn scan_qr(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<QrMarkRequest>,
) -> Result<Json<AttendanceDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Guard, UserRole::Staff])?;
    req.validate().map_err(ApiError::Validation)?;

    let dto = AttendanceService::mark_by_qr(&state, &req.token, req.kind)?;
    Ok(Json(dto))
}

#[utoipa::path(
    get,
    path = "/api/attendance/history",
    responses(
        (status = 200, description = "The caller's attendance history", body = [AttendanceDto])
    ),
    security(("bearerAuth" = [])),
    tag = "Attendance"
)]
pub async fn attendance_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<AttendanceDto>>, ApiError> {
    Ok(Json(AttendanceService::history(&state, &claims.username)?))
}

#[utoipa::path(
    post,
    path = "/api/attendance/staff",
    request_body = StaffMarkRequest,
    responses(
        (status = 200, description = "Staff attendance marked", body = StaffAttendanceDto),
        (status = 409, description = "Action already marked today")
    ),
    security(("bearerAuth" = [])),
    tag = "Attendance"
)]
pub async fn mark_staff_attendance(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<StaffMarkRequest>,
) -> Result<Json<StaffAttendanceDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;

    Ok(Json(AttendanceService::mark_staff(&state, &req)?))
}
