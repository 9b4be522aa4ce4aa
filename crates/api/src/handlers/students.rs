use axum::extract::{Extension, Json, Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::admission_service::AdmissionService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::student_dto::{
    ApproveStudentRequest, PaymentMethodRequest, StudentDto,
};
use hostelry_primitives::models::entities::enum_types::{StudentStatus, UserRole};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<StudentStatus>,
}

#[utoipa::path(
    get,
    path = "/api/students",
    params(("status" = Option<StudentStatus>, Query, description = "Filter by status, defaults to PENDING")),
    responses((status = 200, description = "Students with the given status", body = [StudentDto])),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<StudentDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;

    let status = query.status.unwrap_or(StudentStatus::Pending);
    Ok(Json(AdmissionService::by_status(&state, status)?))
}

#[utoipa::path(
    get,
    path = "/api/students/building/{building_id}",
    responses(
        (status = 200, description = "Students assigned to the building", body = [StudentDto]),
        (status = 404, description = "Building not found")
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn students_by_building(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(building_id): Path<Uuid>,
) -> Result<Json<Vec<StudentDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;

    Ok(Json(AdmissionService::by_building(&state, building_id)?))
}

#[utoipa::path(
    get,
    path = "/api/students/me",
    responses(
        (status = 200, description = "The caller's student profile", body = StudentDto),
        (status = 404, description = "No student profile")
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn current_student(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<StudentDto>, ApiError> {
    Ok(Json(AdmissionService::by_username(&state, &claims.username)?))
}

#[utoipa::path(
    post,
    path = "/api/students/{student_id}/approve",
    request_body = ApproveStudentRequest,
    responses(
        (status = 200, description = "Student approved", body = StudentDto),
        (status = 409, description = "No rooms available or already processed")
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn approve_student(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(student_id): Path<Uuid>,
    Json(req): Json<ApproveStudentRequest>,
) -> Result<Json<StudentDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(AdmissionService::approve(&state, student_id, &req)?))
}

#[utoipa::path(
    post,
    path = "/api/students/{student_id}/reject",
    responses(
        (status = 200, description = "Student rejected", body = StudentDto),
        (status = 409, description = "Already processed")
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn reject_student(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<StudentDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;

    Ok(Json(AdmissionService::reject(&state, student_id)?))
}

#[utoipa::path(
    post,
    path = "/api/students/payment_method",
    request_body = PaymentMethodRequest,
    responses((status = 200, description = "Payment method recorded", body = StudentDto)),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn select_payment_method(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<PaymentMethodRequest>,
) -> Result<Json<StudentDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(AdmissionService::select_payment_method(
        &state,
        &claims.username,
        &req,
    )?))
}
