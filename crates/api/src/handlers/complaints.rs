use axum::extract::{Extension, Json, Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::admission_service::AdmissionService;
use hostelry_core::services::complaint_service::ComplaintService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::complaint_dto::{
    ComplaintActionDto, ComplaintActionRequest, ComplaintDto, RaiseComplaintRequest,
    UpdateComplaintStatusRequest,
};
use hostelry_primitives::models::entities::enum_types::{ComplaintStatus, UserRole};

#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = RaiseComplaintRequest,
    responses(
        (status = 200, description = "Complaint raised", body = ComplaintDto),
        (status = 404, description = "No building assignment")
    ),
    security(("bearerAuth" = [])),
    tag = "Complaints"
)]
pub async fn raise_complaint(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<RaiseComplaintRequest>,
) -> Result<Json<ComplaintDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(ComplaintService::raise(&state, &claims.username, &req)?))
}

#[utoipa::path(
    get,
    path = "/api/complaints/me",
    responses((status = 200, description = "The caller's complaints", body = [ComplaintDto])),
    security(("bearerAuth" = [])),
    tag = "Complaints"
)]
pub async fn my_complaints(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    let student = AdmissionService::by_username(&state, &claims.username)?;
    Ok(Json(ComplaintService::by_student(&state, student.id)?))
}

#[derive(Debug, Deserialize)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
}

#[utoipa::path(
    get,
    path = "/api/complaints/building/{building_id}",
    params(("status" = Option<ComplaintStatus>, Query, description = "Optional status filter")),
    responses((status = 200, description = "Complaints for the building", body = [ComplaintDto])),
    security(("bearerAuth" = [])),
    tag = "Complaints"
)]
pub async fn complaints_by_building(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(building_id): Path<Uuid>,
    Query(filter): Query<ComplaintFilter>,
) -> Result<Json<Vec<ComplaintDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;

    Ok(Json(ComplaintService::by_building(
        &state,
        building_id,
        filter.status,
    )?))
}

#[utoipa::path(
    put,
    path = "/api/complaints/{complaint_id}/status",
    request_body = UpdateComplaintStatusRequest,
    responses((status = 200, description = "Status updated", body = ComplaintDto)),
    security(("bearerAuth" = [])),
    tag = "Complaints"
)]
pub async fn update_complaint_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(complaint_id): Path<Uuid>,
    Json(req): Json<UpdateComplaintStatusRequest>,
) -> Result<Json<ComplaintDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;

    Ok(Json(ComplaintService::update_status(
        &state,
        complaint_id,
        &req,
    )?))
}

#[utoipa::path(
    post,
    path = "/api/complaints/actions",
    request_body = ComplaintActionRequest,
    responses((status = 200, description = "Action recorded", body = ComplaintActionDto)),
    security(("bearerAuth" = [])),
    tag = "Complaints"
)]
pub async fn take_complaint_action(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ComplaintActionRequest>,
) -> Result<Json<ComplaintActionDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(ComplaintService::take_action(
        &state,
        &claims.username,
        &req,
    )?))
}

#[utoipa::path(
    get,
    path = "/api/complaints/{complaint_id}/actions",
    responses((status = 200, description = "Action log for a complaint", body = [ComplaintActionDto])),
    security(("bearerAuth" = [])),
    tag = "Complaints"
)]
pub async fn complaint_actions(
    State(state): State<Arc<AppState>>,
    Path(complaint_id): Path<Uuid>,
) -> Result<Json<Vec<ComplaintActionDto>>, ApiError> {
    Ok(Json(ComplaintService::actions_for(&state, complaint_id)?))
}
