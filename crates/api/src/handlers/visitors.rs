use axum::extract::{Extension, Json, Path, State};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::visitor_service::VisitorService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::visitor_dto::{
    UpdateVisitorStatusRequest, VisitorDto, VisitorRequest,
};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    post,
    path = "/api/visitors/request",
    request_body = VisitorRequest,
    responses((status = 200, description = "Visit request created", body = VisitorDto)),
    security(("bearerAuth" = [])),
    tag = "Visitors"
)]
pub async fn create_visit_request(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<VisitorRequest>,
) -> Result<Json<VisitorDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(VisitorService::create_request(
        &state,
        &claims.username,
        &req,
    )?))
}

#[utoipa::path(
    post,
    path = "/api/visitors/log",
    request_body = VisitorRequest,
    responses((status = 200, description = "Walk-in visitor logged", body = VisitorDto)),
    security(("bearerAuth" = [])),
    tag = "Visitors"
)]
pub async fn log_visitor(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<VisitorRequest>,
) -> Result<Json<VisitorDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Guard])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(VisitorService::log(&state, &req)?))
}

#[utoipa::path(
    put,
    path = "/api/visitors/{visitor_id}/status",
    request_body = UpdateVisitorStatusRequest,
    responses((status = 200, description = "Visitor status updated", body = VisitorDto)),
    security(("bearerAuth" = [])),
    tag = "Visitors"
)]
pub async fn update_visitor_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(visitor_id): Path<Uuid>,
    Json(req): Json<UpdateVisitorStatusRequest>,
) -> Result<Json<VisitorDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Guard])?;

    Ok(Json(VisitorService::update_status(&state, visitor_id, &req)?))
}

#[utoipa::path(
    get,
    path = "/api/visitors/student/{student_id}",
    responses((status = 200, description = "Visits for the student", body = [VisitorDto])),
    security(("bearerAuth" = [])),
    tag = "Visitors"
)]
pub async fn visitors_by_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<VisitorDto>>, ApiError> {
    Ok(Json(VisitorService::by_student(&state, student_id)?))
}

#[utoipa::path(
    get,
    path = "/api/visitors/recent",
    responses((status = 200, description = "Recent visits", body = [VisitorDto])),
    security(("bearerAuth" = [])),
    tag = "Visitors"
)]
pub async fn recent_visitors(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<VisitorDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Guard])?;

    Ok(Json(VisitorService::recent(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/visitors/pending/{building_id}",
    responses((status = 200, description = "Pending requests for the building", body = [VisitorDto])),
    security(("bearerAuth" = [])),
    tag = "Visitors"
)]
pub async fn pending_visitors(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(building_id): Path<Uuid>,
) -> Result<Json<Vec<VisitorDto>>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Guard])?;

    Ok(Json(VisitorService::pending_by_building(&state, building_id)?))
}
