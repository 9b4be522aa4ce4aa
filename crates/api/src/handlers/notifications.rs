use axum::extract::{Extension, Json, Path, State};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::notification_service::NotificationService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::notification_dto::{BroadcastRequest, NotificationDto};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    responses((status = 200, description = "Unread notifications", body = [NotificationDto])),
    security(("bearerAuth" = [])),
    tag = "Notifications"
)]
pub async fn unread_notifications(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<NotificationDto>>, ApiError> {
    let user_id = claims.user_id()?;
    Ok(Json(NotificationService::unread(&state, user_id)?))
}

#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    responses((status = 200, description = "Marked as read")),
    security(("bearerAuth" = [])),
    tag = "Notifications"
)]
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let user_id = claims.user_id()?;
    NotificationService::mark_read(&state, notification_id, user_id)?;
    Ok(Json(json!({ "status": "ok" })))
}

#[utoipa::path(
    post,
    path = "/api/notifications/broadcast",
    request_body = BroadcastRequest,
    responses((status = 200, description = "Broadcast dispatched")),
    security(("bearerAuth" = [])),
    tag = "Notifications"
)]
pub async fn broadcast(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<BroadcastRequest>,
) -> Result<Json<Value>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;
    req.validate().map_err(ApiError::Validation)?;

    let delivered = NotificationService::broadcast(&state, &req)?;
    Ok(Json(json!({ "delivered": delivered })))
}
