use axum::extract::{Extension, Json, State};
use std::sync::Arc;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::services::mess_service::MessService;
use hostelry_core::AppState;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::mess_dto::{
    CreateMenuRequest, CreatePlanRequest, MenuDto, PlanDto, SubscribeRequest, SubscriptionDto,
};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[utoipa::path(
    post,
    path = "/api/mess/subscribe",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscription purchased", body = SubscriptionDto),
        (status = 402, description = "Insufficient wallet balance"),
        (status = 404, description = "Mess plan not found")
    ),
    security(("bearerAuth" = [])),
    tag = "Mess"
)]
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<SubscriptionDto>, ApiError> {
    Ok(Json(MessService::subscribe(&state, &claims.username, &req)?))
}

#[utoipa::path(
    get,
    path = "/api/mess/subscription",
    responses(
        (status = 200, description = "Latest subscription, if any", body = Option<SubscriptionDto>)
    ),
    security(("bearerAuth" = [])),
    tag = "Mess"
)]
pub async fn my_subscription(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Option<SubscriptionDto>>, ApiError> {
    Ok(Json(MessService::subscription(&state, &claims.username)?))
}

#[utoipa::path(
    get,
    path = "/api/mess/plans",
    responses((status = 200, description = "Available mess plans", body = [PlanDto])),
    security(("bearerAuth" = [])),
    tag = "Mess"
)]
pub async fn list_plans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanDto>>, ApiError> {
    Ok(Json(MessService::list_plans(&state)?))
}

#[utoipa::path(
    post,
    path = "/api/mess/plans",
    request_body = CreatePlanRequest,
    responses((status = 200, description = "Plan created", body = PlanDto)),
    security(("bearerAuth" = [])),
    tag = "Mess"
)]
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreatePlanRequest>,
) -> Result<Json<PlanDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(MessService::create_plan(&state, &req)?))
}

#[utoipa::path(
    get,
    path = "/api/mess/menus/today",
    responses((status = 200, description = "Today's menus", body = [MenuDto])),
    security(("bearerAuth" = [])),
    tag = "Mess"
)]
pub async fn todays_menus(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MenuDto>>, ApiError> {
    Ok(Json(MessService::todays_menus(&state)?))
}

#[utoipa::path(
    post,
    path = "/api/mess/menus",
    request_body = CreateMenuRequest,
    responses((status = 200, description = "Menu created", body = MenuDto)),
    security(("bearerAuth" = [])),
    tag = "Mess"
)]
pub async fn create_menu(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateMenuRequest>,
) -> Result<Json<MenuDto>, ApiError> {
    claims.require_role(&[UserRole::Admin, UserRole::Warden, UserRole::Staff])?;
    req.validate().map_err(ApiError::Validation)?;

    Ok(Json(MessService::create_menu(&state, &req)?))
}
