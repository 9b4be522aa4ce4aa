use axum::extract::{Extension, Json, State};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use hostelry_core::security::Claims;
use hostelry_core::AppState;
use hostelry_core::repositories::building_repository::BuildingRepository;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::building::{HostelBuilding, NewHostelBuilding};
use hostelry_primitives::models::entities::enum_types::{BuildingType, UserRole};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBuildingRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub building_type: BuildingType,
    #[validate(range(min = 1))]
    pub total_rooms: i32,
    #[validate(range(min = 1))]
    pub total_capacity: i32,
    #[validate(range(min = 0))]
    pub fee: i64,
}

#[utoipa::path(
    get,
    path = "/api/buildings",
    responses((status = 200, description = "All hostel buildings", body = [HostelBuilding])),
    security(("bearerAuth" = [])),
    tag = "Buildings"
)]
pub async fn list_buildings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HostelBuilding>>, ApiError> {
    let mut conn = state.conn()?;
    Ok(Json(BuildingRepository::list(&mut conn)?))
}

#[utoipa::path(
    post,
    path = "/api/buildings",
    request_body = CreateBuildingRequest,
    responses(
        (status = 200, description = "Building created", body = HostelBuilding),
        (status = 409, description = "Name already taken")
    ),
    security(("bearerAuth" = [])),
    tag = "Buildings"
)]
pub async fn create_building(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBuildingRequest>,
) -> Result<Json<HostelBuilding>, ApiError> {
    claims.require_role(&[UserRole::Admin])?;
    req.validate().map_err(ApiError::Validation)?;

    let mut conn = state.conn()?;
    let building = BuildingRepository::create(
        &mut conn,
        NewHostelBuilding {
            name: &req.name,
            building_type: req.building_type,
            total_rooms: req.total_rooms,
            total_capacity: req.total_capacity,
            // every room starts vacant
            available_rooms: req.total_rooms,
            fee: req.fee,
        },
    )?;

    Ok(Json(building))
}
