use crate::models::entities::enum_types::BuildingType;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::hostel_buildings)]
pub struct HostelBuilding {
    pub id: Uuid,
    pub name: String,
    pub building_type: BuildingType,
    pub total_rooms: i32,
    pub total_capacity: i32,
    pub available_rooms: i32,
    pub fee: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::hostel_buildings)]
pub struct NewHostelBuilding<'a> {
    pub name: &'a str,
    pub building_type: BuildingType,
    pub total_rooms: i32,
    pub total_capacity: i32,
    pub available_rooms: i32,
    pub fee: i64,
}
