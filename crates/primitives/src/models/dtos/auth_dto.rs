use crate::models::entities::enum_types::{Gender, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: UserRole,
    pub user_id: Uuid,
    pub manages_mess: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub phone_number: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 128))]
    pub full_name: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub gender: Option<Gender>,
    /// Preferred building, recorded on the pending student; assignment only
    /// happens at approval.
    pub building_id: Option<Uuid>,
    pub room_number: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::Student
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}
