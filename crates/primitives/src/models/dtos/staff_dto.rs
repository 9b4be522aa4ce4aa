use crate::models::entities::enum_types::StaffType;
use crate::models::entities::staff::Staff;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddStaffRequest {
    /// Existing user account the staff profile is attached to.
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    pub staff_type: StaffType,
    #[serde(default)]
    pub manages_mess: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub staff_type: StaffType,
    pub manages_mess: bool,
}

impl From<Staff> for StaffDto {
    fn from(s: Staff) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            full_name: s.full_name,
            staff_type: s.staff_type,
            manages_mess: s.manages_mess,
        }
    }
}
