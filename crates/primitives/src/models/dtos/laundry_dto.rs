use crate::models::entities::enum_types::LaundryStatus;
use crate::models::entities::laundry::LaundryBooking;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LaundryBookingRequest {
    #[validate(range(min = 1, max = 100))]
    pub clothes_count: i32,
    #[validate(range(min = 1))]
    pub amount: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLaundryStatusRequest {
    pub status: LaundryStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LaundryBookingDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub clothes_count: i32,
    pub amount: i64,
    pub status: LaundryStatus,
}

impl From<LaundryBooking> for LaundryBookingDto {
    fn from(b: LaundryBooking) -> Self {
        Self {
            id: b.id,
            student_id: b.student_id,
            clothes_count: b.clothes_count,
            amount: b.amount,
            status: b.status,
        }
    }
}
