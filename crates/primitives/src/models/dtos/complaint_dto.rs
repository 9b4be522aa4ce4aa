use crate::models::entities::complaint::{Complaint, ComplaintAction};
use crate::models::entities::enum_types::{ComplaintCategory, ComplaintStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RaiseComplaintRequest {
    pub category: ComplaintCategory,
    #[validate(length(min = 5, max = 2048))]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateComplaintStatusRequest {
    pub status: ComplaintStatus,
    pub resolution_comment: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub building_id: Uuid,
    pub category: ComplaintCategory,
    pub description: String,
    pub resolution_comment: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintDto {
    fn from(c: Complaint) -> Self {
        Self {
            id: c.id,
            student_id: c.student_id,
            building_id: c.building_id,
            category: c.category,
            description: c.description,
            resolution_comment: c.resolution_comment,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ComplaintActionRequest {
    pub complaint_id: Uuid,
    #[validate(length(min = 1, max = 1024))]
    pub action_taken: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintActionDto {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub staff_id: Uuid,
    pub action_taken: String,
    pub action_time: DateTime<Utc>,
}

impl From<ComplaintAction> for ComplaintActionDto {
    fn from(a: ComplaintAction) -> Self {
        Self {
            id: a.id,
            complaint_id: a.complaint_id,
            staff_id: a.staff_id,
            action_taken: a.action_taken,
            action_time: a.action_time,
        }
    }
}
