use crate::models::entities::enum_types::VisitorStatus;
use crate::models::entities::visitor::Visitor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct VisitorRequest {
    /// Set by guards logging a walk-in; students create requests for
    /// themselves and leave this empty.
    pub student_id: Option<Uuid>,
    #[validate(length(min = 1, max = 128))]
    pub visitor_name: String,
    pub contact_number: Option<String>,
    pub purpose: Option<String>,
    pub visit_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVisitorStatusRequest {
    pub status: VisitorStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VisitorDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub visitor_name: String,
    pub contact_number: Option<String>,
    pub purpose: Option<String>,
    pub status: VisitorStatus,
    pub visit_date: DateTime<Utc>,
    pub in_time: Option<DateTime<Utc>>,
    pub out_time: Option<DateTime<Utc>>,
}

impl From<Visitor> for VisitorDto {
    fn from(v: Visitor) -> Self {
        Self {
            id: v.id,
            student_id: v.student_id,
            visitor_name: v.visitor_name,
            contact_number: v.contact_number,
            purpose: v.purpose,
            status: v.status,
            visit_date: v.visit_date,
            in_time: v.in_time,
            out_time: v.out_time,
        }
    }
}
