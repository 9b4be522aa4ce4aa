use crate::models::entities::enum_types::{ComplaintCategory, ComplaintStatus};
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::complaints)]
#[diesel(belongs_to(crate::models::entities::student::Student))]
pub struct Complaint {
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::complaints)]
pub struct NewComplaint<'a> {
    pub student_id: Uuid,
    pub building_id: Uuid,
    pub category: ComplaintCategory,
    pub description: &'a str,
    pub status: ComplaintStatus,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::complaint_actions)]
#[diesel(belongs_to(Complaint))]
pub struct ComplaintAction {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub staff_id: Uuid,
    pub action_taken: String,
    pub action_time: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::complaint_actions)]
pub struct NewComplaintAction<'a> {
    pub complaint_id: Uuid,
    pub staff_id: Uuid,
    pub action_taken: &'a str,
}
