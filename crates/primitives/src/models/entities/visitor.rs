use crate::models::entities::enum_types::VisitorStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::visitors)]
#[diesel(belongs_to(crate::models::entities::student::Student))]
pub struct Visitor {
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::visitors)]
pub struct NewVisitor<'a> {
    pub student_id: Uuid,
    pub visitor_name: &'a str,
    pub contact_number: Option<&'a str>,
    pub purpose: Option<&'a str>,
    pub status: VisitorStatus,
    pub visit_date: DateTime<Utc>,
    pub in_time: Option<DateTime<Utc>>,
}
