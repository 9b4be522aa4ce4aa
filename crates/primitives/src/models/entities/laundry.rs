use crate::models::entities::enum_types::LaundryStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::laundry_bookings)]
#[diesel(belongs_to(crate::models::entities::student::Student))]
pub struct LaundryBooking {
    pub id: Uuid,
    pub student_id: Uuid,
    pub building_id: Option<Uuid>,
    pub clothes_count: i32,
    pub amount: i64,
    pub status: LaundryStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::laundry_bookings)]
pub struct NewLaundryBooking {
    pub student_id: Uuid,
    pub building_id: Option<Uuid>,
    pub clothes_count: i32,
    pub amount: i64,
    pub status: LaundryStatus,
}
