use crate::models::entities::enum_types::{AttendanceKind, HostelAction, MealType};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One row per mark event. HOSTEL rows carry `hostel_action`, MESS rows
/// carry `meal`; the table enforces at most one MESS row per
/// (student, date, meal).
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::student_attendance)]
#[diesel(belongs_to(crate::models::entities::student::Student))]
pub struct StudentAttendance {
    pub id: Uuid,
    pub student_id: Uuid,
    pub building_id: Option<Uuid>,
    pub attendance_date: NaiveDate,
    pub attendance_time: NaiveTime,
    pub kind: AttendanceKind,
    pub hostel_action: Option<HostelAction>,
    pub meal: Option<MealType>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::student_attendance)]
pub struct NewStudentAttendance {
    pub student_id: Uuid,
    pub building_id: Option<Uuid>,
    pub attendance_date: NaiveDate,
    pub attendance_time: NaiveTime,
    pub kind: AttendanceKind,
    pub hostel_action: Option<HostelAction>,
    pub meal: Option<MealType>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::staff_attendance)]
#[diesel(belongs_to(crate::models::entities::staff::Staff))]
pub struct StaffAttendance {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub building_id: Option<Uuid>,
    pub attendance_date: NaiveDate,
    pub attendance_time: NaiveTime,
    pub action: HostelAction,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::staff_attendance)]
pub struct NewStaffAttendance {
    pub staff_id: Uuid,
    pub building_id: Option<Uuid>,
    pub attendance_date: NaiveDate,
    pub attendance_time: NaiveTime,
    pub action: HostelAction,
}
