use crate::models::entities::attendance::{StaffAttendance, StudentAttendance};
use crate::models::entities::enum_types::{AttendanceKind, HostelAction, MealType};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendanceRequest {
    pub kind: AttendanceKind,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct QrMarkRequest {
    #[validate(length(min = 16))]
    pub token: String,
    pub kind: AttendanceKind,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QrCodeResponse {
    pub token: String,
    pub expires_in_seconds: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub building_id: Option<Uuid>,
    pub kind: AttendanceKind,
    pub hostel_action: Option<HostelAction>,
    pub meal: Option<MealType>,
    pub attendance_date: NaiveDate,
    pub attendance_time: NaiveTime,
}

impl From<StudentAttendance> for AttendanceDto {
    fn from(a: StudentAttendance) -> Self {
        Self {
            id: a.id,
            student_id: a.student_id,
            building_id: a.building_id,
            kind: a.kind,
            hostel_action: a.hostel_action,
            meal: a.meal,
            attendance_date: a.attendance_date,
            attendance_time: a.attendance_time,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StaffMarkRequest {
    pub staff_id: Uuid,
    pub building_id: Option<Uuid>,
    pub action: HostelAction,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffAttendanceDto {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub building_id: Option<Uuid>,
    pub action: HostelAction,
    pub attendance_date: NaiveDate,
    pub attendance_time: NaiveTime,
}

impl From<StaffAttendance> for StaffAttendanceDto {
    fn from(a: StaffAttendance) -> Self {
        Self {
            id: a.id,
            staff_id: a.staff_id,
            building_id: a.building_id,
            action: a.action,
            attendance_date: a.attendance_date,
            attendance_time: a.attendance_time,
        }
    }
}
