use chrono::NaiveDate;
use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::attendance::{
    NewStaffAttendance, NewStudentAttendance, StaffAttendance, StudentAttendance,
};
use hostelry_primitives::models::entities::enum_types::{AttendanceKind, HostelAction, MealType};
use hostelry_primitives::schema::{staff_attendance, student_attendance};
use uuid::Uuid;

pub struct AttendanceRepository;

impl AttendanceRepository {
    /// Most recent HOSTEL mark for the student, newest date then newest time.
    pub fn last_hostel_mark(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Option<StudentAttendance>, ApiError> {
        student_attendance::table
            .filter(student_attendance::student_id.eq(student_id))
            .filter(student_attendance::kind.eq(AttendanceKind::Hostel))
            .order((
                student_attendance::attendance_date.desc(),
                student_attendance::attendance_time.desc(),
            ))
            .first::<StudentAttendance>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn mess_mark_exists(
        conn: &mut PgConnection,
        student_id: Uuid,
        date: NaiveDate,
        meal: MealType,
    ) -> Result<bool, ApiError> {
        diesel::select(diesel::dsl::exists(
            student_attendance::table
                .filter(student_attendance::student_id.eq(student_id))
                .filter(student_attendance::attendance_date.eq(date))
                .filter(student_attendance::meal.eq(meal)),
        ))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
    }

    pub fn insert(
        conn: &mut PgConnection,
        row: NewStudentAttendance,
    ) -> Result<StudentAttendance, ApiError> {
        diesel::insert_into(student_attendance::table)
            .values(&row)
            .get_result::<StudentAttendance>(conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => ApiError::Conflict("Attendance already marked for this meal today".into()),
                other => ApiError::from(other),
            })
    }

    pub fn list_by_student(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Vec<StudentAttendance>, ApiError> {
        student_attendance::table
            .filter(student_attendance::student_id.eq(student_id))
            .order((
                student_attendance::attendance_date.desc(),
                student_attendance::attendance_time.desc(),
            ))
            .load::<StudentAttendance>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_staff(
        conn: &mut PgConnection,
        staff_id: Uuid,
    ) -> Result<Vec<StaffAttendance>, ApiError> {
        staff_attendance::table
            .filter(staff_attendance::staff_id.eq(staff_id))
            .order((
                staff_attendance::attendance_date.desc(),
                staff_attendance::attendance_time.desc(),
            ))
            .load::<StaffAttendance>(conn)
            .map_err(ApiError::from)
    }

    pub fn staff_action_exists(
        conn: &mut PgConnection,
        staff_id: Uuid,
        date: NaiveDate,
        action: HostelAction,
    ) -> Result<bool, ApiError> {
        diesel::select(diesel::dsl::exists(
            staff_attendance::table
                .filter(staff_attendance::staff_id.eq(staff_id))
                .filter(staff_attendance::attendance_date.eq(date))
                .filter(staff_attendance::action.eq(action)),
        ))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
    }

    pub fn insert_staff(
        conn: &mut PgConnection,
        row: NewStaffAttendance,
    ) -> Result<StaffAttendance, ApiError> {
        diesel::insert_into(staff_attendance::table)
            .values(&row)
            .get_result::<StaffAttendance>(conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => ApiError::Conflict("Attendance already marked with this action today".into()),
                other => ApiError::from(other),
            })
    }
}
