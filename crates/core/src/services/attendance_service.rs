use chrono::{Local, NaiveTime};
use diesel::Connection;
use tracing::info;

use crate::app_state::AppState;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::repositories::mess_repository::MessRepository;
use crate::repositories::staff_repository::StaffRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::QrTokenService;
use crate::services::ledger_service::LedgerService;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::attendance_dto::{
    AttendanceDto, StaffAttendanceDto, StaffMarkRequest,
};
use hostelry_primitives::models::entities::attendance::{
    NewStaffAttendance, NewStudentAttendance,
};
use hostelry_primitives::models::entities::enum_types::{
    AttendanceKind, HostelAction, MealType, PaymentKind,
};
use hostelry_primitives::models::entities::student::Student;

/// First mark of a student's history is IN; after that each mark flips the
/// last recorded action.
pub fn next_hostel_action(last: Option<HostelAction>) -> HostelAction {
    match last {
        Some(HostelAction::In) => HostelAction::Out,
        _ => HostelAction::In,
    }
}

/// Serving windows, boundaries excluded: a scan at exactly 07:00:00 is
/// rejected. Breakfast 7-11, lunch 12-2, dinner 7-10.
pub fn meal_for(now: NaiveTime) -> Option<MealType> {
    const WINDOWS: [(MealType, (u32, u32)); 3] = [
        (MealType::Breakfast, (7, 11)),
        (MealType::Lunch, (12, 14)),
        (MealType::Dinner, (19, 22)),
    ];

    for (meal, (open, close)) in WINDOWS {
        let open = NaiveTime::from_hms_opt(open, 0, 0).expect("static window bound");
        let close = NaiveTime::from_hms_opt(close, 0, 0).expect("static window bound");
        if now > open && now < close {
            return Some(meal);
        }
    }
    None
}

enum MessBilling {
    Subscription { remaining: i32 },
    PayPerMeal { price: i64 },
}

pub struct AttendanceService;

impl AttendanceService {
    /// Marks attendance for the student behind `username`, dispatching on
    /// the attendance kind.
    pub fn mark_for_username(
        state: &AppState,
        username: &str,
        kind: AttendanceKind,
    ) -> Result<AttendanceDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound(format!("User not found: {}", username)))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound(format!("Student not found for user: {}", username)))?;

        match kind {
            AttendanceKind::Hostel => Self::mark_hostel(state, &mut conn, &student),
            AttendanceKind::Mess => Self::mark_mess(state, &mut conn, &student),
        }
    }

    /// QR path: validate the scanned token, resolve its username, then mark.
    pub fn mark_by_qr(
        state: &AppState,
        token: &str,
        kind: AttendanceKind,
    ) -> Result<AttendanceDto, ApiError> {
        let username = QrTokenService::validate(state, token)?;
        Self::mark_for_username(state, &username, kind)
    }

    fn mark_hostel(
        state: &AppState,
        conn: &mut crate::app_state::DbConn,
        student: &Student,
    ) -> Result<AttendanceDto, ApiError> {
        info!(student_id = %student.id, "marking hostel attendance");

        let now = Local::now();

        let saved = conn.transaction::<_, ApiError, _>(|conn| {
            let last = AttendanceRepository::last_hostel_mark(conn, student.id)?;
            let action = next_hostel_action(last.and_then(|a| a.hostel_action));

            AttendanceRepository::insert(
                conn,
                NewStudentAttendance {
                    student_id: student.id,
                    building_id: student.building_id,
                    attendance_date: now.date_naive(),
                    attendance_time: now.time(),
                    kind: AttendanceKind::Hostel,
                    hostel_action: Some(action),
                    meal: None,
                },
            )
        })?;

        NotificationService::send_silently(
            state,
            student.user_id,
            "Attendance Marked",
            &format!(
                "Your attendance has been marked: Hostel {} at {}",
                saved.hostel_action.unwrap_or(HostelAction::In),
                saved.attendance_time.format("%H:%M:%S")
            ),
        );

        Ok(saved.into())
    }

    fn mark_mess(
        state: &AppState,
        conn: &mut crate::app_state::DbConn,
        student: &Student,
    ) -> Result<AttendanceDto, ApiError> {
        info!(student_id = %student.id, "marking mess attendance");

        let now = Local::now();
        let today = now.date_naive();

        let meal = meal_for(now.time()).ok_or_else(|| {
            ApiError::Unavailable(
                "Mess is currently closed. Allowed timings: Breakfast (7-11), Lunch (12-2), Dinner (7-10)"
                    .into(),
            )
        })?;

        if AttendanceRepository::mess_mark_exists(conn, student.id, today, meal)? {
            return Err(ApiError::Conflict(format!(
                "Attendance already marked for {} today",
                meal
            )));
        }

        let (saved, billing) = conn.transaction::<_, ApiError, _>(|conn| {
            let billing = match MessRepository::active_subscription(conn, student.id, today)? {
                Some(sub) => {
                    // Exhausted subscriptions fail outright; there is no
                    // fallback to pay-per-meal while a subscription exists.
                    if !MessRepository::try_consume_meal(conn, sub.id)? {
                        return Err(ApiError::Unavailable(
                            "No meals remaining in your subscription. Please renew your plan."
                                .into(),
                        ));
                    }
                    MessBilling::Subscription {
                        remaining: sub.remaining_meals - 1,
                    }
                }
                None => {
                    let menu = MessRepository::menu_for(conn, today, meal)?.ok_or_else(|| {
                        ApiError::Unavailable(
                            "No menu set for today and no active subscription. Cannot mark attendance."
                                .into(),
                        )
                    })?;

                    LedgerService::debit_wallet(conn, student.id, menu.price, PaymentKind::Mess)?;
                    MessBilling::PayPerMeal { price: menu.price }
                }
            };

            let saved = AttendanceRepository::insert(
                conn,
                NewStudentAttendance {
                    student_id: student.id,
                    building_id: student.building_id,
                    attendance_date: today,
                    attendance_time: now.time(),
                    kind: AttendanceKind::Mess,
                    hostel_action: None,
                    meal: Some(meal),
                },
            )?;

            Ok((saved, billing))
        })?;

        match billing {
            MessBilling::Subscription { remaining } => NotificationService::send_silently(
                state,
                student.user_id,
                "Meal Consumed",
                &format!(
                    "{} attendance marked. Remaining meals: {}",
                    meal, remaining
                ),
            ),
            MessBilling::PayPerMeal { price } => NotificationService::send_silently(
                state,
                student.user_id,
                "Mess Wallet Debited",
                &format!("₹{} deducted for {} attendance.", price, meal),
            ),
        }

        Ok(saved.into())
    }

    pub fn history(state: &AppState, username: &str) -> Result<Vec<AttendanceDto>, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student profile not found".into()))?;

        Ok(AttendanceRepository::list_by_student(&mut conn, student.id)?
            .into_iter()
            .map(AttendanceDto::from)
            .collect())
    }

    /// A given action can only be recorded once per staff member per day.
    pub fn mark_staff(
        state: &AppState,
        req: &StaffMarkRequest,
    ) -> Result<StaffAttendanceDto, ApiError> {
        let mut conn = state.conn()?;

        let staff = StaffRepository::find_by_id(&mut conn, req.staff_id)?
            .ok_or_else(|| ApiError::NotFound("Staff not found".into()))?;

        let now = Local::now();
        let today = now.date_naive();

        if AttendanceRepository::staff_action_exists(&mut conn, staff.id, today, req.action)? {
            return Err(ApiError::Conflict(format!(
                "Attendance already marked as {} for today",
                req.action
            )));
        }

        let saved = AttendanceRepository::insert_staff(
            &mut conn,
            NewStaffAttendance {
                staff_id: staff.id,
                building_id: req.building_id,
                attendance_date: today,
                attendance_time: now.time(),
                action: req.action,
            },
        )?;

        Ok(saved.into())
    }
}
