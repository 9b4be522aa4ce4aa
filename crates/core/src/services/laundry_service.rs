use diesel::Connection;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::laundry_repository::LaundryRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::ledger_service::LedgerService;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::laundry_dto::{
    LaundryBookingDto, LaundryBookingRequest, UpdateLaundryStatusRequest,
};
use hostelry_primitives::models::entities::enum_types::{LaundryStatus, PaymentKind};
use hostelry_primitives::models::entities::laundry::NewLaundryBooking;

pub struct LaundryService;

impl LaundryService {
    /// Booking checks that the wallet covers the amount but charges nothing;
    /// the debit happens when the laundry is actually washed.
    pub fn book(
        state: &AppState,
        username: &str,
        req: &LaundryBookingRequest,
    ) -> Result<LaundryBookingDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        if student.wallet_balance < req.amount {
            return Err(ApiError::InsufficientBalance(format!(
                "Insufficient wallet balance. You need ₹{} but only have ₹{}",
                req.amount, student.wallet_balance
            )));
        }

        let saved = LaundryRepository::create(
            &mut conn,
            NewLaundryBooking {
                student_id: student.id,
                building_id: student.building_id,
                clothes_count: req.clothes_count,
                amount: req.amount,
                status: LaundryStatus::Booked,
            },
        )?;

        Ok(saved.into())
    }

    pub fn update_status(
        state: &AppState,
        booking_id: Uuid,
        req: &UpdateLaundryStatusRequest,
    ) -> Result<LaundryBookingDto, ApiError> {
        let mut conn = state.conn()?;

        let booking = LaundryRepository::find_by_id(&mut conn, booking_id)?
            .ok_or_else(|| ApiError::NotFound("Booking not found".into()))?;

        // the wallet is charged exactly once, on the first WASHED transition
        let charge = req.status == LaundryStatus::Washed
            && booking.status == LaundryStatus::Booked;

        let saved = conn.transaction::<_, ApiError, _>(|conn| {
            if charge {
                LedgerService::debit_wallet(
                    conn,
                    booking.student_id,
                    booking.amount,
                    PaymentKind::Laundry,
                )?;
            }
            LaundryRepository::update_status(conn, booking.id, req.status)
        })?;

        if let Some(student) = StudentRepository::find_by_id(&mut conn, saved.student_id)? {
            let mut message = format!("Your laundry booking is now {}", saved.status);
            if charge {
                message.push_str(&format!(
                    ". ₹{} has been deducted from your wallet.",
                    saved.amount
                ));
            }
            NotificationService::send_silently(
                state,
                student.user_id,
                "Laundry Status Updated",
                &message,
            );
        }

        Ok(saved.into())
    }

    pub fn history(state: &AppState, username: &str) -> Result<Vec<LaundryBookingDto>, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        Ok(LaundryRepository::list_by_student(&mut conn, student.id)?
            .into_iter()
            .map(LaundryBookingDto::from)
            .collect())
    }

    pub fn list_all(state: &AppState) -> Result<Vec<LaundryBookingDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(LaundryRepository::list_all(&mut conn)?
            .into_iter()
            .map(LaundryBookingDto::from)
            .collect())
    }

    pub fn by_building(
        state: &AppState,
        building_id: Uuid,
    ) -> Result<Vec<LaundryBookingDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(LaundryRepository::list_by_building(&mut conn, building_id)?
            .into_iter()
            .map(LaundryBookingDto::from)
            .collect())
    }
}
