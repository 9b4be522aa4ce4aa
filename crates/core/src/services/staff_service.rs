use tracing::info;

use crate::app_state::AppState;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::repositories::staff_repository::StaffRepository;
use crate::repositories::user_repository::UserRepository;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::attendance_dto::StaffAttendanceDto;
use hostelry_primitives::models::dtos::staff_dto::{AddStaffRequest, StaffDto};
use hostelry_primitives::models::entities::staff::NewStaff;

pub struct StaffService;

impl StaffService {
    /// Attaches a staff profile to an existing user account.
    pub fn add(state: &AppState, req: &AddStaffRequest) -> Result<StaffDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, &req.username)?
            .ok_or_else(|| ApiError::NotFound(format!("User not found: {}", req.username)))?;

        if StaffRepository::find_by_user(&mut conn, user.id)?.is_some() {
            return Err(ApiError::Conflict(format!(
                "A staff profile already exists for {}",
                user.username
            )));
        }

        let saved = StaffRepository::create(
            &mut conn,
            NewStaff {
                user_id: user.id,
                full_name: &user.full_name,
                staff_type: req.staff_type,
                manages_mess: req.manages_mess,
            },
        )?;

        info!(staff_id = %saved.id, staff_type = %saved.staff_type, "staff profile created");

        Ok(saved.into())
    }

    pub fn list(state: &AppState) -> Result<Vec<StaffDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(StaffRepository::list(&mut conn)?
            .into_iter()
            .map(StaffDto::from)
            .collect())
    }

    pub fn profile(state: &AppState, username: &str) -> Result<StaffDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let staff = StaffRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Staff profile not found".into()))?;

        Ok(staff.into())
    }

    pub fn attendance_history(
        state: &AppState,
        username: &str,
    ) -> Result<Vec<StaffAttendanceDto>, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let staff = StaffRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Staff profile not found".into()))?;

        Ok(AttendanceRepository::list_by_staff(&mut conn, staff.id)?
            .into_iter()
            .map(StaffAttendanceDto::from)
            .collect())
    }
}
