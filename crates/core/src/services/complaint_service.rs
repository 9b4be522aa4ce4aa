use tracing::info;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::complaint_repository::ComplaintRepository;
use crate::repositories::staff_repository::StaffRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::complaint_dto::{
    ComplaintActionDto, ComplaintActionRequest, ComplaintDto, RaiseComplaintRequest,
    UpdateComplaintStatusRequest,
};
use hostelry_primitives::models::entities::complaint::{NewComplaint, NewComplaintAction};
use hostelry_primitives::models::entities::enum_types::ComplaintStatus;

pub struct ComplaintService;

impl ComplaintService {
    pub fn raise(
        state: &AppState,
        username: &str,
        req: &RaiseComplaintRequest,
    ) -> Result<ComplaintDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?.ok_or_else(|| {
            ApiError::NotFound(
                "Student profile not found. Please complete your registration.".into(),
            )
        })?;

        let building_id = student.building_id.ok_or_else(|| {
            ApiError::NotFound("Student is not assigned to any hostel building.".into())
        })?;

        let saved = ComplaintRepository::create(
            &mut conn,
            NewComplaint {
                student_id: student.id,
                building_id,
                category: req.category,
                description: &req.description,
                status: ComplaintStatus::Open,
            },
        )?;

        info!(complaint_id = %saved.id, student_id = %student.id, "complaint raised");

        Ok(saved.into())
    }

    pub fn by_student(state: &AppState, student_id: Uuid) -> Result<Vec<ComplaintDto>, ApiError> {
        let mut conn = state.conn()?;
        StudentRepository::find_by_id(&mut conn, student_id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        Ok(ComplaintRepository::list_by_student(&mut conn, student_id)?
            .into_iter()
            .map(ComplaintDto::from)
            .collect())
    }

    pub fn by_building(
        state: &AppState,
        building_id: Uuid,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<ComplaintDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(
            ComplaintRepository::list_by_building(&mut conn, building_id, status)?
                .into_iter()
                .map(ComplaintDto::from)
                .collect(),
        )
    }

    pub fn update_status(
        state: &AppState,
        complaint_id: Uuid,
        req: &UpdateComplaintStatusRequest,
    ) -> Result<ComplaintDto, ApiError> {
        let mut conn = state.conn()?;

        ComplaintRepository::find_by_id(&mut conn, complaint_id)?
            .ok_or_else(|| ApiError::NotFound("Complaint not found".into()))?;

        let saved = ComplaintRepository::update_status(
            &mut conn,
            complaint_id,
            req.status,
            req.resolution_comment.as_deref(),
        )?;

        if let Some(student) = StudentRepository::find_by_id(&mut conn, saved.student_id)? {
            NotificationService::send_silently(
                state,
                student.user_id,
                "Complaint Status Updated",
                &format!("Your complaint is now {}", saved.status),
            );
        }

        Ok(saved.into())
    }

    /// A staff member records the action they took; the student is told.
    pub fn take_action(
        state: &AppState,
        username: &str,
        req: &ComplaintActionRequest,
    ) -> Result<ComplaintActionDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let staff = StaffRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Staff profile not found".into()))?;
        let complaint = ComplaintRepository::find_by_id(&mut conn, req.complaint_id)?
            .ok_or_else(|| ApiError::NotFound("Complaint not found".into()))?;

        let saved = ComplaintRepository::append_action(
            &mut conn,
            NewComplaintAction {
                complaint_id: complaint.id,
                staff_id: staff.id,
                action_taken: &req.action_taken,
            },
        )?;

        if let Some(student) = StudentRepository::find_by_id(&mut conn, complaint.student_id)? {
            NotificationService::send_silently(
                state,
                student.user_id,
                "Action Taken on Complaint",
                &format!(
                    "Staff {} has taken action on your complaint: {}",
                    staff.full_name, req.action_taken
                ),
            );
        }

        Ok(saved.into())
    }

    pub fn actions_for(
        state: &AppState,
        complaint_id: Uuid,
    ) -> Result<Vec<ComplaintActionDto>, ApiError> {
        let mut conn = state.conn()?;
        ComplaintRepository::find_by_id(&mut conn, complaint_id)?
            .ok_or_else(|| ApiError::NotFound("Complaint not found".into()))?;

        Ok(ComplaintRepository::actions_for(&mut conn, complaint_id)?
            .into_iter()
            .map(ComplaintActionDto::from)
            .collect())
    }
}
