use chrono::Utc;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::visitor_repository::VisitorRepository;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::visitor_dto::{
    UpdateVisitorStatusRequest, VisitorDto, VisitorRequest,
};
use hostelry_primitives::models::entities::enum_types::VisitorStatus;
use hostelry_primitives::models::entities::visitor::NewVisitor;

pub struct VisitorService;

impl VisitorService {
    /// A student's own visit request; sits PENDING until a guard acts on it.
    pub fn create_request(
        state: &AppState,
        username: &str,
        req: &VisitorRequest,
    ) -> Result<VisitorDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        let saved = VisitorRepository::create(
            &mut conn,
            NewVisitor {
                student_id: student.id,
                visitor_name: &req.visitor_name,
                contact_number: req.contact_number.as_deref(),
                purpose: req.purpose.as_deref(),
                status: VisitorStatus::Pending,
                visit_date: req.visit_date.unwrap_or_else(Utc::now),
                in_time: None,
            },
        )?;

        Ok(saved.into())
    }

    /// Guard logging a walk-in visitor: checked in on the spot.
    pub fn log(state: &AppState, req: &VisitorRequest) -> Result<VisitorDto, ApiError> {
        let mut conn = state.conn()?;

        let student_id = req
            .student_id
            .ok_or_else(|| ApiError::BadRequest("student_id is required".into()))?;
        StudentRepository::find_by_id(&mut conn, student_id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        let saved = VisitorRepository::create(
            &mut conn,
            NewVisitor {
                student_id,
                visitor_name: &req.visitor_name,
                contact_number: req.contact_number.as_deref(),
                purpose: req.purpose.as_deref(),
                status: VisitorStatus::CheckedIn,
                visit_date: req.visit_date.unwrap_or_else(Utc::now),
                in_time: Some(Utc::now()),
            },
        )?;

        Ok(saved.into())
    }

    pub fn update_status(
        state: &AppState,
        visitor_id: Uuid,
        req: &UpdateVisitorStatusRequest,
    ) -> Result<VisitorDto, ApiError> {
        let mut conn = state.conn()?;

        let visitor = VisitorRepository::find_by_id(&mut conn, visitor_id)?
            .ok_or_else(|| ApiError::NotFound("Visitor request not found".into()))?;

        let (in_time, out_time) = match req.status {
            VisitorStatus::CheckedIn => (Some(Utc::now()), visitor.out_time),
            VisitorStatus::CheckedOut => (visitor.in_time, Some(Utc::now())),
            VisitorStatus::Pending => (visitor.in_time, visitor.out_time),
        };

        let saved =
            VisitorRepository::update_status(&mut conn, visitor_id, req.status, in_time, out_time)?;

        if let Some(student) = StudentRepository::find_by_id(&mut conn, saved.student_id)? {
            NotificationService::send_silently(
                state,
                student.user_id,
                "Visitor Status Updated",
                &format!("Visitor {} is now {}", saved.visitor_name, saved.status),
            );
        }

        Ok(saved.into())
    }

    pub fn by_student(state: &AppState, student_id: Uuid) -> Result<Vec<VisitorDto>, ApiError> {
        let mut conn = state.conn()?;
        StudentRepository::find_by_id(&mut conn, student_id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        Ok(VisitorRepository::list_by_student(&mut conn, student_id)?
            .into_iter()
            .map(VisitorDto::from)
            .collect())
    }

    pub fn recent(state: &AppState) -> Result<Vec<VisitorDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(VisitorRepository::list_recent(&mut conn)?
            .into_iter()
            .map(VisitorDto::from)
            .collect())
    }

    pub fn pending_by_building(
        state: &AppState,
        building_id: Uuid,
    ) -> Result<Vec<VisitorDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(
            VisitorRepository::pending_by_building(&mut conn, building_id)?
                .into_iter()
                .map(VisitorDto::from)
                .collect(),
        )
    }
}
