use chrono::Utc;
use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::complaint::{
    Complaint, ComplaintAction, NewComplaint, NewComplaintAction,
};
use hostelry_primitives::models::entities::enum_types::ComplaintStatus;
use hostelry_primitives::schema::{complaint_actions, complaints};
use uuid::Uuid;

pub struct ComplaintRepository;

impl ComplaintRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Complaint>, ApiError> {
        complaints::table
            .find(id)
            .first::<Complaint>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, row: NewComplaint) -> Result<Complaint, ApiError> {
        diesel::insert_into(complaints::table)
            .values(&row)
            .get_result::<Complaint>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_student(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Vec<Complaint>, ApiError> {
        complaints::table
            .filter(complaints::student_id.eq(student_id))
            .order(complaints::created_at.desc())
            .load::<Complaint>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_building(
        conn: &mut PgConnection,
        building_id: Uuid,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<Complaint>, ApiError> {
        let mut query = complaints::table
            .filter(complaints::building_id.eq(building_id))
            .order(complaints::created_at.desc())
            .into_boxed();

        if let Some(status) = status {
            query = query.filter(complaints::status.eq(status));
        }

        query.load::<Complaint>(conn).map_err(ApiError::from)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        complaint_id: Uuid,
        status: ComplaintStatus,
        resolution_comment: Option<&str>,
    ) -> Result<Complaint, ApiError> {
        // an absent comment leaves any earlier comment in place
        match resolution_comment {
            Some(comment) => diesel::update(complaints::table.find(complaint_id))
                .set((
                    complaints::status.eq(status),
                    complaints::resolution_comment.eq(comment),
                    complaints::updated_at.eq(Utc::now()),
                ))
                .get_result::<Complaint>(conn)
                .map_err(ApiError::from),
            None => diesel::update(complaints::table.find(complaint_id))
                .set((
                    complaints::status.eq(status),
                    complaints::updated_at.eq(Utc::now()),
                ))
                .get_result::<Complaint>(conn)
                .map_err(ApiError::from),
        }
    }

    pub fn append_action(
        conn: &mut PgConnection,
        row: NewComplaintAction,
    ) -> Result<ComplaintAction, ApiError> {
        diesel::insert_into(complaint_actions::table)
            .values(&row)
            .get_result::<ComplaintAction>(conn)
            .map_err(ApiError::from)
    }

    pub fn actions_for(
        conn: &mut PgConnection,
        complaint_id: Uuid,
    ) -> Result<Vec<ComplaintAction>, ApiError> {
        complaint_actions::table
            .filter(complaint_actions::complaint_id.eq(complaint_id))
            .order(complaint_actions::action_time.asc())
            .load::<ComplaintAction>(conn)
            .map_err(ApiError::from)
    }
}
