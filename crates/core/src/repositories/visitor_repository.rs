use chrono::{DateTime, Utc};
use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::enum_types::VisitorStatus;
use hostelry_primitives::models::entities::visitor::{NewVisitor, Visitor};
use hostelry_primitives::schema::{students, visitors};
use uuid::Uuid;

pub struct VisitorRepository;

impl VisitorRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Visitor>, ApiError> {
        visitors::table
            .find(id)
            .first::<Visitor>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, row: NewVisitor) -> Result<Visitor, ApiError> {
        diesel::insert_into(visitors::table)
            .values(&row)
            .get_result::<Visitor>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_student(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Vec<Visitor>, ApiError> {
        visitors::table
            .filter(visitors::student_id.eq(student_id))
            .order(visitors::visit_date.desc())
            .load::<Visitor>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_recent(conn: &mut PgConnection) -> Result<Vec<Visitor>, ApiError> {
        visitors::table
            .order(visitors::visit_date.desc())
            .limit(100)
            .load::<Visitor>(conn)
            .map_err(ApiError::from)
    }

    pub fn pending_by_building(
        conn: &mut PgConnection,
        building_id: Uuid,
    ) -> Result<Vec<Visitor>, ApiError> {
        visitors::table
            .inner_join(students::table)
            .filter(students::building_id.eq(building_id))
            .filter(visitors::status.eq(VisitorStatus::Pending))
            .select(visitors::all_columns)
            .load::<Visitor>(conn)
            .map_err(ApiError::from)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        visitor_id: Uuid,
        status: VisitorStatus,
        in_time: Option<DateTime<Utc>>,
        out_time: Option<DateTime<Utc>>,
    ) -> Result<Visitor, ApiError> {
        diesel::update(visitors::table.find(visitor_id))
            .set((
                visitors::status.eq(status),
                visitors::in_time.eq(in_time),
                visitors::out_time.eq(out_time),
            ))
            .get_result::<Visitor>(conn)
            .map_err(ApiError::from)
    }
}
