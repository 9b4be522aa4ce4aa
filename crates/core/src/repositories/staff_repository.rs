use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::staff::{NewStaff, Staff};
use hostelry_primitives::schema::staff;
use uuid::Uuid;

pub struct StaffRepository;

impl StaffRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Staff>, ApiError> {
        staff::table
            .find(id)
            .first::<Staff>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<Staff>, ApiError> {
        staff::table
            .filter(staff::user_id.eq(user_id))
            .first::<Staff>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Staff>, ApiError> {
        staff::table
            .order(staff::full_name.asc())
            .load::<Staff>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_staff: NewStaff) -> Result<Staff, ApiError> {
        diesel::insert_into(staff::table)
            .values(&new_staff)
            .get_result::<Staff>(conn)
            .map_err(ApiError::from)
    }
}
