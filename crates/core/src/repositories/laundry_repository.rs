use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::enum_types::LaundryStatus;
use hostelry_primitives::models::entities::laundry::{LaundryBooking, NewLaundryBooking};
use hostelry_primitives::schema::laundry_bookings;
use uuid::Uuid;

pub struct LaundryRepository;

impl LaundryRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<LaundryBooking>, ApiError> {
        laundry_bookings::table
            .find(id)
            .first::<LaundryBooking>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        row: NewLaundryBooking,
    ) -> Result<LaundryBooking, ApiError> {
        diesel::insert_into(laundry_bookings::table)
            .values(&row)
            .get_result::<LaundryBooking>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_student(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Vec<LaundryBooking>, ApiError> {
        laundry_bookings::table
            .filter(laundry_bookings::student_id.eq(student_id))
            .order(laundry_bookings::created_at.desc())
            .load::<LaundryBooking>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_building(
        conn: &mut PgConnection,
        building_id: Uuid,
    ) -> Result<Vec<LaundryBooking>, ApiError> {
        laundry_bookings::table
            .filter(laundry_bookings::building_id.eq(building_id))
            .order(laundry_bookings::created_at.desc())
            .load::<LaundryBooking>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<LaundryBooking>, ApiError> {
        laundry_bookings::table
            .order(laundry_bookings::created_at.desc())
            .load::<LaundryBooking>(conn)
            .map_err(ApiError::from)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        booking_id: Uuid,
        status: LaundryStatus,
    ) -> Result<LaundryBooking, ApiError> {
        diesel::update(laundry_bookings::table.find(booking_id))
            .set(laundry_bookings::status.eq(status))
            .get_result::<LaundryBooking>(conn)
            .map_err(ApiError::from)
    }
}
