use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::building::{HostelBuilding, NewHostelBuilding};
use hostelry_primitives::schema::hostel_buildings;
use uuid::Uuid;

pub struct BuildingRepository;

impl BuildingRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<HostelBuilding>, ApiError> {
        hostel_buildings::table
            .find(id)
            .first::<HostelBuilding>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<HostelBuilding>, ApiError> {
        hostel_buildings::table
            .order(hostel_buildings::name.asc())
            .load::<HostelBuilding>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        new_building: NewHostelBuilding,
    ) -> Result<HostelBuilding, ApiError> {
        diesel::insert_into(hostel_buildings::table)
            .values(&new_building)
            .get_result::<HostelBuilding>(conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => ApiError::Conflict("A building with that name already exists".into()),
                other => ApiError::from(other),
            })
    }

    /// Conditional room claim: decrements only while rooms remain, so two
    /// concurrent approvals cannot oversubscribe a building.
    pub fn try_claim_room(conn: &mut PgConnection, building_id: Uuid) -> Result<bool, ApiError> {
        let affected = diesel::update(hostel_buildings::table)
            .filter(hostel_buildings::id.eq(building_id))
            .filter(hostel_buildings::available_rooms.gt(0))
            .set(hostel_buildings::available_rooms.eq(hostel_buildings::available_rooms - 1))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(affected == 1)
    }
}
