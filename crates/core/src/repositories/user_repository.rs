use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::enum_types::UserRole;
use hostelry_primitives::models::entities::user::{NewUser, User};
use hostelry_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_username(
        conn: &mut PgConnection,
        username: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::username.eq(username))
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_role(conn: &mut PgConnection, role: UserRole) -> Result<Vec<User>, ApiError> {
        users::table
            .filter(users::role.eq(role))
            .filter(users::is_active.eq(true))
            .load::<User>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_ids(conn: &mut PgConnection, ids: &[Uuid]) -> Result<Vec<User>, ApiError> {
        users::table
            .filter(users::id.eq_any(ids))
            .load::<User>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => ApiError::Conflict("Username or email already taken".into()),
                other => ApiError::from(other),
            })
    }
}
