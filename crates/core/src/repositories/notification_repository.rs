use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::notification::{NewNotification, Notification};
use hostelry_primitives::schema::notifications;
use uuid::Uuid;

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn create(
        conn: &mut PgConnection,
        row: NewNotification,
    ) -> Result<Notification, ApiError> {
        diesel::insert_into(notifications::table)
            .values(&row)
            .get_result::<Notification>(conn)
            .map_err(ApiError::from)
    }

    pub fn unread_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, ApiError> {
        notifications::table
            .filter(notifications::user_id.eq(user_id))
            .filter(notifications::is_read.eq(false))
            .order(notifications::created_at.desc())
            .load::<Notification>(conn)
            .map_err(ApiError::from)
    }

    pub fn mark_read(
        conn: &mut PgConnection,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, ApiError> {
        let affected = diesel::update(notifications::table)
            .filter(notifications::id.eq(notification_id))
            .filter(notifications::user_id.eq(user_id))
            .set(notifications::is_read.eq(true))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(affected == 1)
    }
}
