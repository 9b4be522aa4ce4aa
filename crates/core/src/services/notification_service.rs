use diesel::PgConnection;
use tracing::warn;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::clients::push::PushPayload;
use crate::repositories::notification_repository::NotificationRepository;
use crate::repositories::user_repository::UserRepository;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::notification_dto::{BroadcastRequest, NotificationDto};
use hostelry_primitives::models::entities::enum_types::UserRole;
use hostelry_primitives::models::entities::notification::NewNotification;

pub struct NotificationService;

impl NotificationService {
    /// Persists the notification and enqueues its push delivery. The push is
    /// fire-and-forget; only the persistence step can fail here.
    pub fn send(
        state: &AppState,
        conn: &mut PgConnection,
        user_id: Uuid,
        title: &str,
        message: &str,
    ) -> Result<NotificationDto, ApiError> {
        let user = UserRepository::find_by_id(conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

        let saved = NotificationRepository::create(
            conn,
            NewNotification {
                user_id,
                title,
                message,
                is_read: false,
            },
        )?;

        let dto = NotificationDto::from(saved);
        state.push.enqueue(PushPayload {
            recipient: user.username,
            notification: dto.clone(),
        });

        Ok(dto)
    }

    /// Best-effort variant used by business flows: a failed dispatch is
    /// logged and discarded, never surfaced to the triggering operation.
    pub fn send_silently(state: &AppState, user_id: Uuid, title: &str, message: &str) {
        let result = state
            .conn()
            .and_then(|mut conn| Self::send(state, &mut conn, user_id, title, message));

        if let Err(e) = result {
            warn!(%user_id, "failed to send notification: {}", e);
        }
    }

    pub fn broadcast(state: &AppState, req: &BroadcastRequest) -> Result<usize, ApiError> {
        let mut conn = state.conn()?;

        let targets = if req.send_to_all {
            let role = req.target_role.unwrap_or(UserRole::Student);
            UserRepository::find_by_role(&mut conn, role)?
        } else {
            match &req.user_ids {
                Some(ids) if !ids.is_empty() => UserRepository::find_by_ids(&mut conn, ids)?,
                _ => Vec::new(),
            }
        };

        let mut delivered = 0;
        for user in targets {
            match Self::send(state, &mut conn, user.id, &req.title, &req.message) {
                Ok(_) => delivered += 1,
                Err(e) => warn!(user_id = %user.id, "broadcast delivery failed: {}", e),
            }
        }

        Ok(delivered)
    }

    pub fn unread(state: &AppState, user_id: Uuid) -> Result<Vec<NotificationDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(NotificationRepository::unread_by_user(&mut conn, user_id)?
            .into_iter()
            .map(NotificationDto::from)
            .collect())
    }

    pub fn mark_read(
        state: &AppState,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.conn()?;
        if !NotificationRepository::mark_read(&mut conn, notification_id, user_id)? {
            return Err(ApiError::NotFound("Notification not found".into()));
        }
        Ok(())
    }
}
