use password_hash::{PasswordHash, PasswordVerifier};
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::repositories::staff_repository::StaffRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::SecurityConfig;
use crate::services::admission_service::AdmissionService;
use hostelry_primitives::error::{ApiError, AuthError};
use hostelry_primitives::models::dtos::auth_dto::{LoginRequest, LoginResponse};
use hostelry_primitives::models::entities::enum_types::UserRole;

pub struct AuthService;

impl AuthService {
    pub fn login(state: &AppState, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, &req.username)?
            .ok_or_else(|| invalid_credentials())?;

        if !user.is_active {
            warn!(username = %req.username, "login attempt on inactive account");
            return Err(ApiError::Auth(AuthError::InvalidToken(
                "Account is deactivated".into(),
            )));
        }

        Self::verify_password(&req.password, &user.password_hash)?;

        let token = SecurityConfig::create_token(state, user.id, &user.username, user.role)?;

        let manages_mess = match user.role {
            UserRole::Warden | UserRole::Staff => {
                StaffRepository::find_by_user(&mut conn, user.id)?
                    .map(|s| s.manages_mess)
                    .unwrap_or(false)
            }
            _ => false,
        };

        info!(username = %user.username, "user logged in");

        Ok(LoginResponse {
            token,
            username: user.username,
            role: user.role,
            user_id: user.id,
            manages_mess,
        })
    }

    fn verify_password(password: &str, stored_hash: &str) -> Result<(), ApiError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|_| invalid_credentials())?;

        AdmissionService::create_argon2()?
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| invalid_credentials())
    }
}

fn invalid_credentials() -> ApiError {
    ApiError::Auth(AuthError::InvalidToken(
        "Invalid username or password".into(),
    ))
}
