use crate::app_state::AppState;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::extract::State;
use chrono::{Duration, Utc};
use http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use hostelry_primitives::error::{ApiError, AuthError};
use hostelry_primitives::models::entities::enum_types::UserRole;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        Uuid::parse_str(&self.sub).map_err(|e| {
            error!("Invalid user ID in claims: {}", e);
            ApiError::Auth(AuthError::InvalidToken("Invalid user ID".to_string()))
        })
    }

    /// Role gate: e.g. only wardens and admins approve students.
    pub fn require_role(&self, allowed: &[UserRole]) -> Result<(), ApiError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(ApiError::Auth(AuthError::RoleMismatch(format!(
                "Role {} is not permitted to perform this operation",
                self.role
            ))))
        }
    }
}

/// Claims of the short-lived QR attendance token. Encodes the username, not
/// the user id, so scanners resolve the student at mark time.
#[derive(Debug, Serialize, Deserialize)]
struct QrClaims {
    sub: String, // username
    purpose: String,
    exp: i64,
    iat: i64,
    iss: String,
}

const QR_PURPOSE: &str = "attendance-qr";

pub struct SecurityConfig;

impl SecurityConfig {
    pub fn create_token(state: &AppState, user_id: Uuid, username: &str, role: UserRole) -> Result<String, ApiError> {
        let now = Utc::now();

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(state.config.jwt.expiration_hours)).timestamp(),
            iss: state.config.jwt.issuer.clone(),
            aud: state.config.jwt.audience.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());

        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(state.config.jwt.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            error!("JWT encoding error: {}", e);
            ApiError::Token("Token creation failed".into())
        })
    }

    fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
        let auth_header = headers
            .get("Authorization")
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidFormat)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidFormat)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::InvalidFormat);
        }

        Ok(token.to_string())
    }

    pub fn verify_token(state: &AppState, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[state.config.jwt.issuer.as_str()]);
        validation.set_audience(&[state.config.jwt.audience.as_str()]);
        validation.validate_exp = true;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(state.config.jwt.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken("Invalid or expired token".into()))
    }

    pub async fn auth_middleware(
        State(state): State<Arc<AppState>>,
        mut req: Request<axum::body::Body>,
        next: Next,
    ) -> Result<Response, Response> {
        let token = Self::extract_bearer_token(req.headers())
            .map_err(|e| ApiError::from(e).into_response())?;

        let claims =
            Self::verify_token(&state, &token).map_err(|e| ApiError::from(e).into_response())?;

        req.extensions_mut().insert(claims);
        Ok(next.run(req).await)
    }
}

/// Issues and validates the time-bounded signed tokens embedded in the
/// attendance QR codes. Rendering the code image is the client's concern.
pub struct QrTokenService;

impl QrTokenService {
    pub fn issue(state: &AppState, username: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = QrClaims {
            sub: username.to_string(),
            purpose: QR_PURPOSE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(state.config.jwt.qr_ttl_seconds)).timestamp(),
            iss: state.config.jwt.issuer.clone(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(state.config.jwt.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            error!("QR token encoding error: {}", e);
            ApiError::Token("QR token creation failed".into())
        })
    }

    /// Returns the username embedded in a still-valid QR token.
    pub fn validate(state: &AppState, token: &str) -> Result<String, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[state.config.jwt.issuer.as_str()]);
        validation.validate_exp = true;
        // QR tokens carry no audience claim
        validation.validate_aud = false;

        let claims = decode::<QrClaims>(
            token,
            &DecodingKey::from_secret(state.config.jwt.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| {
            ApiError::Token(
                "QR code is invalid or has expired. Please refresh the QR code on the student device."
                    .into(),
            )
        })?;

        if claims.purpose != QR_PURPOSE {
            return Err(ApiError::Token("QR code is invalid".into()));
        }

        Ok(claims.sub)
    }
}
