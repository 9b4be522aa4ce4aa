use axum::response::{IntoResponse, Response};
use diesel::r2d2;
use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
    RoleMismatch(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "Missing Authorization header"),
            AuthError::InvalidFormat => write!(f, "Malformed Authorization header"),
            AuthError::InvalidToken(msg) => write!(f, "{}", msg),
            AuthError::RoleMismatch(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Validation(validator::ValidationErrors),
    NotFound(String),
    Conflict(String),
    InsufficientBalance(String),
    Unavailable(String),
    Token(String),
    Auth(AuthError),
    Gateway(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::NotFound(e) => write!(f, "{}", e),
            ApiError::Conflict(e) => write!(f, "{}", e),
            ApiError::InsufficientBalance(e) => write!(f, "{}", e),
            ApiError::Unavailable(e) => write!(f, "{}", e),
            ApiError::Token(e) => write!(f, "{}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Gateway(e) => write!(f, "Payment gateway error: {}", e),
            ApiError::BadRequest(e) => write!(f, "{}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => ApiError::NotFound("Record not found".into()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => ApiError::Conflict(format!("Duplicate record: {}", info.message())),
            other => ApiError::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            ),
            ApiError::DatabaseConnection(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database unavailable".to_string(),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InsufficientBalance(msg) => (StatusCode::PAYMENT_REQUIRED, msg),
            // capacity/meal-window misses are state conflicts, not outages
            ApiError::Unavailable(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Token(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Auth(e) => match e {
                AuthError::RoleMismatch(msg) => (StatusCode::FORBIDDEN, msg),
                other => (StatusCode::UNAUTHORIZED, other.to_string()),
            },
            ApiError::Gateway(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Payment gateway error: {}", msg),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}
