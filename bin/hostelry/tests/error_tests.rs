use http::StatusCode;
use hostelry_primitives::error::{ApiError, AuthError};

fn status_of(err: ApiError) -> StatusCode {
    let (status, _): (StatusCode, String) = err.into();
    status
}

#[test]
fn taxonomy_maps_to_distinct_status_codes() {
    assert_eq!(
        status_of(ApiError::NotFound("Student not found".into())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(ApiError::Conflict("Attendance already marked".into())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_of(ApiError::InsufficientBalance("Insufficient wallet balance".into())),
        StatusCode::PAYMENT_REQUIRED
    );
    assert_eq!(
        status_of(ApiError::Unavailable("No rooms available".into())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_of(ApiError::Token("QR code is invalid or has expired".into())),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn role_mismatch_is_forbidden() {
    assert_eq!(
        status_of(ApiError::Auth(AuthError::RoleMismatch(
            "Role STUDENT is not permitted to perform this operation".into()
        ))),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        status_of(ApiError::Auth(AuthError::MissingHeader)),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn internal_errors_do_not_leak_details() {
    let (status, body): (StatusCode, String) =
        ApiError::Internal("connection string contains password".into()).into();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal server error");
}

#[test]
fn diesel_not_found_becomes_not_found() {
    let err = ApiError::from(diesel::result::Error::NotFound);
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}
