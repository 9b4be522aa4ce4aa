mod common;

use common::fixtures::create_student_register_request;
use hostelry_primitives::models::dtos::auth_dto::RegisterRequest;
use hostelry_primitives::models::dtos::laundry_dto::LaundryBookingRequest;
use hostelry_primitives::models::dtos::payment_dto::CreateOrderRequest;
use hostelry_primitives::models::dtos::staff_dto::AddStaffRequest;
use hostelry_primitives::models::entities::enum_types::{StaffType, UserRole};
use serde_json::json;
use validator::Validate;

#[test]
fn register_request_accepts_valid_input() {
    let req = create_student_register_request();
    assert!(req.validate().is_ok());
}

#[test]
fn register_request_rejects_bad_email_and_short_password() {
    let mut req = create_student_register_request();
    req.email = "not-an-email".into();
    assert!(req.validate().is_err());

    let mut req = create_student_register_request();
    req.password = "short".into();
    assert!(req.validate().is_err());

    let mut req = create_student_register_request();
    req.username = "ab".into();
    assert!(req.validate().is_err());
}

#[test]
fn register_request_defaults_to_student_role() {
    let req = serde_json::from_value::<RegisterRequest>(json!({
        "username": "freshstudent",
        "email": "fresh@example.com",
        "password": "SecurePass123!",
        "full_name": "Fresh Student"
    }))
    .unwrap();

    assert_eq!(req.role, UserRole::Student);
}

#[test]
fn laundry_booking_request_bounds() {
    let req = serde_json::from_value::<LaundryBookingRequest>(json!({
        "clothes_count": 12,
        "amount": 150
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    let req = serde_json::from_value::<LaundryBookingRequest>(json!({
        "clothes_count": 0,
        "amount": 150
    }))
    .unwrap();
    assert!(req.validate().is_err());

    let req = serde_json::from_value::<LaundryBookingRequest>(json!({
        "clothes_count": 5,
        "amount": 0
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn add_staff_request_defaults_and_bounds() {
    let req = serde_json::from_value::<AddStaffRequest>(json!({
        "username": "mess.manager",
        "staff_type": "Mess"
    }))
    .unwrap();
    assert!(req.validate().is_ok());
    assert_eq!(req.staff_type, StaffType::Mess);
    // manages_mess defaults off unless set explicitly
    assert!(!req.manages_mess);

    let req = serde_json::from_value::<AddStaffRequest>(json!({
        "username": "ab",
        "staff_type": "Guard"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn order_request_requires_positive_amount() {
    let req = serde_json::from_value::<CreateOrderRequest>(json!({ "amount": 500 })).unwrap();
    assert!(req.validate().is_ok());

    let req = serde_json::from_value::<CreateOrderRequest>(json!({ "amount": 0 })).unwrap();
    assert!(req.validate().is_err());
}
