use fake::faker::name::en::Name;
use fake::Fake;
use hostelry_primitives::models::dtos::auth_dto::RegisterRequest;
use hostelry_primitives::models::entities::enum_types::{Gender, UserRole};
use uuid::Uuid;

/// Create a student registration request with random identity data
pub fn create_student_register_request() -> RegisterRequest {
    RegisterRequest {
        username: format!("student{}", Uuid::new_v4().simple()),
        email: format!("test{}@example.com", Uuid::new_v4().simple()),
        phone_number: Some("9876543210".to_string()),
        password: "SecurePass123!".to_string(),
        full_name: Name().fake(),
        role: UserRole::Student,
        gender: Some(Gender::Female),
        building_id: None,
        room_number: None,
    }
}
