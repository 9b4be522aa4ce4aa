pub mod attendance_repository;
pub mod building_repository;
pub mod complaint_repository;
pub mod laundry_repository;
pub mod mess_repository;
pub mod notification_repository;
pub mod payment_repository;
pub mod staff_repository;
pub mod student_repository;
pub mod user_repository;
pub mod visitor_repository;
