pub mod attendance_dto;
pub mod auth_dto;
pub mod complaint_dto;
pub mod laundry_dto;
pub mod mess_dto;
pub mod notification_dto;
pub mod payment_dto;
pub mod staff_dto;
pub mod student_dto;
pub mod visitor_dto;

pub use attendance_dto::*;
pub use auth_dto::*;
pub use complaint_dto::*;
pub use laundry_dto::*;
pub use mess_dto::*;
pub use notification_dto::*;
pub use payment_dto::*;
pub use staff_dto::*;
pub use student_dto::*;
pub use visitor_dto::*;
