pub mod admission_service;
pub mod attendance_service;
pub mod auth_service;
pub mod complaint_service;
pub mod laundry_service;
pub mod ledger_service;
pub mod mess_service;
pub mod notification_service;
pub mod payment_service;
pub mod staff_service;
pub mod visitor_service;
