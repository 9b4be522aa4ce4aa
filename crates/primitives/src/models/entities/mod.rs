pub mod attendance;
pub mod building;
pub mod complaint;
pub mod enum_types;
pub mod laundry;
pub mod mess;
pub mod notification;
pub mod payment;
pub mod staff;
pub mod student;
pub mod user;
pub mod visitor;

pub use attendance::*;
pub use building::*;
pub use complaint::*;
pub use enum_types::*;
pub use laundry::*;
pub use mess::*;
pub use notification::*;
pub use payment::*;
pub use staff::*;
pub use student::*;
pub use user::*;
pub use visitor::*;
