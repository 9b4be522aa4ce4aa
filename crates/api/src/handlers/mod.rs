pub mod attendance;
pub mod auth;
pub mod buildings;
pub mod complaints;
pub mod health;
pub mod laundry;
pub mod mess;
pub mod notifications;
pub mod payments;
pub mod staff;
pub mod students;
pub mod visitors;
