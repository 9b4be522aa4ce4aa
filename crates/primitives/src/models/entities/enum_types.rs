use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
#[strum(serialize_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Warden,
    Guard,
    Staff,
    Student,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::Gender"]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::StudentStatus"]
pub enum StudentStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::BuildingType"]
pub enum BuildingType {
    Boys,
    Girls,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::AttendanceKind"]
pub enum AttendanceKind {
    Hostel,
    Mess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::HostelAction"]
pub enum HostelAction {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::MealType"]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::PaymentKind"]
pub enum PaymentKind {
    Hostel,
    Mess,
    Wallet,
    Laundry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::StaffType"]
pub enum StaffType {
    Warden,
    Guard,
    Mess,
    Cleaner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::VisitorStatus"]
pub enum VisitorStatus {
    Pending,
    CheckedIn,
    CheckedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::ComplaintStatus"]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::ComplaintCategory"]
pub enum ComplaintCategory {
    Electrical,
    Plumbing,
    Cleaning,
    Mess,
    Security,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, ToSchema)]
#[ExistingTypePath = "crate::schema::sql_types::LaundryStatus"]
pub enum LaundryStatus {
    Booked,
    Washed,
    Delivered,
}
