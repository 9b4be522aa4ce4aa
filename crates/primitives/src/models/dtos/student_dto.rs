use crate::models::entities::enum_types::{Gender, StudentStatus};
use crate::models::entities::student::Student;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub gender: Option<Gender>,
    pub status: StudentStatus,
    pub building_id: Option<Uuid>,
    pub room_number: Option<String>,
    pub wallet_balance: i64,
    pub total_fee: i64,
    pub paid_fee: i64,
    pub emi_enabled: bool,
    pub emi_amount: i64,
    pub payment_method_selected: bool,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            full_name: s.full_name,
            gender: s.gender,
            status: s.status,
            building_id: s.building_id,
            room_number: s.room_number,
            wallet_balance: s.wallet_balance,
            total_fee: s.total_fee,
            paid_fee: s.paid_fee,
            emi_enabled: s.emi_enabled,
            emi_amount: s.emi_amount,
            payment_method_selected: s.payment_method_selected,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ApproveStudentRequest {
    pub building_id: Uuid,
    pub room_number: Option<String>,
    /// Accepted for compatibility; the building's fee always wins.
    #[validate(range(min = 0))]
    pub total_fee: Option<i64>,
    #[serde(default)]
    pub emi_enabled: bool,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub emi_amount: i64,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PaymentMethodRequest {
    pub emi_enabled: bool,
    #[validate(range(min = 0))]
    pub emi_amount: Option<i64>,
}
