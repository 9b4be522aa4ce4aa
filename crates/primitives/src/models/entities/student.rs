use crate::models::entities::enum_types::{Gender, StudentStatus};
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::students)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Student {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::students)]
pub struct NewStudent<'a> {
    pub user_id: Uuid,
    pub full_name: &'a str,
    pub gender: Option<Gender>,
    pub status: StudentStatus,
    pub building_id: Option<Uuid>,
    pub room_number: Option<&'a str>,
    pub wallet_balance: i64,
    pub total_fee: i64,
    pub paid_fee: i64,
    pub emi_enabled: bool,
    pub emi_amount: i64,
    pub payment_method_selected: bool,
}

impl<'a> NewStudent<'a> {
    /// A freshly registered student: money fields zeroed here, nowhere else.
    pub fn pending(user_id: Uuid, full_name: &'a str, gender: Option<Gender>) -> Self {
        Self {
            user_id,
            full_name,
            gender,
            status: StudentStatus::Pending,
            building_id: None,
            room_number: None,
            wallet_balance: 0,
            total_fee: 0,
            paid_fee: 0,
            emi_enabled: false,
            emi_amount: 0,
            payment_method_selected: false,
        }
    }
}
