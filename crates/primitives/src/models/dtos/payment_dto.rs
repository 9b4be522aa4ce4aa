use crate::models::entities::enum_types::PaymentKind;
use crate::models::entities::payment::Payment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ConfirmPaymentRequest {
    #[validate(length(min = 1))]
    pub order_id: String,
    #[validate(length(min = 1))]
    pub payment_id: String,
    #[validate(length(min = 1))]
    pub signature: String,
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Unspecified kind is treated as a hostel fee payment.
    pub kind: Option<PaymentKind>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CashPaymentRequest {
    pub student_id: Uuid,
    #[validate(range(min = 1))]
    pub amount: i64,
    pub kind: PaymentKind,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct WalletFeePaymentRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub amount: i64,
    pub kind: PaymentKind,
    pub paid_at: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            student_id: p.student_id,
            amount: p.amount,
            kind: p.kind,
            paid_at: p.paid_at,
        }
    }
}
