use crate::models::entities::enum_types::PaymentKind;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Append-only ledger row. Debits carry a negative amount, credits a
/// positive one; rows are never updated or deleted.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(belongs_to(crate::models::entities::student::Student))]
pub struct Payment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub amount: i64,
    pub kind: PaymentKind,
    pub paid_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment {
    pub student_id: Uuid,
    pub amount: i64,
    pub kind: PaymentKind,
}
