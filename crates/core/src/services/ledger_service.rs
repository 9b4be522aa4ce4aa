use diesel::PgConnection;

use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::student_repository::StudentRepository;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::enum_types::PaymentKind;
use hostelry_primitives::models::entities::payment::{NewPayment, Payment};

/// Wallet and fee adjustments on a student row. Every mutation appends the
/// matching signed Payment row in the same connection and returns it, so
/// callers that wrap these in a transaction get balance and ledger committed
/// together.
pub struct LedgerService;

impl LedgerService {
    /// Fails with InsufficientBalance when the wallet does not cover
    /// `amount`; the balance check and the debit are a single conditional
    /// update, so concurrent debits cannot overdraw.
    pub fn debit_wallet(
        conn: &mut PgConnection,
        student_id: uuid::Uuid,
        amount: i64,
        kind: PaymentKind,
    ) -> Result<Payment, ApiError> {
        if !StudentRepository::try_debit_wallet(conn, student_id, amount)? {
            let available = StudentRepository::find_by_id(conn, student_id)?
                .map(|s| s.wallet_balance)
                .unwrap_or(0);
            return Err(ApiError::InsufficientBalance(format!(
                "Insufficient wallet balance. Required: ₹{}, Available: ₹{}",
                amount, available
            )));
        }

        PaymentRepository::append(
            conn,
            NewPayment {
                student_id,
                amount: -amount,
                kind,
            },
        )
    }

    pub fn credit_wallet(
        conn: &mut PgConnection,
        student_id: uuid::Uuid,
        amount: i64,
        kind: PaymentKind,
    ) -> Result<Payment, ApiError> {
        StudentRepository::credit_wallet(conn, student_id, amount)?;
        PaymentRepository::append(
            conn,
            NewPayment {
                student_id,
                amount,
                kind,
            },
        )
    }

    pub fn credit_paid_fee(
        conn: &mut PgConnection,
        student_id: uuid::Uuid,
        amount: i64,
        kind: PaymentKind,
    ) -> Result<Payment, ApiError> {
        StudentRepository::add_to_paid_fee(conn, student_id, amount)?;
        PaymentRepository::append(
            conn,
            NewPayment {
                student_id,
                amount,
                kind,
            },
        )
    }
}
