use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::payment::{NewPayment, Payment};
use hostelry_primitives::schema::payments;
use uuid::Uuid;

pub struct PaymentRepository;

impl PaymentRepository {
    /// Appends one signed ledger row. The ledger is the audit trail; rows
    /// are never updated.
    pub fn append(conn: &mut PgConnection, row: NewPayment) -> Result<Payment, ApiError> {
        diesel::insert_into(payments::table)
            .values(&row)
            .get_result::<Payment>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_student(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Vec<Payment>, ApiError> {
        payments::table
            .filter(payments::student_id.eq(student_id))
            .order(payments::paid_at.desc())
            .load::<Payment>(conn)
            .map_err(ApiError::from)
    }
}
