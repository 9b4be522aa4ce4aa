use chrono::Utc;
use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::enum_types::StudentStatus;
use hostelry_primitives::models::entities::student::{NewStudent, Student};
use hostelry_primitives::schema::students;
use uuid::Uuid;

pub struct StudentRepository;

impl StudentRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Student>, ApiError> {
        students::table
            .find(id)
            .first::<Student>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<Student>, ApiError> {
        students::table
            .filter(students::user_id.eq(user_id))
            .first::<Student>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_status(
        conn: &mut PgConnection,
        status: StudentStatus,
    ) -> Result<Vec<Student>, ApiError> {
        students::table
            .filter(students::status.eq(status))
            .order(students::created_at.asc())
            .load::<Student>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_building(
        conn: &mut PgConnection,
        building_id: Uuid,
    ) -> Result<Vec<Student>, ApiError> {
        students::table
            .filter(students::building_id.eq(building_id))
            .load::<Student>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_student: NewStudent) -> Result<Student, ApiError> {
        diesel::insert_into(students::table)
            .values(&new_student)
            .get_result::<Student>(conn)
            .map_err(ApiError::from)
    }

    /// Conditional debit: succeeds only when the balance covers the amount,
    /// so concurrent debits cannot drive the balance negative.
    pub fn try_debit_wallet(
        conn: &mut PgConnection,
        student_id: Uuid,
        amount: i64,
    ) -> Result<bool, ApiError> {
        let affected = diesel::update(students::table)
            .filter(students::id.eq(student_id))
            .filter(students::wallet_balance.ge(amount))
            .set((
                students::wallet_balance.eq(students::wallet_balance - amount),
                students::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(affected == 1)
    }

    pub fn credit_wallet(
        conn: &mut PgConnection,
        student_id: Uuid,
        amount: i64,
    ) -> Result<(), ApiError> {
        diesel::update(students::table)
            .filter(students::id.eq(student_id))
            .set((
                students::wallet_balance.eq(students::wallet_balance + amount),
                students::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn add_to_paid_fee(
        conn: &mut PgConnection,
        student_id: Uuid,
        amount: i64,
    ) -> Result<(), ApiError> {
        diesel::update(students::table)
            .filter(students::id.eq(student_id))
            .set((
                students::paid_fee.eq(students::paid_fee + amount),
                students::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    /// Approval transition; only fires while the student is still pending.
    pub fn approve(
        conn: &mut PgConnection,
        student_id: Uuid,
        building_id: Uuid,
        room_number: Option<&str>,
        total_fee: i64,
        emi_enabled: bool,
        emi_amount: i64,
    ) -> Result<bool, ApiError> {
        let affected = diesel::update(students::table)
            .filter(students::id.eq(student_id))
            .filter(students::status.eq(StudentStatus::Pending))
            .set((
                students::status.eq(StudentStatus::Approved),
                students::building_id.eq(building_id),
                students::room_number.eq(room_number),
                students::total_fee.eq(total_fee),
                students::emi_enabled.eq(emi_enabled),
                students::emi_amount.eq(emi_amount),
                students::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(affected == 1)
    }

    pub fn reject(conn: &mut PgConnection, student_id: Uuid) -> Result<bool, ApiError> {
        let affected = diesel::update(students::table)
            .filter(students::id.eq(student_id))
            .filter(students::status.eq(StudentStatus::Pending))
            .set((
                students::status.eq(StudentStatus::Rejected),
                students::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(affected == 1)
    }

    pub fn select_payment_method(
        conn: &mut PgConnection,
        student_id: Uuid,
        emi_enabled: bool,
        emi_amount: i64,
    ) -> Result<Student, ApiError> {
        diesel::update(students::table)
            .filter(students::id.eq(student_id))
            .set((
                students::emi_enabled.eq(emi_enabled),
                students::emi_amount.eq(emi_amount),
                students::payment_method_selected.eq(true),
                students::updated_at.eq(Utc::now()),
            ))
            .get_result::<Student>(conn)
            .map_err(ApiError::from)
    }
}
