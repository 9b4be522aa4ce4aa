use diesel::Connection;
use tracing::info;

use crate::app_state::AppState;
use crate::clients::gateway::GatewayClient;
use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::ledger_service::LedgerService;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::payment_dto::{
    CashPaymentRequest, ConfirmPaymentRequest, CreateOrderRequest, CreateOrderResponse, PaymentDto,
    WalletFeePaymentRequest,
};
use hostelry_primitives::models::entities::enum_types::PaymentKind;
use hostelry_primitives::models::entities::payment::NewPayment;
use hostelry_primitives::models::entities::student::Student;

pub struct PaymentService;

impl PaymentService {
    pub async fn create_order(
        state: &AppState,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        let order_id = GatewayClient::create_order(state, req.amount).await?;
        Ok(CreateOrderResponse {
            order_id,
            amount: req.amount,
        })
    }

    /// Confirms a gateway payment and applies it: hostel payments raise the
    /// paid fee, wallet and laundry payments top up the wallet, mess
    /// payments only land in the ledger.
    pub fn confirm(
        state: &AppState,
        username: &str,
        req: &ConfirmPaymentRequest,
    ) -> Result<PaymentDto, ApiError> {
        GatewayClient::verify_signature(state, &req.order_id, &req.payment_id, &req.signature)?;

        let mut conn = state.conn()?;
        let student = Self::student_for(&mut conn, username)?;

        // an unspecified kind counts toward the hostel fee
        let kind = req.kind.unwrap_or(PaymentKind::Hostel);

        let saved = conn.transaction::<_, ApiError, _>(|conn| match kind {
            PaymentKind::Hostel => {
                LedgerService::credit_paid_fee(conn, student.id, req.amount, kind)
            }
            PaymentKind::Wallet | PaymentKind::Laundry => {
                LedgerService::credit_wallet(conn, student.id, req.amount, kind)
            }
            // mess gateway payments land in the ledger only
            PaymentKind::Mess => PaymentRepository::append(
                conn,
                NewPayment {
                    student_id: student.id,
                    amount: req.amount,
                    kind,
                },
            ),
        })?;

        info!(student_id = %student.id, amount = req.amount, "gateway payment confirmed");

        Ok(saved.into())
    }

    pub fn add_cash_payment(
        state: &AppState,
        req: &CashPaymentRequest,
    ) -> Result<PaymentDto, ApiError> {
        let mut conn = state.conn()?;

        let student = StudentRepository::find_by_id(&mut conn, req.student_id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        let saved = conn.transaction::<_, ApiError, _>(|conn| match req.kind {
            PaymentKind::Hostel => {
                LedgerService::credit_paid_fee(conn, student.id, req.amount, req.kind)
            }
            PaymentKind::Wallet => {
                LedgerService::credit_wallet(conn, student.id, req.amount, req.kind)
            }
            _ => PaymentRepository::append(
                conn,
                NewPayment {
                    student_id: student.id,
                    amount: req.amount,
                    kind: req.kind,
                },
            ),
        })?;

        NotificationService::send_silently(
            state,
            student.user_id,
            "Cash Payment Received",
            &format!(
                "Cash Payment Received: ₹{} for {}",
                req.amount, req.kind
            ),
        );

        Ok(saved.into())
    }

    /// Moves money from the wallet to the paid fee: one −amount WALLET row
    /// and one +amount HOSTEL row, balance permitting.
    pub fn pay_fee_from_wallet(
        state: &AppState,
        username: &str,
        req: &WalletFeePaymentRequest,
    ) -> Result<PaymentDto, ApiError> {
        let mut conn = state.conn()?;
        let student = Self::student_for(&mut conn, username)?;

        let saved = conn.transaction::<_, ApiError, _>(|conn| {
            LedgerService::debit_wallet(conn, student.id, req.amount, PaymentKind::Wallet)?;
            LedgerService::credit_paid_fee(conn, student.id, req.amount, PaymentKind::Hostel)
        })?;

        NotificationService::send_silently(
            state,
            student.user_id,
            "Fee Payment Successful",
            &format!(
                "A fee payment of ₹{} has been processed from your wallet.",
                req.amount
            ),
        );

        Ok(saved.into())
    }

    pub fn history(state: &AppState, username: &str) -> Result<Vec<PaymentDto>, ApiError> {
        let mut conn = state.conn()?;
        let student = Self::student_for(&mut conn, username)?;

        Ok(PaymentRepository::list_by_student(&mut conn, student.id)?
            .into_iter()
            .map(PaymentDto::from)
            .collect())
    }

    fn student_for(
        conn: &mut crate::app_state::DbConn,
        username: &str,
    ) -> Result<Student, ApiError> {
        let user = UserRepository::find_by_username(conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        StudentRepository::find_by_user(conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))
    }
}
