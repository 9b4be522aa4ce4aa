use argon2::{Argon2, Params};
use diesel::Connection;
use password_hash::PasswordHasher;
use tracing::{error, info};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::building_repository::BuildingRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::auth_dto::{RegisterRequest, RegisterResponse};
use hostelry_primitives::models::dtos::student_dto::{
    ApproveStudentRequest, PaymentMethodRequest, StudentDto,
};
use hostelry_primitives::models::entities::enum_types::{StudentStatus, UserRole};
use hostelry_primitives::models::entities::student::NewStudent;
use hostelry_primitives::models::entities::user::NewUser;

/// Registration and the PENDING → APPROVED | REJECTED workflow.
pub struct AdmissionService;

impl AdmissionService {
    pub fn register(state: &AppState, req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        info!(username = %req.username, "registering new user");

        let mut conn = state.conn()?;
        let password_hash = Self::hash_password(&req.password)?;

        let user = conn.transaction::<_, ApiError, _>(|conn| {
            let user = UserRepository::create(
                conn,
                NewUser {
                    username: &req.username,
                    email: &req.email,
                    phone_number: req.phone_number.as_deref(),
                    password_hash: &password_hash,
                    full_name: &req.full_name,
                    role: req.role,
                    is_active: true,
                },
            )?;

            if user.role == UserRole::Student {
                let mut new_student = NewStudent::pending(user.id, &req.full_name, req.gender);
                new_student.room_number = req.room_number.as_deref();

                // preferred building is recorded now; the room itself is only
                // claimed at approval
                if let Some(building_id) = req.building_id {
                    if let Some(building) = BuildingRepository::find_by_id(conn, building_id)? {
                        new_student.building_id = Some(building.id);
                        new_student.total_fee = building.fee;
                    }
                }

                StudentRepository::create(conn, new_student)?;
            }

            Ok(user)
        })?;

        if user.role == UserRole::Student {
            Self::notify_wardens(state, &req.full_name);
        }

        info!(username = %user.username, role = %user.role, "user registered");

        Ok(RegisterResponse {
            user_id: user.id,
            username: user.username,
            role: user.role,
        })
    }

    fn notify_wardens(state: &AppState, student_name: &str) {
        let wardens = state
            .conn()
            .and_then(|mut conn| UserRepository::find_by_role(&mut conn, UserRole::Warden));

        match wardens {
            Ok(wardens) => {
                for warden in wardens {
                    NotificationService::send_silently(
                        state,
                        warden.id,
                        "New Student Registration",
                        &format!("New Student Registration: {}", student_name),
                    );
                }
            }
            Err(e) => error!("failed to load wardens for registration notice: {}", e),
        }
    }

    /// Claims a room in the target building and moves the student to
    /// APPROVED. The building fee overrides any fee recorded at registration.
    pub fn approve(
        state: &AppState,
        student_id: Uuid,
        req: &ApproveStudentRequest,
    ) -> Result<StudentDto, ApiError> {
        let mut conn = state.conn()?;

        let (student, building) = conn.transaction::<_, ApiError, _>(|conn| {
            let student = StudentRepository::find_by_id(conn, student_id)?
                .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

            if student.status != StudentStatus::Pending {
                return Err(ApiError::Conflict(
                    "Registration has already been processed".into(),
                ));
            }

            let building = BuildingRepository::find_by_id(conn, req.building_id)?
                .ok_or_else(|| ApiError::NotFound("Building not found".into()))?;

            if !BuildingRepository::try_claim_room(conn, building.id)? {
                return Err(ApiError::Unavailable(format!(
                    "No rooms available in {}",
                    building.name
                )));
            }

            if !StudentRepository::approve(
                conn,
                student.id,
                building.id,
                req.room_number.as_deref(),
                building.fee,
                req.emi_enabled,
                req.emi_amount,
            )? {
                // lost the race with another approval of the same student
                return Err(ApiError::Conflict(
                    "Registration has already been processed".into(),
                ));
            }

            let student = StudentRepository::find_by_id(conn, student.id)?
                .ok_or_else(|| ApiError::Internal("Approved student vanished".into()))?;

            Ok((student, building))
        })?;

        info!(student_id = %student.id, building = %building.name, "student approved");

        NotificationService::send_silently(
            state,
            student.user_id,
            "Registration Approved",
            &format!(
                "Welcome! Your registration has been approved. Assigned Room: {}",
                student.room_number.as_deref().unwrap_or("TBD")
            ),
        );

        Ok(student.into())
    }

    pub fn reject(state: &AppState, student_id: Uuid) -> Result<StudentDto, ApiError> {
        let mut conn = state.conn()?;

        let student = conn.transaction::<_, ApiError, _>(|conn| {
            let student = StudentRepository::find_by_id(conn, student_id)?
                .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

            if !StudentRepository::reject(conn, student.id)? {
                return Err(ApiError::Conflict(
                    "Registration has already been processed".into(),
                ));
            }

            StudentRepository::find_by_id(conn, student.id)?
                .ok_or_else(|| ApiError::Internal("Rejected student vanished".into()))
        })?;

        NotificationService::send_silently(
            state,
            student.user_id,
            "Registration Rejected",
            "Sorry, your hostel registration has been rejected. Please contact the warden for details.",
        );

        Ok(student.into())
    }

    pub fn by_status(
        state: &AppState,
        status: StudentStatus,
    ) -> Result<Vec<StudentDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(StudentRepository::find_by_status(&mut conn, status)?
            .into_iter()
            .map(StudentDto::from)
            .collect())
    }

    pub fn by_building(
        state: &AppState,
        building_id: Uuid,
    ) -> Result<Vec<StudentDto>, ApiError> {
        let mut conn = state.conn()?;
        BuildingRepository::find_by_id(&mut conn, building_id)?
            .ok_or_else(|| ApiError::NotFound("Building not found".into()))?;

        Ok(StudentRepository::find_by_building(&mut conn, building_id)?
            .into_iter()
            .map(StudentDto::from)
            .collect())
    }

    pub fn by_username(state: &AppState, username: &str) -> Result<StudentDto, ApiError> {
        let mut conn = state.conn()?;
        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
        Ok(student.into())
    }

    pub fn select_payment_method(
        state: &AppState,
        username: &str,
        req: &PaymentMethodRequest,
    ) -> Result<StudentDto, ApiError> {
        let mut conn = state.conn()?;
        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        let updated = StudentRepository::select_payment_method(
            &mut conn,
            student.id,
            req.emi_enabled,
            req.emi_amount.unwrap_or(0),
        )?;
        Ok(updated.into())
    }

    fn hash_password(password: &str) -> Result<String, ApiError> {
        let argon2 = Self::create_argon2()?;
        let salt = argon2::password_hash::SaltString::generate(&mut rand_core::OsRng);

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| {
                error!("registration: password hashing failed");
                ApiError::Internal("Credential processing failed".into())
            })
    }

    pub fn create_argon2() -> Result<Argon2<'static>, ApiError> {
        let params = Params::new(
            65536, // 64 MiB memory
            3,     // iterations
            1,     // parallelism
            None,
        )
        .map_err(|e| {
            error!("Argon2 params error: {}", e);
            ApiError::Internal("Encryption configuration error".to_string())
        })?;
        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}
