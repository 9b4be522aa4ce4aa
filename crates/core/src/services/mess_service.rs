use chrono::{Days, Local};
use diesel::Connection;
use tracing::info;

use crate::app_state::AppState;
use crate::repositories::mess_repository::MessRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::ledger_service::LedgerService;
use crate::services::notification_service::NotificationService;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::dtos::mess_dto::{
    CreateMenuRequest, CreatePlanRequest, MenuDto, PlanDto, SubscribeRequest, SubscriptionDto,
};
use hostelry_primitives::models::entities::enum_types::PaymentKind;
use hostelry_primitives::models::entities::mess::{NewMessMenu, NewMessPlan, NewStudentMess};

/// Every subscription buys the same fixed bundle: 30 days worth of three
/// meals a day, independent of the chosen date window.
pub const SUBSCRIPTION_MEALS: i32 = 30 * 3;

/// Default subscription window length.
pub const DEFAULT_WINDOW_DAYS: u64 = 45;

pub fn subscription_cost(per_meal_cost: i64) -> i64 {
    SUBSCRIPTION_MEALS as i64 * per_meal_cost
}

pub struct MessService;

impl MessService {
    pub fn subscribe(
        state: &AppState,
        username: &str,
        req: &SubscribeRequest,
    ) -> Result<SubscriptionDto, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
        let plan = MessRepository::find_plan(&mut conn, req.plan_id)?
            .ok_or_else(|| ApiError::NotFound("Mess plan not found".into()))?;

        let start = req.start_date.unwrap_or_else(|| Local::now().date_naive());
        let end = req.end_date.unwrap_or_else(|| {
            start
                .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
                .expect("subscription end date in range")
        });

        let total_cost = subscription_cost(plan.per_meal_cost);

        let saved = conn.transaction::<_, ApiError, _>(|conn| {
            // the full bundle cost is debited up front
            LedgerService::debit_wallet(conn, student.id, total_cost, PaymentKind::Mess)?;

            MessRepository::create_subscription(
                conn,
                NewStudentMess {
                    student_id: student.id,
                    plan_id: plan.id,
                    start_date: start,
                    end_date: end,
                    remaining_meals: SUBSCRIPTION_MEALS,
                },
            )
        })?;

        info!(student_id = %student.id, plan = %plan.name, "mess subscription purchased");

        NotificationService::send_silently(
            state,
            student.user_id,
            "Mess Plan Subscribed",
            &format!(
                "Subscribed to {}. ₹{} deducted. You have {} meals.",
                plan.name, total_cost, SUBSCRIPTION_MEALS
            ),
        );

        Ok(saved.into())
    }

    pub fn subscription(
        state: &AppState,
        username: &str,
    ) -> Result<Option<SubscriptionDto>, ApiError> {
        let mut conn = state.conn()?;

        let user = UserRepository::find_by_username(&mut conn, username)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        let student = StudentRepository::find_by_user(&mut conn, user.id)?
            .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;

        Ok(MessRepository::latest_subscription(&mut conn, student.id)?.map(SubscriptionDto::from))
    }

    pub fn create_plan(state: &AppState, req: &CreatePlanRequest) -> Result<PlanDto, ApiError> {
        let mut conn = state.conn()?;
        let plan = MessRepository::create_plan(
            &mut conn,
            NewMessPlan {
                name: &req.name,
                per_meal_cost: req.per_meal_cost,
            },
        )?;
        Ok(plan.into())
    }

    pub fn list_plans(state: &AppState) -> Result<Vec<PlanDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(MessRepository::list_plans(&mut conn)?
            .into_iter()
            .map(PlanDto::from)
            .collect())
    }

    pub fn create_menu(state: &AppState, req: &CreateMenuRequest) -> Result<MenuDto, ApiError> {
        let mut conn = state.conn()?;
        let menu = MessRepository::create_menu(
            &mut conn,
            NewMessMenu {
                menu_date: req.menu_date.unwrap_or_else(|| Local::now().date_naive()),
                meal: req.meal,
                items: &req.items,
                price: req.price,
            },
        )?;
        Ok(menu.into())
    }

    pub fn todays_menus(state: &AppState) -> Result<Vec<MenuDto>, ApiError> {
        let mut conn = state.conn()?;
        Ok(
            MessRepository::menus_for_date(&mut conn, Local::now().date_naive())?
                .into_iter()
                .map(MenuDto::from)
                .collect(),
        )
    }
}
