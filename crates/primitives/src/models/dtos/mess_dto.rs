use crate::models::entities::enum_types::MealType;
use crate::models::entities::mess::{MessMenu, MessPlan, StudentMess};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub plan_id: Uuid,
    /// Defaults to today.
    pub start_date: Option<NaiveDate>,
    /// Defaults to start + 45 days.
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remaining_meals: i32,
}

impl From<StudentMess> for SubscriptionDto {
    fn from(s: StudentMess) -> Self {
        Self {
            id: s.id,
            student_id: s.student_id,
            plan_id: s.plan_id,
            start_date: s.start_date,
            end_date: s.end_date,
            remaining_meals: s.remaining_meals,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 1))]
    pub per_meal_cost: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlanDto {
    pub id: Uuid,
    pub name: String,
    pub per_meal_cost: i64,
}

impl From<MessPlan> for PlanDto {
    fn from(p: MessPlan) -> Self {
        Self {
            id: p.id,
            name: p.name,
            per_meal_cost: p.per_meal_cost,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateMenuRequest {
    /// Defaults to today.
    pub menu_date: Option<NaiveDate>,
    pub meal: MealType,
    #[validate(length(min = 1))]
    pub items: String,
    #[validate(range(min = 1))]
    pub price: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuDto {
    pub id: Uuid,
    pub menu_date: NaiveDate,
    pub meal: MealType,
    pub items: String,
    pub price: i64,
}

impl From<MessMenu> for MenuDto {
    fn from(m: MessMenu) -> Self {
        Self {
            id: m.id,
            menu_date: m.menu_date,
            meal: m.meal,
            items: m.items,
            price: m.price,
        }
    }
}
