use crate::models::entities::enum_types::MealType;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::mess_plans)]
pub struct MessPlan {
    pub id: Uuid,
    pub name: String,
    pub per_meal_cost: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::mess_plans)]
pub struct NewMessPlan<'a> {
    pub name: &'a str,
    pub per_meal_cost: i64,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::mess_menu)]
pub struct MessMenu {
    pub id: Uuid,
    pub menu_date: NaiveDate,
    pub meal: MealType,
    pub items: String,
    pub price: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::mess_menu)]
pub struct NewMessMenu<'a> {
    pub menu_date: NaiveDate,
    pub meal: MealType,
    pub items: &'a str,
    pub price: i64,
}

/// A purchased meal bundle. `remaining_meals` is decremented on every mess
/// mark while the date window is active and never goes below zero.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::student_mess)]
#[diesel(belongs_to(crate::models::entities::student::Student))]
pub struct StudentMess {
    pub id: Uuid,
    pub student_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remaining_meals: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::student_mess)]
pub struct NewStudentMess {
    pub student_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remaining_meals: i32,
}
