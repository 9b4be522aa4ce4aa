use chrono::NaiveDate;
use diesel::prelude::*;
use hostelry_primitives::error::ApiError;
use hostelry_primitives::models::entities::enum_types::MealType;
use hostelry_primitives::models::entities::mess::{
    MessMenu, MessPlan, NewMessMenu, NewMessPlan, NewStudentMess, StudentMess,
};
use hostelry_primitives::schema::{mess_menu, mess_plans, student_mess};
use uuid::Uuid;

pub struct MessRepository;

impl MessRepository {
    pub fn find_plan(conn: &mut PgConnection, id: Uuid) -> Result<Option<MessPlan>, ApiError> {
        mess_plans::table
            .find(id)
            .first::<MessPlan>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_plans(conn: &mut PgConnection) -> Result<Vec<MessPlan>, ApiError> {
        mess_plans::table
            .order(mess_plans::per_meal_cost.asc())
            .load::<MessPlan>(conn)
            .map_err(ApiError::from)
    }

    pub fn create_plan(conn: &mut PgConnection, plan: NewMessPlan) -> Result<MessPlan, ApiError> {
        diesel::insert_into(mess_plans::table)
            .values(&plan)
            .get_result::<MessPlan>(conn)
            .map_err(ApiError::from)
    }

    pub fn menu_for(
        conn: &mut PgConnection,
        date: NaiveDate,
        meal: MealType,
    ) -> Result<Option<MessMenu>, ApiError> {
        mess_menu::table
            .filter(mess_menu::menu_date.eq(date))
            .filter(mess_menu::meal.eq(meal))
            .first::<MessMenu>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn menus_for_date(
        conn: &mut PgConnection,
        date: NaiveDate,
    ) -> Result<Vec<MessMenu>, ApiError> {
        mess_menu::table
            .filter(mess_menu::menu_date.eq(date))
            .load::<MessMenu>(conn)
            .map_err(ApiError::from)
    }

    pub fn create_menu(conn: &mut PgConnection, menu: NewMessMenu) -> Result<MessMenu, ApiError> {
        diesel::insert_into(mess_menu::table)
            .values(&menu)
            .get_result::<MessMenu>(conn)
            .map_err(ApiError::from)
    }

    /// The subscription whose window covers `date`, newest first if several.
    pub fn active_subscription(
        conn: &mut PgConnection,
        student_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<StudentMess>, ApiError> {
        student_mess::table
            .filter(student_mess::student_id.eq(student_id))
            .filter(student_mess::start_date.le(date))
            .filter(student_mess::end_date.ge(date))
            .order(student_mess::created_at.desc())
            .first::<StudentMess>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn latest_subscription(
        conn: &mut PgConnection,
        student_id: Uuid,
    ) -> Result<Option<StudentMess>, ApiError> {
        student_mess::table
            .filter(student_mess::student_id.eq(student_id))
            .order(student_mess::created_at.desc())
            .first::<StudentMess>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Conditional meal consumption: decrements only while meals remain, so
    /// the counter can never go negative under concurrent marks.
    pub fn try_consume_meal(
        conn: &mut PgConnection,
        subscription_id: Uuid,
    ) -> Result<bool, ApiError> {
        let affected = diesel::update(student_mess::table)
            .filter(student_mess::id.eq(subscription_id))
            .filter(student_mess::remaining_meals.gt(0))
            .set(student_mess::remaining_meals.eq(student_mess::remaining_meals - 1))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(affected == 1)
    }

    pub fn create_subscription(
        conn: &mut PgConnection,
        sub: NewStudentMess,
    ) -> Result<StudentMess, ApiError> {
        diesel::insert_into(student_mess::table)
            .values(&sub)
            .get_result::<StudentMess>(conn)
            .map_err(ApiError::from)
    }
}
