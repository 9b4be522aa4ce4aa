use crate::models::entities::enum_types::StaffType;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::staff)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Staff {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub staff_type: StaffType,
    pub manages_mess: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::staff)]
pub struct NewStaff<'a> {
    pub user_id: Uuid,
    pub full_name: &'a str,
    pub staff_type: StaffType,
    pub manages_mess: bool,
}
