use crate::schema::instructor_accounts;
use chrono::NaiveDateTime;

#[derive(Insertable)]
#[table_name = "instructor_accounts"]
pub struct NewAccount {
    pub iid: u64,
    pub password: String,
    pub last_updated: NaiveDateTime,
}
