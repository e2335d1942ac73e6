use crate::schema::admins;

#[derive(Queryable, Insertable)]
#[table_name = "admins"]
pub struct AdminData {
    pub aid: u64,
    pub password: String,
}
