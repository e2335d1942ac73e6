use crate::schema::verification_requests;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct VerificationRequest {
    pub rid: u64,
    pub iid: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "verification_requests"]
pub struct NewVerificationRequest {
    pub iid: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub const VERIF_STATUS_PENDING: &str = "pending";
pub const VERIF_STATUS_APPROVED: &str = "approved";
