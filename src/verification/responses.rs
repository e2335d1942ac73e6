use serde::Serialize;

#[derive(Serialize)]
pub struct VerificationItem {
    pub rid: u64,
    pub iid: u64,
    pub email: String,
    pub instructor_name: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct VerificationSummaryItem {
    pub rid: u64,
    pub iid: u64,
    pub email: String,
    pub instructor_name: String,
}
