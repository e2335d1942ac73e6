use serde::Serialize;

#[derive(Serialize)]
pub struct AdminItem {
    pub aid: u64,
}

#[derive(Serialize)]
pub struct AdminLoginResponse {
    pub aid: u64,
    pub message: String,
}

// The pending listing predates review, so it carries no status column;
// the reviewed listings do.
#[derive(Serialize)]
pub struct PendingBookingItem {
    pub bid: u64,
    pub iid: u64,
    pub lab_id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}

#[derive(Serialize)]
pub struct ReviewedBookingItem {
    pub bid: u64,
    pub iid: u64,
    pub lab_id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
    pub status: String,
    pub reject_reason: Option<String>,
}
