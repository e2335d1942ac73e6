use serde::Serialize;

#[derive(Serialize)]
pub struct BookingItem {
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

#[derive(Serialize)]
pub struct CreateBookingResponse {
    pub bid: u64,
}
