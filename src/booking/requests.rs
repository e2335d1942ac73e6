use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub iid: u64,
    pub lab_id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub iid: u64,
    pub lab_id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}
