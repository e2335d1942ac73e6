use crate::schema::booking_requests;
use chrono::{NaiveDate, NaiveTime};

#[derive(Queryable)]
pub struct BookingRequest {
    pub bid: u64,
    pub iid: u64,
    pub lab_id: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub status: String,
    pub reject_reason: Option<String>,
}

#[derive(Insertable)]
#[table_name = "booking_requests"]
pub struct NewBookingRequest {
    pub iid: u64,
    pub lab_id: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
    pub status: String,
}

/// Editable fields; status handling happens separately (edits force a
/// request back to review).
#[derive(AsChangeset)]
#[table_name = "booking_requests"]
pub struct UpdateBooking {
    pub iid: u64,
    pub lab_id: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub purpose: String,
}

pub const BOOKING_STATUS_PENDING: &str = "Pending";
pub const BOOKING_STATUS_APPROVED: &str = "Approved";
pub const BOOKING_STATUS_REJECTED: &str = "Rejected";
pub const BOOKING_STATUS_CANCELLED: &str = "Cancelled";
