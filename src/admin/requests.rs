use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateAdminRequest {
    pub aid: u64,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AdminLoginRequest {
    pub aid: u64,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateAdminRequest {
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub iid: u64,
    pub email: String,
    pub default_password: String,
}

#[derive(Deserialize)]
pub struct RejectBookingRequest {
    pub reason: String,
}
