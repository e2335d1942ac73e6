use serde::Deserialize;

#[derive(Deserialize)]
pub struct SubmitVerificationRequest {
    pub iid: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
pub struct InstructorLoginRequest {
    /// Instructor ID or email address.
    pub id_or_email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub iid: u64,
    pub password_old: String,
    pub password_new: String,
}
