use serde::Serialize;

#[derive(Serialize)]
pub struct InstructorItem {
    pub iid: u64,
    pub email: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
pub struct InstructorLoginResponse {
    pub iid: u64,
    pub email: String,
    pub message: String,
}
