use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateSemScheduleRequest {
    pub lab_id: u64,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub semester: String,
    pub year: i32,
    pub subject: String,
    pub iid: u64,
    pub student_year: String,
    pub student_section: String,
    pub student_course: String,
}
