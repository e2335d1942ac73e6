use serde::Serialize;

#[derive(Serialize)]
pub struct SemScheduleItem {
    pub sid: u64,
    pub lab_id: u64,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub semester: String,
    pub year: i32,
    pub subject: String,
    pub iid: u64,
}

#[derive(Serialize)]
pub struct LegacySemSchedItem {
    pub lab_id: u64,
    pub instructor_name: String,
    pub subject: String,
    pub semester: String,
    pub student_year: String,
    pub student_course: String,
    pub student_section: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}
