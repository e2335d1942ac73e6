use crate::schema::sem_schedules;
use chrono::NaiveTime;

#[derive(Queryable)]
pub struct SemSchedule {
    pub sid: u64,
    pub lab_id: u64,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub semester: String,
    pub year: i32,
    pub subject: String,
    pub iid: u64,
    pub student_year: String,
    pub student_section: String,
    pub student_course: String,
}

#[derive(Insertable)]
#[table_name = "sem_schedules"]
pub struct NewSemSchedule {
    pub lab_id: u64,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub semester: String,
    pub year: i32,
    pub subject: String,
    pub iid: u64,
    pub student_year: String,
    pub student_section: String,
    pub student_course: String,
}

/// Row shape shared by the legacy `first_sem_scheds` and
/// `second_sem_scheds` tables. Times are stored as raw tokens there.
#[derive(Queryable)]
pub struct LegacySemSched {
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
