// Instructors are seeded externally; this service only reads them.
#[derive(Queryable)]
pub struct InstructorData {
    pub iid: u64,
    pub email: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}
