pub mod admins;
pub mod booking_requests;
pub mod instructor_accounts;
pub mod instructors;
pub mod sem_schedules;
pub mod verification_requests;
