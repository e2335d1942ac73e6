table! {
    admins (aid) {
        aid -> Unsigned<Bigint>,
        password -> Char,
    }
}

table! {
    booking_requests (bid) {
        bid -> Unsigned<Bigint>,
        iid -> Unsigned<Bigint>,
        lab_id -> Unsigned<Bigint>,
        date -> Date,
        start_time -> Time,
        end_time -> Time,
        purpose -> Varchar,
        status -> Char,
        reject_reason -> Nullable<Varchar>,
    }
}

table! {
    first_sem_scheds (lab_id, day, start_time) {
        lab_id -> Unsigned<Bigint>,
        instructor_name -> Varchar,
        subject -> Varchar,
        semester -> Char,
        student_year -> Varchar,
        student_course -> Varchar,
        student_section -> Varchar,
        day -> Char,
        start_time -> Varchar,
        end_time -> Varchar,
    }
}

table! {
    instructor_accounts (iid) {
        iid -> Unsigned<Bigint>,
        password -> Char,
        last_updated -> Datetime,
    }
}

table! {
    instructors (iid) {
        iid -> Unsigned<Bigint>,
        email -> Varchar,
        first_name -> Varchar,
        middle_name -> Varchar,
        last_name -> Varchar,
    }
}

table! {
    second_sem_scheds (lab_id, day, start_time) {
        lab_id -> Unsigned<Bigint>,
        instructor_name -> Varchar,
        subject -> Varchar,
        semester -> Char,
        student_year -> Varchar,
        student_course -> Varchar,
        student_section -> Varchar,
        day -> Char,
        start_time -> Varchar,
        end_time -> Varchar,
    }
}

table! {
    sem_schedules (sid) {
        sid -> Unsigned<Bigint>,
        lab_id -> Unsigned<Bigint>,
        day -> Char,
        start_time -> Time,
        end_time -> Time,
        semester -> Char,
        year -> Integer,
        subject -> Varchar,
        iid -> Unsigned<Bigint>,
        student_year -> Varchar,
        student_section -> Varchar,
        student_course -> Varchar,
    }
}

table! {
    verification_requests (rid) {
        rid -> Unsigned<Bigint>,
        iid -> Unsigned<Bigint>,
        email -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        status -> Char,
        created_at -> Datetime,
        updated_at -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(
    admins,
    booking_requests,
    first_sem_scheds,
    instructor_accounts,
    instructors,
    second_sem_scheds,
    sem_schedules,
    verification_requests,
);
