mod requests;
mod responses;

use actix_web::{delete, get, post, web, HttpResponse};
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    error::Error,
    models::sem_schedules::{LegacySemSched, NewSemSchedule, SemSchedule},
    protocol::MessageResponse,
    DbPool,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_schedules)
        .service(first_semester_schedules)
        .service(second_semester_schedules)
        .service(create_schedule)
        .service(delete_schedule);
}

crate::api_funcs! {
    (get, list_schedules, "/semester-schedules"),
    (get, first_semester_schedules, "/semester-schedules/first-semester"),
    (get, second_semester_schedules, "/semester-schedules/second-semester"),
    (post, create_schedule, "/semester-schedules", info: web::Json<CreateSemScheduleRequest>),
    (delete, delete_schedule, "/semester-schedules/{sid}", sid: web::Path<u64>),
}

async fn list_schedules_impl(pool: web::Data<DbPool>) -> Result<Vec<SemScheduleItem>, Error> {
    use crate::schema::sem_schedules;

    let conn = get_db_conn(&pool)?;
    let schedules = web::block(move || {
        sem_schedules::table
            .order(sem_schedules::sid.asc())
            .get_results::<SemSchedule>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(schedules
        .into_iter()
        .map(|data| SemScheduleItem {
            sid: data.sid,
            lab_id: data.lab_id,
            day: data.day,
            start_time: crate::utils::format_hhmm(&data.start_time),
            end_time: crate::utils::format_hhmm(&data.end_time),
            semester: data.semester,
            year: data.year,
            subject: data.subject,
            iid: data.iid,
        })
        .collect())
}

async fn first_semester_schedules_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<LegacySemSchedItem>, Error> {
    use crate::schema::first_sem_scheds;

    let conn = get_db_conn(&pool)?;
    let schedules = web::block(move || {
        first_sem_scheds::table
            .get_results::<LegacySemSched>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(schedules.into_iter().map(legacy_sched_item).collect())
}

async fn second_semester_schedules_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<LegacySemSchedItem>, Error> {
    use crate::schema::second_sem_scheds;

    let conn = get_db_conn(&pool)?;
    let schedules = web::block(move || {
        second_sem_scheds::table
            .get_results::<LegacySemSched>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(schedules.into_iter().map(legacy_sched_item).collect())
}

fn legacy_sched_item(data: LegacySemSched) -> LegacySemSchedItem {
    LegacySemSchedItem {
        lab_id: data.lab_id,
        instructor_name: data.instructor_name,
        subject: data.subject,
        semester: data.semester,
        student_year: data.student_year,
        student_course: data.student_course,
        student_section: data.student_section,
        day: data.day,
        start_time: crate::utils::format_hhmm_lenient(&data.start_time),
        end_time: crate::utils::format_hhmm_lenient(&data.end_time),
    }
}

async fn create_schedule_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CreateSemScheduleRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::sem_schedules;

    let info = info.into_inner();
    crate::utils::assert_day_str(&info.day)?;
    let start_time = crate::utils::parse_hhmm_str(&info.start_time)?;
    let end_time = crate::utils::parse_hhmm_str(&info.end_time)?;
    if start_time >= end_time {
        return Err(Error::BadRequest("Invalid time interval".to_string()));
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        let data = NewSemSchedule {
            lab_id: info.lab_id,
            day: info.day,
            start_time,
            end_time,
            semester: info.semester,
            year: info.year,
            subject: info.subject,
            iid: info.iid,
            student_year: info.student_year,
            student_section: info.student_section,
            student_course: info.student_course,
        };
        diesel::insert_into(sem_schedules::table)
            .values(data)
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(MessageResponse::new("Semester schedule created successfully"))
}

async fn delete_schedule_impl(
    pool: web::Data<DbPool>,
    sid: web::Path<u64>,
) -> Result<MessageResponse, Error> {
    use crate::schema::sem_schedules;

    let sid = sid.into_inner();
    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        diesel::delete(sem_schedules::table.filter(sem_schedules::sid.eq(sid)))
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    if rows == 0 {
        return Err(Error::NotFound("Semester schedule not found".to_string()));
    }

    Ok(MessageResponse::new("Semester schedule deleted successfully"))
}
