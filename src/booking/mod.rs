mod requests;
mod responses;
mod utils;

use actix_web::{delete, get, post, put, web, HttpResponse};
use diesel::{prelude::*, sql_types};

use crate::{
    database::get_db_conn,
    error::Error,
    models::{
        booking_requests::{
            BookingRequest, NewBookingRequest, UpdateBooking, BOOKING_STATUS_CANCELLED,
            BOOKING_STATUS_PENDING,
        },
        sem_schedules::SemSchedule,
    },
    protocol::MessageResponse,
    DbPool,
};

use self::{requests::*, responses::*};

no_arg_sql_function!(last_insert_id, sql_types::Unsigned<sql_types::Bigint>);

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_bookings)
        .service(list_bookings_newest)
        .service(list_bookings_oldest)
        .service(create_booking)
        .service(cancel_booking)
        .service(view_booking)
        .service(update_booking)
        .service(delete_booking);
}

crate::api_funcs! {
    (get, list_bookings, "/booking-requests"),
    (get, list_bookings_newest, "/booking-requests/newest-to-oldest"),
    (get, list_bookings_oldest, "/booking-requests/oldest-to-newest"),
    (get, view_booking, "/booking-requests/{bid}", bid: web::Path<u64>),
    (post, create_booking, "/booking-requests", info: web::Json<CreateBookingRequest>),
    (put, update_booking, "/booking-requests/{bid}", bid: web::Path<u64>, info: web::Json<UpdateBookingRequest>),
    (put, cancel_booking, "/booking-requests/{bid}/cancel", bid: web::Path<u64>),
    (delete, delete_booking, "/booking-requests/{bid}", bid: web::Path<u64>),
}

fn booking_item(data: BookingRequest) -> BookingItem {
    BookingItem {
        bid: data.bid,
        iid: data.iid,
        lab_id: data.lab_id,
        date: data.date.to_string(),
        start_time: crate::utils::format_hhmm(&data.start_time),
        end_time: crate::utils::format_hhmm(&data.end_time),
        purpose: data.purpose,
        status: data.status,
        reject_reason: data.reject_reason,
    }
}

async fn list_bookings_impl(pool: web::Data<DbPool>) -> Result<Vec<BookingItem>, Error> {
    use crate::schema::booking_requests;

    let conn = get_db_conn(&pool)?;
    let bookings = web::block(move || {
        booking_requests::table
            .get_results::<BookingRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(bookings.into_iter().map(booking_item).collect())
}

async fn list_bookings_newest_impl(pool: web::Data<DbPool>) -> Result<Vec<BookingItem>, Error> {
    use crate::schema::booking_requests;

    let conn = get_db_conn(&pool)?;
    let bookings = web::block(move || {
        booking_requests::table
            .order(booking_requests::bid.desc())
            .get_results::<BookingRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(bookings.into_iter().map(booking_item).collect())
}

async fn list_bookings_oldest_impl(pool: web::Data<DbPool>) -> Result<Vec<BookingItem>, Error> {
    use crate::schema::booking_requests;

    let conn = get_db_conn(&pool)?;
    let bookings = web::block(move || {
        booking_requests::table
            .order(booking_requests::bid.asc())
            .get_results::<BookingRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(bookings.into_iter().map(booking_item).collect())
}

async fn view_booking_impl(
    pool: web::Data<DbPool>,
    bid: web::Path<u64>,
) -> Result<BookingItem, Error> {
    use crate::schema::booking_requests;

    let bid = bid.into_inner();
    let conn = get_db_conn(&pool)?;
    let booking = web::block(move || {
        booking_requests::table
            .filter(booking_requests::bid.eq(bid))
            .first::<BookingRequest>(&conn)
            .optional()
            .map_err(Error::from)
    })
    .await?;

    booking
        .map(booking_item)
        .ok_or_else(|| Error::NotFound("Booking request not found".to_string()))
}

/// New requests start out `Pending`. The requested window must not overlap
/// any committed semester slot on the same lab and weekday; the check and
/// the insert share one transaction.
async fn create_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CreateBookingRequest>,
) -> Result<CreateBookingResponse, Error> {
    use crate::schema::{booking_requests, sem_schedules};

    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;
    let start_time = crate::utils::parse_hhmm_str(&info.start_time)?;
    let end_time = crate::utils::parse_hhmm_str(&info.end_time)?;
    if start_time >= end_time {
        return Err(Error::BadRequest("Invalid time interval".to_string()));
    }

    let day = crate::utils::weekday_name(&date);
    let conn = get_db_conn(&pool)?;
    let bid = web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let committed = sem_schedules::table
                .filter(sem_schedules::lab_id.eq(info.lab_id))
                .filter(sem_schedules::day.eq(day))
                .get_results::<SemSchedule>(&conn)?;
            let clash = committed.iter().any(|sched| {
                utils::overlaps(start_time, end_time, sched.start_time, sched.end_time)
            });
            if clash {
                return Err(Error::Conflict(
                    "Requested slot overlaps a committed semester schedule".to_string(),
                ));
            }

            let data = NewBookingRequest {
                iid: info.iid,
                lab_id: info.lab_id,
                date,
                start_time,
                end_time,
                purpose: info.purpose,
                status: BOOKING_STATUS_PENDING.to_string(),
            };
            diesel::insert_into(booking_requests::table)
                .values(data)
                .execute(&conn)?;

            let bid = diesel::select(last_insert_id).get_result::<u64>(&conn)?;
            Ok(bid)
        })
    })
    .await?;

    Ok(CreateBookingResponse { bid })
}

/// Editing a request that already has a review decision forces it back to
/// `Pending` first, discarding the decision and any reject reason.
async fn update_booking_impl(
    pool: web::Data<DbPool>,
    bid: web::Path<u64>,
    info: web::Json<UpdateBookingRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::booking_requests;

    let bid = bid.into_inner();
    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;
    let start_time = crate::utils::parse_hhmm_str(&info.start_time)?;
    let end_time = crate::utils::parse_hhmm_str(&info.end_time)?;
    if start_time >= end_time {
        return Err(Error::BadRequest("Invalid time interval".to_string()));
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let status = booking_requests::table
                .filter(booking_requests::bid.eq(bid))
                .select(booking_requests::status)
                .first::<String>(&conn)
                .optional()?;
            let status = match status {
                Some(status) => status,
                None => return Err(Error::NotFound("Booking request not found".to_string())),
            };

            if utils::needs_review_reset(&status) {
                diesel::update(booking_requests::table.filter(booking_requests::bid.eq(bid)))
                    .set((
                        booking_requests::status.eq(BOOKING_STATUS_PENDING),
                        booking_requests::reject_reason.eq(None::<String>),
                    ))
                    .execute(&conn)?;
            }

            let data = UpdateBooking {
                iid: info.iid,
                lab_id: info.lab_id,
                date,
                start_time,
                end_time,
                purpose: info.purpose,
            };
            diesel::update(booking_requests::table.filter(booking_requests::bid.eq(bid)))
                .set(&data)
                .execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(MessageResponse::new("Booking request updated successfully"))
}

async fn cancel_booking_impl(
    pool: web::Data<DbPool>,
    bid: web::Path<u64>,
) -> Result<MessageResponse, Error> {
    use crate::schema::booking_requests;

    let bid = bid.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let status = booking_requests::table
                .filter(booking_requests::bid.eq(bid))
                .select(booking_requests::status)
                .first::<String>(&conn)
                .optional()?;
            let status = match status {
                Some(status) => status,
                None => return Err(Error::NotFound("Booking request not found".to_string())),
            };

            if !utils::is_cancellable(&status) {
                return Err(Error::Conflict(format!(
                    "Booking request is already {}",
                    status.to_lowercase()
                )));
            }

            diesel::update(booking_requests::table.filter(booking_requests::bid.eq(bid)))
                .set(booking_requests::status.eq(BOOKING_STATUS_CANCELLED))
                .execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(MessageResponse::new("Booking request cancelled successfully"))
}

async fn delete_booking_impl(
    pool: web::Data<DbPool>,
    bid: web::Path<u64>,
) -> Result<MessageResponse, Error> {
    use crate::schema::booking_requests;

    let bid = bid.into_inner();
    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        diesel::delete(booking_requests::table.filter(booking_requests::bid.eq(bid)))
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    if rows == 0 {
        return Err(Error::NotFound("Booking request not found".to_string()));
    }

    Ok(MessageResponse::new("Booking request deleted successfully"))
}
