mod requests;
mod responses;
mod utils;

use actix_web::{delete, get, post, put, web, HttpResponse};
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    database::{assert, get_db_conn},
    error::Error,
    models::{
        admins::AdminData,
        booking_requests::{
            BookingRequest, BOOKING_STATUS_APPROVED, BOOKING_STATUS_PENDING,
            BOOKING_STATUS_REJECTED,
        },
        instructor_accounts::NewAccount,
        verification_requests::VERIF_STATUS_APPROVED,
    },
    protocol::MessageResponse,
    DbPool,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_admins)
        .service(create_admin)
        .service(admin_login)
        .service(verify_instructor)
        .service(create_instructor_account)
        .service(approve_booking)
        .service(reject_booking)
        .service(pending_bookings)
        .service(approved_bookings)
        .service(rejected_bookings)
        .service(update_admin)
        .service(delete_admin);
}

crate::api_funcs! {
    (get, list_admins, "/admin"),
    (post, create_admin, "/admin", info: web::Json<CreateAdminRequest>),
    (post, admin_login, "/login/admin", info: web::Json<AdminLoginRequest>),
    (put, verify_instructor, "/admin/verify/instructor/{rid}", rid: web::Path<u64>),
    (post, create_instructor_account, "/admin/create_instructor_account", info: web::Json<CreateAccountRequest>),
    (put, approve_booking, "/admin/approve-booking-request/{bid}", bid: web::Path<u64>),
    (put, reject_booking, "/admin/reject-booking-request/{bid}", bid: web::Path<u64>, info: web::Json<RejectBookingRequest>),
    (get, pending_bookings, "/admin/pending-booking-requests"),
    (get, approved_bookings, "/admin/approved-booking-requests"),
    (get, rejected_bookings, "/admin/rejected-booking-requests"),
    (put, update_admin, "/admin/{aid}", aid: web::Path<u64>, info: web::Json<UpdateAdminRequest>),
    (delete, delete_admin, "/admin/{aid}", aid: web::Path<u64>),
}

async fn list_admins_impl(pool: web::Data<DbPool>) -> Result<Vec<AdminItem>, Error> {
    use crate::schema::admins;

    let conn = get_db_conn(&pool)?;
    let ids = web::block(move || {
        admins::table
            .select(admins::aid)
            .order(admins::aid.asc())
            .get_results::<u64>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(ids.into_iter().map(|aid| AdminItem { aid }).collect())
}

async fn create_admin_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CreateAdminRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::admins;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let res = admins::table
                .filter(admins::aid.eq(info.aid))
                .count()
                .get_result::<i64>(&conn)?;
            if res > 0 {
                return Err(Error::Conflict("Admin ID already exists".to_string()));
            }

            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            let data = AdminData {
                aid: info.aid,
                password: hashed_password,
            };
            diesel::insert_into(admins::table).values(data).execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(MessageResponse::new("Admin created successfully"))
}

async fn admin_login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AdminLoginRequest>,
) -> Result<AdminLoginResponse, Error> {
    use crate::schema::admins;

    let info = info.into_inner();
    assert::assert_admin(&pool, info.aid).await?;

    let conn = get_db_conn(&pool)?;
    let aid = info.aid;
    let res = web::block(move || {
        let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
        admins::table
            .filter(admins::aid.eq(aid))
            .filter(admins::password.eq(&hashed_password))
            .count()
            .get_result::<i64>(&conn)
            .map_err(Error::from)
    })
    .await?;

    if res != 1 {
        return Err(Error::Unauthorized("Incorrect password provided".to_string()));
    }

    Ok(AdminLoginResponse {
        aid,
        message: "Log In Successful".to_string(),
    })
}

/// Approval is monotonic: a pending request becomes approved, an approved
/// one stays approved and reports success.
async fn verify_instructor_impl(
    pool: web::Data<DbPool>,
    rid: web::Path<u64>,
) -> Result<MessageResponse, Error> {
    use crate::schema::verification_requests;

    let rid = rid.into_inner();
    let conn = get_db_conn(&pool)?;
    let already_approved = web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let status = verification_requests::table
                .filter(verification_requests::rid.eq(rid))
                .select(verification_requests::status)
                .first::<String>(&conn)
                .optional()?;
            let status = match status {
                Some(status) => status,
                None => {
                    return Err(Error::NotFound("Verification request not found".to_string()))
                }
            };

            if utils::is_already_approved(&status) {
                return Ok(true);
            }

            diesel::update(
                verification_requests::table.filter(verification_requests::rid.eq(rid)),
            )
            .set((
                verification_requests::status.eq(VERIF_STATUS_APPROVED),
                verification_requests::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&conn)?;

            Ok(false)
        })
    })
    .await?;

    if already_approved {
        Ok(MessageResponse::new("Verification request is already approved"))
    } else {
        Ok(MessageResponse::new("Instructor verified successfully"))
    }
}

async fn create_instructor_account_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CreateAccountRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::{instructor_accounts, instructors};
    use diesel::result::DatabaseErrorKind;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let res = instructors::table
                .filter(instructors::iid.eq(info.iid))
                .filter(instructors::email.eq(&info.email))
                .count()
                .get_result::<i64>(&conn)?;
            if res == 0 {
                return Err(Error::NotFound(
                    "Instructor not found or credentials do not match".to_string(),
                ));
            }

            let hashed_password =
                format!("{:x}", Blake2b::digest(info.default_password.as_bytes()));
            let data = NewAccount {
                iid: info.iid,
                password: hashed_password,
                last_updated: Utc::now().naive_utc(),
            };
            match diesel::insert_into(instructor_accounts::table)
                .values(data)
                .execute(&conn)
            {
                Ok(_) => Ok(()),
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => Err(Error::Conflict(
                    "Instructor account already exists".to_string(),
                )),
                Err(err) => Err(err.into()),
            }
        })
    })
    .await?;

    Ok(MessageResponse::new("Instructor account created successfully"))
}

// Approval does not inspect the current status; it overwrites it.
async fn approve_booking_impl(
    pool: web::Data<DbPool>,
    bid: web::Path<u64>,
) -> Result<MessageResponse, Error> {
    use crate::schema::booking_requests;

    let bid = bid.into_inner();
    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        diesel::update(booking_requests::table.filter(booking_requests::bid.eq(bid)))
            .set((
                booking_requests::status.eq(BOOKING_STATUS_APPROVED),
                booking_requests::reject_reason.eq(None::<String>),
            ))
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    if rows == 0 {
        return Err(Error::NotFound("Booking request not found".to_string()));
    }

    Ok(MessageResponse::new("Booking request approved successfully"))
}

async fn reject_booking_impl(
    pool: web::Data<DbPool>,
    bid: web::Path<u64>,
    info: web::Json<RejectBookingRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::booking_requests;

    let bid = bid.into_inner();
    let reason = info.into_inner().reason;
    if reason.trim().is_empty() {
        return Err(Error::BadRequest("Reject reason must not be empty".to_string()));
    }

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        diesel::update(booking_requests::table.filter(booking_requests::bid.eq(bid)))
            .set((
                booking_requests::status.eq(BOOKING_STATUS_REJECTED),
                booking_requests::reject_reason.eq(Some(reason)),
            ))
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    if rows == 0 {
        return Err(Error::NotFound("Booking request not found".to_string()));
    }

    Ok(MessageResponse::new("Booking request rejected successfully"))
}

async fn pending_bookings_impl(pool: web::Data<DbPool>) -> Result<Vec<PendingBookingItem>, Error> {
    let bookings = bookings_with_status(&pool, BOOKING_STATUS_PENDING).await?;
    Ok(bookings
        .into_iter()
        .map(|data| PendingBookingItem {
            bid: data.bid,
            iid: data.iid,
            lab_id: data.lab_id,
            date: data.date.to_string(),
            start_time: crate::utils::format_hhmm(&data.start_time),
            end_time: crate::utils::format_hhmm(&data.end_time),
            purpose: data.purpose,
        })
        .collect())
}

async fn approved_bookings_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<ReviewedBookingItem>, Error> {
    let bookings = bookings_with_status(&pool, BOOKING_STATUS_APPROVED).await?;
    Ok(bookings.into_iter().map(reviewed_booking_item).collect())
}

async fn rejected_bookings_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<ReviewedBookingItem>, Error> {
    let bookings = bookings_with_status(&pool, BOOKING_STATUS_REJECTED).await?;
    Ok(bookings.into_iter().map(reviewed_booking_item).collect())
}

async fn bookings_with_status(
    pool: &web::Data<DbPool>,
    status: &'static str,
) -> Result<Vec<BookingRequest>, Error> {
    use crate::schema::booking_requests;

    let conn = get_db_conn(pool)?;
    let bookings = web::block(move || {
        booking_requests::table
            .filter(booking_requests::status.eq(status))
            .order(booking_requests::bid.asc())
            .get_results::<BookingRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(bookings)
}

fn reviewed_booking_item(data: BookingRequest) -> ReviewedBookingItem {
    ReviewedBookingItem {
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

async fn update_admin_impl(
    pool: web::Data<DbPool>,
    aid: web::Path<u64>,
    info: web::Json<UpdateAdminRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::admins;

    let aid = aid.into_inner();
    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
        diesel::update(admins::table.filter(admins::aid.eq(aid)))
            .set(admins::password.eq(&hashed_password))
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    if rows == 0 {
        return Err(Error::NotFound("Admin not found".to_string()));
    }

    Ok(MessageResponse::new("Admin updated successfully"))
}

async fn delete_admin_impl(
    pool: web::Data<DbPool>,
    aid: web::Path<u64>,
) -> Result<MessageResponse, Error> {
    use crate::schema::admins;

    let aid = aid.into_inner();
    assert::assert_admin(&pool, aid).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(admins::table.filter(admins::aid.eq(aid)))
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(MessageResponse::new("Admin deleted successfully"))
}
