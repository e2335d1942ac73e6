mod requests;
mod responses;

use actix_web::{get, post, put, web, HttpResponse};
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    error::Error,
    models::{
        instructors::InstructorData,
        verification_requests::{NewVerificationRequest, VERIF_STATUS_PENDING},
    },
    protocol::MessageResponse,
    DbPool,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_instructors)
        .service(submit_verification)
        .service(instructor_login)
        .service(update_password);
}

crate::api_funcs! {
    (get, list_instructors, "/instructors"),
    (post, submit_verification, "/verify/instructor", info: web::Json<SubmitVerificationRequest>),
    (post, instructor_login, "/instructor/login", info: web::Json<InstructorLoginRequest>),
    (put, update_password, "/instructor/update_password", info: web::Json<UpdatePasswordRequest>),
}

async fn list_instructors_impl(pool: web::Data<DbPool>) -> Result<Vec<InstructorItem>, Error> {
    use crate::schema::instructors;

    let conn = get_db_conn(&pool)?;
    let instructors = web::block(move || {
        instructors::table
            .order(instructors::iid.asc())
            .get_results::<InstructorData>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(instructors
        .into_iter()
        .map(|data| InstructorItem {
            iid: data.iid,
            email: data.email,
            first_name: data.first_name,
            middle_name: data.middle_name,
            last_name: data.last_name,
        })
        .collect())
}

async fn submit_verification_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SubmitVerificationRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::verification_requests;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        let now = Utc::now().naive_utc();
        let data = NewVerificationRequest {
            iid: info.iid,
            email: info.email,
            first_name: info.first_name,
            last_name: info.last_name,
            status: VERIF_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        };
        diesel::insert_into(verification_requests::table)
            .values(data)
            .execute(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(MessageResponse::new("Verification request submitted successfully"))
}

async fn instructor_login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<InstructorLoginRequest>,
) -> Result<InstructorLoginResponse, Error> {
    use crate::schema::{instructor_accounts, instructors};

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let (iid, email) = web::block(move || {
        // The identifier may be a numeric ID or an email address.
        let by_id = info.id_or_email.parse::<u64>().ok();
        let instructor: Option<InstructorData> = match by_id {
            Some(iid) => instructors::table
                .filter(
                    instructors::iid
                        .eq(iid)
                        .or(instructors::email.eq(&info.id_or_email)),
                )
                .first(&conn)
                .optional()?,
            None => instructors::table
                .filter(instructors::email.eq(&info.id_or_email))
                .first(&conn)
                .optional()?,
        };
        let instructor = match instructor {
            Some(instructor) => instructor,
            None => return Err(Error::NotFound("Instructor not found".to_string())),
        };

        let stored_password = instructor_accounts::table
            .filter(instructor_accounts::iid.eq(instructor.iid))
            .select(instructor_accounts::password)
            .first::<String>(&conn)
            .optional()?;
        let stored_password = match stored_password {
            Some(password) => password,
            None => {
                return Err(Error::NotFound(
                    "No account exists for this instructor".to_string(),
                ))
            }
        };

        let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
        if hashed_password != stored_password {
            return Err(Error::Unauthorized("Incorrect password provided".to_string()));
        }

        Ok((instructor.iid, instructor.email))
    })
    .await?;

    Ok(InstructorLoginResponse {
        iid,
        email,
        message: "Login successful".to_string(),
    })
}

async fn update_password_impl(
    pool: web::Data<DbPool>,
    info: web::Json<UpdatePasswordRequest>,
) -> Result<MessageResponse, Error> {
    use crate::schema::instructor_accounts;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, Error, _>(|| {
            let stored_password = instructor_accounts::table
                .filter(instructor_accounts::iid.eq(info.iid))
                .select(instructor_accounts::password)
                .first::<String>(&conn)
                .optional()?;
            let stored_password = match stored_password {
                Some(password) => password,
                None => {
                    return Err(Error::NotFound("Instructor account not found".to_string()))
                }
            };

            let hashed_password_old =
                format!("{:x}", Blake2b::digest(info.password_old.as_bytes()));
            if hashed_password_old != stored_password {
                return Err(Error::Unauthorized("Incorrect old password".to_string()));
            }

            let hashed_password_new =
                format!("{:x}", Blake2b::digest(info.password_new.as_bytes()));
            diesel::update(
                instructor_accounts::table.filter(instructor_accounts::iid.eq(info.iid)),
            )
            .set((
                instructor_accounts::password.eq(&hashed_password_new),
                instructor_accounts::last_updated.eq(Utc::now().naive_utc()),
            ))
            .execute(&conn)?;

            Ok(())
        })
    })
    .await?;

    Ok(MessageResponse::new("Password updated successfully"))
}
