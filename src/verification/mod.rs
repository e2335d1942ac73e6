mod responses;

use actix_web::{get, web, HttpResponse};
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    error::Error,
    models::verification_requests::{
        VerificationRequest, VERIF_STATUS_APPROVED, VERIF_STATUS_PENDING,
    },
    DbPool,
};

use self::responses::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_verifications)
        .service(list_verifications_newest)
        .service(list_verifications_oldest)
        .service(pending_verifications)
        .service(approved_verifications);
}

crate::api_funcs! {
    (get, list_verifications, "/verification-requests"),
    (get, list_verifications_newest, "/verification-requests/newest-to-oldest"),
    (get, list_verifications_oldest, "/verification-requests/oldest-to-newest"),
    (get, pending_verifications, "/verification-requests/pending"),
    (get, approved_verifications, "/verification-requests/approved"),
}

fn instructor_name(data: &VerificationRequest) -> String {
    format!("{} {}", data.first_name, data.last_name)
}

fn verification_item(data: VerificationRequest) -> VerificationItem {
    VerificationItem {
        instructor_name: instructor_name(&data),
        rid: data.rid,
        iid: data.iid,
        email: data.email,
        status: data.status,
        created_at: crate::utils::format_time_str(&data.created_at),
        updated_at: crate::utils::format_time_str(&data.updated_at),
    }
}

async fn list_verifications_impl(pool: web::Data<DbPool>) -> Result<Vec<VerificationItem>, Error> {
    use crate::schema::verification_requests;

    let conn = get_db_conn(&pool)?;
    let requests = web::block(move || {
        verification_requests::table
            .get_results::<VerificationRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(requests.into_iter().map(verification_item).collect())
}

async fn list_verifications_newest_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<VerificationItem>, Error> {
    use crate::schema::verification_requests;

    let conn = get_db_conn(&pool)?;
    let requests = web::block(move || {
        verification_requests::table
            .order(verification_requests::rid.desc())
            .get_results::<VerificationRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(requests.into_iter().map(verification_item).collect())
}

async fn list_verifications_oldest_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<VerificationItem>, Error> {
    use crate::schema::verification_requests;

    let conn = get_db_conn(&pool)?;
    let requests = web::block(move || {
        verification_requests::table
            .order(verification_requests::rid.asc())
            .get_results::<VerificationRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(requests.into_iter().map(verification_item).collect())
}

async fn pending_verifications_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<VerificationSummaryItem>, Error> {
    verifications_with_status(&pool, VERIF_STATUS_PENDING).await
}

async fn approved_verifications_impl(
    pool: web::Data<DbPool>,
) -> Result<Vec<VerificationSummaryItem>, Error> {
    verifications_with_status(&pool, VERIF_STATUS_APPROVED).await
}

async fn verifications_with_status(
    pool: &web::Data<DbPool>,
    status: &'static str,
) -> Result<Vec<VerificationSummaryItem>, Error> {
    use crate::schema::verification_requests;

    let conn = get_db_conn(pool)?;
    let requests = web::block(move || {
        verification_requests::table
            .filter(verification_requests::status.eq(status))
            .order(verification_requests::rid.asc())
            .get_results::<VerificationRequest>(&conn)
            .map_err(Error::from)
    })
    .await?;

    Ok(requests
        .into_iter()
        .map(|data| VerificationSummaryItem {
            instructor_name: instructor_name(&data),
            rid: data.rid,
            iid: data.iid,
            email: data.email,
        })
        .collect())
}
