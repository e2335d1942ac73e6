use actix_web::web;
use diesel::prelude::*;

use crate::{database::get_db_conn, error::Error, DbPool};

pub async fn assert_admin(pool: &web::Data<DbPool>, aid: u64) -> Result<(), Error> {
    use crate::schema::admins;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        admins::table
            .filter(admins::aid.eq(aid))
            .count()
            .get_result::<i64>(&conn)
            .map_err(Error::from)
    })
    .await?;

    if res == 0 {
        return Err(Error::NotFound("Admin not found".to_string()));
    }

    Ok(())
}
