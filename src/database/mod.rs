pub mod assert;

use actix_web::web;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;

use crate::{error::Error, DbPool};

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> Result<PooledConnection<ConnectionManager<MysqlConnection>>, Error> {
    Ok(pool.get()?)
}
