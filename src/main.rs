#[macro_use]
extern crate diesel;

mod admin;
mod booking;
mod database;
mod error;
mod instructor;
mod models;
mod protocol;
mod schedule;
mod schema;
mod utils;
mod verification;

use actix_web::{middleware, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .configure(admin::config)
                    .configure(instructor::config)
                    .configure(booking::config)
                    .configure(schedule::config)
                    .configure(verification::config),
            )
    })
    .bind(bind)?
    .run()
    .await
}
