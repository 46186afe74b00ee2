#[macro_use]
extern crate diesel;

use actix_web::{middleware, web, App, HttpServer};

mod config;
mod db;
mod error;
mod models;
mod query;
mod routes;
mod schema;

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // one pool for the whole process, shared by every worker
    let pool = db::init_pool(&config.database_url).map_err(|e| {
        log::error!("failed to create database pool: {e}");
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    log::info!("Server listening at http://{}:{}", config.host, config.port);

    server.run().await
}
