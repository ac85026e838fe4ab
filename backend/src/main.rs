mod config;
mod db;
mod error;
mod repositories;
mod services;
mod state;
mod storage;

#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::state::AppState;
use crate::storage::UploadStore;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::load().map_err(io::Error::other)?;
    env_logger::init_from_env(Env::default().default_filter_or(config.logging.level.as_str()));

    let pool = db::open_database(&config.database).map_err(io::Error::other)?;
    let uploads = UploadStore::open(&config.uploads.dir)?;
    info!("Storing uploads in {}", uploads.dir().display());

    let state = AppState::new(pool, uploads, &config.uploads);
    let json_limit = config.server.json_limit;
    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Server running on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(|cfg| services::configure(cfg, &state, json_limit))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
