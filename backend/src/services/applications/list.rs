//! Application listing for `GET /api/applynow`, oldest first.

use crate::db::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use log::error;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let applications = state.applications.clone();
    match run_blocking(move || applications.list()).await {
        Ok(applications) => HttpResponse::Ok().json(applications),
        Err(e) => {
            error!("Error fetching apply form data: {}", e);
            HttpResponse::InternalServerError().body("Server error")
        }
    }
}
