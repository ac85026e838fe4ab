//! Contact message listing for `GET /api/contactus` and `GET /api/data`.

use crate::db::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use log::error;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let contacts = state.contacts.clone();
    match run_blocking(move || contacts.list()).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => {
            error!("Error fetching contact data: {}", e);
            HttpResponse::InternalServerError().body("Server error")
        }
    }
}
