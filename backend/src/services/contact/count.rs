//! `GET /api/contactus/count`.

use crate::db::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::{CountResponse, ErrorResponse};
use log::error;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let contacts = state.contacts.clone();
    match run_blocking(move || contacts.count()).await {
        Ok(count) => HttpResponse::Ok().json(CountResponse { count }),
        Err(e) => {
            error!("Error fetching contact submission count: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch count"))
        }
    }
}
