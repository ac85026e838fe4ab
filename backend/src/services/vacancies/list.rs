use crate::db::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::ErrorResponse;
use log::error;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let vacancies = state.vacancies.clone();
    match run_blocking(move || vacancies.list()).await {
        Ok(vacancies) => HttpResponse::Ok().json(vacancies),
        Err(e) => {
            error!("Error fetching job vacancies: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch vacancies"))
        }
    }
}
