use crate::db::run_blocking;
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::NewVacancy;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::VacancyRequest;
use common::responses::{ErrorResponse, SubmissionResponse};
use log::{error, info, warn};

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<VacancyRequest>,
) -> impl Responder {
    match add_vacancy(state, payload.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(SubmissionResponse {
            message: "Job vacancy added successfully".to_string(),
            id,
        }),
        Err(CatalogError::Validation(reason)) => {
            warn!("Vacancy rejected: {}", reason);
            HttpResponse::BadRequest().json(ErrorResponse::new("All fields are required"))
        }
        Err(e) => {
            error!("Error adding job vacancy: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to add job vacancy"))
        }
    }
}

async fn add_vacancy(state: web::Data<AppState>, request: VacancyRequest) -> CatalogResult<i64> {
    let vacancy = NewVacancy::try_from(&request)?;
    let id = run_blocking(move || state.vacancies.add(&vacancy)).await?;
    info!("Job vacancy {} added", id);
    Ok(id)
}
