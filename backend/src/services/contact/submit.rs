use crate::db::run_blocking;
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::NewContact;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::ContactRequest;
use common::responses::{ErrorResponse, SubmissionResponse};
use log::{error, warn};

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    match submit_contact(state, payload.into_inner()).await {
        Ok(id) => HttpResponse::Ok().json(SubmissionResponse {
            message: "Thank you for contacting us!".to_string(),
            id,
        }),
        Err(CatalogError::Validation(reason)) => {
            warn!("Contact form rejected: {}", reason);
            HttpResponse::BadRequest().json(ErrorResponse::new("All fields are required"))
        }
        Err(e) => {
            error!("Error inserting data: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to insert data into the database"))
        }
    }
}

async fn submit_contact(state: web::Data<AppState>, request: ContactRequest) -> CatalogResult<i64> {
    let contact = NewContact::try_from(&request)?;
    run_blocking(move || state.contacts.submit(&contact)).await
}
