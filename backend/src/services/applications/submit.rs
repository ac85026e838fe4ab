use crate::db::run_blocking;
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::NewApplication;
use crate::state::AppState;
use crate::storage::read_form;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::ApplicationRequest;
use common::responses::{ErrorResponse, SubmissionResponse};
use log::{error, info, warn};

const APPLICATION_FILES: &[&str] = &["resume"];

pub async fn process(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    match submit_application(state, payload).await {
        Ok(id) => HttpResponse::Ok().json(SubmissionResponse {
            message: "Application submitted successfully!".to_string(),
            id,
        }),
        Err(CatalogError::Validation(reason)) => {
            warn!("Validation failed: {}", reason);
            HttpResponse::BadRequest().json(ErrorResponse::new("All fields are required"))
        }
        Err(CatalogError::DuplicateEmail(_)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Email already exists"))
        }
        Err(CatalogError::Multipart(reason)) => {
            warn!("Malformed application form: {}", reason);
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid form data"))
        }
        Err(e) => {
            error!("Error inserting application: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to insert data"))
        }
    }
}

/// Validates the form, stores the resume (if any), then inserts the application.
///
/// A resume stored for a submission that the database then rejects (duplicate
/// email, write failure) is not removed.
async fn submit_application(state: web::Data<AppState>, payload: Multipart) -> CatalogResult<i64> {
    let mut form = read_form(payload, APPLICATION_FILES, state.max_file_bytes).await?;
    let request = ApplicationRequest {
        firstname: form.text_owned("firstname"),
        lastname: form.text_owned("lastname"),
        email: form.text_owned("email"),
        phone: form.text_owned("phone"),
        address: form.text_owned("address"),
        city: form.text_owned("city"),
        country: form.text_owned("country"),
        message: form.text_owned("message"),
    };
    let application = NewApplication::try_from(&request)?;
    let resume = form.take_file("resume");
    info!(
        "Received application from {} (resume: {})",
        application.email,
        resume.as_ref().map_or("none", |r| r.original_name.as_str())
    );

    run_blocking(move || {
        let resume = state.uploads.save_optional(resume.as_ref())?;
        state.applications.submit(&application, resume.as_deref())
    })
    .await
}
