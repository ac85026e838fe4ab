//! HTTP facade. One sub-module per area, one file per endpoint.
//!
//! Handlers hold no business rules: they read the request, call a repository on
//! the blocking pool, and translate the outcome into a status code and a brief
//! text or JSON body. Internal error details are logged, never returned.

pub mod applications;
pub mod contact;
pub mod products;
pub mod vacancies;

use crate::state::AppState;
use actix_files::Files;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use common::responses::ErrorResponse;
use log::warn;

/// Registers application state, the uploads directory and every route.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState, json_limit: usize) {
    cfg.app_data(web::Data::new(state.clone()))
        .app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(json_rejected),
        )
        .service(Files::new(&state.upload_url_prefix, state.uploads.dir()))
        .service(contact::data_route())
        .service(contact::configure_routes())
        .service(applications::configure_routes())
        .service(vacancies::configure_routes())
        .configure(products::configure_routes);
}

/// Unreadable JSON bodies get the same `{"error": ...}` shape as a failed
/// validation. The decoder's message only goes to the log.
fn json_rejected(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected JSON body on {}: {}", req.path(), err);
    let status = err.status_code();
    let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "Payload too large"
    } else {
        "All fields are required"
    };
    let response = HttpResponse::build(status).json(ErrorResponse::new(message));
    InternalError::from_response(err, response).into()
}
