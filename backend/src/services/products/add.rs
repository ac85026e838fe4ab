//! # Product Creation Service
//!
//! Backend logic for `POST /addProduct`.
//!
//! ## Workflow
//!
//! 1.  **Form Parsing**: `ProductForm::read` buffers the multipart body and resolves
//!     the `department` field. An unknown department stops here, before any file is
//!     written.
//!
//! 2.  **File Storage**: the optional `photo` and `specification` parts are saved to
//!     the upload directory under generated names.
//!
//! 3.  **Insert**: the product row goes into its department's partition with the
//!     stored file names as references.

use super::form::ProductForm;
use super::rejected;
use crate::db::run_blocking;
use crate::error::CatalogResult;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for the `POST /addProduct` endpoint.
///
/// # Arguments
/// * `payload` - Multipart form with `name`, `description`, `department` and the
///   optional `photo` / `specification` files.
///
/// # Returns
/// - `201 Created` with `Product added successfully`.
/// - `400 Bad Request` for an unknown department or an unreadable form.
/// - `500 Internal Server Error` with `Error inserting product` otherwise.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    match add_product(state, payload).await {
        Ok(_) => HttpResponse::Created().body("Product added successfully"),
        Err(e) => rejected(&e).unwrap_or_else(|| {
            error!("Error inserting product: {}", e);
            HttpResponse::InternalServerError().body("Error inserting product")
        }),
    }
}

/// Reads the form, stores any files, then inserts the row. Files saved before a
/// failed insert are left in place.
async fn add_product(state: web::Data<AppState>, payload: Multipart) -> CatalogResult<i64> {
    let form = ProductForm::read(payload, state.max_file_bytes).await?;
    run_blocking(move || {
        let product = form.store(&state.uploads)?;
        state.products.add(&product)
    })
    .await
}
