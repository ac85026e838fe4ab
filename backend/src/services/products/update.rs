//! # Product Update Service
//!
//! Backend logic for `PUT /updateProduct/{id}`.
//!
//! ## Workflow
//!
//! 1.  **Form Parsing**: same form and department check as product creation.
//!
//! 2.  **File Storage**: newly sent files are saved before the database is touched.
//!
//! 3.  **Overwrite**: every column of the product is replaced inside one
//!     transaction. The id is looked up only in the submitted department.
//!
//! 4.  **Cleanup**: files superseded by a new upload are removed once the update has
//!     committed. A reference cleared without a replacement keeps its file.

use super::form::ProductForm;
use super::rejected;
use crate::db::run_blocking;
use crate::error::{CatalogError, CatalogResult};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for the `PUT /updateProduct/{id}` endpoint.
///
/// # Arguments
/// * `id` - Product id from the URL path. A non-numeric id never reaches the handler.
/// * `payload` - The same multipart form as `POST /addProduct`.
///
/// # Returns
/// - `200 OK` with `Product updated successfully`.
/// - `400 Bad Request` for an unknown department or an unreadable form.
/// - `404 Not Found` when the department holds no product with this id.
/// - `500 Internal Server Error` with `Error updating product` otherwise.
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: Multipart,
) -> impl Responder {
    match update_product(state, id.into_inner(), payload).await {
        Ok(()) => HttpResponse::Ok().body("Product updated successfully"),
        Err(CatalogError::NotFound) => HttpResponse::NotFound().body("Product not found"),
        Err(e) => rejected(&e).unwrap_or_else(|| {
            error!("Error updating product: {}", e);
            HttpResponse::InternalServerError().body("Error updating product")
        }),
    }
}

/// Overwrites the product, then removes the files the new upload replaced.
async fn update_product(
    state: web::Data<AppState>,
    id: i64,
    payload: Multipart,
) -> CatalogResult<()> {
    let form = ProductForm::read(payload, state.max_file_bytes).await?;
    run_blocking(move || {
        let product = form.store(&state.uploads)?;
        let superseded = state.products.update(id, &product)?;
        for name in &superseded {
            state.uploads.remove(name);
        }
        Ok(())
    })
    .await
}
