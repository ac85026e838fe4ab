//! # Product Removal Service
//!
//! Backend logic for `DELETE /deleteProduct/{id}`. Departments are searched in
//! their fixed order and the first product with the id is deleted, along with its
//! photo and specification files.

use crate::db::run_blocking;
use crate::error::{CatalogError, CatalogResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for the `DELETE /deleteProduct/{id}` endpoint.
///
/// # Returns
/// - `200 OK` with `Product deleted successfully`.
/// - `404 Not Found` when no department holds the id.
/// - `500 Internal Server Error` with `Error deleting product` otherwise.
pub async fn process(state: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    match delete_product(state, id.into_inner()).await {
        Ok(()) => HttpResponse::Ok().body("Product deleted successfully"),
        Err(CatalogError::NotFound) => HttpResponse::NotFound().body("Product not found"),
        Err(e) => {
            error!("Error deleting product: {}", e);
            HttpResponse::InternalServerError().body("Error deleting product")
        }
    }
}

async fn delete_product(state: web::Data<AppState>, id: i64) -> CatalogResult<()> {
    run_blocking(move || {
        for name in state.products.delete(id)? {
            state.uploads.remove(&name);
        }
        Ok(())
    })
    .await
}
