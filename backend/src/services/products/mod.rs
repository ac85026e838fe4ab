//! # Product Service Module
//!
//! Catalog endpoints. They live at the root of the URL space rather than under a
//! common prefix, so they are registered on the `ServiceConfig` directly instead
//! of through a `Scope`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /addProduct`** (`add::process`): multipart form with `name`,
//!     `description`, `department` and optional `photo` / `specification` files.
//!     `201` on success, `400` for an unknown department.
//!
//! *   **`GET /products`** (`list::process`): every product of every department,
//!     department by department, with file references rewritten to absolute URLs.
//!
//! *   **`PUT /updateProduct/{id}`** (`update::process`): same form as add. Replaces
//!     every field; files that are not resent are cleared. `404` when the id does
//!     not exist in the submitted department.
//!
//! *   **`DELETE /deleteProduct/{id}`** (`delete::process`): removes the product and
//!     its files.

mod add;
mod delete;
mod form;
mod list;
mod update;

use crate::error::CatalogError;
use actix_web::web::{self, get, post, put};
use actix_web::HttpResponse;
use log::warn;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/addProduct", post().to(add::process))
        .route("/products", get().to(list::process))
        .route("/updateProduct/{id}", put().to(update::process))
        .route("/deleteProduct/{id}", web::delete().to(delete::process));
}

/// Response for errors caused by the request itself, `None` for everything else.
fn rejected(err: &CatalogError) -> Option<HttpResponse> {
    match err {
        CatalogError::InvalidDepartment(department) => {
            warn!("Invalid department selected: {:?}", department);
            Some(HttpResponse::BadRequest().body("Invalid department selected."))
        }
        CatalogError::Multipart(reason) => {
            warn!("Malformed product form: {}", reason);
            Some(HttpResponse::BadRequest().body("Invalid form data"))
        }
        _ => None,
    }
}
