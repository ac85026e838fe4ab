//! # Product Listing Service
//!
//! Backend logic for `GET /products`. Products come back department by department.
//! Stored file names are turned into absolute URLs under the upload mount, using
//! the scheme and host the client used for this request.

use crate::db::run_blocking;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::product::Product;
use log::error;

/// Actix web handler for the `GET /products` endpoint.
///
/// # Returns
/// - `200 OK` with a JSON array of products. `photo` and `specification` are
///   absolute URLs or `null`.
/// - `500 Internal Server Error` with `Error fetching products`.
pub async fn process(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let base_url = upload_base_url(&req, &state.upload_url_prefix);
    let products = state.products.clone();

    match run_blocking(move || products.list()).await {
        Ok(products) => {
            let products: Vec<Product> = products
                .into_iter()
                .map(|product| with_public_urls(product, &base_url))
                .collect();
            HttpResponse::Ok().json(products)
        }
        Err(e) => {
            error!("Error fetching products: {}", e);
            HttpResponse::InternalServerError().body("Error fetching products")
        }
    }
}

/// `scheme://host/<prefix>` as seen by the client, honouring forwarded headers.
fn upload_base_url(req: &HttpRequest, prefix: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), prefix)
}

fn with_public_urls(mut product: Product, base_url: &str) -> Product {
    product.photo = public_url(product.photo, base_url);
    product.specification = public_url(product.specification, base_url);
    product
}

fn public_url(reference: Option<String>, base_url: &str) -> Option<String> {
    reference
        .filter(|name| !name.is_empty())
        .map(|name| format!("{}/{}", base_url, name))
}
