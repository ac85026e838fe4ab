//! Contact-us inbox endpoints.
//!
//! - `POST /api/contactus`: stores a message; all four fields are required.
//! - `GET /api/contactus`: every message, oldest first.
//! - `GET /api/contactus/count`: number of stored messages.
//! - `GET /api/data`: same rows as `GET /api/contactus`, kept for older clients.

mod count;
mod list;
mod submit;

use actix_web::web::{get, post, resource, scope};
use actix_web::{Resource, Scope};

const API_PATH: &str = "/api/contactus";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("", get().to(list::process))
        .route("/count", get().to(count::process))
}

pub fn data_route() -> Resource {
    resource("/api/data").route(get().to(list::process))
}
