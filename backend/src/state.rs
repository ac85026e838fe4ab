//! Shared, clonable application state injected into every handler as `web::Data`.
//!
//! Everything a handler touches is passed in here at construction: the pooled
//! repositories, the upload store, and the upload settings. There is no global
//! connection or upload path.

use crate::config::UploadConfig;
use crate::db::ConnectionPool;
use crate::repositories::{
    ApplicationRepository, ContactRepository, ProductRepository, VacancyRepository,
};
use crate::storage::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductRepository,
    pub contacts: ContactRepository,
    pub applications: ApplicationRepository,
    pub vacancies: VacancyRepository,
    pub uploads: UploadStore,
    /// URL path prefix under which `uploads` is served, without a trailing slash.
    pub upload_url_prefix: String,
    pub max_file_bytes: usize,
}

impl AppState {
    pub fn new(pool: ConnectionPool, uploads: UploadStore, config: &UploadConfig) -> Self {
        Self {
            products: ProductRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool.clone()),
            applications: ApplicationRepository::new(pool.clone()),
            vacancies: VacancyRepository::new(pool),
            uploads,
            upload_url_prefix: normalize_prefix(&config.url_prefix),
            max_file_bytes: config.max_file_bytes,
        }
    }
}

// Serving uploads from the root would shadow every other route.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/uploads".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
