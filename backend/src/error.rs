use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid department: {0:?}")]
    InvalidDepartment(String),

    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Blocking task error: {0}")]
    Blocking(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// HTTP status a handler should answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_)
            | CatalogError::InvalidDepartment(_)
            | CatalogError::DuplicateEmail(_)
            | CatalogError::Multipart(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<actix_multipart::MultipartError> for CatalogError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        CatalogError::Multipart(err.to_string())
    }
}

impl From<actix_web::error::BlockingError> for CatalogError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        CatalogError::Blocking(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
