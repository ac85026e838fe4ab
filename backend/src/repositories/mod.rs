//! Repository layer: explicit, parameterized SQL against fixed tables.
//!
//! Repositories are synchronous and hold a clone of the connection pool. HTTP
//! handlers call them through `db::run_blocking`.

pub mod applications;
pub mod contacts;
pub mod products;
pub mod vacancies;

pub use applications::{ApplicationRepository, NewApplication};
pub use contacts::{ContactRepository, NewContact};
pub use products::{NewProduct, ProductRepository};
pub use vacancies::{NewVacancy, VacancyRepository};

use crate::error::{CatalogError, CatalogResult};

/// Returns the trimmed-non-empty value of a required text field.
pub(crate) fn required(field: &str, value: Option<&str>) -> CatalogResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(CatalogError::Validation(format!("{} is required", field))),
    }
}
