use crate::error::{CatalogError, CatalogResult};
use crate::repositories::NewProduct;
use crate::storage::{read_form, UploadPart, UploadStore};
use actix_multipart::Multipart;
use common::model::department::Department;

const PRODUCT_FILES: &[&str] = &["photo", "specification"];

/// The add/update product form after the department has been resolved.
///
/// Files are still in memory: an invalid department is rejected before anything
/// touches the disk or the database.
pub(super) struct ProductForm {
    name: String,
    description: String,
    department: Department,
    photo: Option<UploadPart>,
    specification: Option<UploadPart>,
}

impl ProductForm {
    pub(super) async fn read(payload: Multipart, max_file_bytes: usize) -> CatalogResult<Self> {
        let mut form = read_form(payload, PRODUCT_FILES, max_file_bytes).await?;

        let raw_department = form.text("department").unwrap_or_default();
        let department = Department::resolve(raw_department)
            .ok_or_else(|| CatalogError::InvalidDepartment(raw_department.to_string()))?;
        let name = form.text_owned("name").unwrap_or_default();
        let description = form.text_owned("description").unwrap_or_default();

        Ok(ProductForm {
            name,
            description,
            department,
            photo: form.take_file("photo"),
            specification: form.take_file("specification"),
        })
    }

    /// Saves the attached files and returns the row values. Blocking.
    pub(super) fn store(self, uploads: &UploadStore) -> CatalogResult<NewProduct> {
        let photo = uploads.save_optional(self.photo.as_ref())?;
        let specification = uploads.save_optional(self.specification.as_ref())?;
        Ok(NewProduct {
            name: self.name,
            description: self.description,
            department: self.department,
            photo,
            specification,
        })
    }
}
