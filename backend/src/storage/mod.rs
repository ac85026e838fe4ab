pub mod form;
pub mod uploads;

pub use form::{read_form, UploadPart};
pub use uploads::UploadStore;
