use serde::{Deserialize, Serialize};

/// A job application. At most one exists per email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub message: String,
    /// Upload reference of the attached resume, if one was sent.
    pub resume: Option<String>,
    pub created_at: String,
}
