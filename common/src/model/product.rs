use crate::model::department::Department;
use serde::{Deserialize, Serialize};

/// A catalog product as returned by `GET /products`.
///
/// `photo` and `specification` hold upload references. The server rewrites them
/// into absolute URLs before sending the list to clients; absent files are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub department: Department,
    pub photo: Option<String>,
    pub specification: Option<String>,
}
