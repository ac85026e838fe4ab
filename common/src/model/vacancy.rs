use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: i64,
    pub job_role: String,
    pub job_description: String,
    pub no_of_vacancies: i64,
}
