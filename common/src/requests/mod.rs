use serde::{Deserialize, Serialize};

/// Body of `POST /api/contactus`.
///
/// Every field is optional at the wire level so that a missing field is reported
/// as a validation error (`400 {"error": "All fields are required"}`) instead of
/// a JSON decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Text fields of the `POST /api/applynow` multipart form. The resume travels as
/// a separate file part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub message: Option<String>,
}

/// Body of `POST /api/vacancies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyRequest {
    pub job_role: Option<String>,
    pub job_description: Option<String>,
    pub no_of_vacancies: Option<Count>,
}

/// A count as posted by a browser form: either a JSON number or the text of a
/// number input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(i64),
    Text(String),
}

impl Count {
    /// The integer value, `None` when the text is not a whole number.
    pub fn value(&self) -> Option<i64> {
        match self {
            Count::Number(n) => Some(*n),
            Count::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacancy_request_uses_camel_case_names() {
        let request: VacancyRequest = serde_json::from_str(
            r#"{"jobRole":"Firmware Engineer","jobDescription":"ESP32 work","noOfVacancies":2}"#,
        )
        .unwrap();
        assert_eq!(request.job_role.as_deref(), Some("Firmware Engineer"));
        assert_eq!(request.no_of_vacancies, Some(Count::Number(2)));
    }

    #[test]
    fn vacancy_count_accepts_number_input_text() {
        let request: VacancyRequest =
            serde_json::from_str(r#"{"jobRole":"Eng","jobDescription":"x","noOfVacancies":" 3 "}"#)
                .unwrap();
        assert_eq!(request.no_of_vacancies.and_then(|c| c.value()), Some(3));
        assert_eq!(Count::Text("two".into()).value(), None);
    }

    #[test]
    fn contact_request_tolerates_missing_fields() {
        let request: ContactRequest = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Asha"));
        assert!(request.email.is_none());
    }
}
