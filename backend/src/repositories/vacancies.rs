use crate::db::ConnectionPool;
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::required;
use common::model::vacancy::Vacancy;
use common::requests::{Count, VacancyRequest};
use rusqlite::params;

#[derive(Debug, Clone, PartialEq)]
pub struct NewVacancy {
    pub job_role: String,
    pub job_description: String,
    pub no_of_vacancies: i64,
}

impl TryFrom<&VacancyRequest> for NewVacancy {
    type Error = CatalogError;

    fn try_from(request: &VacancyRequest) -> CatalogResult<Self> {
        let job_role = required("jobRole", request.job_role.as_deref())?;
        let job_description = required("jobDescription", request.job_description.as_deref())?;
        let no_of_vacancies = match request.no_of_vacancies.as_ref().and_then(Count::value) {
            Some(n) if n >= 0 => n,
            _ => {
                return Err(CatalogError::Validation(
                    "noOfVacancies must be a non-negative number".to_string(),
                ))
            }
        };
        Ok(NewVacancy {
            job_role,
            job_description,
            no_of_vacancies,
        })
    }
}

#[derive(Clone)]
pub struct VacancyRepository {
    pool: ConnectionPool,
}

impl VacancyRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    pub fn list(&self) -> CatalogResult<Vec<Vacancy>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, job_role, job_description, no_of_vacancies FROM job_vacancies ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Vacancy {
                id: row.get(0)?,
                job_role: row.get(1)?,
                job_description: row.get(2)?,
                no_of_vacancies: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn add(&self, vacancy: &NewVacancy) -> CatalogResult<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO job_vacancies (job_role, job_description, no_of_vacancies)
             VALUES (?1, ?2, ?3)",
            params![vacancy.job_role, vacancy.job_description, vacancy.no_of_vacancies],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    #[test]
    fn missing_or_negative_openings_fail_validation() {
        let mut request = VacancyRequest {
            job_role: Some("Firmware Engineer".into()),
            job_description: Some("ESP32 and STM32".into()),
            no_of_vacancies: None,
        };
        assert!(NewVacancy::try_from(&request).is_err());

        request.no_of_vacancies = Some(Count::Number(-1));
        assert!(NewVacancy::try_from(&request).is_err());

        request.no_of_vacancies = Some(Count::Text("many".into()));
        assert!(NewVacancy::try_from(&request).is_err());

        request.no_of_vacancies = Some(Count::Number(0));
        assert!(NewVacancy::try_from(&request).is_ok());

        request.no_of_vacancies = Some(Count::Text("4".into()));
        assert_eq!(NewVacancy::try_from(&request).unwrap().no_of_vacancies, 4);
    }

    #[test]
    fn added_vacancies_are_listed() {
        let (_dir, pool) = test_pool();
        let repo = VacancyRepository::new(pool);
        let vacancy = NewVacancy {
            job_role: "Field Technician".into(),
            job_description: "Install soil sensors".into(),
            no_of_vacancies: 3,
        };

        let id = repo.add(&vacancy).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].no_of_vacancies, 3);
    }
}
