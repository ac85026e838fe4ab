//! Job applications.
//!
//! One application per email address, enforced by the `UNIQUE COLLATE NOCASE`
//! constraint on `applynow.email`. The insert itself is the duplicate check, so two
//! concurrent submissions with the same address cannot both succeed.

use crate::db::ConnectionPool;
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::required;
use common::model::application::Application;
use common::requests::ApplicationRequest;
use log::warn;
use rusqlite::{ffi, params};

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub message: String,
}

impl TryFrom<&ApplicationRequest> for NewApplication {
    type Error = CatalogError;

    fn try_from(request: &ApplicationRequest) -> CatalogResult<Self> {
        Ok(NewApplication {
            firstname: required("firstname", request.firstname.as_deref())?,
            lastname: required("lastname", request.lastname.as_deref())?,
            email: required("email", request.email.as_deref())?,
            phone: required("phone", request.phone.as_deref())?,
            address: required("address", request.address.as_deref())?,
            city: required("city", request.city.as_deref())?,
            country: required("country", request.country.as_deref())?,
            message: required("message", request.message.as_deref())?,
        })
    }
}

#[derive(Clone)]
pub struct ApplicationRepository {
    pool: ConnectionPool,
}

impl ApplicationRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Stores the application, or fails with `DuplicateEmail` leaving the table untouched.
    pub fn submit(
        &self,
        application: &NewApplication,
        resume: Option<&str>,
    ) -> CatalogResult<i64> {
        let conn = self.pool.get()?;
        let inserted = conn.execute(
            "INSERT INTO applynow
                (firstname, lastname, email, phone, address, city, country, message, resume)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                application.firstname,
                application.lastname,
                application.email,
                application.phone,
                application.address,
                application.city,
                application.country,
                application.message,
                resume
            ],
        );

        match inserted {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                warn!("Duplicate email detected: {}", application.email);
                Err(CatalogError::DuplicateEmail(application.email.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn list(&self) -> CatalogResult<Vec<Application>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, firstname, lastname, email, phone, address, city, country, message,
                    resume, created_at
             FROM applynow ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Application {
                id: row.get(0)?,
                firstname: row.get(1)?,
                lastname: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                address: row.get(5)?,
                city: row.get(6)?,
                country: row.get(7)?,
                message: row.get(8)?,
                resume: row.get(9)?,
                created_at: row.get(10)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn count(&self) -> CatalogResult<i64> {
        let conn = self.pool.get()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM applynow", [], |row| row.get(0))?)
    }
}
