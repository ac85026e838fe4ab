use crate::db::ConnectionPool;
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::required;
use common::model::contact::ContactMessage;
use common::requests::ContactRequest;
use rusqlite::params;

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<&ContactRequest> for NewContact {
    type Error = CatalogError;

    fn try_from(request: &ContactRequest) -> CatalogResult<Self> {
        Ok(NewContact {
            name: required("name", request.name.as_deref())?,
            email: required("email", request.email.as_deref())?,
            subject: required("subject", request.subject.as_deref())?,
            message: required("message", request.message.as_deref())?,
        })
    }
}

#[derive(Clone)]
pub struct ContactRepository {
    pool: ConnectionPool,
}

impl ContactRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    pub fn submit(&self, contact: &NewContact) -> CatalogResult<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO contactus (name, email, subject, message) VALUES (?1, ?2, ?3, ?4)",
            params![contact.name, contact.email, contact.subject, contact.message],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn list(&self) -> CatalogResult<Vec<ContactMessage>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, email, subject, message, created_at FROM contactus ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ContactMessage {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                subject: row.get(3)?,
                message: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn count(&self) -> CatalogResult<i64> {
        let conn = self.pool.get()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM contactus", [], |row| row.get(0))?)
    }
}
