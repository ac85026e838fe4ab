use crate::error::{CatalogError, CatalogResult};
use rusqlite::Connection;

const CURRENT_SCHEMA_VERSION: i32 = 1;

// One products table partitioned by the department column replaces a table per
// department. Application emails compare case-insensitively.
const INITIAL_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    department TEXT NOT NULL
        CHECK (department IN ('agriculture', 'espcontroller', 'gasmonitor', 'embeddedsystem')),
    photo TEXT,
    specification TEXT
);

CREATE INDEX IF NOT EXISTS idx_products_department ON products (department, id);

CREATE TABLE IF NOT EXISTS contactus (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    subject TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS applynow (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname TEXT NOT NULL,
    lastname TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE COLLATE NOCASE,
    phone TEXT NOT NULL,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    country TEXT NOT NULL,
    message TEXT NOT NULL,
    resume TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS job_vacancies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    job_role TEXT NOT NULL,
    job_description TEXT NOT NULL,
    no_of_vacancies INTEGER NOT NULL
);
";

/// Creates every table on a fresh database. Safe to call on each startup.
pub fn initialize_database(conn: &Connection) -> CatalogResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        conn.execute_batch(INITIAL_SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
            [CURRENT_SCHEMA_VERSION],
        )?;
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(CatalogError::Config(format!(
            "Schema version {} is newer than supported {}",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

fn get_schema_version(conn: &Connection) -> CatalogResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version')",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
