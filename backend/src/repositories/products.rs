//! # Product Repository
//!
//! Products are stored in one `products` table partitioned by the `department`
//! column. Every lookup is scoped to a partition, which keeps the behaviour of a
//! table-per-department layout:
//!
//! - listing visits partitions in [`Department::ALL`] order, each in `id` order;
//! - updating looks the id up in the *requested* department only, so moving a
//!   product to another department reports `NotFound`;
//! - deleting scans partitions in order and stops at the first match. A partition
//!   whose query fails is logged and skipped.
//!
//! File references handed back by `update` and `delete` are the caller's to remove
//! from the upload store once the database change is committed.

use crate::db::ConnectionPool;
use crate::error::{CatalogError, CatalogResult};
use common::model::department::Department;
use common::model::product::Product;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

/// Field values for an insert or a full overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub department: Department,
    pub photo: Option<String>,
    pub specification: Option<String>,
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: ConnectionPool,
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Inserts the product into its department's partition and returns its id.
    pub fn add(&self, product: &NewProduct) -> CatalogResult<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO products (name, description, department, photo, specification)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                product.name,
                product.description,
                product.department.as_str(),
                product.photo,
                product.specification
            ],
        )?;
        let id = conn.last_insert_rowid();
        info!("Product {} added to {}", id, product.department);
        Ok(id)
    }

    /// Every product, partition after partition.
    pub fn list(&self) -> CatalogResult<Vec<Product>> {
        let conn = self.pool.get()?;
        let mut products = Vec::new();
        for department in Department::ALL {
            products.extend(list_department(&conn, department)?);
        }
        Ok(products)
    }

    /// Overwrites every field of product `id` in `product.department`'s partition.
    ///
    /// File references are replaced unconditionally: a `None` photo or specification
    /// clears the stored reference. Returns the previous references that a newly
    /// supplied file superseded; cleared references without a replacement are not
    /// returned and their files stay on disk.
    pub fn update(&self, id: i64, product: &NewProduct) -> CatalogResult<Vec<String>> {
        let mut conn = self.pool.get()?;
        // Take the write lock up front so a concurrent commit waits on busy_timeout
        // instead of invalidating the read below.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let previous = find_files(&tx, id, product.department)?.ok_or(CatalogError::NotFound)?;

        let changed = tx.execute(
            "UPDATE products
             SET name = ?1, description = ?2, department = ?3, photo = ?4, specification = ?5
             WHERE id = ?6 AND department = ?3",
            params![
                product.name,
                product.description,
                product.department.as_str(),
                product.photo,
                product.specification,
                id
            ],
        )?;
        if changed == 0 {
            return Err(CatalogError::NotFound);
        }
        tx.commit()?;

        let (old_photo, old_specification) = previous;
        let mut superseded = Vec::new();
        if let (Some(old), Some(_)) = (old_photo, product.photo.as_ref()) {
            superseded.push(old);
        }
        if let (Some(old), Some(_)) = (old_specification, product.specification.as_ref()) {
            superseded.push(old);
        }
        info!("Product {} updated in {}", id, product.department);
        Ok(superseded)
    }

    /// Deletes the first product with `id` in partition scan order and returns the
    /// file references it held.
    ///
    /// The row goes before its files: callers remove the returned files only after
    /// this succeeds, so a failed delete leaves both the product and its files.
    pub fn delete(&self, id: i64) -> CatalogResult<Vec<String>> {
        let conn = self.pool.get()?;
        let (department, files) = scan_partitions(|department| {
            let Some(files) = find_files(&conn, id, department)? else {
                return Ok(None);
            };
            conn.execute(
                "DELETE FROM products WHERE id = ?1 AND department = ?2",
                params![id, department.as_str()],
            )?;
            Ok(Some(files))
        })
        .ok_or(CatalogError::NotFound)?;

        info!("Product {} deleted from {}", id, department);
        let (photo, specification) = files;
        Ok(photo.into_iter().chain(specification).collect())
    }
}

/// Visits partitions in order until `probe` reports a hit. A failing partition is
/// logged and the scan moves on to the next one.
fn scan_partitions<T, F>(mut probe: F) -> Option<(Department, T)>
where
    F: FnMut(Department) -> CatalogResult<Option<T>>,
{
    for department in Department::ALL {
        match probe(department) {
            Ok(Some(found)) => return Some((department, found)),
            Ok(None) => {}
            Err(e) => error!("Error deleting from {}: {}", department, e),
        }
    }
    None
}

fn list_department(conn: &Connection, department: Department) -> CatalogResult<Vec<Product>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, department, photo, specification
         FROM products WHERE department = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![department.as_str()], |row| row_to_product(row, department))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn find_files(
    conn: &Connection,
    id: i64,
    department: Department,
) -> CatalogResult<Option<(Option<String>, Option<String>)>> {
    let files = conn
        .query_row(
            "SELECT photo, specification FROM products WHERE id = ?1 AND department = ?2",
            params![id, department.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    Ok(files)
}

// The partition being read is authoritative; the stored department text is only
// used by the WHERE clause.
fn row_to_product(row: &Row, department: Department) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        department,
        photo: row.get("photo")?,
        specification: row.get("specification")?,
    })
}
