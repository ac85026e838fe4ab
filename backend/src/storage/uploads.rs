//! # Upload Store
//!
//! Uploaded files live in one flat directory under generated names of the form
//! `<millisecond timestamp><original extension>`, e.g. `1718035200123.pdf`. The
//! original filename is never used on disk; only its extension is kept, verbatim.
//!
//! The directory is created when the store is opened and served read-only by
//! `actix-files` under the configured URL prefix (see `services::configure`).
//!
//! Writes are not transactional with the database. A file saved for a request whose
//! database write later fails stays on disk as an orphan. Removal is best-effort:
//! failures are logged and never reach the client.

use crate::error::CatalogResult;
use crate::storage::form::UploadPart;
use log::{debug, warn};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How many consecutive timestamps are tried before giving up on a free name.
const MAX_NAME_ATTEMPTS: i64 = 1000;

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Opens the store, creating the directory if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the part's bytes under a freshly generated name and returns that name.
    ///
    /// Names are claimed with `create_new`, so two uploads landing on the same
    /// millisecond (a photo and a specification in one request, say) get
    /// consecutive timestamps instead of overwriting each other.
    pub fn save(&self, part: &UploadPart) -> io::Result<String> {
        let extension = original_extension(&part.original_name);
        let started = chrono::Utc::now().timestamp_millis();

        for offset in 0..MAX_NAME_ATTEMPTS {
            let name = generated_name(started + offset, extension);
            let path = self.dir.join(&name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(&part.bytes)?;
                    file.sync_all()?;
                    debug!(
                        "Stored upload {:?} as {} ({} bytes)",
                        part.original_name,
                        name,
                        part.bytes.len()
                    );
                    return Ok(name);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "no free upload name available",
        ))
    }

    /// Saves the part if present. `None` stays `None`.
    pub fn save_optional(&self, part: Option<&UploadPart>) -> CatalogResult<Option<String>> {
        match part {
            Some(part) => Ok(Some(self.save(part)?)),
            None => Ok(None),
        }
    }

    /// Deletes a stored file. Best-effort: failures are logged and swallowed.
    pub fn remove(&self, name: &str) {
        if !is_plain_file_name(name) {
            warn!("Refusing to remove upload with unexpected name {:?}", name);
            return;
        }
        match std::fs::remove_file(self.dir.join(name)) {
            Ok(()) => debug!("Removed upload {}", name),
            Err(e) => warn!("Failed to remove upload {}: {}", name, e),
        }
    }
}

/// The extension of the caller-supplied filename including the leading dot, or
/// an empty string when there is none. `"report.tar.gz"` gives `".gz"`, `".bashrc"`
/// gives `""`.
fn original_extension(original_name: &str) -> &str {
    let file_name = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    match file_name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &file_name[idx..],
    }
}

fn generated_name(millis: i64, extension: &str) -> String {
    format!("{}{}", millis, extension)
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
