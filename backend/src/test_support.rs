//! Fixtures shared by the unit and HTTP tests.

use crate::config::{DatabaseConfig, UploadConfig};
use crate::db::{open_database, ConnectionPool};
use crate::state::AppState;
use crate::storage::UploadStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub const JSON_LIMIT: usize = 1024 * 1024;

/// A pool over a fresh on-disk database. Keep the `TempDir` alive for the test's duration.
pub fn test_pool() -> (TempDir, ConnectionPool) {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("catalog.sqlite"),
        max_connections: 4,
    };
    let pool = open_database(&config).unwrap();
    (dir, pool)
}

pub struct TestContext {
    _dir: TempDir,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let (dir, pool) = test_pool();
        let config = UploadConfig {
            dir: dir.path().join("uploads"),
            ..UploadConfig::default()
        };
        let uploads = UploadStore::open(&config.dir).unwrap();
        let state = AppState::new(pool, uploads, &config);
        Self { _dir: dir, state }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.state.uploads.dir().to_path_buf()
    }

    /// Names of the files currently in the upload directory, sorted.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Builds a `multipart/form-data` body.
pub struct MultipartBody {
    boundary: String,
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "catalog-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            buf: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                self.boundary, name, filename
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    /// Returns the `Content-Type` header value and the encoded body.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.buf
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.buf,
        )
    }
}

/// Initializes the full service stack for a [`TestContext`].
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(actix_web::App::new().configure(|cfg| {
            crate::services::configure(cfg, &$ctx.state, crate::test_support::JSON_LIMIT)
        }))
        .await
    };
}

pub(crate) use init_app;
