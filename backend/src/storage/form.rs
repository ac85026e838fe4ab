// Rust
use crate::error::{CatalogError, CatalogResult};
use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;

/// Size cap for a plain text field.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// A file part received in a multipart form, held in memory until the request
/// has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPart {
    /// Filename as sent by the client. Only its extension is ever used.
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Fully buffered `multipart/form-data` request.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadPart>,
}

impl FormData {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The text field as an owned value, `None` when absent.
    pub fn text_owned(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadPart> {
        self.files.remove(name)
    }
}

/// Reads the whole multipart payload into memory.
///
/// - Parts carrying a filename are files. Only names listed in `file_fields` are kept;
///   a part with an empty filename and no content (an untouched file input) is absent.
/// - Every other part is a UTF-8 text field.
/// - When a name repeats, the first part wins.
///
/// Nothing is written to disk here, so a request rejected after reading leaves no files
/// behind.
pub async fn read_form(
    mut payload: Multipart,
    file_fields: &[&str],
    max_file_bytes: usize,
) -> CatalogResult<FormData> {
    let mut form = FormData::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

        let limit = if filename.is_some() {
            max_file_bytes
        } else {
            MAX_TEXT_FIELD_BYTES
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > limit {
                return Err(CatalogError::Multipart(format!(
                    "field {:?} exceeds {} bytes",
                    name, limit
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            Some(original_name) => {
                if !file_fields.contains(&name.as_str()) {
                    continue;
                }
                if original_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.files
                    .entry(name)
                    .or_insert(UploadPart { original_name, bytes });
            }
            None => {
                let value = String::from_utf8(bytes).map_err(|_| {
                    CatalogError::Multipart(format!("field {:?} is not valid UTF-8", name))
                })?;
                form.fields.entry(name).or_insert(value);
            }
        }
    }

    Ok(form)
}
