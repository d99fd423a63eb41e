//! Profile picture encoding.
//!
//! Records embed their picture as a `data:` URI. Turning the bytes of a file
//! into that string happens here, before a draft reaches the store.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

pub trait ImageEncoder {
    fn encode(&self, bytes: &[u8]) -> AppResult<String>;
}

/// Sniffs the MIME type from the magic bytes and base64-encodes the payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUriEncoder;

impl ImageEncoder for DataUriEncoder {
    fn encode(&self, bytes: &[u8]) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::InvalidImage("file is empty".into()));
        }

        let kind = infer::get(bytes)
            .filter(|k| k.mime_type().starts_with("image/"))
            .ok_or_else(|| AppError::InvalidImage("Please select an image file".into()))?;

        Ok(format!(
            "data:{};base64,{}",
            kind.mime_type(),
            STANDARD.encode(bytes)
        ))
    }
}

pub fn encode_file<E: ImageEncoder>(encoder: &E, path: &Path) -> AppResult<String> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::InvalidImage(format!("cannot read '{}': {}", path.display(), e))
    })?;
    encoder.encode(&bytes)
}

/// MIME type of a data URI, e.g. `image/png`.
pub fn mime_of(data_uri: &str) -> Option<&str> {
    data_uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|m| !m.is_empty())
}
