//! Image upload → `data:` URI.
//!
//! Uploaded images are embedded straight into the record (avatar, project images)
//! so the exported file stays self-contained. Nothing is written to disk.

use axum::extract::Multipart;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use thiserror::Error;

const FILE_FIELD: &str = "file";

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("Multipart body has no '{FILE_FIELD}' field")]
    MissingFile,

    #[error("Only image uploads are accepted (got '{0}')")]
    UnsupportedType(String),

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Malformed multipart body: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub data_url: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Encodes `bytes` as `data:<mime>;base64,...`. Only `image/*` types pass.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> Result<String, UploadError> {
    let mime = mime.trim().to_ascii_lowercase();
    let is_image = mime
        .strip_prefix("image/")
        .is_some_and(|sub| !sub.is_empty());
    if !is_image {
        return Err(UploadError::UnsupportedType(mime));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Pulls the `file` field out of a multipart body and encodes it.
/// Other fields are skipped.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<UploadResponse, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mime = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?;

        let data_url = to_data_url(&mime, &bytes)?;
        return Ok(UploadResponse {
            data_url,
            mime_type: mime.to_ascii_lowercase(),
            size_bytes: bytes.len(),
        });
    }

    Err(UploadError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_becomes_data_url() {
        let url = to_data_url("image/png", b"abc").unwrap();
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_mime_is_normalized() {
        let url = to_data_url(" IMAGE/JPEG ", b"x").unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_non_image_rejected() {
        assert_eq!(
            to_data_url("text/html", b"<script>").unwrap_err(),
            UploadError::UnsupportedType("text/html".to_string())
        );
        assert!(to_data_url("image/", b"x").is_err());
    }

    #[test]
    fn test_empty_file_rejected() {
        assert_eq!(to_data_url("image/gif", b"").unwrap_err(), UploadError::Empty);
    }
}
