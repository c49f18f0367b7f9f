use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::error::ApiError;

/// An uploaded document with its data and original filename.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse a multipart form upload, returning the `file` field.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, ApiError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("Failed to read form field: {e}"),
        )
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        ApiError::new(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file data: {e}"),
                        )
                    })?
                    .to_vec();

                validate_pdf(&filename, &data)?;
                file = Some(UploadedFile { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "No file uploaded"))
}

/// Check the upload looks like a PDF by magic bytes.
fn validate_pdf(filename: &str, data: &[u8]) -> Result<(), ApiError> {
    if data.starts_with(b"%PDF-") {
        return Ok(());
    }
    if filename.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "File has .pdf extension but doesn't appear to be a valid PDF",
        ));
    }
    Err(ApiError::new(
        StatusCode::BAD_REQUEST,
        "Unsupported file type. Please upload a PDF.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_magic_bytes() {
        assert!(validate_pdf("contract.pdf", b"%PDF-1.7 ...").is_ok());
        // Magic bytes win even with a different extension.
        assert!(validate_pdf("contract.bin", b"%PDF-1.7 ...").is_ok());
    }

    #[test]
    fn rejects_pdf_extension_without_magic_bytes() {
        let err = validate_pdf("contract.pdf", b"<html>").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.detail.contains("doesn't appear to be a valid PDF"));
    }

    #[test]
    fn rejects_other_file_types() {
        let err = validate_pdf("notes.txt", b"plain text").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.detail.contains("Unsupported file type"));
    }
}
