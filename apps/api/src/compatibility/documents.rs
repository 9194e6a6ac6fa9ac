//! Document text extraction for uploads. The engine only ever sees plain text;
//! PDFs are flattened here, on the blocking pool.

use anyhow::anyhow;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

/// PDF when either the part's content type or its file name says so.
pub fn detect_kind(content_type: Option<&str>, file_name: Option<&str>) -> DocumentKind {
    let is_pdf_type = content_type
        .map(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    let is_pdf_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    if is_pdf_type || is_pdf_name {
        DocumentKind::Pdf
    } else {
        DocumentKind::PlainText
    }
}

/// Returns the plain text of an uploaded part.
pub async fn extract_text(bytes: Bytes, kind: DocumentKind) -> Result<String, AppError> {
    match kind {
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Text field is not valid UTF-8".to_string())
        }),
        DocumentKind::Pdf => {
            let size = bytes.len();
            let extracted =
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                    .await;

            match extracted {
                Ok(Ok(text)) => {
                    debug!(bytes = size, chars = text.len(), "Extracted PDF text");
                    Ok(text)
                }
                Ok(Err(e)) => Err(AppError::UnprocessableEntity(format!(
                    "Could not read PDF: {e}"
                ))),
                // pdf-extract panics on some malformed files.
                Err(e) if e.is_panic() => Err(AppError::UnprocessableEntity(
                    "Could not read PDF: malformed document".to_string(),
                )),
                Err(e) => Err(AppError::Internal(anyhow!("PDF extraction task failed: {e}"))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_content_type() {
        assert_eq!(detect_kind(Some("application/pdf"), None), DocumentKind::Pdf);
        assert_eq!(detect_kind(Some("Application/PDF"), Some("cv")), DocumentKind::Pdf);
    }

    #[test]
    fn test_detect_pdf_by_file_name() {
        assert_eq!(
            detect_kind(Some("application/octet-stream"), Some("Demo_CV.PDF")),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_text_fields_default_to_plain_text() {
        assert_eq!(detect_kind(None, None), DocumentKind::PlainText);
        assert_eq!(
            detect_kind(Some("text/plain"), Some("cv.txt")),
            DocumentKind::PlainText
        );
    }

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let text = extract_text(Bytes::from("Rust és SQL"), DocumentKind::PlainText)
            .await
            .unwrap();
        assert_eq!(text, "Rust és SQL");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unprocessable() {
        let err = extract_text(Bytes::from_static(&[0xff, 0xfe, 0x00]), DocumentKind::PlainText)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unprocessable() {
        let err = extract_text(Bytes::from_static(b"definitely not a pdf"), DocumentKind::Pdf)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
