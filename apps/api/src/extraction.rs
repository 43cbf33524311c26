//! Document text extraction. The scoring engine only ever sees the extracted text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error extracting text from document: {0}")]
    Unreadable(String),

    #[error("Could not extract text from the resume. Please ensure it's a text-based PDF.")]
    NoText,
}

/// Maps raw document bytes to plain text.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so tests can swap in fixtures.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(document)
            .map_err(|e| ExtractionError::Unreadable(format!("invalid PDF: {e}")))?;
        non_empty(text)
    }
}

/// UTF-8 text passed through as-is; used when the caller already holds plain text.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError> {
        let text = std::str::from_utf8(document)
            .map_err(|e| ExtractionError::Unreadable(format!("text is not valid UTF-8: {e}")))?;
        non_empty(text.to_string())
    }
}

fn non_empty(text: String) -> Result<String, ExtractionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ExtractionError::NoText)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = PlainTextExtractor.extract(b"  \nExperience\nRust\n\n").unwrap();
        assert_eq!(text, "Experience\nRust");
    }

    #[test]
    fn test_whitespace_only_text_is_no_text() {
        let err = PlainTextExtractor.extract(b" \n\t ").unwrap_err();
        assert!(matches!(err, ExtractionError::NoText));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let err = PlainTextExtractor.extract(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable(_)));
    }

    #[test]
    fn test_garbage_bytes_are_not_a_pdf() {
        let err = PdfExtractor.extract(b"this is definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable(_)));
    }
}
