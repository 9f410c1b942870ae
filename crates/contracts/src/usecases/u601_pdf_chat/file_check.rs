//! Client-side file type check, shared by every way a file can be picked.

use thiserror::Error;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const NOT_PDF_MESSAGE: &str = "Please upload a PDF file";

/// What the browser tells us about a file before it is uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfCandidate {
    pub name: String,
    /// Declared media type; browsers report an empty string when unknown
    pub media_type: String,
    pub size: u64,
}

impl PdfCandidate {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("{}", NOT_PDF_MESSAGE)]
    NotPdf { name: String, media_type: String },
    #[error("The selected file is empty")]
    Empty { name: String },
}

/// Only a declared `application/pdf` is accepted. An undeclared type is
/// rejected whatever the file name says.
pub fn validate_pdf(file: &PdfCandidate) -> Result<(), FileRejection> {
    let is_pdf = file.media_type.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE);

    if !is_pdf {
        return Err(FileRejection::NotPdf {
            name: file.name.clone(),
            media_type: file.media_type.clone(),
        });
    }
    if file.size == 0 {
        return Err(FileRejection::Empty {
            name: file.name.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_pdf() {
        assert!(validate_pdf(&PdfCandidate::new("doc.pdf", "application/pdf", 10)).is_ok());
        // the declared type wins over the name
        assert!(validate_pdf(&PdfCandidate::new("scan", "application/pdf", 10)).is_ok());
    }

    #[test]
    fn test_declared_other_type() {
        let err = validate_pdf(&PdfCandidate::new("notes.pdf", "text/plain", 10)).unwrap_err();
        assert!(matches!(err, FileRejection::NotPdf { .. }));
        assert_eq!(err.to_string(), NOT_PDF_MESSAGE);
    }

    #[test]
    fn test_undeclared_type_is_rejected() {
        let err = validate_pdf(&PdfCandidate::new("notes.pdf", "", 10)).unwrap_err();
        assert_eq!(
            err,
            FileRejection::NotPdf {
                name: "notes.pdf".to_string(),
                media_type: String::new(),
            }
        );
        assert!(validate_pdf(&PdfCandidate::new("REPORT.PDF", "  ", 10)).is_err());
    }

    #[test]
    fn test_media_type_case_and_padding() {
        assert!(validate_pdf(&PdfCandidate::new("doc.pdf", " Application/PDF ", 10)).is_ok());
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(
            validate_pdf(&PdfCandidate::new("doc.pdf", "application/pdf", 0)),
            Err(FileRejection::Empty {
                name: "doc.pdf".to_string()
            })
        );
    }
}
