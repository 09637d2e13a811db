//! Text extraction — turns uploaded bytes into an ordered sequence of
//! text segments: one per page (PDF), paragraph (DOCX), or line (TXT).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    UnsupportedType(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX text extraction failed: {0}")]
    Docx(String),

    #[error("TXT decoding failed: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Declared file type, derived from the uploaded file name's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    /// Resolves the declared type from the file name extension,
    /// case-insensitive. Anything else is rejected before any side effect.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let (_, extension) = file_name
            .rsplit_once('.')
            .ok_or_else(|| ExtractError::UnsupportedType(file_name.to_string()))?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            "txt" => Ok(FileKind::Txt),
            other => Err(ExtractError::UnsupportedType(other.to_string())),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            FileKind::Txt => "text/plain",
        }
    }
}

/// Extracts ordered text segments from document bytes.
pub fn extract_segments(kind: FileKind, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    match kind {
        FileKind::Pdf => extract_pdf(bytes),
        FileKind::Docx => extract_docx(bytes),
        FileKind::Txt => extract_txt(bytes),
    }
}

/// One segment per page, in rendering order.
fn extract_pdf(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// One segment per paragraph, in document order. Tables, headers, and
/// footers are not extracted.
fn extract_docx(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let doc = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut segments = Vec::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            segments.push(text);
        }
    }
    Ok(segments)
}

/// One segment per line. Bytes must be valid UTF-8.
fn extract_txt(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_extension_case_insensitive() {
        assert_eq!(FileKind::from_file_name("resume.PDF").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_file_name("cv.Docx").unwrap(), FileKind::Docx);
        assert_eq!(FileKind::from_file_name("notes.txt").unwrap(), FileKind::Txt);
    }

    #[test]
    fn test_file_kind_takes_last_extension() {
        assert_eq!(
            FileKind::from_file_name("archive.backup.txt").unwrap(),
            FileKind::Txt
        );
    }

    #[test]
    fn test_file_kind_rejects_unsupported_extension() {
        let err = FileKind::from_file_name("photo.png").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType(ext) if ext == "png"));
    }

    #[test]
    fn test_file_kind_rejects_missing_extension() {
        assert!(FileKind::from_file_name("resume").is_err());
    }

    #[test]
    fn test_txt_one_segment_per_line() {
        let segments = extract_segments(FileKind::Txt, b"first line\nsecond line\n").unwrap();
        assert_eq!(segments, vec!["first line", "second line"]);
    }

    #[test]
    fn test_txt_nonempty_document_yields_nonempty_segments() {
        let segments = extract_segments(FileKind::Txt, b"5 years of Rust").unwrap();
        assert!(!segments.is_empty());
    }

    #[test]
    fn test_txt_invalid_utf8_is_rejected() {
        let err = extract_segments(FileKind::Txt, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::Utf8(_)));
    }

    #[test]
    fn test_pdf_malformed_bytes_fail_with_pdf_stage() {
        let err = extract_segments(FileKind::Pdf, b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn test_docx_malformed_bytes_fail_with_docx_stage() {
        let err = extract_segments(FileKind::Docx, b"this is not a docx").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[test]
    fn test_docx_one_segment_per_paragraph() {
        use docx_rs::{Docx, Paragraph, Run};

        let mut buffer = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Five years at Acme")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Skills: Rust, SQL")))
            .build()
            .pack(&mut buffer)
            .unwrap();

        let segments = extract_segments(FileKind::Docx, buffer.get_ref()).unwrap();
        assert_eq!(segments, vec!["Five years at Acme", "Skills: Rust, SQL"]);
    }
}
