// Resume text extraction for uploaded files.
// PDF and DOCX parsing is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod docx;
pub mod handlers;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Failed to parse DOCX: {0}")]
    Docx(#[from] docx::DocxError),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Text,
}

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl FileKind {
    /// Detects the format from the file name, falling back to the declared content type.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            return Some(FileKind::Pdf);
        }
        if lower.ends_with(".docx") {
            return Some(FileKind::Docx);
        }
        if lower.ends_with(".txt") {
            return Some(FileKind::Text);
        }
        match content_type {
            Some("application/pdf") => Some(FileKind::Pdf),
            Some(DOCX_CONTENT_TYPE) => Some(FileKind::Docx),
            Some(ct) if ct.starts_with("text/plain") => Some(FileKind::Text),
            _ => None,
        }
    }
}

/// CRLF and lone CR become LF; surrounding whitespace is trimmed.
pub fn normalize_text(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

pub async fn extract_text(kind: FileKind, data: Bytes) -> Result<String, ExtractionError> {
    let raw = match kind {
        FileKind::Text => String::from_utf8_lossy(&data).into_owned(),
        FileKind::Pdf => {
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                .await?
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?
        }
        FileKind::Docx => {
            tokio::task::spawn_blocking(move || docx::extract_docx_text(&data)).await??
        }
    };

    let text = normalize_text(&raw);
    debug!(?kind, chars = text.chars().count(), "Resume text extracted");
    Ok(text)
}
