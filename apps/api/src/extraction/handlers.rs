//! Axum route handler for resume uploads.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::{extract_text, FileKind, MAX_RESUME_BYTES};

/// Request body cap for the upload route. Leaves room for multipart framing
/// so oversized files reach the handler and get the friendly message.
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_RESUME_BYTES + 64 * 1024;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub text: String,
}

fn too_large() -> AppError {
    AppError::Validation("File too large. Max 5MB.".to_string())
}

fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        e.into()
    }
}

/// POST /parse-resume
///
/// Multipart upload with a `file` field (PDF, DOCX, or TXT). Returns normalized plain text.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(upload_error)?;

        if data.len() > MAX_RESUME_BYTES {
            return Err(too_large());
        }

        let kind = FileKind::detect(&file_name, content_type.as_deref()).ok_or_else(|| {
            AppError::Validation(
                "Unsupported file type. Please upload a PDF, DOCX, or TXT.".to_string(),
            )
        })?;

        tracing::info!(file_name = %file_name, ?kind, bytes = data.len(), "Parsing uploaded resume");
        let text = extract_text(kind, data)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
        return Ok(Json(ParseResumeResponse { text }));
    }

    Err(AppError::Validation("Missing file".to_string()))
}
