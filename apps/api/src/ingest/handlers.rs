//! Axum route handlers for the upload endpoints.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::FileKind;
use crate::ingest::category::ResumeCollection;
use crate::ingest::pipeline::{ingest_job_description, ingest_resume};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub document_id: String,
    pub answer: String,
}

struct UploadedFile {
    file_name: String,
    bytes: Bytes,
}

struct MultipartParts {
    file: Option<UploadedFile>,
    user_type: Option<String>,
}

async fn read_parts(mut multipart: Multipart) -> Result<MultipartParts, AppError> {
    let mut parts = MultipartParts {
        file: None,
        user_type: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string).ok_or_else(|| {
                    AppError::Validation("'file' part is missing a file name".to_string())
                })?;
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read 'file' part: {e}"))
                })?;
                parts.file = Some(UploadedFile { file_name, bytes });
            }
            Some("user_type") => {
                let value = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read 'user_type' part: {e}"))
                })?;
                parts.user_type = Some(value);
            }
            _ => {}
        }
    }

    Ok(parts)
}

/// POST /upload/
///
/// Job-description upload: extracts text and persists the record.
pub async fn handle_upload_job_description(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let parts = read_parts(multipart).await?;
    let file = parts
        .file
        .ok_or_else(|| AppError::Validation("Missing 'file' part".to_string()))?;

    // Reject unsupported types before any storage side effect.
    let kind = FileKind::from_file_name(&file.file_name)?;

    ingest_job_description(&state, &file.file_name, kind, file.bytes).await?;

    Ok(Json(UploadResponse {
        message: "Job description uploaded successfully".to_string(),
        file_name: file.file_name,
    }))
}

/// POST /extract-experience-skills/
///
/// Resume upload: full pipeline — artifact dedupe, extraction, field
/// synthesis, embedding, upsert into the collection selected by `user_type`.
/// Returns the file name as document id plus the raw LLM answer.
pub async fn handle_extract_experience_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let parts = read_parts(multipart).await?;
    let file = parts
        .file
        .ok_or_else(|| AppError::Validation("Missing 'file' part".to_string()))?;
    let user_type = parts
        .user_type
        .ok_or_else(|| AppError::Validation("Missing 'user_type' field".to_string()))?;

    // Both rejections happen before any storage side effect.
    let collection = ResumeCollection::parse(&user_type)?;
    let kind = FileKind::from_file_name(&file.file_name)?;

    let answer = ingest_resume(&state, &file.file_name, kind, file.bytes, collection).await?;

    Ok(Json(ExtractResponse {
        document_id: file.file_name,
        answer,
    }))
}
