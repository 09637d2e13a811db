//! The ingestion workflow shared by both upload endpoints.
//!
//! Order within one request: existence check → artifact fetch-or-upload →
//! extraction → field synthesis → embedding → record upsert. Everything up
//! to the upsert runs under the per-file lock so concurrent submissions of
//! the same name cannot double-upload.

use bytes::Bytes;
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{self, FileKind};
use crate::ingest::category::{ResumeCollection, JOB_DESCRIPTIONS_TABLE};
use crate::ingest::persist;
use crate::models::document::{JobDescriptionRecord, ResumeRecord};
use crate::state::AppState;
use crate::storage::{ArtifactStore, JOB_DESCRIPTION_PREFIX, RESUME_PREFIX};
use crate::synthesis;

/// Artifact bytes resolved to their authoritative source, plus where they live.
struct ResolvedSource {
    bytes: Bytes,
    storage_url: String,
}

/// Dedup/storage step: exactly one artifact operation per request, never both.
/// A previously seen file name is never re-uploaded — the stored artifact is
/// fetched and treated as the authoritative content, and the freshly uploaded
/// bytes are discarded.
async fn resolve_source(
    state: &AppState,
    key: &str,
    kind: FileKind,
    upload: Bytes,
    previously_ingested: bool,
) -> Result<ResolvedSource, AppError> {
    if previously_ingested {
        let bytes = state.artifacts.fetch(key).await?;
        info!("Reusing stored artifact '{key}'");
        Ok(ResolvedSource {
            bytes,
            storage_url: state.artifacts.url(key),
        })
    } else {
        let storage_url = state
            .artifacts
            .store(key, upload.clone(), kind.content_type())
            .await?;
        info!("Uploaded new artifact '{key}'");
        Ok(ResolvedSource {
            bytes: upload,
            storage_url,
        })
    }
}

/// Full resume pipeline. Returns the raw LLM answer for the response body.
///
/// The dedupe check spans both resume collections; the upsert targets only
/// the collection selected by the caller.
pub async fn ingest_resume(
    state: &AppState,
    file_name: &str,
    kind: FileKind,
    upload: Bytes,
    collection: ResumeCollection,
) -> Result<String, AppError> {
    let key = ArtifactStore::key(RESUME_PREFIX, file_name);
    let lock = state.locks.for_file(&key);
    let _guard = lock.lock().await;

    let mut previously_ingested = false;
    for candidate in ResumeCollection::ALL {
        if persist::exists_in(&state.db, candidate.table(), file_name).await? {
            previously_ingested = true;
            break;
        }
    }

    let source = resolve_source(state, &key, kind, upload, previously_ingested).await?;

    let segments = extraction::extract_segments(kind, &source.bytes)?;
    info!("Extracted {} segments from '{file_name}'", segments.len());

    let fields = synthesis::synthesize_fields(&state.llm, &segments).await?;

    let full_text = segments.join("\n");
    let vector = state
        .embeddings
        .embed(&full_text)
        .await
        .map_err(|e| AppError::Embedding(e.to_string()))?;
    let embeddings =
        serde_json::to_string(&vector).map_err(|e| AppError::Internal(e.into()))?;

    let record = ResumeRecord {
        file_name: file_name.to_string(),
        storage_url: source.storage_url,
        full_text,
        technical_skills: fields.skills,
        years_of_experience: fields.years_of_experience,
        embeddings,
        uploaded_at: Utc::now(),
    };
    persist::upsert_resume(&state.db, collection.table(), &record).await?;

    Ok(fields.raw_answer)
}

/// Job-description pipeline: same artifact handling, no field synthesis or
/// embedding — only the extracted text is persisted.
pub async fn ingest_job_description(
    state: &AppState,
    file_name: &str,
    kind: FileKind,
    upload: Bytes,
) -> Result<(), AppError> {
    let key = ArtifactStore::key(JOB_DESCRIPTION_PREFIX, file_name);
    let lock = state.locks.for_file(&key);
    let _guard = lock.lock().await;

    let previously_ingested =
        persist::exists_in(&state.db, JOB_DESCRIPTIONS_TABLE, file_name).await?;

    let source = resolve_source(state, &key, kind, upload, previously_ingested).await?;

    let segments = extraction::extract_segments(kind, &source.bytes)?;
    info!("Extracted {} segments from '{file_name}'", segments.len());

    let record = JobDescriptionRecord {
        file_name: file_name.to_string(),
        storage_url: source.storage_url,
        content: segments.join("\n"),
        uploaded_at: Utc::now(),
    };
    persist::upsert_job_description(&state.db, &record).await?;

    Ok(())
}
