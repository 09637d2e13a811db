use sqlx::PgPool;

use crate::embeddings::EmbeddingClient;
use crate::ingest::locks::IngestLocks;
use crate::llm_client::LlmClient;
use crate::storage::ArtifactStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Service-client handles are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub artifacts: ArtifactStore,
    pub llm: LlmClient,
    pub embeddings: EmbeddingClient,
    /// Per-file-name locks serializing the artifact check-then-act sequence.
    pub locks: IngestLocks,
}
