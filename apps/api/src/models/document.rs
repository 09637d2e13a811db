use chrono::{DateTime, Utc};

/// Composed resume record. Upserted whole by file name — no partial-field
/// updates.
#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub file_name: String,
    pub storage_url: String,
    pub full_text: String,
    pub technical_skills: String,
    pub years_of_experience: String,
    /// Whole-document embedding vector, serialized as JSON.
    pub embeddings: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Composed job-description record. Same uniqueness rule, no derived fields.
#[derive(Debug, Clone)]
pub struct JobDescriptionRecord {
    pub file_name: String,
    pub storage_url: String,
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
}
