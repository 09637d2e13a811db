//! Document ingestion — one parameterized workflow behind both upload
//! endpoints: dedupe check, artifact fetch-or-upload, text extraction,
//! field synthesis, embedding, record upsert.

pub mod category;
pub mod handlers;
pub mod locks;
pub mod persist;
pub mod pipeline;
