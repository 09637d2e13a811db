//! Object-storage access for uploaded file artifacts (S3 / MinIO).
//!
//! One blob per distinct file name, under a deterministic key. Resumes and
//! job descriptions live under separate prefixes.

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::errors::AppError;

pub const RESUME_PREFIX: &str = "resumes";
pub const JOB_DESCRIPTION_PREFIX: &str = "job-descriptions";

#[derive(Clone)]
pub struct ArtifactStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl ArtifactStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, endpoint: String) -> Self {
        Self {
            client,
            bucket,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Deterministic storage key for a file name: `<prefix>/<file_name>`.
    pub fn key(prefix: &str, file_name: &str) -> String {
        format!("{prefix}/{file_name}")
    }

    /// Path-style URL of an object, valid against the configured endpoint.
    pub fn url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }

    /// Fetches a previously stored artifact.
    pub async fn fetch(&self, key: &str) -> Result<Bytes, AppError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to fetch artifact '{key}': {e}")))?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to read artifact '{key}': {e}")))?;

        Ok(data.into_bytes())
    }

    /// Uploads a new artifact and returns its URL.
    pub async fn store(
        &self,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload artifact '{key}': {e}")))?;

        Ok(self.url(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_prefix_slash_file_name() {
        assert_eq!(
            ArtifactStore::key(RESUME_PREFIX, "jane_doe.pdf"),
            "resumes/jane_doe.pdf"
        );
        assert_eq!(
            ArtifactStore::key(JOB_DESCRIPTION_PREFIX, "role.txt"),
            "job-descriptions/role.txt"
        );
    }
}
