/// Embedding client — the single point of entry for all Cohere embed calls.
///
/// One whole-document text in, one vector out. Model and input type are
/// hardcoded to match what consumers of the stored vectors expect.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COHERE_API_URL: &str = "https://api.cohere.ai/v1/embed";
/// The model used for all embedding calls.
pub const EMBED_MODEL: &str = "embed-english-v3.0";
/// Documents are embedded for later retrieval, not as queries.
const INPUT_TYPE: &str = "search_document";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Embedding service returned no vectors")]
    Empty,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    texts: Vec<&'a str>,
    model: &'a str,
    input_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// The single embedding client shared by all request handlers.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    api_key: String,
}

impl EmbeddingClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Requests one embedding vector for one text.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request_body = EmbedRequest {
            texts: vec![text],
            model: EMBED_MODEL,
            input_type: INPUT_TYPE,
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let embed_response: EmbedResponse = response.json().await?;
        let vector = embed_response
            .embeddings
            .into_iter()
            .next()
            .ok_or(EmbeddingError::Empty)?;

        debug!("Embedding call succeeded: dimensions={}", vector.len());

        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_request_shape() {
        let request = EmbedRequest {
            texts: vec!["full document text"],
            model: EMBED_MODEL,
            input_type: INPUT_TYPE,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "texts": ["full document text"],
                "model": "embed-english-v3.0",
                "input_type": "search_document"
            })
        );
    }

    #[test]
    fn test_embed_response_parses_vectors() {
        let json = r#"{"id": "abc", "embeddings": [[0.25, -0.5, 1.0]], "texts": ["x"]}"#;
        let response: EmbedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.embeddings, vec![vec![0.25, -0.5, 1.0]]);
    }
}
