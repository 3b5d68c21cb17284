//! Embedding client for generating vector representations
//!
//! The sentence-embedding model is served by Ollama. The model name is fixed
//! at build time: `all-minilm` is Ollama's packaging of the
//! all-MiniLM-L6-v2 sentence-transformer (384 dimensions).
//!
//! Author: hephaex@gmail.com

use async_trait::async_trait;
use atende_core::{AtendeError, LlmConfig, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Sentence-embedding model name, fixed at build time
pub const EMBEDDING_MODEL: &str = "all-minilm";

/// Embedding dimension for all-MiniLM-L6-v2
pub const EMBEDDING_DIMENSION: usize = 384;

// ============================================================================
// Embedding Trait
// ============================================================================

/// Trait for embedding generation
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Get embedding dimension
    fn dimension(&self) -> usize;
}

// ============================================================================
// Ollama Embedding Client
// ============================================================================

/// Ollama embedding API client
pub struct OllamaEmbedding {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct OllamaEmbeddingRequest {
    model: String,
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct OllamaEmbeddingResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbedding {
    /// Create a new Ollama embedding client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from config
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.ollama_url.clone())
    }
}

#[async_trait]
impl EmbeddingClient for OllamaEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = OllamaEmbeddingRequest {
            model: EMBEDDING_MODEL.to_string(),
            prompt: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/embeddings", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AtendeError::Transport(format!("Embedding request failed: {e}")))?;

        // Callers decide severity: `EmbeddingIndex::build` wraps this as an
        // initialization failure, per-query callers surface it as-is.
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AtendeError::Transport(format!(
                "Ollama embedding error ({status}): {error_text}"
            )));
        }

        let result: OllamaEmbeddingResponse = response.json().await.map_err(|e| {
            AtendeError::MalformedResponse(format!("Failed to parse embedding response: {e}"))
        })?;

        Ok(result.embedding)
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_is_fixed() {
        assert_eq!(EMBEDDING_MODEL, "all-minilm");
        assert_eq!(EMBEDDING_DIMENSION, 384);
    }

    #[test]
    fn test_client_dimension() {
        let client = OllamaEmbedding::new("http://localhost:11434");
        assert_eq!(client.dimension(), 384);
    }

    #[tokio::test]
    #[ignore = "requires a running Ollama server with the all-minilm model"]
    async fn test_live_embed() {
        let client = OllamaEmbedding::new("http://localhost:11434");
        let vector = client.embed("saúde mental").await.unwrap();
        assert_eq!(vector.len(), EMBEDDING_DIMENSION);
    }
}
