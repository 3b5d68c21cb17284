//! Atende Index - In-memory embedding index over the document corpus
//!
//! Embeds every corpus document once at startup and answers queries with a
//! pairwise cosine-similarity linear scan. The corpus is four documents, so
//! no approximate-nearest-neighbor structure is warranted.
//!
//! Author: hephaex@gmail.com

pub mod embedding;

pub use embedding::{EmbeddingClient, OllamaEmbedding, EMBEDDING_DIMENSION, EMBEDDING_MODEL};

use atende_core::{AtendeError, Document, Result};
use ndarray::Array1;
use std::sync::Arc;

// ============================================================================
// Embedding Index
// ============================================================================

/// Document corpus paired with precomputed embeddings
///
/// Read-only after construction; shared across request handlers without
/// locking.
pub struct EmbeddingIndex {
    client: Arc<dyn EmbeddingClient>,
    entries: Vec<(Document, Array1<f32>)>,
}

impl std::fmt::Debug for EmbeddingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingIndex")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl EmbeddingIndex {
    /// Embed every document and build the index
    ///
    /// Any embedding failure here is fatal: the process cannot serve
    /// requests without the model.
    pub async fn build(
        client: Arc<dyn EmbeddingClient>,
        documents: Vec<Document>,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(documents.len());

        for document in documents {
            let vector = client.embed(&document.text).await.map_err(|e| {
                AtendeError::Initialization(format!(
                    "Failed to embed document {}: {e}",
                    document.id
                ))
            })?;
            entries.push((document, Array1::from(vector)));
        }

        tracing::info!("Embedding index built with {} documents", entries.len());

        Ok(Self { client, entries })
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the document most similar to the query
    ///
    /// Linear scan with strict `>` comparison: on equal scores the document
    /// appearing earlier in the corpus keeps priority.
    pub async fn find_best(&self, query: &str) -> Result<&Document> {
        let mut entries = self.entries.iter();

        let Some((first_document, first_embedding)) = entries.next() else {
            return Err(AtendeError::Retrieval(
                "no documents available to match against".to_string(),
            ));
        };

        let query_embedding = Array1::from(self.client.embed(query).await?);

        let mut best_document = first_document;
        let mut best_score = cosine_similarity(&query_embedding, first_embedding);

        for (document, embedding) in entries {
            let score = cosine_similarity(&query_embedding, embedding);
            if score > best_score {
                best_document = document;
                best_score = score;
            }
        }

        tracing::debug!(
            document_id = best_document.id,
            score = best_score,
            "Best document selected"
        );

        Ok(best_document)
    }
}

/// Cosine similarity between two vectors
///
/// Mismatched lengths and zero-norm vectors score 0.0 so they never rank.
pub fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let denom = (a.dot(a) * b.dot(b)).sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    a.dot(b) / denom
}

// ============================================================================
// Tests
// ============================================================================
