//! Application state management
//!
//! The state is built once in `main` and passed by reference into every
//! handler; there are no process-wide singletons. Index and generator are
//! read-only after construction, so concurrent handlers share them without
//! locking.
//!
//! Author: hephaex@gmail.com

use atende_core::config::AppConfig;
use atende_index::EmbeddingIndex;
use atende_rag::AnswerGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// Document corpus with precomputed embeddings
    pub index: EmbeddingIndex,
    /// Answer generator backed by the chat-completion API
    pub generator: AnswerGenerator,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, index: EmbeddingIndex, generator: AnswerGenerator) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            index,
            generator,
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
