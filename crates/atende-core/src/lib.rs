//! Atende Core - Domain models, shared types, and configuration
//!
//! This crate defines the core abstractions used throughout the atende
//! service:
//! - The knowledge-base document model and the fixed corpus
//! - Common error types
//! - Configuration management
//!
//! Author: hephaex@gmail.com

pub mod config;
pub mod corpus;

pub use config::{AppConfig, ConfigError, LlmConfig, LoggingConfig, ServerConfig};
pub use corpus::{default_corpus, Document};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for atende operations
#[derive(Error, Debug)]
pub enum AtendeError {
    #[error("Embedding model initialization failed: {0}")]
    Initialization(String),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Upstream chat API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed chat API response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AtendeError>;
