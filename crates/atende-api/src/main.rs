//! Atende API Server
//!
//! Startup order matters: the embedding index is built before the listener
//! binds, and any failure there aborts the process - the service never
//! serves without its model.
//!
//! Author: hephaex@gmail.com

use atende_api::{create_router, state::AppState};
use atende_core::{config::AppConfig, default_corpus};
use atende_index::{EmbeddingIndex, OllamaEmbedding};
use atende_rag::{AnswerGenerator, OpenAiChat};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing; RUST_LOG wins, LOG_LEVEL is the fallback
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    let api_key = config.require_api_key()?.to_string();

    // Embed the corpus up front; fatal if the model cannot be reached
    let embedding_client = Arc::new(OllamaEmbedding::from_config(&config.llm));
    let index = EmbeddingIndex::build(embedding_client, default_corpus()).await?;

    let chat_client = Arc::new(OpenAiChat::new(api_key));
    let generator = AnswerGenerator::new(chat_client);

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state
    let state = Arc::new(AppState::new(config, index, generator));

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Atende API Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    tracing::info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
