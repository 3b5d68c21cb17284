//! Atende RAG - Retrieval-grounded answer generation
//!
//! Given a user query and the retrieved document text, builds the attendant
//! prompt and calls the chat-completion API for the final answer.
//!
//! Author: hephaex@gmail.com

pub mod llm;

pub use llm::{first_choice_content, ChatClient, ChatMessage, ChatResponse, OpenAiChat, CHAT_MODEL};

use atende_core::Result;
use std::sync::Arc;

// ============================================================================
// Answer Generator
// ============================================================================

/// Produces a natural-language answer grounded in one retrieved document
pub struct AnswerGenerator {
    client: Arc<dyn ChatClient>,
}

impl AnswerGenerator {
    /// Create a new generator
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// Build the prompt and call the chat API
    pub async fn generate(&self, query: &str, context: &str) -> Result<String> {
        let prompt = build_prompt(query, context);

        tracing::debug!(prompt_len = prompt.len(), "Calling chat-completion API");
        let answer = self.client.generate(&prompt).await?;
        tracing::debug!(answer_len = answer.len(), "Chat response received");

        Ok(answer)
    }
}

/// Format the fixed attendant instruction template
///
/// Context and query are inserted verbatim, no escaping.
fn build_prompt(query: &str, context: &str) -> String {
    format!(
        "Você é um atendente de uma empresa.\n\
         Seu trabalho é conversar com os clientes, consultando a base de\n\
         conhecimento da empresa, e dar uma resposta simples e precisa para ele,\n\
         baseando na base de dados da empresa fornecida como contexto.\n\
         \n\
         Contexto: {context}\n\
         \n\
         Pergunta: {query}"
    )
}

// ============================================================================
// Tests
// ============================================================================
