//! LLM client implementation
//!
//! Single fire-and-forget POST to the OpenAI chat-completion API. No retry,
//! no timeout, no streaming: one request/response exchange per call.
//!
//! Author: hephaex@gmail.com

use async_trait::async_trait;
use atende_core::{AtendeError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Chat-completion model name, fixed at build time
pub const CHAT_MODEL: &str = "gpt-4o-mini";

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// Chat Trait
// ============================================================================

/// Trait for chat-completion generation
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a single system-role prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ============================================================================
// OpenAI Client
// ============================================================================

/// OpenAI chat-completion API client
pub struct OpenAiChat {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl OpenAiChat {
    /// Create a new OpenAI client
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    /// Set custom base URL (for compatible APIs and tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl ChatClient for OpenAiChat {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AtendeError::Transport(format!("Chat request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AtendeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let result: ChatResponse = response.json().await.map_err(|e| {
            AtendeError::MalformedResponse(format!("Failed to parse chat response: {e}"))
        })?;

        first_choice_content(result)
    }
}

/// Extract the first completion's message content from a parsed response
pub fn first_choice_content(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AtendeError::MalformedResponse("response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_model_is_fixed() {
        assert_eq!(CHAT_MODEL, "gpt-4o-mini");
    }

    #[test]
    fn test_first_choice_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "primeira"}},
                {"message": {"role": "assistant", "content": "segunda"}}
            ]
        }))
        .unwrap();

        assert_eq!(first_choice_content(response).unwrap(), "primeira");
    }

    #[test]
    fn test_empty_choices_is_malformed_response() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();

        let err = first_choice_content(response).unwrap_err();
        assert!(matches!(err, AtendeError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_choices_fails_to_parse() {
        let result = serde_json::from_value::<ChatResponse>(json!({"error": "oops"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: "prompt".to_string(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "prompt");
    }
}
