/// LLM Client — the single point of entry for all OpenAI API calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All LLM interactions MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all generation calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.7;

/// Fixed system instruction sent with every generation call.
const SYSTEM_PROMPT: &str = "You are a professional career advisor and expert cover \
    letter writer. Create compelling, personalized cover letters that highlight \
    relevant skills and experience.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The generation seam. `AppState` holds an `Arc<dyn TextGenerator>` so tests
/// can substitute a canned fake for the OpenAI-backed client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends the built prompt to the provider and returns the generated text,
    /// trimmed of surrounding whitespace.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Production client for the OpenAI chat-completions API.
/// Generation parameters are policy constants, never derived from the request.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's structured error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = chat
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_shape() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_first_choice_extraction() {
        let raw = r#"{
            "choices": [
                {"message": {"content": "  Dear Hiring Manager,\n...  "}},
                {"message": {"content": "second candidate"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20}
        }"#;
        let chat: ChatResponse = serde_json::from_str(raw).unwrap();
        let text = chat
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .unwrap();
        assert_eq!(text, "Dear Hiring Manager,\n...");
    }

    #[test]
    fn test_provider_error_body_parsing() {
        let raw = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let err: OpenAiError = serde_json::from_str(raw).unwrap();
        assert_eq!(err.error.message, "Incorrect API key provided");
    }
}
