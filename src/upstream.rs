use serde::Serialize;

use crate::config::AppConfig;

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

pub const MODEL: &str = "google/gemini-pro";
pub const MAX_TOKENS: u32 = 2048;
pub const TEMPERATURE: f32 = 0.75;

/// Persona instructions sent as the first message of every completion.
/// Static data, never user-modifiable.
pub const SYSTEM_PROMPT: &str = "You are ChatPKR, a state-of-the-art conversational AI. Your personality is helpful, knowledgeable, and engaging. You can discuss a vast array of topics, from complex technical subjects to creative writing and casual conversation. Adapt your responses to the user's language and tone, providing natural, human-like dialogue. Format your responses with markdown for readability (e.g., use **bold**, *italics*, and code blocks). You must strictly refuse to generate any illegal, harmful, or unsafe content under any circumstances.";

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub max_tokens: u32,
    pub temperature: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds the fixed two-message completion request: the system prompt
    /// followed by the caller's text. No history is carried between calls.
    pub fn for_message(message: &'a str) -> Self {
        Self {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Client for the OpenRouter chat-completions endpoint. One instance is
/// shared by every request so the underlying connection pool is reused.
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_endpoint(config, OPENROUTER_URL)
    }

    /// Same client against a different endpoint. Tests point this at a
    /// local stub server.
    pub fn with_endpoint(config: &AppConfig, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn send(&self, message: &str) -> reqwest::Result<reqwest::Response> {
        self.http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&ChatCompletionRequest::for_message(message))
            .send()
            .await
    }
}
