//! OpenAI-compatible chat completion request / response.

use super::message::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CHAT_MODEL: &str = "model";

/// Body of `POST /api/v1/chats_openai/{chat_id}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
}

impl ChatCompletionRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            model: DEFAULT_CHAT_MODEL.to_string(),
            messages,
            stream: false,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub(crate) fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionTokensDetails {
    #[serde(default)]
    pub accepted_prediction_tokens: u64,
    #[serde(default)]
    pub reasoning_tokens: u64,
    #[serde(default)]
    pub rejected_prediction_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionUsage {
    pub completion_tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens_details: CompletionTokensDetails,
}

/// A complete, non-streamed chat completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    /// Choice objects are passed through untouched.
    pub choices: Vec<Value>,
    pub created: i64,
    pub model: String,
    pub object: String,
    pub usage: ChatCompletionUsage,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, when present.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .get("message")?
            .get("content")?
            .as_str()
    }
}
