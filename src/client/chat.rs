use super::core::RagFlowClient;
use crate::stream::{collect_chunks, decode_chunks};
use crate::transport::ApiRequest;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{BoxStream, Result};
use serde_json::Value;

fn completions_path(chat_id: &str) -> String {
    format!("/api/v1/chats_openai/{}/chat/completions", chat_id)
}

impl RagFlowClient {
    /// Non-streaming completion. Errors propagate like every other call.
    pub async fn create_chat_completion(
        &self,
        chat_id: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let body = request.streaming(false);
        self.execute_as(ApiRequest::post(completions_path(chat_id)).json(&body)?)
            .await
    }

    /// Streaming completion as a lazy sequence of decoded chunks.
    ///
    /// Blank and malformed lines are dropped; transport failures show up as
    /// `Err` items.
    pub async fn chat_completion_stream(
        &self,
        chat_id: &str,
        request: ChatCompletionRequest,
    ) -> Result<BoxStream<'static, Value>> {
        let body = request.streaming(true);
        let bytes = self
            .transport
            .execute_stream(ApiRequest::post(completions_path(chat_id)).json(&body)?)
            .await?;
        Ok(decode_chunks(bytes))
    }

    /// Streaming completion drained into an ordered list of chunks.
    pub async fn create_chat_completion_chunks(
        &self,
        chat_id: &str,
        request: ChatCompletionRequest,
    ) -> Result<Vec<Value>> {
        let stream = self.chat_completion_stream(chat_id, request).await?;
        collect_chunks(stream).await
    }
}
