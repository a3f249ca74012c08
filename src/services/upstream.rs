// src/services/upstream.rs
use std::fmt::Debug;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion API returned status {0}")]
    Status(StatusCode),
    #[error("completion API returned no choices")]
    EmptyReply,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the upstream chat-completion API. One instance is built at
/// startup and shared by every request; it holds no per-request state.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .finish()
    }
}

impl CompletionClient {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Forward a single user message and return the first choice's content,
    /// trimmed. One best-effort call: no retry, no timeout override beyond
    /// the client default, no history and no system prompt.
    pub async fn complete(&self, message: &str) -> Result<String, UpstreamError> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            model = %self.model,
            api_key = %mask_token(&self.api_key),
            "forwarding message to completion API"
        );

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: message,
            }],
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body: CompletionResponse = response.json().await?;
        let reply = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(UpstreamError::EmptyReply)?;

        tracing::info!(%request_id, reply_len = reply.len(), "completion API replied");
        Ok(reply.trim().to_string())
    }
}

/// Mask an API key for logging: first 7 chars + "***" + last 4 chars, or
/// "***" outright for keys too short to mask partially.
fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("sk-short"), "***");
    }

    #[test]
    fn long_tokens_keep_head_and_tail() {
        assert_eq!(mask_token("sk-abcdefghijklmnop"), "sk-abcd***mnop");
    }

    #[test]
    fn response_payload_parses_first_choice() {
        let body: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"At your service."}}]}"#,
        )
        .unwrap();

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);
        assert_eq!(content.as_deref(), Some("At your service."));
    }

    #[test]
    fn empty_choices_yield_no_content() {
        let body: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(body.choices.is_empty());
    }
}
