//! Chat client for a hosted Ollama endpoint.
//!
//! Implements a thin non-streaming client for `POST {endpoint}/api/chat`,
//! authenticated with a bearer token. The upstream reply may arrive in a few
//! shapes (a message object, a list of messages, or a bare value); the
//! normalization happens here, behind a single `Result<String, LlmError>`
//! contract, so callers never inspect raw response shapes.

use std::{future::Future, pin::Pin, time::Duration};

use serde::Serialize;
use tracing::debug;

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::LlmError;

/// Asynchronous chat-completion provider.
///
/// Implement this trait to substitute the remote model with a test double.
pub trait ChatProvider: Send + Sync {
    /// Send a `(system, user)` prompt pair and return the assistant's text.
    fn chat<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Thin client for the hosted Ollama chat API.
pub struct OllamaChatService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl OllamaChatService {
    /// Creates a new [`OllamaChatService`] from the given config.
    ///
    /// # Errors
    /// - [`LlmError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`LlmError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, LlmError> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(LlmError::InvalidEndpoint(cfg.endpoint));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{base}/api/chat");

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a non-streaming chat request and returns the reply text.
    ///
    /// # Errors
    /// - [`LlmError::Transport`] on connection/timeout failures
    /// - [`LlmError::HttpStatus`] on a non-2xx upstream status
    /// - [`LlmError::Decode`] if the body is not valid JSON
    pub async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.cfg.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
        };

        debug!(
            target: "llm_service::chat",
            model = %self.cfg.model,
            url = %self.url_chat,
            "generate: sending chat request"
        );

        let resp = self
            .client
            .post(&self.url_chat)
            .bearer_auth(&self.cfg.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let snippet = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".into());
            return Err(LlmError::HttpStatus {
                status,
                url: self.url_chat.clone(),
                snippet: snippet.chars().take(300).collect(),
            });
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        Ok(extract_reply(&value))
    }
}

impl ChatProvider for OllamaChatService {
    fn chat<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(system, user))
    }
}

/// Pull the assistant text out of whichever response shape the server sent.
///
/// Priority order: `message.content`, the first element of a list of message
/// objects (top-level array or under a `messages` key), a bare string body,
/// then the raw JSON rendered as a string.
fn extract_reply(value: &serde_json::Value) -> String {
    if let Some(content) = value
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
    {
        return content.to_string();
    }

    if let Some(content) = value
        .as_array()
        .and_then(|msgs| msgs.first())
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
    {
        return content.to_string();
    }

    if let Some(content) = value
        .get("messages")
        .and_then(serde_json::Value::as_array)
        .and_then(|msgs| msgs.first())
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
    {
        return content.to_string();
    }

    if let Some(s) = value.as_str() {
        return s.to_string();
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_message_object_shape() {
        let v = json!({"message": {"role": "assistant", "content": "hello"}});
        assert_eq!(extract_reply(&v), "hello");
    }

    #[test]
    fn extracts_top_level_list_shape() {
        let v = json!([{"role": "assistant", "content": "hello from list"}]);
        assert_eq!(extract_reply(&v), "hello from list");
    }

    #[test]
    fn extracts_message_list_shape() {
        let v = json!({"messages": [{"role": "assistant", "content": "first"}, {"content": "second"}]});
        assert_eq!(extract_reply(&v), "first");
    }

    #[test]
    fn extracts_bare_string() {
        let v = json!("plain answer");
        assert_eq!(extract_reply(&v), "plain answer");
    }

    #[test]
    fn falls_back_to_raw_json() {
        let v = json!({"unexpected": true});
        assert_eq!(extract_reply(&v), r#"{"unexpected":true}"#);
    }

    #[test]
    fn message_shape_wins_over_list_shape() {
        let v = json!({
            "message": {"content": "object"},
            "messages": [{"content": "list"}]
        });
        assert_eq!(extract_reply(&v), "object");
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let cfg = LlmModelConfig {
            endpoint: "ollama.com".into(),
            model: "m".into(),
            api_key: String::new(),
            timeout_secs: 5,
        };
        assert!(matches!(
            OllamaChatService::new(cfg),
            Err(LlmError::InvalidEndpoint(_))
        ));
    }
}
