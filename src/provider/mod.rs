use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;

/// Total budget for one provider call. A single attempt, no retries.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ── Wire types (OpenAI-compatible chat completions) ──────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Thin client for the text-generation provider. Built once at startup;
/// cheap to clone (the inner reqwest client is reference-counted).
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_url: String,
    model: String,
}

impl CompletionClient {
    pub fn new(api_url: &str, model: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            api_url: api_url.to_string(),
            model: model.to_string(),
        }
    }

    /// Runs a single completion and returns the first choice's message text.
    pub async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, AppError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            max_tokens,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Provider request to {} failed: {e}", self.api_url);
                if e.is_timeout() {
                    AppError::ProviderTimeout(REQUEST_TIMEOUT_SECS)
                } else {
                    AppError::ProviderUnreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Provider returned {status}: {body}");
            return Err(AppError::ProviderRejected {
                status: status.as_u16(),
                message: extract_error_message(&body)
                    .unwrap_or_else(|| format!("provider returned {status}")),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to parse provider response: {e}");
            AppError::EmptyCompletion
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(AppError::EmptyCompletion)
    }
}

/// Pulls `error.message` out of an OpenAI-style error body, if present.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::extract_error_message;

    #[test]
    fn extracts_openai_style_error_message() {
        let body = r#"{"error":{"message":"model overloaded","type":"server_error"}}"#;
        assert_eq!(extract_error_message(body), Some("model overloaded".to_string()));
    }

    #[test]
    fn missing_or_unparseable_error_bodies_yield_none() {
        assert_eq!(extract_error_message("not json"), None);
        assert_eq!(extract_error_message(r#"{"detail":"nope"}"#), None);
        assert_eq!(extract_error_message(r#"{"error":"flat string"}"#), None);
    }
}
