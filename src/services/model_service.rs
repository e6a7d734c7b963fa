use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ConversationTurn, PromptPart, PromptPayload},
};

/// Anything that can turn a prompt (plus prior turns) into generated text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(
        &self,
        history: &[ConversationTurn],
        payload: &PromptPayload,
    ) -> AppResult<String>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.model_timeout_secs))
            .build()
            .map_err(|err| AppError::ConfigurationError(err.to_string()))?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

fn wire_part(part: PromptPart<'_>) -> Value {
    match part {
        PromptPart::Binary { mime_type, data } => json!({
            "inlineData": {
                "mimeType": mime_type,
                "data": STANDARD.encode(data),
            }
        }),
        PromptPart::Text(text) => json!({ "text": text }),
    }
}

/// Request body for `generateContent`: prior turns, then the new message
/// as a single user turn.
pub fn build_request_body(history: &[ConversationTurn], payload: &PromptPayload) -> Value {
    let mut contents: Vec<Value> = history
        .iter()
        .map(|turn| {
            json!({
                "role": turn.role.as_str(),
                "parts": turn.parts.iter().map(|text| json!({ "text": text })).collect::<Vec<_>>(),
            })
        })
        .collect();

    contents.push(json!({
        "role": "user",
        "parts": payload.parts().into_iter().map(wire_part).collect::<Vec<_>>(),
    }));

    json!({
        "contents": contents,
        "generationConfig": {
            "temperature": 0.7,
            "topP": 0.9,
            "topK": 40,
            "maxOutputTokens": 2048,
        }
    })
}

/// Concatenated text parts of the first candidate.
pub fn extract_candidate_text(body: &Value) -> AppResult<String> {
    let parts = body
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|item| item.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            let reason = body
                .pointer("/promptFeedback/blockReason")
                .and_then(Value::as_str)
                .map(|reason| format!("prompt blocked: {}", reason))
                .unwrap_or_else(|| "response contained no candidate text".to_string());
            AppError::ProviderError(reason)
        })?;

    Ok(parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(""))
}

fn provider_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Model request failed with status {}: {}", status, body))
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(
        &self,
        history: &[ConversationTurn],
        payload: &PromptPayload,
    ) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::ProviderError("GEMINI_API_KEY is not configured".to_string()))?;

        log::debug!(
            "Sending prompt with {} prior turn(s) and {} attachment(s) to {}",
            history.len(),
            payload.attachment_count(),
            self.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&build_request_body(history, payload))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = provider_message(status, &body);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::ProviderError(format!("API key rejected: {}", message))
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    AppError::ProviderError(format!("Quota exceeded: {}", message))
                }
                _ => AppError::ProviderError(message),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| AppError::ProviderError(format!("Malformed model response: {}", err)))?;

        extract_candidate_text(&body)
    }
}
