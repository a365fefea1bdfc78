//! OpenRouterApiAgent - Direct REST API implementation for OpenRouter.
//!
//! One agent instance addresses one model behind the OpenRouter chat
//! completions endpoint; the fallback chain holds several of them.
//! Configuration priority: ~/.config/orb/secret.json > environment variables

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::agent::{AgentError, CompletionAgent, PromptMessage};
use crate::config;

const BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const REFERER: &str = "https://github.com/orb-app/orb";
const APP_TITLE: &str = "ORB";

/// Agent implementation that talks to the OpenRouter HTTP API.
#[derive(Clone)]
pub struct OpenRouterApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenRouterApiAgent {
    /// Creates a new agent with the provided API key and model.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionFailed` when the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, AgentError> {
        let client = Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                AgentError::ExecutionFailed(format!("Failed to build HTTP client: {err}"))
            })?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Loads the API key from ~/.config/orb/secret.json or environment
    /// variables.
    ///
    /// Priority:
    /// 1. ~/.config/orb/secret.json
    /// 2. Environment variable (OPENROUTER_API_KEY)
    pub fn try_from_env(model: impl Into<String>) -> Result<Self, AgentError> {
        if let Ok(secret_config) = config::load_secret_config() {
            if let Some(openrouter) = secret_config.openrouter {
                return Self::new(openrouter.api_key, model);
            }
        }

        let api_key = env::var("OPENROUTER_API_KEY").map_err(|_| {
            AgentError::ExecutionFailed(
                "OPENROUTER_API_KEY not found in ~/.config/orb/secret.json or environment variables"
                    .into(),
            )
        })?;
        Self::new(api_key, model)
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String, AgentError> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::Process {
                status_code: None,
                message: format!("OpenRouter API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenRouter error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            AgentError::Response(format!("Failed to parse OpenRouter response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionAgent for OpenRouterApiAgent {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
    ) -> Result<String, AgentError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens,
        };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<PromptMessage>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    code: Option<i64>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, AgentError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| {
            AgentError::Response("OpenRouter API returned no content in the response".into())
        })
}

fn map_http_error(status: StatusCode, body: String) -> AgentError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    AgentError::Process {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_serializes_to_the_wire_shape() {
        let request = ChatCompletionRequest {
            model: "google/gemini-2.0-flash-001".to_string(),
            messages: vec![PromptMessage::user("hello")],
            max_tokens: 50,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "google/gemini-2.0-flash-001");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 50);
    }

    #[test]
    fn first_choice_content_is_extracted_and_trimmed() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  YES \n"}},{"message":{"content":"NO"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(parsed).unwrap(), "YES");
    }

    #[test]
    fn empty_choices_is_a_response_error() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_text_response(parsed),
            Err(AgentError::Response(_))
        ));
    }

    #[test]
    fn provider_error_body_is_unwrapped() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"rate limited","code":429}}"#.to_string(),
        );
        match err {
            AgentError::Process {
                status_code,
                message,
                is_retryable,
            } => {
                assert_eq!(status_code, Some(429));
                assert_eq!(message, "rate limited");
                assert!(is_retryable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
