use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::TutorError;
use crate::llm_manager::LLMProvider;

const SYSTEM_PROMPT: &str = "You are a helpful AI tutor.";

/// Gemini backend, reached through its OpenAI-compatible chat endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatTurn>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatTurn {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatTurn,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: usize,
    completion_tokens: usize,
    total_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider. The API key is read from the
    /// `GOOGLE_API_KEY` environment variable; its absence is a fatal
    /// startup condition, never a runtime error.
    pub fn new(model: Option<String>, temperature: Option<f32>) -> Result<Self> {
        let api_key = env::var("GOOGLE_API_KEY").map_err(|_| {
            TutorError::ConfigurationMissing(
                "GOOGLE_API_KEY environment variable not set".to_string(),
            )
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            temperature: temperature.unwrap_or(0.7),
        })
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatTurn {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatTurn {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let reason = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_error) => format!(
                    "{} (type: {})",
                    api_error.error.message, api_error.error.error_type
                ),
                Err(_) => format!("status {status}: {body}"),
            };
            return Err(TutorError::BackendFailure(reason).into());
        }

        let completion: ChatResponse =
            serde_json::from_str(&body).context("Failed to parse Gemini response")?;

        if let Some(usage) = completion.usage {
            info!(
                "Gemini token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No response choices from Gemini"))?;

        Ok(choice.message.content)
    }
}
