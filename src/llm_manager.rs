use crate::event_bus::{Event, EventBus};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait representing a generative-text backend.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Name of the provider.
    fn name(&self) -> &str;

    /// Model name of the provider.
    fn model_name(&self) -> &str {
        "unknown"
    }

    /// Send a prompt to the provider and return the completion text.
    async fn send_prompt(&self, prompt: &str) -> Result<String>;
}

/// Wraps the configured provider and reports API activity on the event bus.
///
/// Provider and bus are read-only after construction, so sessions share the
/// manager without coordination.
pub struct LLMManager {
    provider: Box<dyn LLMProvider>,
    event_bus: Option<Arc<EventBus>>,
}

impl LLMManager {
    pub fn new(provider: Box<dyn LLMProvider>, event_bus: Option<Arc<EventBus>>) -> Self {
        Self {
            provider,
            event_bus,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send a prompt to the configured provider. One call per intent, no
    /// retries, no timeout override.
    pub async fn send_prompt(&self, prompt: &str) -> Result<String> {
        if let Some(bus) = &self.event_bus {
            let _ = bus
                .emit(Event::APICallStarted {
                    provider: self.provider.name().to_string(),
                    model: self.provider.model_name().to_string(),
                })
                .await;
        }

        let result = self.provider.send_prompt(prompt).await;

        if let Some(bus) = &self.event_bus {
            match &result {
                Ok(response) => {
                    // Rough estimate: 1 token ≈ 4 characters.
                    let tokens = (prompt.len() + response.len()) / 4;
                    let _ = bus
                        .emit(Event::APICallCompleted {
                            provider: self.provider.name().to_string(),
                            tokens,
                        })
                        .await;
                }
                Err(e) => {
                    let _ = bus
                        .emit(Event::APIError {
                            provider: self.provider.name().to_string(),
                            error: e.to_string(),
                        })
                        .await;
                }
            }
        }

        result
    }
}
