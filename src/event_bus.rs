use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

/// Events emitted by the session handler and the LLM manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Session lifecycle events
    SessionStarted,
    SessionEnded,

    // Per-message events
    MessageAcknowledged {
        msg_id: u64,
    },
    MessageReceived {
        chars: usize,
    },
    ResponseSent {
        intent: String,
        chars: usize,
    },

    // Backend API events
    APICallStarted {
        provider: String,
        model: String,
    },
    APICallCompleted {
        provider: String,
        tokens: usize,
    },
    APIError {
        provider: String,
        error: String,
    },
}

/// Broadcast bus for component communication.
pub struct EventBus {
    sender: broadcast::Sender<Event>,
    metrics: Arc<RwLock<Metrics>>,
}

/// Accumulated metrics from events.
#[derive(Debug, Default, Clone)]
pub struct Metrics {
    pub sessions_started: usize,
    pub sessions_ended: usize,
    pub messages_handled: usize,
    pub responses_sent: usize,
    pub total_api_calls: usize,
    pub total_tokens: usize,
    pub api_errors: usize,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            metrics: Arc::new(RwLock::new(Metrics::default())),
        }
    }

    /// Subscribe to events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers.
    pub async fn emit(&self, event: Event) -> Result<()> {
        self.update_metrics(&event).await;

        // A send error only means there are no receivers right now.
        let _ = self.sender.send(event);
        Ok(())
    }

    /// Get current metrics.
    pub async fn get_metrics(&self) -> Metrics {
        self.metrics.read().await.clone()
    }

    async fn update_metrics(&self, event: &Event) {
        let mut metrics = self.metrics.write().await;

        match event {
            Event::SessionStarted => metrics.sessions_started += 1,
            Event::SessionEnded => metrics.sessions_ended += 1,
            Event::MessageReceived { .. } => metrics.messages_handled += 1,
            Event::ResponseSent { .. } => metrics.responses_sent += 1,
            Event::APICallCompleted { tokens, .. } => {
                metrics.total_api_calls += 1;
                metrics.total_tokens += tokens;
            }
            Event::APIError { .. } => metrics.api_errors += 1,
            _ => {}
        }
    }
}
