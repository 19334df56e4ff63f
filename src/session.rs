use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::command;
use crate::event_bus::{Event, EventBus};
use crate::responder::Responder;

pub const WELCOME_TEXT: &str = "🎓 Welcome to your AI Tutor! Type /help to see \
available commands or just start asking questions!";

pub const FAREWELL_TEXT: &str = "👋 Thanks for learning with me today! Feel free \
to start a new session anytime you need help.";

/// One content item of a chat message. Closed set: a new content kind is a
/// compile-time-visible gap in every match below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChatContent {
    StartSession,
    Text { text: String },
    EndSession,
}

/// Inbound chat message as delivered by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub msg_id: u64,
    pub content: Vec<ChatContent>,
}

/// Receipt for an inbound message, sent before any processing happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub acknowledged_msg_id: u64,
}

/// Outbound text, optionally flagging the session as closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub end_session: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Ended,
}

/// Per-session message handler: Idle -> Active -> Ended.
///
/// Stateless across messages beyond this gating; each message is handled to
/// completion before the next is read, so replies keep arrival order.
pub struct ChatSession<'a> {
    state: SessionState,
    responder: &'a Responder<'a>,
    event_bus: Option<Arc<EventBus>>,
}

impl<'a> ChatSession<'a> {
    pub fn new(responder: &'a Responder<'a>, event_bus: Option<Arc<EventBus>>) -> Self {
        Self {
            state: SessionState::Idle,
            responder,
            event_bus,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle one inbound message. The acknowledgement is unconditional and
    /// independent of the processing outcome; exactly one outbound text is
    /// produced per text content item.
    pub async fn handle_message(
        &mut self,
        msg: &ChatMessage,
    ) -> (Acknowledgement, Vec<OutboundMessage>) {
        let ack = Acknowledgement {
            acknowledged_msg_id: msg.msg_id,
        };
        self.emit(Event::MessageAcknowledged { msg_id: msg.msg_id })
            .await;

        let mut outbound = Vec::new();
        for item in &msg.content {
            if let Some(reply) = self.handle_content(item).await {
                outbound.push(reply);
            }
        }
        (ack, outbound)
    }

    async fn handle_content(&mut self, content: &ChatContent) -> Option<OutboundMessage> {
        match content {
            ChatContent::StartSession => {
                if self.state != SessionState::Idle {
                    warn!("start-session received in {:?} state, ignoring", self.state);
                    return None;
                }
                info!("session started");
                self.state = SessionState::Active;
                self.emit(Event::SessionStarted).await;
                Some(OutboundMessage {
                    text: WELCOME_TEXT.to_string(),
                    end_session: false,
                })
            }
            ChatContent::Text { text } => {
                if self.state != SessionState::Active {
                    warn!("text received outside an active session, ignoring");
                    return None;
                }
                debug!("text message: {text}");
                self.emit(Event::MessageReceived { chars: text.len() }).await;

                let intent = command::parse(text);
                let intent_name = intent_name(&intent);
                let reply = self.responder.respond(intent).await;
                self.emit(Event::ResponseSent {
                    intent: intent_name.to_string(),
                    chars: reply.len(),
                })
                .await;
                Some(OutboundMessage {
                    text: reply,
                    end_session: false,
                })
            }
            ChatContent::EndSession => {
                if self.state != SessionState::Active {
                    warn!("end-session received in {:?} state, ignoring", self.state);
                    return None;
                }
                info!("session ended");
                self.state = SessionState::Ended;
                self.emit(Event::SessionEnded).await;
                Some(OutboundMessage {
                    text: FAREWELL_TEXT.to_string(),
                    end_session: true,
                })
            }
        }
    }

    async fn emit(&self, event: Event) {
        if let Some(bus) = &self.event_bus {
            let _ = bus.emit(event).await;
        }
    }
}

fn intent_name(intent: &command::Intent) -> &'static str {
    match intent {
        command::Intent::Curriculum(_) => "curriculum",
        command::Intent::Socratic(_) => "socratic",
        command::Intent::Quiz(_) => "quiz",
        command::Intent::Project(_) => "project",
        command::Intent::Help => "help",
        command::Intent::General(_) => "general",
    }
}
