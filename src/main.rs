use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

mod command;
mod config;
mod direct;
mod error;
mod event_bus;
mod llm_manager;
mod logger;
mod prompts;
mod providers;
mod responder;
mod session;

use config::Config;
use direct::DirectRequest;
use event_bus::EventBus;
use llm_manager::LLMManager;
use providers::gemini::GeminiProvider;
use responder::Responder;
use session::{ChatContent, ChatMessage, ChatSession, SessionState};

#[derive(Parser)]
#[command(name = "tutor_agent", about = "AI tutoring agent backed by Gemini")]
struct Args {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,
    /// Answer one legacy direct-call request given as JSON, print the JSON
    /// response and exit
    #[arg(long, value_name = "JSON")]
    direct: Option<String>,
    /// One-shot message; if omitted an interactive chat session starts
    #[arg(last = true)]
    message: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logger::init(args.verbose);

    let config = Config::load(&args.config)?;
    let gemini_config = config
        .ai_providers
        .gemini
        .as_ref()
        .filter(|provider| provider.enabled);
    let provider = GeminiProvider::new(
        gemini_config.map(|p| p.model.clone()),
        gemini_config.and_then(|p| p.temperature),
    )?;

    let event_bus = Arc::new(EventBus::new(100));
    spawn_event_logger(&event_bus);

    let llm = LLMManager::new(Box::new(provider), Some(event_bus.clone()));
    let responder = Responder::new(&llm);
    info!(
        "🎓 {} ready (provider: {})",
        config.agent.name,
        llm.provider_name()
    );

    if let Some(json) = args.direct {
        let request: DirectRequest =
            serde_json::from_str(&json).context("invalid direct request JSON")?;
        let reply = direct::handle(&responder, request).await;
        println!("{}", serde_json::to_string(&reply)?);
        return Ok(());
    }

    let mut session = ChatSession::new(&responder, Some(event_bus.clone()));
    let mut msg_id = 0u64;

    deliver(&mut session, &mut msg_id, ChatContent::StartSession).await;

    if !args.message.is_empty() {
        let text = args.message.join(" ");
        deliver(&mut session, &mut msg_id, ChatContent::Text { text }).await;
        deliver(&mut session, &mut msg_id, ChatContent::EndSession).await;
    } else {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while session.state() == SessionState::Active {
            let Some(line) = lines.next_line().await? else {
                break; // EOF
            };
            if line.trim().is_empty() {
                continue;
            }
            let content = if matches!(line.trim(), "/quit" | "/exit") {
                ChatContent::EndSession
            } else {
                ChatContent::Text { text: line }
            };
            deliver(&mut session, &mut msg_id, content).await;
        }
        if session.state() == SessionState::Active {
            deliver(&mut session, &mut msg_id, ChatContent::EndSession).await;
        }
    }

    let metrics = event_bus.get_metrics().await;
    info!(
        "session summary: {} messages, {} API calls, ~{} tokens, {} API errors",
        metrics.messages_handled, metrics.total_api_calls, metrics.total_tokens, metrics.api_errors
    );
    Ok(())
}

/// Wrap one content item in a chat message, hand it to the session and print
/// whatever comes back.
async fn deliver(session: &mut ChatSession<'_>, msg_id: &mut u64, content: ChatContent) {
    *msg_id += 1;
    let msg = ChatMessage {
        msg_id: *msg_id,
        content: vec![content],
    };
    let (_ack, outbound) = session.handle_message(&msg).await;
    for out in outbound {
        println!("{}", out.text);
    }
}

fn spawn_event_logger(event_bus: &Arc<EventBus>) {
    let mut events = event_bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            debug!("event: {event:?}");
        }
    });
}
