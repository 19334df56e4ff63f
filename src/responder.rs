use log::warn;

use crate::command::Intent;
use crate::llm_manager::LLMManager;
use crate::prompts;

/// Apology used when the open-ended tutoring call fails. Unlike the command
/// errors it never exposes the underlying failure reason.
const GENERAL_FALLBACK: &str = "I'm having trouble processing that right now. \
Try using one of the specific commands like /help to see what I can do!";

/// Turns an intent into outbound text.
///
/// This is the absorption boundary for backend failures: every arm renders
/// a string, so callers never see an error for a single message.
pub struct Responder<'a> {
    llm: &'a LLMManager,
}

impl<'a> Responder<'a> {
    pub fn new(llm: &'a LLMManager) -> Self {
        Self { llm }
    }

    pub async fn respond(&self, intent: Intent) -> String {
        match intent {
            Intent::Curriculum(topic) if topic.is_empty() => usage("/curriculum", "rust"),
            Intent::Curriculum(topic) => {
                self.generate(&prompts::curriculum(&topic), "curriculum").await
            }
            Intent::Socratic(concept) if concept.is_empty() => usage("/socratic", "recursion"),
            Intent::Socratic(concept) => {
                self.generate(&prompts::socratic(&concept), "Socratic questions")
                    .await
            }
            Intent::Quiz(topic) if topic.is_empty() => usage("/quiz", "python basics"),
            Intent::Quiz(topic) => self.generate(&prompts::quiz(&topic), "quiz").await,
            Intent::Project(topic) if topic.is_empty() => usage("/project", "web scraping"),
            Intent::Project(topic) => self.generate(&prompts::project(&topic), "project").await,
            Intent::Help => prompts::help_text().to_string(),
            Intent::General(text) => match self.llm.send_prompt(&prompts::general(&text)).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!("general tutoring call failed: {err:#}");
                    GENERAL_FALLBACK.to_string()
                }
            },
        }
    }

    /// Successful completions pass through unchanged; failures become the
    /// per-command error string.
    async fn generate(&self, prompt: &str, kind: &str) -> String {
        match self.llm.send_prompt(prompt).await {
            Ok(reply) => reply,
            Err(err) => format!("Error generating {kind}: {err:#}"),
        }
    }
}

/// Hint returned for a recognized command carrying no argument, instead of
/// burning a backend call on empty content.
fn usage(command: &str, example: &str) -> String {
    format!(
        "Please include a topic with {command}, e.g. \"{command} {example}\". \
Type /help for the full command list."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse;
    use crate::llm_manager::LLMProvider;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedProvider {
        reply: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl LLMProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn send_prompt(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl LLMProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn send_prompt(&self, _prompt: &str) -> Result<String> {
            Err(anyhow!("quota exceeded"))
        }
    }

    struct EchoPromptProvider;

    #[async_trait]
    impl LLMProvider for EchoPromptProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn send_prompt(&self, prompt: &str) -> Result<String> {
            Ok(prompt.to_string())
        }
    }

    fn scripted(reply: &str) -> (LLMManager, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let manager = LLMManager::new(
            Box::new(ScriptedProvider {
                reply: reply.to_string(),
                calls: calls.clone(),
            }),
            None,
        );
        (manager, calls)
    }

    #[tokio::test]
    async fn successful_quiz_passes_backend_text_through_unchanged() {
        let (llm, _) = scripted("Question 1: ...\nAnswer: B");
        let responder = Responder::new(&llm);
        let reply = responder.respond(parse("/quiz python basics")).await;
        assert_eq!(reply, "Question 1: ...\nAnswer: B");
    }

    #[tokio::test]
    async fn backend_failure_yields_per_command_error_strings() {
        let llm = LLMManager::new(Box::new(FailingProvider), None);
        let responder = Responder::new(&llm);

        let cases = [
            (Intent::Curriculum("rust".into()), "Error generating curriculum: "),
            (
                Intent::Socratic("recursion".into()),
                "Error generating Socratic questions: ",
            ),
            (Intent::Quiz("algebra".into()), "Error generating quiz: "),
            (Intent::Project("games".into()), "Error generating project: "),
        ];
        for (intent, prefix) in cases {
            let reply = responder.respond(intent).await;
            assert!(reply.starts_with(prefix), "unexpected reply: {reply}");
            assert!(reply.contains("quota exceeded"));
        }
    }

    #[tokio::test]
    async fn general_failure_returns_generic_apology_without_reason() {
        let llm = LLMManager::new(Box::new(FailingProvider), None);
        let responder = Responder::new(&llm);
        let reply = responder.respond(parse("teach me guitar")).await;
        assert_eq!(reply, GENERAL_FALLBACK);
        assert!(!reply.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn help_is_static_and_makes_no_backend_call() {
        let (llm, calls) = scripted("should never be seen");
        let responder = Responder::new(&llm);
        let reply = responder.respond(Intent::Help).await;
        for token in ["/curriculum", "/socratic", "/quiz", "/project", "/help"] {
            assert!(reply.contains(token));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_argument_command_returns_usage_hint_without_backend_call() {
        let (llm, calls) = scripted("should never be seen");
        let responder = Responder::new(&llm);
        let reply = responder.respond(Intent::Quiz(String::new())).await;
        assert!(reply.contains("/quiz"));
        assert!(reply.contains("/help"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn general_prompt_embeds_the_original_text() {
        let llm = LLMManager::new(Box::new(EchoPromptProvider), None);
        let responder = Responder::new(&llm);
        let reply = responder
            .respond(parse("hello, can you help me learn guitar?"))
            .await;
        assert!(reply.contains("hello, can you help me learn guitar?"));
    }

    #[tokio::test]
    async fn respond_parse_is_total_for_odd_inputs() {
        let llm = LLMManager::new(Box::new(FailingProvider), None);
        let responder = Responder::new(&llm);
        for input in ["", "/quiz", "/quiz ", "   ", "/HELP"] {
            // Must produce a string for anything, including bare prefixes.
            let reply = responder.respond(parse(input)).await;
            assert!(!reply.is_empty());
        }
    }
}
