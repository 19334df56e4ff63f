//! Legacy point-to-point request surface.
//!
//! Four request/response message pairs that bypass the chat session entirely
//! and call straight through to the responder.

use serde::{Deserialize, Serialize};

use crate::command::Intent;
use crate::responder::Responder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocraticRequest {
    pub concept: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIResponse {
    pub response: String,
}

/// Envelope for the four direct request kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectRequest {
    Curriculum(CurriculumRequest),
    Socratic(SocraticRequest),
    Quiz(QuizRequest),
    Project(ProjectRequest),
}

/// Answer a direct request with the same responder logic the chat path uses.
pub async fn handle(responder: &Responder<'_>, request: DirectRequest) -> AIResponse {
    let intent = match request {
        DirectRequest::Curriculum(req) => Intent::Curriculum(req.topic),
        DirectRequest::Socratic(req) => Intent::Socratic(req.concept),
        DirectRequest::Quiz(req) => Intent::Quiz(req.topic),
        DirectRequest::Project(req) => Intent::Project(req.topic),
    };
    AIResponse {
        response: responder.respond(intent).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_manager::{LLMManager, LLMProvider};
    use anyhow::Result;
    use async_trait::async_trait;

    struct CannedProvider;

    #[async_trait]
    impl LLMProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn send_prompt(&self, _prompt: &str) -> Result<String> {
            Ok("Question 1: ...\nAnswer: B".to_string())
        }
    }

    #[tokio::test]
    async fn json_quiz_request_round_trips_through_the_responder() {
        let llm = LLMManager::new(Box::new(CannedProvider), None);
        let responder = Responder::new(&llm);

        let request: DirectRequest =
            serde_json::from_str(r#"{"type":"quiz","topic":"python basics"}"#).unwrap();
        let reply = handle(&responder, request).await;
        assert_eq!(reply.response, "Question 1: ...\nAnswer: B");

        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("\"response\""));
    }

    #[tokio::test]
    async fn each_request_kind_maps_to_its_intent() {
        let llm = LLMManager::new(Box::new(CannedProvider), None);
        let responder = Responder::new(&llm);

        for json in [
            r#"{"type":"curriculum","topic":"rust"}"#,
            r#"{"type":"socratic","concept":"recursion"}"#,
            r#"{"type":"quiz","topic":"algebra"}"#,
            r#"{"type":"project","topic":"games"}"#,
        ] {
            let request: DirectRequest = serde_json::from_str(json).unwrap();
            let reply = handle(&responder, request).await;
            assert!(!reply.response.is_empty());
        }
    }
}
