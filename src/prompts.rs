//! Prompt templates for the generative backend, one per templated intent.

/// Fixed-structure four week roadmap prompt.
pub fn curriculum(topic: &str) -> String {
    format!(
        r#"Create a practical learning roadmap for "{topic}". Provide:

WEEK 1: Foundation
- Core concepts to learn
- 2-3 hands-on exercises
- Recommended resources

WEEK 2: Building Skills
- Key skills to develop
- Practice projects
- Resources

WEEK 3: Application
- Real-world applications
- Intermediate projects
- Advanced resources

WEEK 4: Mastery
- Advanced topics
- Capstone project ideas
- Next steps

Be specific and actionable. Include actual resource names, websites, or tools when possible.
Format as clean text without HTML or markdown."#
    )
}

/// Six progressively harder guiding questions, returned as a numbered list.
pub fn socratic(concept: &str) -> String {
    format!(
        r#"You are a Socratic tutor helping a student understand "{concept}".
Create 6 progressive guiding questions that:
1. Start with basic understanding
2. Build complexity gradually
3. Encourage critical thinking
4. Connect to real-world applications

Return as a numbered list, one question per line."#
    )
}

/// At least five multiple-choice questions with lettered options and answers.
pub fn quiz(topic: &str) -> String {
    format!(
        r#"Act as a quiz creator. Generate at least 5 multiple-choice questions on "{topic}".
Format each question as:

Question X: [Question text]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]
Answer: [Correct letter]

Include brief explanations for the correct answers."#
    )
}

/// Beginner-friendly project brief.
pub fn project(topic: &str) -> String {
    format!(
        r#"Act as a mentor. Suggest a beginner-friendly project for "{topic}".
Include:
- Project overview
- Learning objectives
- Step-by-step breakdown
- Required resources
- Expected timeline

Keep it practical and achievable."#
    )
}

/// Open-ended tutoring prompt embedding the student's full original text.
pub fn general(text: &str) -> String {
    format!(
        r#"You are a helpful AI tutor. The student said: "{text}"

IMPORTANT: Provide direct, actionable help. Don't ask multiple questions back.

If they want to learn something:
- Give them a clear, practical roadmap or explanation
- Provide specific steps they can take
- Include resources or next actions

If they ask about a concept:
- Explain it clearly with examples
- Make it practical and applicable

If they want a roadmap for a topic:
- Create a structured learning path
- Include timeframes and milestones
- Suggest specific resources

Keep your response direct, practical, and immediately useful. Avoid asking multiple clarifying questions - instead, provide the most commonly needed information for their request."#
    )
}

/// Static command reference. No backend call is made for this.
pub fn help_text() -> &'static str {
    r#"🎓 Welcome to your AI Tutor! Here are the available commands:

📚 /curriculum [topic] - Get a 4-week learning curriculum
❓ /socratic [concept] - Get Socratic questioning for deeper understanding
📝 /quiz [topic] - Generate practice quiz questions
🛠️ /project [topic] - Get project suggestions and guidance
❓ /help - Show this help message

You can also just chat naturally and I'll do my best to help with your learning!

Example: "/curriculum machine learning" or "/quiz python basics""#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_embed_the_argument() {
        assert!(curriculum("rust").contains("\"rust\""));
        assert!(socratic("recursion").contains("\"recursion\""));
        assert!(quiz("python basics").contains("\"python basics\""));
        assert!(project("web scraping").contains("\"web scraping\""));
        assert!(general("how do I learn guitar?").contains("how do I learn guitar?"));
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text();
        for token in ["/curriculum", "/socratic", "/quiz", "/project", "/help"] {
            assert!(help.contains(token), "help text missing {token}");
        }
    }

    #[test]
    fn socratic_asks_for_six_questions() {
        assert!(socratic("gravity").contains("6 progressive guiding questions"));
    }

    #[test]
    fn quiz_asks_for_at_least_five_questions() {
        assert!(quiz("algebra").contains("at least 5 multiple-choice questions"));
    }
}
