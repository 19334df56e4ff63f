/// A classified inbound chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Curriculum(String),
    Socratic(String),
    Quiz(String),
    Project(String),
    Help,
    General(String),
}

/// Classify a raw chat line into a tutoring intent.
///
/// Matching is case-insensitive on the trimmed text, first prefix wins.
/// Text that matches no command keeps its original form for the general
/// tutoring path; case folding is only used for matching, never for content.
pub fn parse(text: &str) -> Intent {
    let normalized = text.trim().to_lowercase();

    if let Some(rest) = normalized.strip_prefix("/curriculum ") {
        Intent::Curriculum(rest.trim().to_string())
    } else if let Some(rest) = normalized.strip_prefix("/socratic ") {
        Intent::Socratic(rest.trim().to_string())
    } else if let Some(rest) = normalized.strip_prefix("/quiz ") {
        Intent::Quiz(rest.trim().to_string())
    } else if let Some(rest) = normalized.strip_prefix("/project ") {
        Intent::Project(rest.trim().to_string())
    } else if normalized.starts_with("/help") {
        Intent::Help
    } else {
        Intent::General(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_yield_tagged_intents_with_trimmed_arguments() {
        assert_eq!(
            parse("/curriculum machine learning"),
            Intent::Curriculum("machine learning".to_string())
        );
        assert_eq!(
            parse("/socratic recursion"),
            Intent::Socratic("recursion".to_string())
        );
        assert_eq!(
            parse("/quiz python basics"),
            Intent::Quiz("python basics".to_string())
        );
        assert_eq!(
            parse("/project web scraping"),
            Intent::Project("web scraping".to_string())
        );
        assert_eq!(parse("/help"), Intent::Help);
    }

    #[test]
    fn matching_is_case_insensitive_and_ignores_surrounding_whitespace() {
        assert_eq!(
            parse("  /QUIZ rust ownership  "),
            Intent::Quiz("rust ownership".to_string())
        );
        assert_eq!(parse("\t/Help\n"), Intent::Help);
    }

    #[test]
    fn unrecognized_text_becomes_general_with_original_text() {
        let text = "Hello, can you help me learn Guitar?";
        assert_eq!(parse(text), Intent::General(text.to_string()));
    }

    #[test]
    fn empty_input_is_general() {
        assert_eq!(parse(""), Intent::General(String::new()));
    }

    #[test]
    fn bare_command_without_trailing_space_is_general() {
        // "/quiz" has no argument separator, so it never matches "/quiz ".
        assert_eq!(parse("/quiz"), Intent::General("/quiz".to_string()));
    }

    #[test]
    fn command_with_only_trailing_whitespace_is_general() {
        // Trimming happens before prefix matching, so there is no argument
        // left to match against "/quiz ".
        assert_eq!(parse("/quiz   "), Intent::General("/quiz   ".to_string()));
    }

    #[test]
    fn help_matches_as_prefix() {
        assert_eq!(parse("/help please"), Intent::Help);
    }
}
