//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::Colorize;

/// Build the peg line for a feedback value
///
/// One green peg per exact match followed by one yellow peg per partial
/// match. Empty when nothing matched.
#[must_use]
pub fn peg_line(feedback: Feedback) -> String {
    format!(
        "{}{}",
        "●".repeat(usize::from(feedback.exact())).green(),
        "●".repeat(usize::from(feedback.partial())).yellow()
    )
}

/// Summarize feedback counts as display text
#[must_use]
pub fn feedback_summary(feedback: Feedback) -> String {
    if feedback.is_blank() {
        "None correct".to_string()
    } else {
        format!(
            "({} exact, {} misplaced)",
            feedback.exact(),
            feedback.partial()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        Feedback::score(
            &Code::parse(guess).unwrap(),
            &Code::parse(secret).unwrap(),
        )
    }

    #[test]
    fn peg_line_one_per_match() {
        colored::control::set_override(false);
        let pegs = peg_line(feedback("ABDC", "ABCD"));
        assert_eq!(pegs.chars().filter(|&c| c == '●').count(), 4);
    }

    #[test]
    fn peg_line_empty_when_blank() {
        colored::control::set_override(false);
        let pegs = peg_line(feedback("EEEE", "ABCD"));
        assert!(pegs.is_empty());
    }

    #[test]
    fn summary_counts() {
        let summary = feedback_summary(feedback("ABDC", "ABCD"));
        assert_eq!(summary, "(2 exact, 2 misplaced)");
    }

    #[test]
    fn summary_blank() {
        let summary = feedback_summary(feedback("EEEE", "ABCD"));
        assert_eq!(summary, "None correct");
    }

    #[test]
    fn summary_win() {
        let summary = feedback_summary(feedback("ABCD", "ABCD"));
        assert_eq!(summary, "(4 exact, 0 misplaced)");
    }
}
