//! Display functions for game events

use super::formatters::{feedback_summary, peg_line};
use crate::core::{ALPHABET, CODE_LENGTH, Feedback, MAX_ATTEMPTS};
use crate::game::{GuessRecord, Session};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Print the game introduction banner
pub fn print_welcome() {
    println!();
    println!(
        "{}",
        "╔════════════════════════════════════════════╗".bright_cyan().bold()
    );
    println!(
        "{}",
        "║       🧠 CIPHERMIND - CODE BREAKING 🧠     ║".bright_cyan().bold()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════════╝".bright_cyan().bold()
    );
    println!();
    println!("{}", "Welcome to CipherMind!".yellow());
    println!(
        "I've created a secret code using {} symbols.",
        CODE_LENGTH.to_string().bold()
    );
    println!(
        "Your mission: crack the code in {} attempts or less!",
        MAX_ATTEMPTS.to_string().bold()
    );
    println!();
    println!(
        "{} {}",
        "Available symbols:".purple(),
        ALPHABET.purple().bold()
    );
    println!();
    println!("After each guess, I'll give you clues:");
    println!(
        "  {} Green pegs = symbols in the correct position",
        "●".green()
    );
    println!(
        "  {} Yellow pegs = correct symbols but wrong position",
        "●".yellow()
    );
    println!();
    println!(
        "{}",
        "Let's begin! Enter your guess (e.g., ABCD):".cyan()
    );
    println!();
}

/// Print every recorded guess with its feedback pegs
pub fn print_history(records: &[GuessRecord]) {
    if records.is_empty() {
        return;
    }

    println!("{}", "\n--- Guess History ---".bold());
    for (i, record) in records.iter().enumerate() {
        let summary = if record.feedback.is_blank() {
            feedback_summary(record.feedback).red().to_string()
        } else {
            feedback_summary(record.feedback)
        };

        let pegs = peg_line(record.feedback);
        if pegs.is_empty() {
            println!(
                "Attempt {}: {} → {summary}",
                i + 1,
                record.guess.to_string().bold()
            );
        } else {
            println!(
                "Attempt {}: {} → {pegs} {summary}",
                i + 1,
                record.guess.to_string().bold()
            );
        }
    }
    println!();
}

/// Print a randomly chosen encouragement line matched to the player's progress
pub fn print_encouragement<R: Rng + ?Sized>(rng: &mut R, feedback: Feedback, attempts: usize) {
    let messages: &[&str] = if usize::from(feedback.exact()) == CODE_LENGTH - 1 {
        &[
            "So close! Just one more symbol!",
            "You're almost there! One more to go!",
            "Nearly cracked it! Keep going!",
        ]
    } else if usize::from(feedback.exact()) >= CODE_LENGTH / 2 {
        &[
            "Good progress! You're on the right track!",
            "Nice work! You're getting warmer!",
            "Excellent deduction! Keep it up!",
        ]
    } else if attempts > MAX_ATTEMPTS / 2 {
        &[
            "Don't give up! Try a different approach!",
            "Hmm, time to think outside the box!",
            "Keep analyzing the clues!",
        ]
    } else {
        &[
            "Interesting guess! Study the feedback carefully.",
            "Use the clues to narrow down the possibilities!",
            "Logic will lead you to victory!",
        ]
    };

    if let Some(message) = messages.choose(rng) {
        println!("{}", message.cyan());
    }
}

/// Warn the player when the attempt budget is nearly spent
pub fn print_low_attempts_warning(remaining: usize) {
    let noun = if remaining == 1 { "attempt" } else { "attempts" };
    println!(
        "{}",
        format!("⚠️  Only {remaining} {noun} remaining!").red()
    );
}

/// Print the victory banner, revealing the code and the attempts used
pub fn print_win(session: &Session) {
    println!("{}", "\n🎉 CONGRATULATIONS! 🎉".green().bold());
    println!(
        "{}",
        format!(
            "You cracked the code {} in {} {}!",
            session.secret(),
            session.attempts(),
            if session.attempts() == 1 {
                "attempt"
            } else {
                "attempts"
            }
        )
        .green()
    );
    println!("{}", "Your deduction skills are impressive!".yellow());
}

/// Print the defeat banner, revealing the code
pub fn print_loss(session: &Session) {
    println!("{}", "\n💀 GAME OVER 💀".red().bold());
    println!(
        "{}",
        format!(
            "You ran out of attempts! The secret code was: {}",
            session.secret()
        )
        .red()
    );
    println!("{}", "Better luck next time, code breaker!".yellow());
}

/// Print the farewell line on exit
pub fn print_farewell() {
    println!("{}", "\nThanks for playing CipherMind! 🧠".cyan());
}
