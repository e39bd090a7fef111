//! Interactive game loop
//!
//! Line-oriented driver: prompts for guesses on stdin, renders feedback, and
//! offers a replay once the session ends. Closing the input stream exits
//! cleanly at any point.

use crate::core::{Code, MAX_ATTEMPTS};
use crate::game::{GameState, Session};
use crate::output::{
    print_encouragement, print_farewell, print_history, print_loss, print_low_attempts_warning,
    print_welcome, print_win,
};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the interactive game, replaying until the player declines
///
/// Each replay builds a brand-new [`Session`] around a freshly generated
/// secret. The random source is owned by the caller, so a seeded source
/// produces a reproducible run.
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_play<R: Rng + ?Sized>(rng: &mut R) -> Result<(), String> {
    print_welcome();

    loop {
        let secret = Code::random(rng);
        let mut session = Session::new(secret, MAX_ATTEMPTS);

        if !play_session(&mut session, rng)? {
            break;
        }

        println!();
        let Some(answer) = read_line("Play again? (y/n)")? else {
            break;
        };
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            break;
        }
        println!();
    }

    print_farewell();
    Ok(())
}

/// Play one session to completion
///
/// Returns `Ok(true)` when the game reached a terminal state and the player
/// may be offered a replay, `Ok(false)` when the player quit or the input
/// stream closed mid-game.
fn play_session<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> Result<bool, String> {
    while session.state() == GameState::InProgress {
        let prompt = format!(
            "{} Enter your guess",
            format!(
                "[Attempt {}/{}]",
                session.attempts() + 1,
                session.max_attempts()
            )
            .blue()
        );

        let Some(input) = read_line(&prompt)? else {
            return Ok(false);
        };

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(false);
        }

        let guess = match Code::parse(&input) {
            Ok(guess) => guess,
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
                continue;
            }
        };

        match session.submit(guess) {
            GameState::Won => {
                print_history(session.history());
                print_win(session);
            }
            GameState::Lost => {
                print_history(session.history());
                print_loss(session);
            }
            GameState::InProgress => {
                print_history(session.history());
                if let Some(record) = session.history().last() {
                    print_encouragement(rng, record.feedback, session.attempts());
                }
                if session.remaining() <= 3 {
                    print_low_attempts_warning(session.remaining());
                }
                println!();
            }
        }
    }

    Ok(true)
}

/// Prompt and read one line from stdin
///
/// Returns `Ok(None)` when the stream has closed.
fn read_line(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
