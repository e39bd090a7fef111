//! CipherMind
//!
//! A terminal Mastermind-style code-breaking puzzle. The program generates a
//! hidden symbol sequence; the player submits guesses and receives exact and
//! partial match feedback until the code is cracked or attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use ciphermind::core::{Code, Feedback};
//!
//! // Parse a secret and a guess
//! let secret = Code::parse("ABCD").unwrap();
//! let guess = Code::parse("ABDC").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.exact(), 2);
//! assert_eq!(feedback.partial(), 2);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
