//! Guess feedback scoring
//!
//! Feedback counts exact matches (right symbol, right position) and partial
//! matches (right symbol, wrong position). Each secret occurrence can be
//! consumed by at most one match, exact or partial, so duplicate symbols are
//! never double counted.

use super::{CODE_LENGTH, Code};

/// Scored feedback for one guess against the secret
///
/// Invariant: `exact + partial <= CODE_LENGTH`, and `exact == CODE_LENGTH`
/// exactly when the guess equals the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count positions where the symbols coincide as exact
    ///    matches and remove each matched occurrence from the secret's
    ///    available pool
    /// 2. Second pass: each remaining guess symbol counts as a partial match
    ///    if an occurrence of it survives in the pool, consuming it
    ///
    /// # Examples
    /// ```
    /// use ciphermind::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("AABC").unwrap();
    /// let guess = Code::parse("AAAA").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // Only two A's exist in the secret, so only two can match
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.partial(), 0);
    /// ```
    #[must_use]
    pub fn score(guess: &Code, secret: &Code) -> Self {
        let mut available = secret.symbol_counts();
        let mut exact = 0u8;

        // First pass: exact position matches
        for i in 0..CODE_LENGTH {
            if guess.symbol_at(i) == secret.symbol_at(i) {
                exact += 1;

                // Remove from available pool
                if let Some(count) = available.get_mut(&guess.symbol_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right symbol, wrong position
        let mut partial = 0u8;
        for i in 0..CODE_LENGTH {
            if guess.symbol_at(i) != secret.symbol_at(i) {
                if let Some(count) = available.get_mut(&guess.symbol_at(i))
                    && *count > 0
                {
                    partial += 1;
                    *count -= 1;
                }
            }
        }

        Self { exact, partial }
    }

    /// Number of symbols in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of correct symbols in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// True when every position matched, the winning feedback
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// True when no guess symbol matched anywhere
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.exact == 0 && self.partial == 0
    }
}
