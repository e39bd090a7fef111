//! Code sequence representation
//!
//! A `Code` is a fixed-length sequence of alphabet symbols, used both for the
//! secret and for player guesses. Raw input is normalized (trimmed,
//! uppercased) before validation, so guesses are case-insensitive.

use super::{ALPHABET, CODE_LENGTH};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// A fixed-length sequence of alphabet symbols
///
/// Stores the symbols as bytes in canonical uppercase. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    symbols: [u8; CODE_LENGTH],
}

/// Error type for rejected guess input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "guess must be exactly {CODE_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "invalid symbol '{ch}'. Use only: {ALPHABET}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse and validate player input into a `Code`
    ///
    /// Surrounding whitespace is trimmed and letters are folded to uppercase
    /// before validation, so ` abcd ` and `ABCD` parse identically. Parsing
    /// an already-normalized valid string is an identity.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The normalized input is not exactly [`CODE_LENGTH`] characters
    /// - Any character is outside [`ALPHABET`]
    ///
    /// # Examples
    /// ```
    /// use ciphermind::core::Code;
    ///
    /// let code = Code::parse(" abcd ").unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    ///
    /// assert!(Code::parse("ABC").is_err());
    /// assert!(Code::parse("ABCZ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let normalized = input.trim().to_uppercase();

        let count = normalized.chars().count();
        if count != CODE_LENGTH {
            return Err(CodeError::InvalidLength(count));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(normalized.chars()) {
            if !ALPHABET.contains(ch) {
                return Err(CodeError::InvalidSymbol(ch));
            }
            *slot = ch as u8;
        }

        Ok(Self { symbols })
    }

    /// Generate a random code from the given source
    ///
    /// Each symbol is drawn independently and uniformly from [`ALPHABET`],
    /// with replacement, so the secret may contain repeated symbols. The
    /// caller owns the random source; a seeded source reproduces the same
    /// code.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let alphabet = ALPHABET.as_bytes();
        let mut symbols = [0u8; CODE_LENGTH];
        for slot in &mut symbols {
            *slot = alphabet[rng.random_range(0..alphabet.len())];
        }
        Self { symbols }
    }

    /// Get the code as a byte array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.symbols
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if position >= [`CODE_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.symbols[position]
    }

    /// Get the count of each symbol in the code
    ///
    /// Used for duplicate-aware feedback scoring.
    #[inline]
    pub(crate) fn symbol_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &sym in &self.symbols {
            *counts.entry(sym).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &sym in &self.symbols {
            write!(f, "{}", sym as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_valid() {
        let code = Code::parse("ABCD").unwrap();
        assert_eq!(code.symbols(), b"ABCD");
        assert_eq!(code.to_string(), "ABCD");
    }

    #[test]
    fn parse_lowercase_normalized() {
        let code = Code::parse("abcd").unwrap();
        assert_eq!(code.to_string(), "ABCD");

        let mixed = Code::parse("aBcD").unwrap();
        assert_eq!(mixed.to_string(), "ABCD");
    }

    #[test]
    fn parse_whitespace_trimmed() {
        let code = Code::parse("  abcd\n").unwrap();
        assert_eq!(code.to_string(), "ABCD");
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(Code::parse("ABC"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::parse("ABCDE"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
        assert_eq!(Code::parse("   "), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn parse_invalid_symbol() {
        assert_eq!(Code::parse("ABCZ"), Err(CodeError::InvalidSymbol('Z')));
        assert_eq!(Code::parse("AB1D"), Err(CodeError::InvalidSymbol('1')));
        // First offender reported
        assert_eq!(Code::parse("ZXCV"), Err(CodeError::InvalidSymbol('Z')));
    }

    #[test]
    fn parse_length_checked_before_symbols() {
        // Wrong-length input with bad symbols reports the length problem
        assert_eq!(Code::parse("ZZZ"), Err(CodeError::InvalidLength(3)));
    }

    #[test]
    fn parse_idempotent() {
        let first = Code::parse("aabb").unwrap();
        let again = Code::parse(&first.to_string()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn parse_case_insensitive_equality() {
        assert_eq!(Code::parse("abcd").unwrap(), Code::parse("ABCD").unwrap());
    }

    #[test]
    fn symbol_at_positions() {
        let code = Code::parse("FACE").unwrap();
        assert_eq!(code.symbol_at(0), b'F');
        assert_eq!(code.symbol_at(1), b'A');
        assert_eq!(code.symbol_at(2), b'C');
        assert_eq!(code.symbol_at(3), b'E');
    }

    #[test]
    fn symbol_counts_duplicates() {
        let code = Code::parse("AABC").unwrap();
        let counts = code.symbol_counts();
        assert_eq!(counts.get(&b'A'), Some(&2));
        assert_eq!(counts.get(&b'B'), Some(&1));
        assert_eq!(counts.get(&b'C'), Some(&1));
        assert_eq!(counts.get(&b'D'), None);
    }

    #[test]
    fn random_symbols_from_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = Code::random(&mut rng);
            assert!(
                code.symbols()
                    .iter()
                    .all(|sym| ALPHABET.as_bytes().contains(sym))
            );
        }
    }

    #[test]
    fn random_seeded_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(Code::random(&mut a), Code::random(&mut b));
    }

    #[test]
    fn random_seeds_diverge() {
        // Two seeds producing 20 identical codes each would be astonishing
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let codes_a: Vec<Code> = (0..20).map(|_| Code::random(&mut a)).collect();
        let codes_b: Vec<Code> = (0..20).map(|_| Code::random(&mut b)).collect();
        assert_ne!(codes_a, codes_b);
    }

    #[test]
    fn display_roundtrip() {
        let code = Code::parse("DEAF").unwrap();
        assert_eq!(format!("{code}"), "DEAF");
    }
}
