//! Shareable seeds for deterministic board generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed for the board generator's PRNG.
///
/// Seeds render as 64 lowercase hex digits and parse back from the same form,
/// so a generated board can be reproduced from its printed seed. A seed can
/// also be derived from an arbitrary phrase, giving human-memorable
/// deterministic boards.
///
/// # Examples
///
/// ```
/// use slidepuzzle_generator::BoardSeed;
///
/// let seed: BoardSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
///
/// let phrase_seed = BoardSeed::from_phrase("daily puzzle 2026-08-26");
/// assert_eq!(phrase_seed, BoardSeed::from_phrase("daily puzzle 2026-08-26"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit);
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = str::from_utf8(pair).map_err(|_| ParseSeedError::InvalidDigit)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError::InvalidDigit)?;
        }
        Ok(Self(bytes))
    }
}

/// Errors from parsing a hex seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the supplied string.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("seed contains a non-hex digit")]
    InvalidDigit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = BoardSeed::from_bytes([
            0xc1, 0xd4, 0x4b, 0xd6, 0xaf, 0xaf, 0x8a, 0xf6, 0x4f, 0x12, 0x65, 0x46, 0x88, 0x4e,
            0x19, 0x29, 0x8a, 0xcb, 0xdc, 0x33, 0xc3, 0x92, 0x4a, 0x28, 0x13, 0x67, 0x15, 0xde,
            0x94, 0x6e, 0xf3, 0xf1,
        ]);
        let rendered = seed.to_string();
        assert_eq!(
            rendered,
            "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
        );
        assert_eq!(rendered.parse::<BoardSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        assert_eq!(
            "abc".parse::<BoardSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("g{}", "0".repeat(63));
        assert_eq!(bad.parse::<BoardSeed>(), Err(ParseSeedError::InvalidDigit));
    }

    #[test]
    fn test_phrase_derivation_is_stable() {
        let a = BoardSeed::from_phrase("fifteen");
        let b = BoardSeed::from_phrase("fifteen");
        let c = BoardSeed::from_phrase("sixteen");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
