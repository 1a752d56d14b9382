//! # Base62 Alphabets
//!
//! The two alphabets share the digit characters `0-9` for values 0 through
//! 9 and differ only in which letter case covers values 10 through 35:
//! the default alphabet counts uppercase first (`0-9A-Za-z`), the inverted
//! alphabet counts lowercase first (`0-9a-zA-Z`).
//!
//! Text produced under one alphabet does not generally decode to the same
//! bytes under the other, so both sides of a round trip must agree on the
//! character set.

use serde::{Deserialize, Serialize};

/// Alphabet in `0-9A-Za-z` order.
const DEFAULT: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Alphabet in `0-9a-zA-Z` order.
const INVERTED: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Selects which of the two base62 alphabets a codec uses.
///
/// Serializes as `"default"` / `"inverted"` so the choice can travel
/// inside configuration documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    /// `0-9`, then `A-Z`, then `a-z`.
    Default,
    /// `0-9`, then `a-z`, then `A-Z`.
    Inverted,
}

impl CharacterSet {
    /// Returns the character set identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Inverted => "inverted",
        }
    }

    /// The full 62-character alphabet in digit-value order.
    pub fn alphabet(&self) -> &'static [u8; 62] {
        match self {
            Self::Default => DEFAULT,
            Self::Inverted => INVERTED,
        }
    }

    /// The character representing `digit` under this alphabet.
    ///
    /// Callers must pass a value below 62; the base conversion that feeds
    /// this lookup only produces remainders of a division by 62.
    pub(crate) fn symbol(&self, digit: u32) -> char {
        self.alphabet()[digit as usize] as char
    }

    /// The digit value of `character` under this alphabet, or `None` when
    /// the character is not part of it.
    pub(crate) fn digit(&self, character: char) -> Option<u32> {
        if !character.is_ascii() {
            return None;
        }
        let byte = character as u8;
        self.alphabet()
            .iter()
            .position(|&candidate| candidate == byte)
            .map(|index| index as u32)
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::Default
    }
}

impl std::fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
