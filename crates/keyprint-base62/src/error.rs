//! Error types for base62 decoding.

use thiserror::Error;

/// Errors that can occur while decoding base62 text.
///
/// Encoding is total over byte slices and cannot fail; only the decode
/// direction produces errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base62Error {
    /// The input contained a character outside the active alphabet.
    ///
    /// `position` is the character index (not byte offset) within the
    /// input text. Note that case is significant: `'A'` is valid in both
    /// alphabets but maps to different digit values, while a character
    /// like `'|'` is valid in neither.
    #[error("character {character:?} at position {position} is not in the base62 alphabet")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index within the input.
        position: usize,
    },
}
