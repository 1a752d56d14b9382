//! Error types for thumbprint computation.

use thiserror::Error;

/// Errors surfaced while canonicalizing a key descriptor or computing
/// its thumbprint.
#[derive(Error, Debug)]
pub enum ThumbprintError {
    /// A JWK member required by the key type is empty.
    ///
    /// RFC 7638 hashes exactly the required members of each key type; an
    /// empty `kty`, curve name, or parameter value is rejected before any
    /// canonical form is built.
    #[error("required JWK member \"{member}\" is empty")]
    EmptyMember {
        /// JWK member name (`"kty"`, `"crv"`, `"x"`, `"y"`, `"e"`, `"n"` or `"k"`).
        member: &'static str,
    },

    /// A truncation length outside `1..=32` was requested.
    ///
    /// SHA-256 digests are 32 bytes. Out-of-range requests fail instead
    /// of clamping to the available bytes.
    #[error("truncation length {requested} is outside the valid range 1..=32")]
    TruncationOutOfRange {
        /// The requested byte count.
        requested: usize,
    },

    /// JSON serialization of the canonical form failed.
    ///
    /// Not reachable through the public constructors, which only feed
    /// string-valued members into the canonical object, but the
    /// serializer's error channel is preserved rather than unwrapped.
    #[error("canonical JWK serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
