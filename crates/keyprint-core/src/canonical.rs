//! # Canonical JWK Serialization
//!
//! Defines `CanonicalJwk`, the sole construction path for the JSON text
//! that thumbprint digests are computed over.
//!
//! ## Hash-Stability Invariant
//!
//! The `CanonicalJwk` newtype has a private inner field. The only way to
//! construct it is through `CanonicalJwk::new()`, which validates the
//! descriptor, base64url-encodes the key parameters, and serializes the
//! required members with RFC 8785 (JCS) rules. Any function that hashes a
//! JWK must accept `&CanonicalJwk`, so no code path can feed a hand-built
//! JSON string into a digest.
//!
//! RFC 7638 §3 asks for the required members only, in lexicographic
//! order, with no whitespace, UTF-8 encoded. For these objects (ASCII
//! member names, base64url and key-type string values) JCS output is
//! byte-identical to that construction, so one serializer serves both
//! the RFC and the rest of the stack.
//!
//! The canonical text of a symmetric key embeds the base64url of the key
//! value itself. `Debug` therefore prints the byte length only; use
//! `as_str()` deliberately when the text is actually needed.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::json;

use crate::error::ThumbprintError;
use crate::jwk::KeyDescriptor;

/// The canonical JSON form of a key descriptor, as hashed by RFC 7638.
///
/// # Invariants
///
/// - The only constructor is `CanonicalJwk::new()`.
/// - Members are exactly the required members of the key type, in
///   lexicographic order: `crv`/`kty`/`x`/`y` for EC, `e`/`kty`/`n` for
///   RSA, `k`/`kty` for symmetric keys.
/// - Binary parameters are base64url-encoded without padding.
/// - The text contains no whitespace.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CanonicalJwk(String);

impl CanonicalJwk {
    /// Build the canonical form of a key descriptor.
    ///
    /// Validates the descriptor first, so the canonical text never
    /// contains an empty required member.
    ///
    /// # Errors
    ///
    /// Returns [`ThumbprintError::EmptyMember`] if a required member is
    /// empty, or [`ThumbprintError::Serialization`] if JSON serialization
    /// fails.
    pub fn new(key: &KeyDescriptor) -> Result<Self, ThumbprintError> {
        key.validate()?;
        let value = match key {
            KeyDescriptor::Ec { kty, crv, x, y } => json!({
                "crv": crv,
                "kty": kty,
                "x": base64url(x),
                "y": base64url(y),
            }),
            KeyDescriptor::Rsa { kty, e, n } => json!({
                "e": base64url(e),
                "kty": kty,
                "n": base64url(n),
            }),
            KeyDescriptor::Octet { kty, k } => json!({
                "k": base64url(k),
                "kty": kty,
            }),
        };
        let text = serde_jcs::to_string(&value)?;
        Ok(Self(text))
    }

    /// The canonical JSON text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical text as bytes, ready for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Byte length of the canonical text.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the canonical text is empty. Never the case for values
    /// produced by `new()`, which always emits at least the braces.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalJwk {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for CanonicalJwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CanonicalJwk([{} bytes])", self.0.len())
    }
}

/// Base64url without padding (RFC 7515 §2), the JWK value encoding.
fn base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ec_canonical_form() {
        let key = KeyDescriptor::ec("P-256", [1u8, 2, 3], [4u8, 5, 6]);
        let canonical = CanonicalJwk::new(&key).unwrap();
        assert_eq!(
            canonical.as_str(),
            r#"{"crv":"P-256","kty":"EC","x":"AQID","y":"BAUG"}"#
        );
    }

    #[test]
    fn test_rsa_canonical_form() {
        let key = KeyDescriptor::rsa([0x01u8, 0x00, 0x01], [0xDEu8, 0xAD, 0xBE, 0xEF]);
        let canonical = CanonicalJwk::new(&key).unwrap();
        assert_eq!(
            canonical.as_str(),
            r#"{"e":"AQAB","kty":"RSA","n":"3q2-7w"}"#
        );
    }

    #[test]
    fn test_octet_canonical_form() {
        let key = KeyDescriptor::octet([0xDEu8, 0xAD, 0xBE, 0xEF]);
        let canonical = CanonicalJwk::new(&key).unwrap();
        assert_eq!(canonical.as_str(), r#"{"k":"3q2-7w","kty":"oct"}"#);
    }

    #[test]
    fn test_custom_kty_flows_into_canonical_form() {
        let key = KeyDescriptor::Octet {
            kty: "OKP".to_owned(),
            k: vec![1, 2, 3],
        };
        let canonical = CanonicalJwk::new(&key).unwrap();
        assert_eq!(canonical.as_str(), r#"{"k":"AQID","kty":"OKP"}"#);
    }

    #[test]
    fn test_canonical_form_has_no_whitespace_or_padding() {
        // 31 bytes so the base64url of a naive padded encoder would
        // carry '=' characters.
        let key = KeyDescriptor::ec("P-521", vec![0xFF; 31], vec![0x80; 31]);
        let canonical = CanonicalJwk::new(&key).unwrap();
        assert!(!canonical.as_str().contains(' '));
        assert!(!canonical.as_str().contains('\n'));
        assert!(!canonical.as_str().contains('='));
    }

    #[test]
    fn test_validation_runs_before_serialization() {
        let key = KeyDescriptor::ec("P-256", Vec::new(), vec![1u8]);
        let err = CanonicalJwk::new(&key).unwrap_err();
        assert!(matches!(err, ThumbprintError::EmptyMember { member: "x" }));
    }

    #[test]
    fn test_canonicalization_is_deterministic() {
        let key = KeyDescriptor::rsa([1u8, 0, 1], vec![0x9A; 256]);
        let a = CanonicalJwk::new(&key).unwrap();
        let b = CanonicalJwk::new(&key).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_accessors_agree() {
        let key = KeyDescriptor::octet([9u8; 5]);
        let canonical = CanonicalJwk::new(&key).unwrap();
        assert_eq!(canonical.as_str().len(), canonical.len());
        assert_eq!(canonical.as_str().as_bytes(), canonical.as_bytes());
        assert_eq!(canonical.as_ref(), canonical.as_bytes());
        assert!(!canonical.is_empty());
    }

    #[test]
    fn test_debug_redacts_canonical_text() {
        let key = KeyDescriptor::octet([0xDEu8, 0xAD, 0xBE, 0xEF]);
        let canonical = CanonicalJwk::new(&key).unwrap();
        let rendered = format!("{canonical:?}");
        assert!(!rendered.contains("3q2-7w"), "got: {rendered}");
        assert!(rendered.contains("bytes"), "got: {rendered}");
    }
}
