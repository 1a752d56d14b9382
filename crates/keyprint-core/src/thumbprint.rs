//! # JWK Thumbprint Computation
//!
//! The digest pipeline of RFC 7638: the canonical JWK text is hashed
//! with SHA-256 and the digest rendered as text. Two output encodings
//! are supported, the RFC's own base64url and base62 for contexts that
//! cannot carry `-` or `_` characters. The digest may be left-truncated
//! to between 1 and 32 bytes before encoding, trading collision
//! resistance for shorter identifiers.
//!
//! ## Security Invariant
//!
//! Hashing accepts only `CanonicalJwk`, never raw text, so every
//! thumbprint in the system is computed over the validated canonical
//! form. Truncation happens on digest *bytes* before encoding; the
//! encoded text is never cut.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalJwk;
use crate::error::ThumbprintError;
use crate::jwk::KeyDescriptor;

/// SHA-256 output size in bytes, the upper bound for truncation.
const DIGEST_LEN: usize = 32;

/// The text encoding applied to the (possibly truncated) digest.
///
/// Base62 output uses the default alphabet of `keyprint-base62`. An
/// unknown encoding name cannot reach this enum: deserialization of
/// anything but `"base64url"` or `"base62"` fails at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbprintEncoding {
    /// Base64url without padding (RFC 7638 §3 output form).
    Base64Url,
    /// Base62 over `0-9A-Za-z`, free of `-` and `_`.
    Base62,
}

impl ThumbprintEncoding {
    /// Returns the encoding identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base64Url => "base64url",
            Self::Base62 => "base62",
        }
    }
}

impl std::fmt::Display for ThumbprintEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the thumbprint of a key descriptor.
///
/// Canonicalizes the key per RFC 7638, hashes the canonical text with
/// SHA-256, keeps the first `truncate` bytes (all 32 when `None`), and
/// encodes those bytes with the requested encoding.
///
/// Truncated thumbprints are byte prefixes of the digest, so their
/// base64url form relates to the full thumbprint text only through the
/// digest, not through string prefixing. Base62 output of a full digest
/// is 43 characters or shorter, depending on the leading digest byte.
///
/// # Errors
///
/// Returns [`ThumbprintError::EmptyMember`] for descriptors with an
/// empty required member and [`ThumbprintError::TruncationOutOfRange`]
/// when `truncate` is `Some(0)` or exceeds 32.
pub fn compute_thumbprint(
    key: &KeyDescriptor,
    encoding: ThumbprintEncoding,
    truncate: Option<usize>,
) -> Result<String, ThumbprintError> {
    let keep = match truncate {
        Some(requested) if requested == 0 || requested > DIGEST_LEN => {
            return Err(ThumbprintError::TruncationOutOfRange { requested });
        }
        Some(requested) => requested,
        None => DIGEST_LEN,
    };

    let canonical = CanonicalJwk::new(key)?;
    let digest = Sha256::digest(canonical.as_bytes());
    let bytes = &digest[..keep];

    Ok(match encoding {
        ThumbprintEncoding::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
        ThumbprintEncoding::Base62 => keyprint_base62::encode(bytes),
    })
}

/// The key's thumbprint in the shape RFC 7638 §3.1 suggests for `kid`
/// values: the full 32-byte digest, base64url-encoded (43 characters).
pub fn key_id(key: &KeyDescriptor) -> Result<String, ThumbprintError> {
    compute_thumbprint(key, ThumbprintEncoding::Base64Url, None)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_full_base64url_thumbprints_are_43_chars(k in prop::collection::vec(any::<u8>(), 1..64)) {
            let key = KeyDescriptor::octet(k);
            let text = compute_thumbprint(&key, ThumbprintEncoding::Base64Url, None).unwrap();
            prop_assert_eq!(text.len(), 43);
        }

        #[test]
        fn prop_truncated_output_encodes_a_digest_prefix(
            k in prop::collection::vec(any::<u8>(), 1..64),
            keep in 1usize..=32,
        ) {
            let key = KeyDescriptor::octet(k);
            let full = URL_SAFE_NO_PAD
                .decode(compute_thumbprint(&key, ThumbprintEncoding::Base64Url, None).unwrap())
                .unwrap();
            let truncated =
                compute_thumbprint(&key, ThumbprintEncoding::Base64Url, Some(keep)).unwrap();
            prop_assert_eq!(URL_SAFE_NO_PAD.decode(truncated).unwrap(), &full[..keep]);
        }

        #[test]
        fn prop_base62_thumbprints_stay_in_alphabet(k in prop::collection::vec(any::<u8>(), 1..64)) {
            let key = KeyDescriptor::octet(k);
            let text = compute_thumbprint(&key, ThumbprintEncoding::Base62, None).unwrap();
            prop_assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
