//! # JWK Key Descriptors
//!
//! Defines `KeyDescriptor`, the input type for thumbprint computation. A
//! descriptor carries exactly the JWK members that RFC 7638 §3.2 names as
//! required for its key type and nothing else; optional members like
//! `kid`, `use` or `alg` never participate in a thumbprint, so they have
//! no place here.
//!
//! Key parameters are raw bytes, not base64url text. The canonicalization
//! step owns the encoding, which keeps double-encoding mistakes (encoding
//! an already-encoded string) out of the input path.
//!
//! ## Security Invariant
//!
//! The `Debug` impl prints parameter lengths, never parameter bytes. EC
//! and RSA parameters are public key material, but symmetric `k` values
//! are secrets, and one redaction rule for all three variants keeps log
//! output safe regardless of key type.

use crate::error::ThumbprintError;

/// Standard `kty` value for elliptic curve keys (RFC 7518 §6.1).
pub const KTY_EC: &str = "EC";
/// Standard `kty` value for RSA keys (RFC 7518 §6.1).
pub const KTY_RSA: &str = "RSA";
/// Standard `kty` value for symmetric (octet sequence) keys (RFC 7518 §6.1).
pub const KTY_OCT: &str = "oct";

/// The required JWK members of one key, grouped by key type.
///
/// Construct through [`KeyDescriptor::ec`], [`KeyDescriptor::rsa`] or
/// [`KeyDescriptor::octet`] for keys with the standard `kty` tags. The
/// variant fields are public, so a descriptor with a non-standard `kty`
/// can be built directly; [`KeyDescriptor::validate`] only insists that
/// no required member is empty.
///
/// Parameter fields hold the raw big-endian values (for `x`, `y`, `n`,
/// `e`) or raw key octets (for `k`), exactly what RFC 7638 expects to be
/// base64url-encoded into the canonical form.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyDescriptor {
    /// An elliptic curve public key: `kty`, `crv` and the coordinates.
    Ec {
        /// Key type tag, `"EC"` for standard keys.
        kty: String,
        /// Curve name, e.g. `"P-256"`.
        crv: String,
        /// X coordinate, big-endian.
        x: Vec<u8>,
        /// Y coordinate, big-endian.
        y: Vec<u8>,
    },
    /// An RSA public key: `kty`, exponent and modulus.
    Rsa {
        /// Key type tag, `"RSA"` for standard keys.
        kty: String,
        /// Public exponent, big-endian.
        e: Vec<u8>,
        /// Modulus, big-endian.
        n: Vec<u8>,
    },
    /// A symmetric key: `kty` and the key octets.
    Octet {
        /// Key type tag, `"oct"` for standard keys.
        kty: String,
        /// Key value. Secret material; never logged by `Debug`.
        k: Vec<u8>,
    },
}

impl KeyDescriptor {
    /// An EC descriptor with the standard `"EC"` key type tag.
    pub fn ec(crv: impl Into<String>, x: impl Into<Vec<u8>>, y: impl Into<Vec<u8>>) -> Self {
        Self::Ec {
            kty: KTY_EC.to_owned(),
            crv: crv.into(),
            x: x.into(),
            y: y.into(),
        }
    }

    /// An RSA descriptor with the standard `"RSA"` key type tag.
    pub fn rsa(e: impl Into<Vec<u8>>, n: impl Into<Vec<u8>>) -> Self {
        Self::Rsa {
            kty: KTY_RSA.to_owned(),
            e: e.into(),
            n: n.into(),
        }
    }

    /// A symmetric key descriptor with the standard `"oct"` key type tag.
    pub fn octet(k: impl Into<Vec<u8>>) -> Self {
        Self::Octet {
            kty: KTY_OCT.to_owned(),
            k: k.into(),
        }
    }

    /// The key type tag of this descriptor.
    pub fn kty(&self) -> &str {
        match self {
            Self::Ec { kty, .. } | Self::Rsa { kty, .. } | Self::Octet { kty, .. } => kty,
        }
    }

    /// Check that every member required for this key type is non-empty.
    ///
    /// Members are checked in canonical order (`kty` first, then the
    /// type-specific members alphabetically) and the first empty one is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`ThumbprintError::EmptyMember`] naming the offending member.
    pub fn validate(&self) -> Result<(), ThumbprintError> {
        let empty = match self {
            Self::Ec { kty, crv, x, y } => {
                if kty.is_empty() {
                    Some("kty")
                } else if crv.is_empty() {
                    Some("crv")
                } else if x.is_empty() {
                    Some("x")
                } else if y.is_empty() {
                    Some("y")
                } else {
                    None
                }
            }
            Self::Rsa { kty, e, n } => {
                if kty.is_empty() {
                    Some("kty")
                } else if e.is_empty() {
                    Some("e")
                } else if n.is_empty() {
                    Some("n")
                } else {
                    None
                }
            }
            Self::Octet { kty, k } => {
                if kty.is_empty() {
                    Some("kty")
                } else if k.is_empty() {
                    Some("k")
                } else {
                    None
                }
            }
        };
        match empty {
            Some(member) => Err(ThumbprintError::EmptyMember { member }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for KeyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ec { kty, crv, x, y } => write!(
                f,
                "KeyDescriptor::Ec {{ kty: {kty:?}, crv: {crv:?}, x: [{} bytes], y: [{} bytes] }}",
                x.len(),
                y.len()
            ),
            Self::Rsa { kty, e, n } => write!(
                f,
                "KeyDescriptor::Rsa {{ kty: {kty:?}, e: [{} bytes], n: [{} bytes] }}",
                e.len(),
                n.len()
            ),
            Self::Octet { kty, k } => write!(
                f,
                "KeyDescriptor::Octet {{ kty: {kty:?}, k: [{} bytes] }}",
                k.len()
            ),
        }
    }
}
