//! # keyprint-core — JWK Thumbprints per RFC 7638
//!
//! Computes JWK thumbprints: the canonical JSON form of a key's required
//! members, hashed with SHA-256 and rendered as text. A thumbprint is a
//! stable, derivable key identifier. The same key always produces the
//! same thumbprint regardless of member order, whitespace, or optional
//! members in the source JWK.
//!
//! ## Key Design Principles
//!
//! 1. **`KeyDescriptor` carries required members only.** EC, RSA and
//!    symmetric keys each have a fixed member set (RFC 7638 §3.2); the
//!    descriptor cannot hold a `kid` or `alg` that would corrupt a hash.
//!
//! 2. **`CanonicalJwk` newtype.** ALL digest computation flows through
//!    `CanonicalJwk::new()`. No hand-assembled JSON for hashing, ever.
//!    RFC 8785 serialization keeps member order and spacing fixed.
//!
//! 3. **Raw bytes in, text out.** Key parameters enter as raw bytes and
//!    the library owns the base64url step, so inputs cannot arrive
//!    double-encoded.
//!
//! 4. **Truncation is explicit and checked.** Shortened thumbprints keep
//!    1 to 32 digest bytes; anything else is an error, never a clamp.
//!
//! ## Crate Policy
//!
//! - Depends only on `keyprint-base62` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod jwk;
pub mod thumbprint;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalJwk;
pub use error::ThumbprintError;
pub use jwk::{KeyDescriptor, KTY_EC, KTY_OCT, KTY_RSA};
pub use thumbprint::{compute_thumbprint, key_id, ThumbprintEncoding};
