//! # keyprint-base62 — Compact Base62 Text Encoding
//!
//! Base62 codec for the keyprint stack. Byte sequences of any length are
//! converted to and from `0-9A-Za-z` text by arbitrary-precision base
//! conversion, with no big-integer dependency and no per-byte framing.
//! The output is purely alphanumeric, with none of the `-` or `_`
//! characters that base64url needs, so it survives contexts that treat
//! punctuation specially.
//!
//! ## Key Design Principles
//!
//! 1. **Two alphabets, one codec.** [`CharacterSet::Default`] counts
//!    uppercase letters before lowercase, [`CharacterSet::Inverted`] the
//!    reverse. The alphabet is a constructor argument, not a global.
//!
//! 2. **Value semantics, not byte framing.** Input is one positional
//!    numeral: leading zero bytes collapse, and decoding returns the
//!    shortest byte sequence with the encoded value. Fixed-width digests
//!    with a non-zero leading byte round-trip exactly.
//!
//! 3. **Encoding is total, decoding is checked.** `encode()` cannot fail;
//!    `decode()` reports the first character outside the active alphabet
//!    with its position.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `keyprint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod alphabet;
pub mod codec;
pub mod error;

mod convert;

// Re-export primary types for ergonomic imports.
pub use alphabet::CharacterSet;
pub use codec::{decode, encode, Base62};
pub use error::Base62Error;
