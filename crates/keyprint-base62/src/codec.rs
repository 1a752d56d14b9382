//! # Base62 Codec
//!
//! Encodes byte sequences as base62 text and decodes them back, under
//! either of the two [`CharacterSet`] alphabets. The codec interprets its
//! input as one big positional numeral, so outputs carry no per-byte
//! framing and are roughly 1.35 characters per input byte.
//!
//! ## Value Semantics
//!
//! The conversion preserves numeric value, not byte layout. Leading zero
//! bytes are absorbed into the numeral: `[0x00, 0x01]` encodes to `"1"`
//! exactly like `[0x01]` does, any run of only zero bytes encodes to
//! `"0"`, and the empty input encodes to the empty string. Decoding
//! therefore returns the shortest byte sequence with the encoded value.
//! Callers that need exact byte-length round trips must carry the length
//! out of band or guarantee a non-zero leading byte, as fixed-width hash
//! output effectively does.

use crate::alphabet::CharacterSet;
use crate::convert::convert_base;
use crate::error::Base62Error;

const BYTE_BASE: u32 = 256;
const TEXT_BASE: u32 = 62;

/// A base62 encoder/decoder bound to one [`CharacterSet`].
///
/// The codec is a zero-size-ish value type; construct one per alphabet
/// choice and reuse it freely. [`Base62::default()`] uses the default
/// alphabet, matching the free [`encode`] and [`decode`] functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Base62 {
    charset: CharacterSet,
}

impl Base62 {
    /// Create a codec over the given alphabet.
    pub fn new(charset: CharacterSet) -> Self {
        Self { charset }
    }

    /// The alphabet this codec encodes with and decodes against.
    pub fn charset(&self) -> CharacterSet {
        self.charset
    }

    /// Encode `bytes` as base62 text.
    ///
    /// Total over all inputs. See the module documentation for how
    /// leading zero bytes and the empty input behave.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let digits: Vec<u32> = bytes.iter().map(|&byte| u32::from(byte)).collect();
        convert_base(&digits, BYTE_BASE, TEXT_BASE)
            .into_iter()
            .map(|digit| self.charset.symbol(digit))
            .collect()
    }

    /// Decode base62 `text` back into bytes.
    ///
    /// Fails on the first character outside this codec's alphabet. Text
    /// produced under the other alphabet usually decodes without error
    /// here but to different bytes, since the letter ranges swap digit
    /// values; the alphabet is part of the wire contract.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Base62Error> {
        let mut digits = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            match self.charset.digit(character) {
                Some(digit) => digits.push(digit),
                None => {
                    return Err(Base62Error::InvalidCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        // Every output digit is a remainder of a division by 256.
        Ok(convert_base(&digits, TEXT_BASE, BYTE_BASE)
            .into_iter()
            .map(|digit| digit as u8)
            .collect())
    }
}

/// Encode `bytes` as base62 text under the default alphabet.
pub fn encode(bytes: &[u8]) -> String {
    Base62::default().encode(bytes)
}

/// Decode base62 `text` under the default alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>, Base62Error> {
    Base62::default().decode(text)
}
