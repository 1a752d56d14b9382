//! # Arbitrary-Precision Base Conversion
//!
//! Radix conversion over digit sequences of unbounded length, used by the
//! codec to move between base 256 (raw bytes) and base 62 (text). No
//! big-integer dependency: the input is treated as a positional numeral
//! and divided down with schoolbook long division.
//!
//! ## Algorithm
//!
//! Each outer pass long-divides the current numeral by the target base.
//! Scanning from the most significant digit, every step folds the running
//! remainder into an accumulator (`digit + remainder * source_base`), emits
//! the accumulator's quotient as the next digit of the pass quotient, and
//! keeps the accumulator's remainder. The remainder left after a full pass
//! is one output digit, produced least significant first; the pass quotient
//! becomes the numeral for the next pass. The loop ends when the quotient
//! is empty.
//!
//! Leading zero quotient digits are dropped as they are produced (a digit
//! is appended only once the pass quotient is non-empty or the digit is
//! non-zero). Without this the numeral would never shrink below its input
//! length and the all-zero numeral would cycle forever.
//!
//! A consequence callers must be aware of: leading zero digits of the
//! *input* do not survive. `[0, 1]` and `[1]` are the same numeral, and a
//! numeral of only zeros converts to the single digit `0`.

/// Convert `source`, a most-significant-first digit sequence in
/// `source_base`, into the equivalent digit sequence in `target_base`.
///
/// Digit values must be below their base, and both bases must be at most
/// 256; the accumulator arithmetic cannot overflow `u32` within those
/// bounds. An empty input converts to an empty output.
pub(crate) fn convert_base(source: &[u32], source_base: u32, target_base: u32) -> Vec<u32> {
    let mut numeral = source.to_vec();
    // Output digits accumulate least significant first, one per pass.
    let mut output = Vec::new();

    while !numeral.is_empty() {
        let mut quotient = Vec::with_capacity(numeral.len());
        let mut remainder = 0u32;

        for &digit in &numeral {
            let accumulator = digit + remainder * source_base;
            let quotient_digit = accumulator / target_base;
            remainder = accumulator % target_base;
            // Suppress leading zeros so the numeral shrinks every pass.
            if !quotient.is_empty() || quotient_digit > 0 {
                quotient.push(quotient_digit);
            }
        }

        output.push(remainder);
        numeral = quotient;
    }

    output.reverse();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_converts_to_empty_output() {
        assert_eq!(convert_base(&[], 256, 62), Vec::<u32>::new());
        assert_eq!(convert_base(&[], 62, 256), Vec::<u32>::new());
    }

    #[test]
    fn test_zero_numeral_converts_to_single_zero_digit() {
        assert_eq!(convert_base(&[0], 256, 62), vec![0]);
        assert_eq!(convert_base(&[0, 0, 0], 256, 62), vec![0]);
    }

    #[test]
    fn test_leading_zero_digits_are_dropped() {
        assert_eq!(
            convert_base(&[0, 0, 1], 256, 62),
            convert_base(&[1], 256, 62)
        );
    }

    #[test]
    fn test_single_digit_below_both_bases_is_preserved() {
        assert_eq!(convert_base(&[61], 256, 62), vec![61]);
        assert_eq!(convert_base(&[61], 62, 256), vec![61]);
    }

    #[test]
    fn test_bytes_to_base62_known_values() {
        // 255 = 4 * 62 + 7
        assert_eq!(convert_base(&[255], 256, 62), vec![4, 7]);
        // 256 = 4 * 62 + 8
        assert_eq!(convert_base(&[1, 0], 256, 62), vec![4, 8]);
        // 3843 = 61 * 62 + 61, the largest two-digit base62 numeral
        assert_eq!(convert_base(&[15, 3], 256, 62), vec![61, 61]);
    }

    #[test]
    fn test_base62_to_bytes_known_values() {
        assert_eq!(convert_base(&[4, 7], 62, 256), vec![255]);
        assert_eq!(convert_base(&[4, 8], 62, 256), vec![1, 0]);
        assert_eq!(convert_base(&[61, 61], 62, 256), vec![15, 3]);
    }

    #[test]
    fn test_conversion_roundtrip_without_leading_zeros() {
        let numeral = vec![17, 0, 255, 3, 98, 211, 0, 0, 42];
        let there = convert_base(&numeral, 256, 62);
        let back = convert_base(&there, 62, 256);
        assert_eq!(back, numeral);
    }

    #[test]
    fn test_identity_when_bases_match() {
        // Same-base conversion still normalizes leading zeros away.
        assert_eq!(convert_base(&[5, 0, 9], 256, 256), vec![5, 0, 9]);
        assert_eq!(convert_base(&[0, 5, 0, 9], 256, 256), vec![5, 0, 9]);
    }
}
