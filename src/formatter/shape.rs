//! Digit-shape pipeline
//!
//! Pads, truncates and groups the digit tuple according to the compiled
//! pattern metadata. Grouping runs exactly once per digit run; separators
//! are inserted as a placeholder character and resolved by transliteration.

use crate::types::{GroupSizes, PatternMeta};

use super::translit::GROUP_PLACEHOLDER;
use super::tuple::DigitTuple;

pub(super) fn shape(tuple: &mut DigitTuple, meta: &PatternMeta) {
    // Trailing fraction zeros beyond the required minimum are not shown
    while tuple.fraction.len() > meta.fractional_digits.min
        && tuple.fraction.last() == Some(&b'0')
    {
        tuple.fraction.pop();
    }

    if meta.integer_digits.min > tuple.integer.len() {
        let mut padded = vec![b'0'; meta.integer_digits.min - tuple.integer.len()];
        padded.extend_from_slice(&tuple.integer);
        tuple.integer = padded;
    }

    if meta.fractional_digits.min > tuple.fraction.len() {
        tuple.fraction.resize(meta.fractional_digits.min, b'0');
    }

    // A bounded integer side keeps only its rightmost digits, the way
    // "00" truncates a year to the century
    let max = meta.integer_digits.max;
    if max > 0 && tuple.integer.len() > max {
        let cut = tuple.integer.len() - max;
        tuple.integer.drain(..cut);
    }

    if tuple.integer.is_empty() {
        tuple.integer.push(b'0');
    }
}

/// Direction grouping reads a digit run in: `Reverse` sizes groups from the
/// right (integer side), `Forward` from the left (fraction side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GroupDirection {
    Forward,
    Reverse,
}

/// Insert group placeholders into an ASCII digit run.
///
/// Grouping is suppressed entirely when the run is shorter than the
/// locale's minimum grouping digits plus the primary group size. Unequal
/// primary/secondary sizes peel the primary group off the right and regroup
/// the remainder with the secondary size, which produces lakh/crore
/// grouping for patterns like `##,##,##0`.
pub(super) fn group_digits(
    digits: &str,
    sizes: GroupSizes,
    minimum_grouping_digits: usize,
    direction: GroupDirection,
) -> String {
    if sizes.is_none() || sizes.first == 0 {
        return digits.to_string();
    }
    let len = digits.len();
    if len < minimum_grouping_digits + sizes.first {
        return digits.to_string();
    }

    if sizes.first != sizes.rest {
        let split = len - sizes.first;
        let secondary = GroupSizes { first: sizes.rest, rest: sizes.rest };
        let left = group_digits(&digits[..split], secondary, minimum_grouping_digits, direction);
        return format!("{}{}{}", left, GROUP_PLACEHOLDER, &digits[split..]);
    }

    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(len + len / sizes.first);
    match direction {
        GroupDirection::Forward => {
            for (i, chunk) in bytes.chunks(sizes.first).enumerate() {
                if i > 0 {
                    out.push(GROUP_PLACEHOLDER);
                }
                out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
            }
        }
        GroupDirection::Reverse => {
            let head = len - (len / sizes.first) * sizes.first;
            if head > 0 {
                out.push_str(&digits[..head]);
            }
            for (i, chunk) in bytes[head..].chunks(sizes.first).enumerate() {
                if i > 0 || head > 0 {
                    out.push(GROUP_PLACEHOLDER);
                }
                out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DigitRange, GroupingSpec, RoundingIncrement};

    fn grouped(digits: &str, first: usize, rest: usize, minimum: usize) -> String {
        group_digits(
            digits,
            GroupSizes { first, rest },
            minimum,
            GroupDirection::Reverse,
        )
        .replace(GROUP_PLACEHOLDER, ",")
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(grouped("1234567", 3, 3, 1), "1,234,567");
        assert_eq!(grouped("123456", 3, 3, 1), "123,456");
        assert_eq!(grouped("1234", 3, 3, 1), "1,234");
        assert_eq!(grouped("123", 3, 3, 1), "123");
    }

    #[test]
    fn test_minimum_grouping_digits() {
        // Spanish-style: four digits stay solid, five group
        assert_eq!(grouped("1234", 3, 3, 2), "1234");
        assert_eq!(grouped("12345", 3, 3, 2), "12,345");
    }

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(grouped("1234567", 3, 2, 1), "12,34,567");
        assert_eq!(grouped("134567", 3, 2, 1), "1,34,567");
        assert_eq!(grouped("34567", 3, 2, 1), "34,567");
    }

    #[test]
    fn test_fraction_grouping_reads_forward() {
        let out = group_digits(
            "1415926",
            GroupSizes { first: 3, rest: 3 },
            1,
            GroupDirection::Forward,
        )
        .replace(GROUP_PLACEHOLDER, " ");
        assert_eq!(out, "141 592 6");
    }

    fn plain_meta() -> PatternMeta {
        PatternMeta {
            positive: vec![crate::types::FormatToken::Number],
            negative: None,
            integer_digits: DigitRange { min: 1, max: 0 },
            fractional_digits: DigitRange { min: 0, max: 3 },
            significant_digits: DigitRange::default(),
            exponent_digits: 0,
            exponent_sign: false,
            scientific_rounding: 0,
            multiplier: 1,
            rounding: RoundingIncrement::default(),
            grouping: GroupingSpec::default(),
            padding_length: 0,
            padding_char: ' ',
        }
    }

    #[test]
    fn test_shape_pads_and_truncates() {
        let mut meta = plain_meta();
        meta.integer_digits = DigitRange { min: 6, max: 6 };
        meta.fractional_digits = DigitRange { min: 2, max: 2 };

        let mut tuple = DigitTuple::from_number(&crate::types::Number::Int(12345));
        shape(&mut tuple, &meta);
        assert_eq!(tuple.integer, b"012345");
        assert_eq!(tuple.fraction, b"00");

        let mut meta = plain_meta();
        meta.integer_digits = DigitRange { min: 4, max: 4 };
        let mut tuple = DigitTuple::from_number(&crate::types::Number::Int(12345));
        shape(&mut tuple, &meta);
        assert_eq!(tuple.integer, b"2345");
    }

    #[test]
    fn test_shape_trims_only_trailing_zeros() {
        let meta = plain_meta();
        let mut tuple = DigitTuple::from_number(&crate::types::Number::Float(1.5));
        tuple.fraction = b"500".to_vec();
        shape(&mut tuple, &meta);
        assert_eq!(tuple.fraction, b"5");
    }
}
