//! Digit-skeleton analysis
//!
//! Turns the raw placeholder run of a sub-pattern (e.g. `#,##0.###`) into
//! the digit-count, grouping and rounding metadata of a compiled pattern.

use crate::types::{DigitRange, GroupSizes, GroupingSpec, RoundingIncrement};

use super::tokens::RawSkeleton;

/// Metadata extracted from one digit skeleton
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SkeletonMeta {
    pub integer_digits: DigitRange,
    pub fractional_digits: DigitRange,
    pub significant_digits: DigitRange,
    pub exponent_digits: usize,
    pub exponent_sign: bool,
    pub scientific_rounding: usize,
    pub grouping: GroupingSpec,
    pub rounding: RoundingIncrement,
}

pub(crate) fn analyze_skeleton(raw: &RawSkeleton) -> Result<SkeletonMeta, String> {
    let mut parts = raw.body.splitn(3, '.');
    let integer = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err("more than one decimal separator".to_string());
    }
    if fraction.contains('@') {
        return Err("significant digits must precede the decimal separator".to_string());
    }

    let int_required = integer.chars().filter(|c| c.is_ascii_digit()).count();
    let int_hashes = integer.chars().filter(|c| *c == '#').count();
    let sig_count = integer.chars().filter(|c| *c == '@').count();
    let frac_required = fraction.chars().filter(|c| c.is_ascii_digit()).count();
    let frac_hashes = fraction.chars().filter(|c| *c == '#').count();

    let significant_digits = if sig_count > 0 {
        DigitRange { min: sig_count, max: sig_count + int_hashes }
    } else {
        DigitRange::default()
    };

    // Patterns whose integer side is a run of two or more required digits
    // ("0000.00") bound it and truncate from the left, year-of-century
    // style. A single required digit or any optional digit leaves the
    // integer side unbounded.
    let integer_digits = if sig_count > 0 {
        DigitRange { min: 1, max: 0 }
    } else {
        let bounded = int_hashes == 0 && int_required > 1;
        DigitRange {
            min: int_required,
            max: if bounded { int_required } else { 0 },
        }
    };

    let fractional_digits = DigitRange {
        min: frac_required,
        max: frac_required + frac_hashes,
    };

    let rounding = rounding_increment(integer, fraction, frac_required)?;
    let grouping = GroupingSpec {
        integer: integer_grouping(integer),
        fraction: fraction_grouping(fraction),
    };

    let scientific_rounding = if raw.exponent_digits > 0 {
        integer_digits.min + fractional_digits.max
    } else {
        0
    };

    Ok(SkeletonMeta {
        integer_digits,
        fractional_digits,
        significant_digits,
        exponent_digits: raw.exponent_digits,
        exponent_sign: raw.exponent_sign,
        scientific_rounding,
        grouping,
        rounding,
    })
}

/// Non-zero digits in the skeleton specify a rounding increment: `#,##6`
/// rounds to the nearest 6, `#,##0.05` to the nearest five hundredths.
fn rounding_increment(
    integer: &str,
    fraction: &str,
    frac_required: usize,
) -> Result<RoundingIncrement, String> {
    let digits: String = integer
        .chars()
        .chain(fraction.chars())
        .filter(|c| c.is_ascii_digit())
        .collect();
    if !digits.chars().any(|c| ('1'..='9').contains(&c)) {
        return Ok(RoundingIncrement::default());
    }
    let mantissa: u64 = digits
        .parse()
        .map_err(|_| format!("rounding increment '{digits}' is out of range"))?;
    Ok(RoundingIncrement { mantissa, exponent: -(frac_required as i32) })
}

/// Integer-side grouping is read from the right: the rightmost comma sets
/// the primary group size, the next comma the secondary size. Placeholders
/// left of the second comma are irrelevant.
fn integer_grouping(integer: &str) -> GroupSizes {
    let mut first = 0;
    let mut rest = 0;
    let mut commas = 0;
    for c in integer.chars().rev() {
        if c == ',' {
            commas += 1;
            if commas == 2 {
                break;
            }
        } else if is_placeholder(c) {
            if commas == 0 {
                first += 1;
            } else {
                rest += 1;
            }
        }
    }
    if commas == 0 || first == 0 {
        return GroupSizes::default();
    }
    if commas == 1 {
        rest = first;
    }
    GroupSizes { first, rest }
}

/// Fraction-side grouping reads from the left, mirroring the integer rule.
fn fraction_grouping(fraction: &str) -> GroupSizes {
    let mut first = 0;
    let mut rest = 0;
    let mut commas = 0;
    for c in fraction.chars() {
        if c == ',' {
            commas += 1;
            if commas == 2 {
                break;
            }
        } else if is_placeholder(c) {
            if commas == 0 {
                first += 1;
            } else {
                rest += 1;
            }
        }
    }
    if commas == 0 || first == 0 {
        return GroupSizes::default();
    }
    if commas == 1 {
        rest = first;
    }
    GroupSizes { first, rest }
}

fn is_placeholder(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '@'
}
