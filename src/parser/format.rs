use winnow::combinator::alt;
use winnow::Parser;

use crate::types::{FormatError, FormatToken, PatternMeta};

use super::sections::analyze_skeleton;
use super::tokens::*;

/// Parse a CLDR number-format pattern string
///
/// This is the main public API entry point of this module. It accepts a
/// pattern string and compiles it into the immutable metadata record that
/// drives the formatter.
///
/// # Arguments
/// * `pattern` - The pattern string to compile, e.g. `"#,##0.00"`
///
/// # Returns
/// * `Result<PatternMeta, FormatError>` - The compiled meta, or a
///   `FormatError::PatternError` describing the malformed input
///
/// # Examples
/// ```
/// use cldr_number_format::parser::parse_pattern;
///
/// let meta = parse_pattern("#,##0.00").unwrap();
/// assert_eq!(meta.fractional_digits.min, 2);
/// ```
pub fn parse_pattern(pattern: &str) -> Result<PatternMeta, FormatError> {
    if pattern.is_empty() {
        return Err(FormatError::PatternError("empty pattern".to_string()));
    }

    let mut input = pattern;

    let positive = parse_subpattern(&mut input).map_err(FormatError::PatternError)?;

    let mut negative = None;
    if input.starts_with(';') {
        input = &input[1..];
        negative = Some(parse_subpattern(&mut input).map_err(FormatError::PatternError)?);
    }

    if !input.is_empty() {
        return Err(FormatError::PatternError(format!(
            "too many sections or trailing characters: '{input}'"
        )));
    }

    let skeleton = positive.skeleton.as_ref().ok_or_else(|| {
        FormatError::PatternError("pattern has no digit placeholders".to_string())
    })?;
    let analyzed = analyze_skeleton(skeleton).map_err(FormatError::PatternError)?;

    // The multiplier is a property of the positive sub-pattern; the
    // negative sub-pattern only contributes its affixes.
    let multiplier = if positive.tokens.contains(&FormatToken::Permille) {
        1000
    } else if positive.tokens.contains(&FormatToken::Percent) {
        100
    } else {
        1
    };

    let padding_length = match positive.pad {
        Some(_) => positive.consumed_chars.saturating_sub(2),
        None => 0,
    };

    Ok(PatternMeta {
        positive: positive.tokens,
        negative: negative.map(|sub| sub.tokens),
        integer_digits: analyzed.integer_digits,
        fractional_digits: analyzed.fractional_digits,
        significant_digits: analyzed.significant_digits,
        exponent_digits: analyzed.exponent_digits,
        exponent_sign: analyzed.exponent_sign,
        scientific_rounding: analyzed.scientific_rounding,
        multiplier,
        rounding: analyzed.rounding,
        grouping: analyzed.grouping,
        padding_length,
        padding_char: positive.pad.unwrap_or(' '),
    })
}

/// One parsed sub-pattern: its token sequence, the digit skeleton (if any),
/// the pad character and how many pattern characters it consumed.
struct RawSubPattern {
    tokens: Vec<FormatToken>,
    skeleton: Option<RawSkeleton>,
    pad: Option<char>,
    consumed_chars: usize,
}

fn parse_subpattern(input: &mut &str) -> Result<RawSubPattern, String> {
    let start = *input;
    let mut tokens = Vec::new();
    let mut skeleton = None;
    let mut pad = None;

    while !input.is_empty() && !input.starts_with(';') {
        let raw = alt((
            parse_skeleton,
            parse_currency,
            parse_percent,
            parse_permille,
            parse_plus,
            parse_minus,
            parse_apostrophe,
            parse_quoted,
            parse_pad,
            parse_literal_passthrough,
        ))
        .parse_next(input)
        .map_err(|e| format!("parse error: {e:?} at remaining input '{input}'"))?;

        match raw {
            RawToken::Skeleton(s) => {
                if skeleton.is_some() {
                    return Err("more than one digit section".to_string());
                }
                skeleton = Some(s);
                tokens.push(FormatToken::Number);
            }
            RawToken::Pad(c) => {
                if pad.is_some() {
                    return Err("more than one pad specifier".to_string());
                }
                pad = Some(c);
                tokens.push(FormatToken::Pad);
            }
            RawToken::Affix(token) => tokens.push(token),
        }
    }

    let consumed = &start[..start.len() - input.len()];
    Ok(RawSubPattern {
        tokens,
        skeleton,
        pad,
        consumed_chars: consumed.chars().count(),
    })
}
