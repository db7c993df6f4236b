//! Number formatting module
//!
//! This module formats numbers according to compiled CLDR patterns. The
//! main entry point is the `format_number` function; `format_with_meta`
//! accepts a caller-held precompiled meta. The canonical standard format
//! routes integers and finite floats through shortened paths.

mod assemble;
mod core;
mod rounding;
mod shape;
mod translit;
mod tuple;

use crate::locale::{CldrContext, LocaleData};
use crate::parser::parse_pattern;
use crate::plural::PluralOperands;
use crate::types::{
    DigitRange, FormatError, FormatOptions, GroupSizes, Number, PatternMeta, SubPattern,
};

/// Format a number according to a named style or a pattern string
///
/// A `format` argument consisting solely of ASCII letters is resolved as a
/// named style of the locale ("standard", "currency", "accounting",
/// "percent", "scientific"); anything else is compiled as a pattern.
///
/// # Arguments
/// * `number` - The value to format; integers, floats and `BigDecimal`
///   convert via `Into<Number>`
/// * `format` - Style name or pattern string, e.g. `"#,##0.00"`
/// * `options` - Locale, numbering system, currency and rounding options
/// * `context` - The locale bundle handle
///
/// # Returns
/// * `Result<String, FormatError>` - The formatted string
///
/// # Examples
/// ```
/// use cldr_number_format::{format_number, CldrContext, FormatOptions};
///
/// let context = CldrContext::new().unwrap();
/// let options = FormatOptions::new("en");
/// assert_eq!(
///     format_number(12345.678, "standard", &options, &context).unwrap(),
///     "12,345.678"
/// );
/// ```
pub fn format_number<N: Into<Number>>(
    number: N,
    format: &str,
    options: &FormatOptions,
    context: &CldrContext,
) -> Result<String, FormatError> {
    let number = number.into();
    let locale = context.locale(&options.locale)?;

    let compiled;
    let meta = if is_style_name(format) {
        context
            .style_meta(&locale.id, format)
            .ok_or_else(|| FormatError::UnknownFormat(format.to_string()))?
    } else {
        compiled = parse_pattern(format)?;
        &compiled
    };

    format_resolved(&number, meta, locale, options, context)
}

/// Format with a precompiled pattern meta, eliding the parse cost for
/// patterns known ahead of time.
pub fn format_with_meta<N: Into<Number>>(
    number: N,
    meta: &PatternMeta,
    options: &FormatOptions,
    context: &CldrContext,
) -> Result<String, FormatError> {
    let number = number.into();
    let locale = context.locale(&options.locale)?;
    format_resolved(&number, meta, locale, options, context)
}

/// Style names are purely alphabetic; anything else compiles as a pattern.
fn is_style_name(format: &str) -> bool {
    !format.is_empty() && format.chars().all(|c| c.is_ascii_alphabetic())
}

fn format_resolved(
    number: &Number,
    meta: &PatternMeta,
    locale: &LocaleData,
    options: &FormatOptions,
    context: &CldrContext,
) -> Result<String, FormatError> {
    let digit_table = context.digit_table(locale, &options.number_system)?;
    let currency = match options.currency.as_deref() {
        Some(code) => Some(context.currency(code)?),
        None => None,
    };

    if meta.is_standard() && currency.is_none() && options.pattern.is_none() {
        match number {
            Number::Int(i) if options.fractional_digits.is_none() => {
                return Ok(format_standard_int(*i, locale, digit_table));
            }
            Number::Float(f) if f.is_finite() => {
                return format_standard_float(*f, meta, locale, digit_table, options, context);
            }
            _ => {}
        }
    }

    core::format_value(
        number,
        meta,
        locale,
        digit_table,
        currency,
        options,
        context.pluralizer(),
    )
}

/// Standard-format integers skip the kernel entirely: group the decimal
/// digits and transliterate. Negative values recurse on the absolute value
/// and prepend the minus sign unless the body is bare zero.
fn format_standard_int(value: i128, locale: &LocaleData, digit_table: &[char]) -> String {
    if value < 0 {
        let body = format_standard_int(value.saturating_abs(), locale, digit_table);
        if body == digit_table[0].to_string() {
            return body;
        }
        let mut out = locale.symbols.minus.clone();
        out.push_str(&body);
        return out;
    }
    let digits = value.to_string();
    let grouped = shape::group_digits(
        &digits,
        GroupSizes { first: 3, rest: 3 },
        locale.minimum_grouping_digits,
        shape::GroupDirection::Reverse,
    );
    translit::transliterate(&grouped, &locale.symbols, digit_table)
}

/// Standard-format floats apply only the fractional-digits override and
/// fractional rounding before the shared shape/reassemble/transliterate
/// tail; currency, significant digits and the multiplier never apply.
fn format_standard_float(
    value: f64,
    meta: &PatternMeta,
    locale: &LocaleData,
    digit_table: &[char],
    options: &FormatOptions,
    context: &CldrContext,
) -> Result<String, FormatError> {
    let mut adjusted = meta.clone();
    if let Some(digits) = options.fractional_digits {
        adjusted.fractional_digits = DigitRange { min: digits, max: digits };
    }

    let negative = value.is_sign_negative();
    let rounded = rounding::round_fractional(
        &Number::Float(value.abs()),
        adjusted.fractional_digits.max,
        options.rounding_mode,
    );
    let mut tuple = tuple::DigitTuple::from_number(&rounded);
    tuple.sign = if negative { -1 } else { 1 };
    shape::shape(&mut tuple, &adjusted);

    let body = assemble::reassemble(&tuple, &adjusted, locale.minimum_grouping_digits);
    let sub = if tuple.sign < 0 { SubPattern::Negative } else { SubPattern::Positive };
    let tokens = adjusted.tokens(sub);
    let operands = PluralOperands::from_digits(&tuple.integer, &tuple.fraction);
    let assembled = assemble::assemble(
        tokens.as_ref(),
        &body,
        assemble::body_is_zero(&body),
        &adjusted,
        &locale.symbols,
        None,
        &operands,
        &locale.id,
        context.pluralizer(),
    )?;
    Ok(translit::transliterate(&assembled, &locale.symbols, digit_table))
}
