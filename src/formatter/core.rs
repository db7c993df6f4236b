//! The decimal formatter pipeline
//!
//! Orchestrates one format call: fold per-call adjustments into a local
//! copy of the meta, run the arithmetic and rounding kernel, shape the
//! digit tuple, reassemble and assemble the output string, then
//! transliterate into the target numbering system.

use std::borrow::Cow;

use crate::locale::{Currency, LocaleData};
use crate::plural::{PluralOperands, Pluralizer};
use crate::types::{
    DigitRange, FormatError, FormatOptions, Number, PatternMeta, RoundingIncrement, SubPattern,
};

use super::{assemble, rounding, shape, translit};
use super::tuple::DigitTuple;

#[allow(clippy::too_many_arguments)]
pub(super) fn format_value(
    number: &Number,
    meta: &PatternMeta,
    locale: &LocaleData,
    digit_table: &[char],
    currency: Option<&Currency>,
    options: &FormatOptions,
    pluralizer: &dyn Pluralizer,
) -> Result<String, FormatError> {
    if let Number::Float(f) = number {
        if !f.is_finite() {
            return format_non_finite(*f, meta, locale, digit_table, currency, options, pluralizer);
        }
    }

    let meta = adjust_meta(meta, currency, number, options);
    let negative = number.is_negative();
    let mode = options.rounding_mode;

    let value = rounding::absolute(number);
    let value = rounding::multiply(&value, meta.multiplier);
    let value = rounding::round_to_nearest(&value, meta.rounding, mode);

    let mut tuple;
    if meta.exponent_digits > 0 {
        let (mantissa, mut exponent) = rounding::mantissa_exponent(&value);
        let mantissa = if meta.scientific_rounding > 0 {
            let rounded = rounding::round_significant(&mantissa, meta.scientific_rounding, mode);
            // Rounding can push the mantissa to 10; renormalizing keeps
            // 1 <= |m| < 10 and carries into the exponent
            let (renormalized, carry) = rounding::mantissa_exponent(&rounded);
            exponent += carry;
            renormalized
        } else {
            mantissa
        };
        tuple = DigitTuple::from_number(&mantissa);
        tuple.exponent_sign = if exponent < 0 { -1 } else { 1 };
        tuple.exponent = exponent.unsigned_abs().to_string().into_bytes();
    } else if meta.significant_digits.max > 0 {
        let rounded = rounding::round_significant(&value, meta.significant_digits.max, mode);
        tuple = DigitTuple::from_number(&rounded);
    } else {
        let rounded = rounding::round_fractional(&value, meta.fractional_digits.max, mode);
        tuple = DigitTuple::from_number(&rounded);
    }
    tuple.sign = if negative { -1 } else { 1 };

    let sub = options.pattern.unwrap_or(if tuple.sign < 0 {
        SubPattern::Negative
    } else {
        SubPattern::Positive
    });
    let tokens = meta.tokens(sub);

    shape::shape(&mut tuple, &meta);
    let body = assemble::reassemble(&tuple, &meta, locale.minimum_grouping_digits);
    let operands = PluralOperands::from_digits(&tuple.integer, &tuple.fraction);
    let assembled = assemble::assemble(
        tokens.as_ref(),
        &body,
        assemble::body_is_zero(&body),
        &meta,
        &locale.symbols,
        currency,
        &operands,
        &locale.id,
        pluralizer,
    )?;
    Ok(translit::transliterate(&assembled, &locale.symbols, digit_table))
}

/// Fold currency fraction digits, significant-digit fraction widening and
/// the caller's fractional-digits override into a per-call meta copy, in
/// that fixed order. The shared meta is untouched.
fn adjust_meta<'a>(
    meta: &'a PatternMeta,
    currency: Option<&Currency>,
    number: &Number,
    options: &FormatOptions,
) -> Cow<'a, PatternMeta> {
    let mut adjusted = Cow::Borrowed(meta);

    if let Some(currency) = currency {
        let (digits, increment) = if options.cash {
            (currency.cash_digits, currency.cash_rounding)
        } else {
            (currency.digits, currency.rounding)
        };
        let meta = adjusted.to_mut();
        meta.fractional_digits = DigitRange { min: digits as usize, max: digits as usize };
        if increment > 0 {
            meta.rounding = RoundingIncrement {
                mantissa: increment as u64,
                exponent: -(digits as i32),
            };
        }
    }

    // Significant-digit rounding would otherwise strip the entire visible
    // fraction of non-integer inputs
    if adjusted.significant_digits.max > 0 && number.has_fraction() {
        adjusted.to_mut().fractional_digits = DigitRange { min: 1, max: 10 };
    }

    if let Some(digits) = options.fractional_digits {
        adjusted.to_mut().fractional_digits = DigitRange { min: digits, max: digits };
    }

    adjusted
}

/// NaN and the infinities render the locale's symbol in place of the digit
/// body; affixes still apply.
#[allow(clippy::too_many_arguments)]
fn format_non_finite(
    value: f64,
    meta: &PatternMeta,
    locale: &LocaleData,
    digit_table: &[char],
    currency: Option<&Currency>,
    options: &FormatOptions,
    pluralizer: &dyn Pluralizer,
) -> Result<String, FormatError> {
    let negative = value.is_sign_negative() && !value.is_nan();
    let sub = options.pattern.unwrap_or(if negative {
        SubPattern::Negative
    } else {
        SubPattern::Positive
    });
    let tokens = meta.tokens(sub);
    let body = if value.is_nan() {
        locale.symbols.nan.clone()
    } else {
        locale.symbols.infinity.clone()
    };
    let operands = PluralOperands::from_digits(b"0", b"");
    let assembled = assemble::assemble(
        tokens.as_ref(),
        &body,
        false,
        meta,
        &locale.symbols,
        currency,
        &operands,
        &locale.id,
        pluralizer,
    )?;
    Ok(translit::transliterate(&assembled, &locale.symbols, digit_table))
}
