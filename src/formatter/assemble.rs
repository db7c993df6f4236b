//! Reassembly and format assembly
//!
//! Joins the shaped digit tuple into a provisional number body (still
//! carrying placeholder separators), then walks a sub-pattern's token
//! sequence substituting the body, signs, currency glyphs, percent signs,
//! literals and pad fill.

use unicode_segmentation::UnicodeSegmentation;

use crate::locale::{Currency, LocaleSymbols};
use crate::plural::{PluralOperands, Pluralizer};
use crate::types::{CurrencyWidth, FormatError, FormatToken, PatternMeta};

use super::shape::{group_digits, GroupDirection};
use super::translit::{
    DECIMAL_PLACEHOLDER, EXPONENT_PLACEHOLDER, MINUS_PLACEHOLDER, PLUS_PLACEHOLDER,
};
use super::tuple::DigitTuple;

/// Join integer, fraction and exponent into the provisional number body.
/// An empty integer renders as "0"; an empty fraction omits the decimal
/// separator entirely; the exponent segment appears only in scientific mode.
pub(super) fn reassemble(
    tuple: &DigitTuple,
    meta: &PatternMeta,
    minimum_grouping_digits: usize,
) -> String {
    let integer = std::str::from_utf8(&tuple.integer).unwrap_or("0");
    let fraction = std::str::from_utf8(&tuple.fraction).unwrap_or("");

    let mut body = if integer.is_empty() {
        "0".to_string()
    } else {
        group_digits(
            integer,
            meta.grouping.integer,
            minimum_grouping_digits,
            GroupDirection::Reverse,
        )
    };

    if !fraction.is_empty() {
        body.push(DECIMAL_PLACEHOLDER);
        body.push_str(&group_digits(
            fraction,
            meta.grouping.fraction,
            minimum_grouping_digits,
            GroupDirection::Forward,
        ));
    }

    if meta.exponent_digits > 0 {
        body.push(EXPONENT_PLACEHOLDER);
        if tuple.exponent_sign < 0 {
            body.push(MINUS_PLACEHOLDER);
        } else if meta.exponent_sign {
            body.push(PLUS_PLACEHOLDER);
        }
        let exponent = std::str::from_utf8(&tuple.exponent).unwrap_or("0");
        for _ in exponent.len()..meta.exponent_digits {
            body.push('0');
        }
        body.push_str(exponent);
    }

    body
}

/// True when the provisional body holds no visible nonzero digit, in which
/// case a minus sign must not be rendered.
pub(super) fn body_is_zero(body: &str) -> bool {
    !body.bytes().any(|b| (b'1'..=b'9').contains(&b))
}

#[allow(clippy::too_many_arguments)]
pub(super) fn assemble(
    tokens: &[FormatToken],
    body: &str,
    is_zero: bool,
    meta: &PatternMeta,
    symbols: &LocaleSymbols,
    currency: Option<&Currency>,
    operands: &PluralOperands,
    locale_id: &str,
    pluralizer: &dyn Pluralizer,
) -> Result<String, FormatError> {
    let mut pieces: Vec<String> = Vec::with_capacity(tokens.len());
    let mut pad_index = None;

    for token in tokens {
        let piece = match token {
            FormatToken::Number => body.to_string(),
            FormatToken::Pad => {
                pad_index = Some(pieces.len());
                String::new()
            }
            FormatToken::PlusSign => symbols.plus.clone(),
            FormatToken::MinusSign => {
                if is_zero {
                    String::new()
                } else {
                    symbols.minus.clone()
                }
            }
            FormatToken::Currency(width) => {
                let currency = currency.ok_or(FormatError::MissingCurrency)?;
                match width {
                    CurrencyWidth::Symbol => currency.symbol.clone(),
                    CurrencyWidth::IsoCode => currency.code.clone(),
                    CurrencyWidth::DisplayName => {
                        let category = pluralizer.pluralize(operands, locale_id);
                        currency.display_name(category.as_str()).to_string()
                    }
                    CurrencyWidth::NarrowSymbol => currency
                        .narrow_symbol
                        .clone()
                        .unwrap_or_else(|| currency.symbol.clone()),
                }
            }
            FormatToken::Percent => symbols.percent.clone(),
            FormatToken::Permille => symbols.permille.clone(),
            FormatToken::Literal(c) => c.to_string(),
            FormatToken::Quoted(text) => text.clone(),
            FormatToken::Apostrophe => "'".to_string(),
        };
        pieces.push(piece);
    }

    if let Some(index) = pad_index {
        if meta.padding_length > 0 {
            let width: usize = pieces.iter().map(|p| p.graphemes(true).count()).sum();
            if meta.padding_length > width {
                pieces[index] =
                    meta.padding_char.to_string().repeat(meta.padding_length - width);
            }
        }
    }

    Ok(pieces.concat())
}
