use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::token::{any, literal, none_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::{CurrencyWidth, FormatToken};

/// Raw token produced by the sub-pattern tokenizer, before the digit
/// skeleton is analyzed into metadata
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawToken {
    Affix(FormatToken),
    Pad(char),
    Skeleton(RawSkeleton),
}

/// The digit portion of a sub-pattern, kept as raw text for analysis
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawSkeleton {
    /// Placeholder run: `0-9`, `#`, `@`, `.` and grouping commas
    pub body: String,
    /// An explicit `+` followed the exponent marker
    pub exponent_sign: bool,
    /// Count of `0` placeholders after the exponent marker
    pub exponent_digits: usize,
}

pub fn parse_skeleton(input: &mut &str) -> ModalResult<RawToken> {
    let start = *input;
    let body = take_while(1.., ('0'..='9', '#', '@', '.', ','))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)?;

    // A run of bare separators ("." or ",") is not a number section
    if !body.chars().any(|c| c.is_ascii_digit() || c == '#' || c == '@') {
        *input = start;
        return Err(ErrMode::Backtrack(ContextError::from_input(&start)));
    }

    let exponent = opt(preceded('E', (opt('+'), take_while(1.., '0'))))
        .parse_next(input)?;
    let (exponent_sign, exponent_digits) = match exponent {
        Some((plus, zeros)) => (plus.is_some(), zeros.len()),
        None => (false, 0),
    };

    Ok(RawToken::Skeleton(RawSkeleton {
        body: body.to_string(),
        exponent_sign,
        exponent_digits,
    }))
}

pub fn parse_currency(input: &mut &str) -> ModalResult<RawToken> {
    take_while(1..=4, '¤')
        .map(|s: &str| {
            RawToken::Affix(FormatToken::Currency(CurrencyWidth::from_repeat(
                s.chars().count(),
            )))
        })
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_percent(input: &mut &str) -> ModalResult<RawToken> {
    literal("%")
        .value(RawToken::Affix(FormatToken::Percent))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_permille(input: &mut &str) -> ModalResult<RawToken> {
    literal("‰")
        .value(RawToken::Affix(FormatToken::Permille))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_plus(input: &mut &str) -> ModalResult<RawToken> {
    literal("+")
        .value(RawToken::Affix(FormatToken::PlusSign))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_minus(input: &mut &str) -> ModalResult<RawToken> {
    literal("-")
        .value(RawToken::Affix(FormatToken::MinusSign))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_apostrophe(input: &mut &str) -> ModalResult<RawToken> {
    literal("''")
        .value(RawToken::Affix(FormatToken::Apostrophe))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_quoted(input: &mut &str) -> ModalResult<RawToken> {
    let content_parser = repeat(0.., alt((literal("''").value('\''), none_of(['\'']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content_parser, '\'')
        .map(|text| RawToken::Affix(FormatToken::Quoted(text)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_pad(input: &mut &str) -> ModalResult<RawToken> {
    preceded('*', any)
        .map(RawToken::Pad)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<RawToken> {
    none_of([';'])
        .map(|c| RawToken::Affix(FormatToken::Literal(c)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
