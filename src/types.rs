//! Type definitions for CLDR number formatting
//!
//! This module defines the type system shared by the pattern parser and the
//! formatter: the polymorphic number union, compiled pattern metadata,
//! formatting options and the error type returned by format calls.

use std::borrow::Cow;
use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// A numeric value accepted by the formatter.
///
/// The `Decimal` variant carries arbitrary precision; arithmetic on it never
/// loses precision except where rounding is explicitly requested.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// A signed integer
    Int(i128),
    /// An IEEE-754 double
    Float(f64),
    /// An arbitrary-precision decimal
    Decimal(BigDecimal),
}

impl Number {
    /// True when the value compares less than zero. `-0.0` counts as
    /// negative so that sub-pattern selection sees the sign before rounding
    /// collapses the value to zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(i) => *i < 0,
            Number::Float(f) => f.is_sign_negative() && !f.is_nan(),
            Number::Decimal(d) => d.sign() == num_bigint::Sign::Minus,
        }
    }

    /// True when the value has a fractional part. Decimals with a
    /// non-positive scale are treated as integers.
    pub fn has_fraction(&self) -> bool {
        match self {
            Number::Int(_) => false,
            Number::Float(f) => f.is_finite() && f.fract() != 0.0,
            Number::Decimal(d) => d.as_bigint_and_exponent().1 > 0,
        }
    }
}

macro_rules! impl_number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::Int(value as i128)
            }
        })*
    };
}

impl_number_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number::Decimal(value)
    }
}

/// Rounding mode applied in every rounding step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest; ties away from zero
    HalfUp,
    /// Nearest; ties toward zero
    HalfDown,
    /// Nearest; ties to the even neighbour
    #[default]
    HalfEven,
}

/// Width of a `¤` currency placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyWidth {
    /// `¤`: the currency symbol
    Symbol,
    /// `¤¤`: the ISO 4217 code
    IsoCode,
    /// `¤¤¤`: the plural display name
    DisplayName,
    /// `¤¤¤¤`: the narrow symbol, falling back to the symbol
    NarrowSymbol,
}

impl CurrencyWidth {
    pub(crate) fn from_repeat(count: usize) -> CurrencyWidth {
        match count {
            1 => CurrencyWidth::Symbol,
            2 => CurrencyWidth::IsoCode,
            3 => CurrencyWidth::DisplayName,
            _ => CurrencyWidth::NarrowSymbol,
        }
    }
}

/// A single token of a compiled sub-pattern
#[derive(Debug, Clone, PartialEq)]
pub enum FormatToken {
    /// The formatted number body
    Number,
    /// Pad fill up to the pattern's padding length
    Pad,
    /// Locale plus sign
    PlusSign,
    /// Locale minus sign; suppressed when the number body is zero
    MinusSign,
    /// Currency placeholder with its width
    Currency(CurrencyWidth),
    /// Locale percent sign
    Percent,
    /// Locale permille sign
    Permille,
    /// Literal character to display directly
    Literal(char),
    /// Quoted text, like 'text'
    Quoted(String),
    /// A doubled quote, rendered as a literal apostrophe
    Apostrophe,
}

/// Selects the positive or negative sub-pattern of a format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPattern {
    Positive,
    Negative,
}

/// Minimum and maximum digit counts. `max == 0` means unbounded for
/// integer digits; a significant-digit range with `max == 0` is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitRange {
    pub min: usize,
    pub max: usize,
}

/// Sizes of the primary and secondary digit groups. `first` is the group
/// nearest the decimal separator; `rest` applies to all further groups.
/// Both zero means no grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupSizes {
    pub first: usize,
    pub rest: usize,
}

impl GroupSizes {
    pub fn is_none(&self) -> bool {
        self.first == 0 && self.rest == 0
    }
}

/// Grouping on both sides of the decimal separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupingSpec {
    pub integer: GroupSizes,
    pub fraction: GroupSizes,
}

/// A rational rounding increment, `mantissa × 10^exponent`.
/// A zero mantissa is the skip sentinel: no increment rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundingIncrement {
    pub mantissa: u64,
    pub exponent: i32,
}

impl RoundingIncrement {
    pub fn is_none(&self) -> bool {
        self.mantissa == 0
    }

    pub(crate) fn as_decimal(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.mantissa), -(self.exponent as i64))
    }
}

/// Compiled, immutable description of a number-format pattern.
///
/// A meta is produced once by [`crate::parser::parse_pattern`] (or looked up
/// from the precompiled named styles) and drives every stage of the
/// formatting pipeline. Shared metas are never mutated; per-call
/// adjustments operate on a local copy.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMeta {
    /// Token sequence of the positive sub-pattern
    pub positive: Vec<FormatToken>,
    /// Token sequence of the negative sub-pattern; `None` means "same as
    /// positive with a leading minus sign"
    pub negative: Option<Vec<FormatToken>>,
    pub integer_digits: DigitRange,
    pub fractional_digits: DigitRange,
    pub significant_digits: DigitRange,
    /// Minimum exponent digits; zero disables scientific notation
    pub exponent_digits: usize,
    /// Force an explicit plus sign on non-negative exponents
    pub exponent_sign: bool,
    /// Significant-digit constraint on the mantissa in scientific mode
    pub scientific_rounding: usize,
    /// 1 normally, 100 for percent patterns, 1000 for permille patterns
    pub multiplier: i32,
    pub rounding: RoundingIncrement,
    pub grouping: GroupingSpec,
    pub padding_length: usize,
    pub padding_char: char,
}

impl PatternMeta {
    /// Token sequence for the requested sub-pattern. A missing negative
    /// sub-pattern fabricates `[MinusSign, ...positive]`.
    pub fn tokens(&self, sub: SubPattern) -> Cow<'_, [FormatToken]> {
        match sub {
            SubPattern::Positive => Cow::Borrowed(self.positive.as_slice()),
            SubPattern::Negative => match &self.negative {
                Some(tokens) => Cow::Borrowed(tokens.as_slice()),
                None => {
                    let mut tokens = Vec::with_capacity(self.positive.len() + 1);
                    tokens.push(FormatToken::MinusSign);
                    tokens.extend(self.positive.iter().cloned());
                    Cow::Owned(tokens)
                }
            },
        }
    }

    /// Structural check for the canonical standard meta (`"#,##0.###"`),
    /// which is eligible for the shortened formatting paths.
    pub fn is_standard(&self) -> bool {
        self.positive == [FormatToken::Number]
            && self.negative.is_none()
            && self.integer_digits == (DigitRange { min: 1, max: 0 })
            && self.fractional_digits == (DigitRange { min: 0, max: 3 })
            && self.significant_digits == (DigitRange { min: 0, max: 0 })
            && self.exponent_digits == 0
            && self.multiplier == 1
            && self.rounding.is_none()
            && self.grouping.integer == (GroupSizes { first: 3, rest: 3 })
            && self.grouping.fraction.is_none()
            && self.padding_length == 0
    }
}

/// Options accepted by every format call
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Locale identifier, e.g. "en", "de", "en-IN"
    pub locale: String,
    /// Numbering system identifier: "latn", "arab", ..., or "native" for
    /// the locale's native digit table
    pub number_system: String,
    /// ISO 4217 currency code, required for patterns containing `¤`
    pub currency: Option<String>,
    /// Use the currency's cash digits and cash rounding increment
    pub cash: bool,
    pub rounding_mode: RoundingMode,
    /// Overrides both minimum and maximum fractional digits
    pub fractional_digits: Option<usize>,
    /// Forces a sub-pattern instead of deriving it from the sign
    pub pattern: Option<SubPattern>,
}

impl FormatOptions {
    /// Options for the given locale with Latin digits, no currency and
    /// half-even rounding.
    pub fn new(locale: &str) -> FormatOptions {
        FormatOptions {
            locale: locale.to_string(),
            number_system: "latn".to_string(),
            currency: None,
            cash: false,
            rounding_mode: RoundingMode::HalfEven,
            fractional_digits: None,
            pattern: None,
        }
    }
}

/// Error type for format calls
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The locale is not in the configured set
    UnknownLocale(String),
    /// The numbering system has no digit table
    UnknownNumberSystem(String),
    /// The currency code is not in the currency table
    UnknownCurrency(String),
    /// The pattern contains a currency placeholder but no currency was given
    MissingCurrency,
    /// The named style is not defined for the locale
    UnknownFormat(String),
    /// The user-supplied pattern is malformed
    PatternError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownLocale(locale) => write!(f, "unknown locale: {}", locale),
            FormatError::UnknownNumberSystem(system) => {
                write!(f, "unknown numbering system: {}", system)
            }
            FormatError::UnknownCurrency(code) => write!(f, "unknown currency: {}", code),
            FormatError::MissingCurrency => {
                write!(f, "pattern contains a currency placeholder but no currency was given")
            }
            FormatError::UnknownFormat(name) => write!(f, "unknown format style: {}", name),
            FormatError::PatternError(msg) => write!(f, "invalid number format pattern: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}
