//! Plural-rule support
//!
//! Selects the CLDR plural category of a formatted number, used to pick the
//! pluralized currency display name for the `¤¤¤` placeholder width.

/// The CLDR plural operands of a number as it will be displayed: `i` is the
/// integer value, `v` the count of visible fraction digits, `f` the visible
/// fraction value and `t` the same with trailing zeros removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    pub n: f64,
    pub i: u64,
    pub v: usize,
    pub f: u64,
    pub t: u64,
}

impl PluralOperands {
    /// Operands from the shaped ASCII digit vectors of the number body.
    pub fn from_digits(integer: &[u8], fraction: &[u8]) -> PluralOperands {
        let i = fold_digits(integer);
        let v = fraction.len();
        let f = fold_digits(fraction);
        let trimmed: Vec<u8> = {
            let mut frac = fraction.to_vec();
            while frac.last() == Some(&b'0') {
                frac.pop();
            }
            frac
        };
        let t = fold_digits(&trimmed);
        let n = i as f64 + f as f64 / 10f64.powi(v as i32);
        PluralOperands { n, i, v, f, t }
    }
}

fn fold_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as u64))
}

/// A CLDR plural category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

/// Resolves the plural category of a number for a locale.
///
/// The formatter only depends on this trait; the shipped implementation is
/// [`CardinalRules`].
pub trait Pluralizer {
    fn pluralize(&self, operands: &PluralOperands, locale: &str) -> PluralCategory;
}

/// CLDR cardinal plural rules for the bundled locales.
///
/// Unknown languages fall back to the Germanic `i = 1 and v = 0` rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalRules;

impl Pluralizer for CardinalRules {
    fn pluralize(&self, op: &PluralOperands, locale: &str) -> PluralCategory {
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        match language {
            "ja" | "ko" | "zh" | "th" | "vi" => PluralCategory::Other,
            "es" => {
                if op.n == 1.0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            "fr" | "pt" => {
                if op.i <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            "hi" => {
                if op.i == 0 || (op.i == 1 && op.f == 0) {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            "ar" => arabic(op),
            _ => {
                if op.i == 1 && op.v == 0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
        }
    }
}

fn arabic(op: &PluralOperands) -> PluralCategory {
    if op.f != 0 {
        return PluralCategory::Other;
    }
    match op.i {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        i if (3..=10).contains(&(i % 100)) => PluralCategory::Few,
        i if (11..=99).contains(&(i % 100)) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(integer: &[u8], fraction: &[u8]) -> PluralOperands {
        PluralOperands::from_digits(integer, fraction)
    }

    #[test]
    fn test_operands() {
        let one = op(b"1", b"");
        assert_eq!(one.i, 1);
        assert_eq!(one.v, 0);

        let one_fifty = op(b"1", b"50");
        assert_eq!(one_fifty.v, 2);
        assert_eq!(one_fifty.f, 50);
        assert_eq!(one_fifty.t, 5);
    }

    #[test]
    fn test_english_cardinals() {
        let rules = CardinalRules;
        assert_eq!(rules.pluralize(&op(b"1", b""), "en"), PluralCategory::One);
        assert_eq!(rules.pluralize(&op(b"2", b""), "en"), PluralCategory::Other);
        // "1.00" is plural in English: one dollar, 1.00 dollars
        assert_eq!(rules.pluralize(&op(b"1", b"00"), "en"), PluralCategory::Other);
    }

    #[test]
    fn test_arabic_cardinals() {
        let rules = CardinalRules;
        assert_eq!(rules.pluralize(&op(b"0", b""), "ar"), PluralCategory::Zero);
        assert_eq!(rules.pluralize(&op(b"2", b""), "ar"), PluralCategory::Two);
        assert_eq!(rules.pluralize(&op(b"7", b""), "ar"), PluralCategory::Few);
        assert_eq!(rules.pluralize(&op(b"15", b""), "ar"), PluralCategory::Many);
        assert_eq!(rules.pluralize(&op(b"103", b""), "ar"), PluralCategory::Few);
    }
}
