//! Digit-tuple model
//!
//! The pipeline's intermediate representation of a number: sign, integer
//! digits, fraction digits and an optional exponent, all held as ASCII
//! digit bytes in `'0'..='9'`.

use bigdecimal::BigDecimal;

use crate::types::Number;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct DigitTuple {
    pub sign: i8,
    pub integer: Vec<u8>,
    pub fraction: Vec<u8>,
    pub exponent_sign: i8,
    pub exponent: Vec<u8>,
}

impl DigitTuple {
    /// Extract the digits of the number's absolute value. The sign is taken
    /// from the number; the exponent fields start out empty and are filled
    /// by the scientific-mode pipeline.
    pub fn from_number(n: &Number) -> DigitTuple {
        let sign = if n.is_negative() { -1 } else { 1 };
        let (integer, fraction) = match n {
            Number::Int(i) => (i.unsigned_abs().to_string(), String::new()),
            // The shortest round-trip form, so 0.1 yields "0.1" rather
            // than the binary expansion
            Number::Float(f) => split_plain(&f.abs().to_string()),
            Number::Decimal(d) => decimal_digits(d),
        };
        DigitTuple {
            sign,
            integer: strip_leading_zeros(integer.into_bytes()),
            fraction: fraction.into_bytes(),
            exponent_sign: 1,
            exponent: Vec::new(),
        }
    }
}

fn split_plain(s: &str) -> (String, String) {
    match s.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (s.to_string(), String::new()),
    }
}

fn decimal_digits(d: &BigDecimal) -> (String, String) {
    let (coefficient, scale) = d.as_bigint_and_exponent();
    let digits = coefficient.magnitude().to_string();
    if scale <= 0 {
        let mut integer = digits;
        integer.push_str(&"0".repeat(scale.unsigned_abs() as usize));
        (integer, String::new())
    } else if digits.len() > scale as usize {
        let (integer, fraction) = digits.split_at(digits.len() - scale as usize);
        (integer.to_string(), fraction.to_string())
    } else {
        let mut fraction = "0".repeat(scale as usize - digits.len());
        fraction.push_str(&digits);
        (String::new(), fraction)
    }
}

fn strip_leading_zeros(mut integer: Vec<u8>) -> Vec<u8> {
    let keep_from = integer
        .iter()
        .position(|b| *b != b'0')
        .unwrap_or(integer.len().saturating_sub(1));
    integer.drain(..keep_from);
    integer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_integer_digits() {
        let tuple = DigitTuple::from_number(&Number::Int(-1234));
        assert_eq!(tuple.sign, -1);
        assert_eq!(tuple.integer, b"1234");
        assert!(tuple.fraction.is_empty());
    }

    #[test]
    fn test_float_digits() {
        let tuple = DigitTuple::from_number(&Number::Float(0.25));
        assert_eq!(tuple.integer, b"0");
        assert_eq!(tuple.fraction, b"25");
    }

    #[test]
    fn test_decimal_digits() {
        let small = BigDecimal::from_str("0.00125").unwrap();
        let tuple = DigitTuple::from_number(&Number::Decimal(small));
        assert!(tuple.integer.is_empty(), "integer fills in during shaping");
        assert_eq!(tuple.fraction, b"00125");

        let wide = BigDecimal::from_str("1.2e3").unwrap();
        let tuple = DigitTuple::from_number(&Number::Decimal(wide));
        assert_eq!(tuple.integer, b"1200");
    }
}
