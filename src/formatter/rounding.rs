//! Arithmetic and rounding kernel
//!
//! Every rounding step of the pipeline funnels through this module so the
//! caller-selected rounding mode is applied consistently. Multiplication is
//! native per variant; rounding itself runs in exact decimal arithmetic on
//! the value's shortest decimal form, which keeps currency amounts exact
//! and floats free of binary-expansion artifacts.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

use crate::types::{Number, RoundingIncrement, RoundingMode};

pub(super) fn absolute(n: &Number) -> Number {
    match n {
        Number::Int(i) => Number::Int(i.saturating_abs()),
        Number::Float(f) => Number::Float(f.abs()),
        Number::Decimal(d) => Number::Decimal(d.abs()),
    }
}

pub(super) fn multiply(n: &Number, factor: i32) -> Number {
    if factor == 1 {
        return n.clone();
    }
    match n {
        Number::Int(i) => Number::Int(i.saturating_mul(factor as i128)),
        Number::Float(f) => Number::Float(f * f64::from(factor)),
        Number::Decimal(d) => Number::Decimal(d * BigDecimal::from(factor)),
    }
}

/// Round to the nearest multiple of the increment. A zero increment is the
/// skip sentinel. Integer inputs with an integral increment stay integers.
pub(super) fn round_to_nearest(
    n: &Number,
    incr: RoundingIncrement,
    mode: RoundingMode,
) -> Number {
    if incr.is_none() {
        return n.clone();
    }
    match n {
        Number::Int(i) if incr.exponent >= 0 => {
            let step = (incr.mantissa as i128)
                .saturating_mul(10i128.saturating_pow(incr.exponent as u32));
            Number::Int(round_int_ratio(*i, step, mode).saturating_mul(step))
        }
        _ => {
            let value = to_decimal(n);
            let step = incr.as_decimal();
            let quotient = (&value / &step).with_scale_round(0, decimal_mode(mode));
            from_decimal(n, quotient * step)
        }
    }
}

/// Round to `digits` significant digits. Exact for decimals; zero digits
/// is a no-op.
pub(super) fn round_significant(n: &Number, digits: usize, mode: RoundingMode) -> Number {
    if digits == 0 {
        return n.clone();
    }
    let value = to_decimal(n);
    if value.is_zero() {
        return n.clone();
    }
    let (_, scale) = value.as_bigint_and_exponent();
    let have = value.digits() as i64;
    let new_scale = scale - (have - digits as i64);
    from_decimal(n, value.with_scale_round(new_scale, decimal_mode(mode)))
}

/// Round to at most `max` decimal places. Integers pass through unchanged;
/// the scientific pipeline never calls this (mantissa precision is driven
/// by the significant-digit constraint instead).
pub(super) fn round_fractional(n: &Number, max: usize, mode: RoundingMode) -> Number {
    match n {
        Number::Int(_) => n.clone(),
        Number::Float(f) if !f.is_finite() || f.fract() == 0.0 => n.clone(),
        _ => {
            let value = to_decimal(n);
            from_decimal(n, value.with_scale_round(max as i64, decimal_mode(mode)))
        }
    }
}

/// Decompose into `m × 10^e` with `1 <= |m| < 10`, or `(0, 0)` for zero.
pub(super) fn mantissa_exponent(n: &Number) -> (Number, i64) {
    let value = to_decimal(n);
    if value.is_zero() {
        return (Number::Decimal(BigDecimal::zero()), 0);
    }
    let (coefficient, scale) = value.as_bigint_and_exponent();
    let exponent = value.digits() as i64 - scale - 1;
    (Number::Decimal(BigDecimal::new(coefficient, scale + exponent)), exponent)
}

fn to_decimal(n: &Number) -> BigDecimal {
    match n {
        Number::Int(i) => BigDecimal::from(*i),
        Number::Float(f) => {
            BigDecimal::from_str(&f.to_string()).unwrap_or_else(|_| BigDecimal::zero())
        }
        Number::Decimal(d) => d.clone(),
    }
}

/// Carry the input's variant through a kernel operation: floats stay
/// floats, everything else becomes an exact decimal.
fn from_decimal(like: &Number, value: BigDecimal) -> Number {
    match like {
        Number::Float(_) => Number::Float(value.to_f64().unwrap_or(0.0)),
        _ => Number::Decimal(value),
    }
}

/// Round the ratio `n / step` to an integer in pure i128 arithmetic.
fn round_int_ratio(n: i128, step: i128, mode: RoundingMode) -> i128 {
    if step == 0 {
        return n;
    }
    let quotient = n / step;
    let remainder = n % step;
    if remainder == 0 {
        return quotient;
    }
    let negative = (n < 0) != (step < 0);
    let twice = remainder.unsigned_abs().saturating_mul(2);
    let step_magnitude = step.unsigned_abs();
    let bump = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => twice >= step_magnitude,
        RoundingMode::HalfDown => twice > step_magnitude,
        RoundingMode::HalfEven => {
            twice > step_magnitude || (twice == step_magnitude && quotient % 2 != 0)
        }
    };
    if !bump {
        quotient
    } else if negative {
        quotient - 1
    } else {
        quotient + 1
    }
}

fn decimal_mode(mode: RoundingMode) -> bigdecimal::RoundingMode {
    match mode {
        RoundingMode::Up => bigdecimal::RoundingMode::Up,
        RoundingMode::Down => bigdecimal::RoundingMode::Down,
        RoundingMode::Ceiling => bigdecimal::RoundingMode::Ceiling,
        RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
        RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
        RoundingMode::HalfDown => bigdecimal::RoundingMode::HalfDown,
        RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_increment_is_skipped() {
        let n = Number::Float(12.5);
        assert_eq!(round_to_nearest(&n, RoundingIncrement::default(), RoundingMode::HalfEven), n);
    }

    #[test]
    fn test_round_to_nearest_integer_increment() {
        let six = RoundingIncrement { mantissa: 6, exponent: 0 };
        assert_eq!(
            round_to_nearest(&Number::Int(12345), six, RoundingMode::HalfEven),
            Number::Int(12348)
        );
        assert_eq!(
            round_to_nearest(&Number::Int(12344), six, RoundingMode::HalfEven),
            Number::Int(12342)
        );
    }

    #[test]
    fn test_round_to_nearest_cash_increment() {
        let nickel = RoundingIncrement { mantissa: 5, exponent: -2 };
        let rounded = round_to_nearest(&Number::Float(1.02), nickel, RoundingMode::HalfEven);
        assert_eq!(rounded, Number::Float(1.0));
        let rounded = round_to_nearest(&Number::Float(1.03), nickel, RoundingMode::HalfEven);
        assert_eq!(rounded, Number::Float(1.05));
    }

    #[test]
    fn test_round_significant() {
        let rounded = round_significant(&Number::Int(12345), 3, RoundingMode::HalfEven);
        assert_eq!(rounded, Number::Decimal(BigDecimal::from(12300)));

        let rounded = round_significant(&Number::Float(0.0012345), 2, RoundingMode::HalfEven);
        assert_eq!(rounded, Number::Float(0.0012));
    }

    #[test]
    fn test_round_fractional_modes() {
        let n = Number::Float(2.345);
        assert_eq!(round_fractional(&n, 2, RoundingMode::Floor), Number::Float(2.34));
        assert_eq!(round_fractional(&n, 2, RoundingMode::Up), Number::Float(2.35));
        assert_eq!(round_fractional(&n, 0, RoundingMode::Ceiling), Number::Float(3.0));
    }

    #[test]
    fn test_mantissa_exponent() {
        let (mantissa, exponent) = mantissa_exponent(&Number::Int(12345));
        assert_eq!(exponent, 4);
        assert_eq!(mantissa, Number::Decimal("1.2345".parse().unwrap()));

        let (mantissa, exponent) = mantissa_exponent(&Number::Float(0.012));
        assert_eq!(exponent, -2);
        assert_eq!(mantissa, Number::Decimal("1.2".parse().unwrap()));

        let (_, exponent) = mantissa_exponent(&Number::Int(0));
        assert_eq!(exponent, 0);
    }
}
