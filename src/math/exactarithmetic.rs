use rust_decimal::Decimal;

use crate::algebra::algebraerror::AlgebraError;

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// A reduced fraction terminates in base 10 iff its denominator has no prime
/// factors other than 2 and 5.
fn terminates(numerator: &Decimal, denominator: &Decimal) -> bool {
    let n = numerator.mantissa().unsigned_abs();
    let d = denominator.mantissa().unsigned_abs();
    let mut rest = d / gcd(n, d);
    for p in [2u128, 5u128] {
        while rest % p == 0 {
            rest /= p;
        }
    }
    rest == 1
}

/// `rust_decimal` only reduces the scale of a sum or product when the exact
/// result no longer fits, which rounds it. A result at `expected_scale`
/// therefore carries every digit.
fn check_scale(result: Decimal, expected_scale: u32) -> Result<Decimal, AlgebraError> {
    if result.scale() == expected_scale {
        Ok(result)
    } else {
        Err(AlgebraError::PrecisionLoss)
    }
}

/// Retries with trailing zeros stripped, which can make room for the
/// significant digits.
fn exact_op(a: Decimal,
            b: Decimal,
            op: fn(Decimal, Decimal) -> Option<Decimal>,
            scale: fn(u32, u32) -> u32) -> Result<Decimal, AlgebraError> {
    let result = op(a, b).ok_or(AlgebraError::Overflow)?;
    if result.scale() == scale(a.scale(), b.scale()) {
        return Ok(result);
    }
    let (a, b) = (a.normalize(), b.normalize());
    let result = op(a, b).ok_or(AlgebraError::Overflow)?;
    check_scale(result, scale(a.scale(), b.scale()))
}

pub fn exact_add(a: Decimal, b: Decimal) -> Result<Decimal, AlgebraError> {
    exact_op(a, b, Decimal::checked_add, u32::max)
}

pub fn exact_sub(a: Decimal, b: Decimal) -> Result<Decimal, AlgebraError> {
    exact_op(a, b, Decimal::checked_sub, u32::max)
}

pub fn exact_mul(a: Decimal, b: Decimal) -> Result<Decimal, AlgebraError> {
    exact_op(a, b, Decimal::checked_mul, |x, y| x + y)
}

/// Divides `dividend` by `divisor` without rounding.
///
/// Fails with `InexactDivision` when the quotient is non-terminating or needs
/// more digits than a `Decimal` holds. The quotient keeps the scale
/// `dividend.scale() - divisor.scale()` when that is wider than its
/// normalized form, so `2.50 / 1` stays `2.50` while `6 / 2` is `3`.
pub fn exact_div(dividend: Decimal, divisor: Decimal) -> Result<Decimal, AlgebraError> {
    let inexact = AlgebraError::InexactDivision { dividend, divisor };
    if divisor.is_zero() || !terminates(&dividend, &divisor) {
        return Err(inexact);
    }
    let quotient = dividend.checked_div(divisor).ok_or(AlgebraError::Overflow)?;
    if quotient.checked_mul(divisor) != Some(dividend) {
        return Err(inexact);
    }

    let quotient = quotient.normalize();
    let preferred_scale = dividend.scale().saturating_sub(divisor.scale());
    if quotient.scale() >= preferred_scale {
        return Ok(quotient);
    }
    let mut widened = quotient;
    widened.rescale(preferred_scale);
    if widened == quotient {
        Ok(widened)
    } else {
        Ok(quotient)
    }
}
