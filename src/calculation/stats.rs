//! Small numeric helpers shared by the engines.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EngineError, EngineResult};

/// Returns the arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().sum();
    Some(sum / Decimal::from(values.len()))
}

/// Returns the population standard deviation, or `None` for an empty slice.
pub fn population_std_dev(values: &[Decimal]) -> Option<Decimal> {
    let mean = mean(values)?;
    let squared: Decimal = values.iter().map(|v| (*v - mean) * (*v - mean)).sum();
    let variance = squared / Decimal::from(values.len());

    if variance.is_zero() {
        return Some(Decimal::ZERO);
    }
    // variance is never negative, so sqrt always succeeds
    Some(variance.sqrt().unwrap_or(Decimal::ZERO))
}

/// Restricts `value` to `[min, max]`.
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    value.max(min).min(max)
}

/// Multiplies two amounts, reporting overflow as `ArithmeticOverflow`.
pub fn checked_mul(a: Decimal, b: Decimal, operation: &'static str) -> EngineResult<Decimal> {
    a.checked_mul(b)
        .ok_or(EngineError::ArithmeticOverflow { operation })
}

/// Adds two amounts, reporting overflow as `ArithmeticOverflow`.
pub fn checked_add(a: Decimal, b: Decimal, operation: &'static str) -> EngineResult<Decimal> {
    a.checked_add(b)
        .ok_or(EngineError::ArithmeticOverflow { operation })
}

/// Sums amounts, reporting overflow as `ArithmeticOverflow`.
pub fn checked_sum<I>(values: I, operation: &'static str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| checked_add(acc, v, operation))
}
