//! Salary normalization.
//!
//! Converts pay amounts between pay period units, assuming an 8-hour day and
//! 250 working days a year. Monthly and annual amounts are entered in units
//! of 10,000.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::PayPeriodKind;

use super::stats::checked_mul;

/// Working hours in one day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Working days in one year.
pub const WORKING_DAYS_PER_YEAR: Decimal = Decimal::from_parts(250, 0, 0, false, 0);

/// Currency units per entered unit for monthly and annual amounts.
pub const SALARY_UNIT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Months in one year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Returns the working hours in one year.
pub fn working_hours_per_year() -> Decimal {
    HOURS_PER_DAY * WORKING_DAYS_PER_YEAR
}

/// Converts a pay amount to an annual amount in currency units.
///
/// An [`PayPeriodKind::Unknown`] period annualizes to zero. Returns
/// `ArithmeticOverflow` when the annual amount does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::to_annual;
/// use wage_engine::models::PayPeriodKind;
/// use rust_decimal::Decimal;
///
/// # fn main() -> wage_engine::error::EngineResult<()> {
/// assert_eq!(to_annual(Decimal::from(3000), PayPeriodKind::Hourly)?, Decimal::from(6_000_000));
/// assert_eq!(to_annual(Decimal::from(30), PayPeriodKind::Monthly)?, Decimal::from(3_600_000));
/// assert_eq!(to_annual(Decimal::from(500), PayPeriodKind::Annual)?, Decimal::from(5_000_000));
/// # Ok(())
/// # }
/// ```
pub fn to_annual(amount: Decimal, period: PayPeriodKind) -> EngineResult<Decimal> {
    let factor = match period {
        PayPeriodKind::Hourly => working_hours_per_year(),
        PayPeriodKind::Monthly => SALARY_UNIT * MONTHS_PER_YEAR,
        PayPeriodKind::Annual => SALARY_UNIT,
        PayPeriodKind::Unknown => return Ok(Decimal::ZERO),
    };
    checked_mul(amount, factor, "annual salary")
}

/// Converts an annual amount to an hourly rate.
///
/// ```
/// use wage_engine::calculation::to_hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_hourly_rate(Decimal::from(6_000_000)), Decimal::from(3000));
/// ```
pub fn to_hourly_rate(annual_amount: Decimal) -> Decimal {
    annual_amount / working_hours_per_year()
}
