//! Work item annualization.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Frequency, WorkItem};

use super::stats::checked_mul;

/// Returns how many times a work item of the given frequency runs per year.
///
/// ```
/// use wage_engine::calculation::annual_executions;
/// use wage_engine::models::Frequency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(annual_executions(Frequency::Weekly), Decimal::from(52));
/// ```
pub fn annual_executions(frequency: Frequency) -> Decimal {
    match frequency {
        Frequency::Daily => Decimal::from(365),
        Frequency::Weekly => Decimal::from(52),
        Frequency::Monthly => Decimal::from(12),
        Frequency::Yearly => Decimal::ONE,
    }
}

/// Returns the hours a work item consumes per year.
pub fn annual_hours(item: &WorkItem) -> EngineResult<Decimal> {
    checked_mul(item.hours, annual_executions(item.frequency), "annual hours")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_annual_execution_counts() {
        assert_eq!(annual_executions(Frequency::Daily), dec("365"));
        assert_eq!(annual_executions(Frequency::Weekly), dec("52"));
        assert_eq!(annual_executions(Frequency::Monthly), dec("12"));
        assert_eq!(annual_executions(Frequency::Yearly), dec("1"));
    }

    #[test]
    fn test_annual_hours_for_daily_half_hour() {
        let item = WorkItem::new("Standup", Frequency::Daily, dec("0.5"));
        assert_eq!(annual_hours(&item).unwrap(), dec("182.5"));
    }

    #[test]
    fn test_annual_hours_for_yearly_item() {
        let item = WorkItem::new("Offsite", Frequency::Yearly, dec("16"));
        assert_eq!(annual_hours(&item).unwrap(), dec("16"));
    }

    #[test]
    fn test_oversized_hours_overflow() {
        let item = WorkItem::new("Forever", Frequency::Daily, Decimal::MAX);
        assert!(annual_hours(&item).is_err());
    }
}
