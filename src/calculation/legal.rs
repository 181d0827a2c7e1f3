//! Jurisdiction legal minimum lookups.
//!
//! Pure lookup tables for legal minimum break durations and overtime
//! multiplier floors, keyed by [`Locale`]. Compliance against these floors is
//! advisory: the overtime engine reports violations but never auto-corrects a
//! configured multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// Returns the legal minimum break in minutes for a day of work.
///
/// - Japan: no break up to 6 hours, 45 minutes up to 8 hours, 60 minutes
///   beyond 8 hours.
/// - Vietnam: no break up to 6 hours, then 30 minutes for day shifts and
///   45 minutes for night shifts.
/// - Other: no break up to 6 hours, then 30 minutes.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::legal_minimum_break_minutes;
/// use payroll_engine::models::Locale;
///
/// assert_eq!(legal_minimum_break_minutes(Locale::Japan, 9, false), 60);
/// assert_eq!(legal_minimum_break_minutes(Locale::Vietnam, 8, true), 45);
/// assert_eq!(legal_minimum_break_minutes(Locale::Other, 4, false), 0);
/// ```
pub fn legal_minimum_break_minutes(locale: Locale, working_hours: u32, is_night_shift: bool) -> u32 {
    match locale {
        Locale::Japan => {
            if working_hours <= 6 {
                0
            } else if working_hours <= 8 {
                45
            } else {
                60
            }
        }
        Locale::Vietnam => {
            if working_hours <= 6 {
                0
            } else if is_night_shift {
                45
            } else {
                30
            }
        }
        Locale::Other => {
            if working_hours <= 6 {
                0
            } else {
                30
            }
        }
    }
}

/// The legal multiplier floors for every overtime pricing situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalOvertimeRates {
    /// Floor for overtime on ordinary days outside the night window.
    pub regular: Decimal,
    /// Floor for ordinary work performed inside the night window.
    pub night_work: Decimal,
    /// Floor for overtime inside the night window.
    pub night_overtime: Decimal,
    /// Floor for overtime on public holidays.
    pub holiday_overtime: Decimal,
    /// Floor for holiday overtime inside the night window.
    pub holiday_night_overtime: Decimal,
    /// Floor for overtime on weekly rest days.
    pub weekend_overtime: Decimal,
}

/// Returns the legal overtime multiplier floors for a jurisdiction.
///
/// Japan follows the Labor Standards Act premiums, Vietnam the Labor Code
/// percentages; other jurisdictions get a conservative default table.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::legal_overtime_rates;
/// use payroll_engine::models::Locale;
/// use rust_decimal::Decimal;
///
/// assert_eq!(legal_overtime_rates(Locale::Japan).regular, Decimal::new(125, 2));
/// assert_eq!(legal_overtime_rates(Locale::Vietnam).regular, Decimal::new(150, 2));
/// ```
pub fn legal_overtime_rates(locale: Locale) -> LegalOvertimeRates {
    match locale {
        Locale::Japan => LegalOvertimeRates {
            regular: Decimal::new(125, 2),
            night_work: Decimal::new(125, 2),
            night_overtime: Decimal::new(150, 2),
            holiday_overtime: Decimal::new(135, 2),
            holiday_night_overtime: Decimal::new(160, 2),
            weekend_overtime: Decimal::new(135, 2),
        },
        Locale::Vietnam => LegalOvertimeRates {
            regular: Decimal::new(150, 2),
            night_work: Decimal::new(130, 2),
            night_overtime: Decimal::new(210, 2),
            holiday_overtime: Decimal::new(300, 2),
            holiday_night_overtime: Decimal::new(390, 2),
            weekend_overtime: Decimal::new(200, 2),
        },
        Locale::Other => LegalOvertimeRates {
            regular: Decimal::new(125, 2),
            night_work: Decimal::new(125, 2),
            night_overtime: Decimal::new(150, 2),
            holiday_overtime: Decimal::new(150, 2),
            holiday_night_overtime: Decimal::new(175, 2),
            weekend_overtime: Decimal::new(150, 2),
        },
    }
}
