//! Overtime classification and pricing functionality.
//!
//! This module classifies per-day overtime minutes into regular, night,
//! holiday, and weekend buckets, applies per-day and per-month caps with
//! proportional reduction, prices each bucket by its configured multiplier,
//! and validates configured multipliers against the jurisdiction's legal
//! floors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimeConfig;
use crate::models::{DailyOvertimeDetail, OvertimeResult};

use super::legal::legal_overtime_rates;
use super::money::round_currency;

/// Classifies and prices a period's overtime.
///
/// Each day is processed in list order:
///
/// 1. The day's regular/night split is taken as provided.
/// 2. A day exceeding the per-day cap is scaled down proportionally: regular
///    minutes by the cap ratio, night minutes as the exact remainder so the
///    capped total is preserved.
/// 3. A day that would breach the monthly cap is scaled again to exactly
///    fill the remaining monthly budget; once the budget is exhausted,
///    remaining days are not processed.
/// 4. The day's minutes go to the holiday bucket if the day is a holiday,
///    else to the weekend bucket if it is a weekend, else split into the
///    regular and night buckets.
///
/// Each bucket is priced as `minutes × (hourly rate / 60) × multiplier`,
/// rounded half-up to whole currency units independently per bucket; the
/// total is the sum of the four already-rounded amounts, so the itemized
/// buckets always reconcile with the total.
///
/// A disabled configuration or an empty list yields an all-zero result.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime;
/// use payroll_engine::config::OvertimeConfig;
/// use payroll_engine::models::DailyOvertimeDetail;
/// use rust_decimal::Decimal;
///
/// let day = DailyOvertimeDetail {
///     regular_minutes: 120,
///     night_minutes: 0,
///     is_holiday: false,
///     is_weekend: false,
/// };
///
/// let result = calculate_overtime(&[day], &OvertimeConfig::default(), Decimal::new(3000, 0));
/// // 120 minutes at 3000/hour with the default 1.25x multiplier.
/// assert_eq!(result.regular_amount, 7500);
/// assert_eq!(result.total_amount, 7500);
/// ```
pub fn calculate_overtime(
    details: &[DailyOvertimeDetail],
    config: &OvertimeConfig,
    hourly_rate: Decimal,
) -> OvertimeResult {
    if !config.enabled || details.is_empty() {
        return OvertimeResult::default();
    }

    let day_cap = config.max_overtime_hours_per_day.map(|h| h * 60);
    let month_cap = config.max_overtime_hours_per_month.map(|h| h * 60);

    let mut regular_minutes: u32 = 0;
    let mut night_minutes: u32 = 0;
    let mut holiday_minutes: u32 = 0;
    let mut weekend_minutes: u32 = 0;
    let mut month_used: u32 = 0;

    for day in details {
        let mut regular = day.regular_minutes;
        let mut night = day.night_minutes;
        let mut total = regular + night;

        if let Some(cap) = day_cap {
            if total > cap {
                (regular, night) = scale_to(regular, total, cap);
                total = cap;
            }
        }

        if let Some(cap) = month_cap {
            let remaining = cap.saturating_sub(month_used);
            if remaining == 0 {
                break;
            }
            if total > remaining {
                (regular, night) = scale_to(regular, total, remaining);
                total = remaining;
            }
        }

        month_used += total;

        if day.is_holiday {
            holiday_minutes += total;
        } else if day.is_weekend {
            weekend_minutes += total;
        } else {
            regular_minutes += regular;
            night_minutes += night;
        }
    }

    let minute_rate = hourly_rate / Decimal::from(60);
    let price = |minutes: u32, multiplier: Decimal| -> i64 {
        round_currency(Decimal::from(minutes) * minute_rate * multiplier)
    };

    let regular_amount = price(regular_minutes, config.multipliers.regular);
    let night_amount = price(night_minutes, config.multipliers.night);
    let holiday_amount = price(holiday_minutes, config.multipliers.holiday);
    let weekend_amount = price(weekend_minutes, config.multipliers.weekend);

    OvertimeResult {
        regular_minutes,
        night_minutes,
        holiday_minutes,
        weekend_minutes,
        total_minutes: regular_minutes + night_minutes + holiday_minutes + weekend_minutes,
        regular_amount,
        night_amount,
        holiday_amount,
        weekend_amount,
        total_amount: regular_amount + night_amount + holiday_amount + weekend_amount,
    }
}

/// Scales a day's regular/night split down to a cap.
///
/// Regular minutes scale by the cap ratio (floored); night minutes take the
/// exact remainder so the reduced total equals the cap.
fn scale_to(regular: u32, total: u32, cap: u32) -> (u32, u32) {
    let scaled_regular = (u64::from(regular) * u64::from(cap) / u64::from(total)) as u32;
    (scaled_regular, cap - scaled_regular)
}

/// One configured multiplier falling below its legal floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierViolation {
    /// The overtime bucket whose multiplier is non-compliant.
    pub bucket: String,
    /// The configured multiplier.
    pub configured: Decimal,
    /// The jurisdiction's floor for this bucket.
    pub legal_minimum: Decimal,
}

/// The outcome of validating configured multipliers against legal floors.
///
/// Compliance is advisory: a violation is reported, never auto-corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierCompliance {
    /// True when every configured multiplier meets its floor.
    pub is_compliant: bool,
    /// Every multiplier found below its floor.
    pub violations: Vec<MultiplierViolation>,
}

/// Checks every configured multiplier against the jurisdiction floor.
///
/// The four configured buckets map onto the legal table as regular→regular,
/// night→night overtime, holiday→holiday overtime, and weekend→weekend
/// overtime. A multiplier is compliant iff it is greater than or equal to
/// the corresponding floor.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_multipliers;
/// use payroll_engine::config::OvertimeConfig;
/// use payroll_engine::models::Locale;
///
/// let config = OvertimeConfig {
///     locale: Locale::Japan,
///     ..OvertimeConfig::default()
/// };
/// assert!(validate_multipliers(&config).is_compliant);
/// ```
pub fn validate_multipliers(config: &OvertimeConfig) -> MultiplierCompliance {
    let floors = legal_overtime_rates(config.locale);
    let checks = [
        ("regular", config.multipliers.regular, floors.regular),
        ("night", config.multipliers.night, floors.night_overtime),
        ("holiday", config.multipliers.holiday, floors.holiday_overtime),
        ("weekend", config.multipliers.weekend, floors.weekend_overtime),
    ];

    let violations: Vec<MultiplierViolation> = checks
        .into_iter()
        .filter(|(_, configured, floor)| configured < floor)
        .map(|(bucket, configured, legal_minimum)| MultiplierViolation {
            bucket: bucket.to_string(),
            configured,
            legal_minimum,
        })
        .collect();

    MultiplierCompliance {
        is_compliant: violations.is_empty(),
        violations,
    }
}
