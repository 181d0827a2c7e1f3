//! Currency rounding helpers.
//!
//! All currency outputs are whole-unit integers. Intermediate computation
//! stays in [`Decimal`] until the final rounding step of each line item, so
//! derived rates keep their full precision instead of compounding rounding
//! error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{RoundingConfig, RoundingMode};

/// Rounds a monetary value to whole currency units, half-up away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(25, 1)), 3); // 2.5 -> 3
/// assert_eq!(round_currency(Decimal::new(24, 1)), 2); // 2.4 -> 2
/// assert_eq!(round_currency(Decimal::new(-25, 1)), -3); // -2.5 -> -3
/// ```
pub fn round_currency(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Snaps a whole-unit amount to the configured rounding granularity.
///
/// With the default unit of 1 the amount passes through unchanged. With a
/// larger unit the amount is divided by the unit, rounded per the configured
/// mode, and scaled back.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_unit;
/// use payroll_engine::config::{RoundingConfig, RoundingMode};
///
/// let tens = RoundingConfig { mode: RoundingMode::Floor, unit: 10 };
/// assert_eq!(round_to_unit(1234, &tens), 1230);
///
/// let nearest = RoundingConfig { mode: RoundingMode::Nearest, unit: 100 };
/// assert_eq!(round_to_unit(1250, &nearest), 1300);
/// ```
pub fn round_to_unit(amount: i64, config: &RoundingConfig) -> i64 {
    let unit = config.unit.max(1);
    if unit == 1 {
        return amount;
    }

    let unit_dec = Decimal::from(unit);
    let scaled = Decimal::from(amount) / unit_dec;
    let rounded = match config.mode {
        RoundingMode::Ceiling => scaled.ceil(),
        RoundingMode::Floor => scaled.floor(),
        RoundingMode::Nearest => {
            scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
    };

    (rounded * unit_dec).to_i64().unwrap_or(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_currency(dec("7499.5")), 7500);
        assert_eq!(round_currency(dec("7499.4999")), 7499);
        assert_eq!(round_currency(dec("0.5")), 1);
        assert_eq!(round_currency(dec("0.4")), 0);
    }

    #[test]
    fn test_round_half_away_from_zero_for_negatives() {
        assert_eq!(round_currency(dec("-0.5")), -1);
        assert_eq!(round_currency(dec("-0.4")), 0);
    }

    #[test]
    fn test_round_exact_integer_unchanged() {
        assert_eq!(round_currency(dec("272727")), 272727);
    }

    #[test]
    fn test_unit_one_passes_through() {
        let config = RoundingConfig::default();
        assert_eq!(round_to_unit(1234, &config), 1234);
        assert_eq!(round_to_unit(-1234, &config), -1234);
    }

    #[test]
    fn test_unit_zero_treated_as_one() {
        let config = RoundingConfig {
            mode: RoundingMode::Nearest,
            unit: 0,
        };
        assert_eq!(round_to_unit(1234, &config), 1234);
    }

    #[test]
    fn test_ceiling_mode() {
        let config = RoundingConfig {
            mode: RoundingMode::Ceiling,
            unit: 10,
        };
        assert_eq!(round_to_unit(1231, &config), 1240);
        assert_eq!(round_to_unit(1230, &config), 1230);
        assert_eq!(round_to_unit(-1231, &config), -1230);
    }

    #[test]
    fn test_floor_mode() {
        let config = RoundingConfig {
            mode: RoundingMode::Floor,
            unit: 10,
        };
        assert_eq!(round_to_unit(1239, &config), 1230);
        assert_eq!(round_to_unit(-1231, &config), -1240);
    }

    #[test]
    fn test_nearest_mode_half_rounds_away_from_zero() {
        let config = RoundingConfig {
            mode: RoundingMode::Nearest,
            unit: 100,
        };
        assert_eq!(round_to_unit(1250, &config), 1300);
        assert_eq!(round_to_unit(1249, &config), 1200);
        assert_eq!(round_to_unit(-1250, &config), -1300);
    }
}
