//! Deduction calculation functionality.
//!
//! This module computes late-arrival and early-leave penalties and applies
//! an ordered list of fixed and percentage deduction rules against gross
//! salary.

use rust_decimal::Decimal;

use crate::config::{DeductionConfig, DeductionKind, DeductionRule};
use crate::models::{AttendanceSummary, DeductionItem, DeductionResult};

use super::money::round_currency;

/// Computes the deductions for one period.
///
/// The late-arrival and early-leave penalties each apply when their enable
/// flag is set: minutes × the per-minute rate, rounded half-up to whole
/// currency units. Configured rules are then sorted by their explicit order
/// field (rules without one sort last; ties keep input order) and applied in
/// sequence: fixed rules contribute their amount, percentage rules
/// contribute `gross salary × percentage / 100`, rounded per item.
///
/// Penalties are itemized alongside the rules when non-zero; everything sums
/// into the total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::DeductionConfig;
/// use payroll_engine::models::AttendanceSummary;
/// use rust_decimal::Decimal;
///
/// let config = DeductionConfig {
///     late_penalty_enabled: true,
///     late_penalty_per_minute: Some(Decimal::new(50, 0)),
///     ..DeductionConfig::default()
/// };
/// let attendance = AttendanceSummary {
///     late_minutes: 30,
///     ..AttendanceSummary::default()
/// };
///
/// let result = calculate_deductions(&config, &attendance, 300000);
/// assert_eq!(result.late_penalty, 1500);
/// assert_eq!(result.total_amount, 1500);
/// ```
pub fn calculate_deductions(
    config: &DeductionConfig,
    attendance: &AttendanceSummary,
    gross_salary: i64,
) -> DeductionResult {
    let late_penalty = if config.late_penalty_enabled {
        round_currency(
            Decimal::from(attendance.late_minutes)
                * config.late_penalty_per_minute.unwrap_or(Decimal::ZERO),
        )
    } else {
        0
    };

    let early_leave_penalty = if config.early_leave_penalty_enabled {
        round_currency(
            Decimal::from(attendance.early_leave_minutes)
                * config
                    .early_leave_penalty_per_minute
                    .unwrap_or(Decimal::ZERO),
        )
    } else {
        0
    };

    let mut items = Vec::new();
    if late_penalty != 0 {
        items.push(DeductionItem {
            name: "late_arrival_penalty".to_string(),
            amount: late_penalty,
        });
    }
    if early_leave_penalty != 0 {
        items.push(DeductionItem {
            name: "early_leave_penalty".to_string(),
            amount: early_leave_penalty,
        });
    }

    // Stable sort: rules sharing an order value keep their input order, and
    // rules without one sort last.
    let mut ordered: Vec<&DeductionRule> = config.rules.iter().collect();
    ordered.sort_by_key(|rule| rule.order.unwrap_or(i32::MAX));

    let mut rules_total: i64 = 0;
    for rule in ordered {
        let amount = match &rule.kind {
            DeductionKind::Fixed { amount } => *amount,
            DeductionKind::Percentage { percentage } => {
                round_currency(Decimal::from(gross_salary) * *percentage / Decimal::from(100))
            }
        };
        rules_total += amount;
        items.push(DeductionItem {
            name: rule.name.clone(),
            amount,
        });
    }

    DeductionResult {
        late_penalty,
        early_leave_penalty,
        items,
        total_amount: late_penalty + early_leave_penalty + rules_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fixed(name: &str, order: Option<i32>, amount: i64) -> DeductionRule {
        DeductionRule {
            name: name.to_string(),
            order,
            kind: DeductionKind::Fixed { amount },
        }
    }

    fn percentage(name: &str, order: Option<i32>, pct: &str) -> DeductionRule {
        DeductionRule {
            name: name.to_string(),
            order,
            kind: DeductionKind::Percentage {
                percentage: dec(pct),
            },
        }
    }

    #[test]
    fn test_empty_config_yields_zero() {
        let result =
            calculate_deductions(&DeductionConfig::default(), &AttendanceSummary::default(), 0);
        assert_eq!(result, DeductionResult::default());
    }

    #[test]
    fn test_late_penalty() {
        let config = DeductionConfig {
            late_penalty_enabled: true,
            late_penalty_per_minute: Some(dec("50")),
            ..DeductionConfig::default()
        };
        let attendance = AttendanceSummary {
            late_minutes: 25,
            ..AttendanceSummary::default()
        };

        let result = calculate_deductions(&config, &attendance, 300000);
        assert_eq!(result.late_penalty, 1250);
        assert_eq!(result.total_amount, 1250);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "late_arrival_penalty");
    }

    #[test]
    fn test_disabled_penalty_ignored() {
        let config = DeductionConfig {
            late_penalty_enabled: false,
            late_penalty_per_minute: Some(dec("50")),
            early_leave_penalty_enabled: true,
            early_leave_penalty_per_minute: Some(dec("40")),
            ..DeductionConfig::default()
        };
        let attendance = AttendanceSummary {
            late_minutes: 30,
            early_leave_minutes: 15,
            ..AttendanceSummary::default()
        };

        let result = calculate_deductions(&config, &attendance, 300000);
        assert_eq!(result.late_penalty, 0);
        assert_eq!(result.early_leave_penalty, 600);
        assert_eq!(result.total_amount, 600);
    }

    #[test]
    fn test_penalty_with_missing_rate_is_zero() {
        let config = DeductionConfig {
            late_penalty_enabled: true,
            late_penalty_per_minute: None,
            ..DeductionConfig::default()
        };
        let attendance = AttendanceSummary {
            late_minutes: 60,
            ..AttendanceSummary::default()
        };

        let result = calculate_deductions(&config, &attendance, 300000);
        assert_eq!(result.late_penalty, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_fractional_penalty_rounds_half_up() {
        let config = DeductionConfig {
            late_penalty_enabled: true,
            late_penalty_per_minute: Some(dec("16.65")),
            ..DeductionConfig::default()
        };
        let attendance = AttendanceSummary {
            late_minutes: 10,
            ..AttendanceSummary::default()
        };

        // 166.5 rounds half-up to 167.
        let result = calculate_deductions(&config, &attendance, 0);
        assert_eq!(result.late_penalty, 167);
    }

    #[test]
    fn test_fixed_and_percentage_rules() {
        let config = DeductionConfig {
            rules: vec![
                fixed("union-dues", Some(2), 2000),
                percentage("health-insurance", Some(1), "4.95"),
            ],
            ..DeductionConfig::default()
        };

        let result = calculate_deductions(&config, &AttendanceSummary::default(), 300000);
        // 300000 * 4.95% = 14850.
        assert_eq!(result.total_amount, 16850);
        // Applied in order: health-insurance (order 1) before union-dues (order 2).
        assert_eq!(result.items[0].name, "health-insurance");
        assert_eq!(result.items[0].amount, 14850);
        assert_eq!(result.items[1].name, "union-dues");
    }

    #[test]
    fn test_percentage_rounding_per_item() {
        let config = DeductionConfig {
            rules: vec![percentage("pension", Some(1), "9.15")],
            ..DeductionConfig::default()
        };

        // 123457 * 9.15% = 11296.3155 -> 11296.
        let result = calculate_deductions(&config, &AttendanceSummary::default(), 123457);
        assert_eq!(result.items[0].amount, 11296);
    }

    #[test]
    fn test_rules_without_order_sort_last() {
        let config = DeductionConfig {
            rules: vec![
                fixed("unordered", None, 100),
                fixed("second", Some(2), 200),
                fixed("first", Some(1), 300),
            ],
            ..DeductionConfig::default()
        };

        let result = calculate_deductions(&config, &AttendanceSummary::default(), 0);
        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "unordered"]);
    }

    #[test]
    fn test_equal_orders_keep_input_order() {
        let config = DeductionConfig {
            rules: vec![
                fixed("alpha", Some(1), 100),
                fixed("beta", Some(1), 200),
                fixed("gamma", Some(1), 300),
            ],
            ..DeductionConfig::default()
        };

        let result = calculate_deductions(&config, &AttendanceSummary::default(), 0);
        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_penalties_itemized_before_rules() {
        let config = DeductionConfig {
            late_penalty_enabled: true,
            late_penalty_per_minute: Some(dec("50")),
            rules: vec![fixed("union-dues", Some(1), 2000)],
            ..DeductionConfig::default()
        };
        let attendance = AttendanceSummary {
            late_minutes: 10,
            ..AttendanceSummary::default()
        };

        let result = calculate_deductions(&config, &attendance, 300000);
        assert_eq!(result.items[0].name, "late_arrival_penalty");
        assert_eq!(result.items[1].name, "union-dues");
        assert_eq!(result.total_amount, 500 + 2000);
    }

    #[test]
    fn test_items_sum_matches_total() {
        let config = DeductionConfig {
            late_penalty_enabled: true,
            late_penalty_per_minute: Some(dec("33.4")),
            early_leave_penalty_enabled: true,
            early_leave_penalty_per_minute: Some(dec("21.7")),
            rules: vec![
                percentage("health", Some(1), "4.95"),
                percentage("pension", Some(2), "9.15"),
                fixed("union", None, 1500),
            ],
            ..DeductionConfig::default()
        };
        let attendance = AttendanceSummary {
            late_minutes: 17,
            early_leave_minutes: 23,
            ..AttendanceSummary::default()
        };

        let result = calculate_deductions(&config, &attendance, 287650);
        let items_sum: i64 = result.items.iter().map(|i| i.amount).sum();
        assert_eq!(items_sum, result.total_amount);
    }
}
