//! Allowance evaluation functionality.
//!
//! This module evaluates fixed and conditional allowance rules against a
//! period's attendance summary, producing taxable/non-taxable totals and
//! human-readable ineligibility reasons.

use crate::config::{AllowanceConditions, AllowanceConfig};
use crate::models::{AllowanceItem, AllowanceResult, AttendanceSummary};

/// Evaluates the configured allowance rules for one period.
///
/// Rules without conditions always contribute their amount. Conditional
/// rules contribute only when every condition holds against the attendance
/// summary; a failed condition zeroes the rule's contribution and records a
/// reason, but the rule stays in the itemized output so a payslip can show
/// why it was withheld. Eligible amounts are summed into total, taxable, and
/// non-taxable figures per each rule's taxable flag.
///
/// An empty rule list yields an all-zero result.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_allowances;
/// use payroll_engine::config::{AllowanceConfig, AllowanceRule};
/// use payroll_engine::models::AttendanceSummary;
///
/// let config = AllowanceConfig {
///     rules: vec![AllowanceRule {
///         name: "commuting".to_string(),
///         amount: 10000,
///         taxable: false,
///         conditions: None,
///     }],
/// };
///
/// let result = calculate_allowances(&config, &AttendanceSummary::default());
/// assert_eq!(result.total_amount, 10000);
/// assert_eq!(result.non_taxable_amount, 10000);
/// ```
pub fn calculate_allowances(
    config: &AllowanceConfig,
    attendance: &AttendanceSummary,
) -> AllowanceResult {
    let mut items = Vec::with_capacity(config.rules.len());
    let mut total_amount: i64 = 0;
    let mut taxable_amount: i64 = 0;
    let mut non_taxable_amount: i64 = 0;

    for rule in &config.rules {
        let ineligible_reason = rule
            .conditions
            .as_ref()
            .and_then(|conditions| first_failed_condition(conditions, attendance));
        let eligible = ineligible_reason.is_none();
        let amount = if eligible { rule.amount } else { 0 };

        if eligible {
            total_amount += amount;
            if rule.taxable {
                taxable_amount += amount;
            } else {
                non_taxable_amount += amount;
            }
        }

        items.push(AllowanceItem {
            name: rule.name.clone(),
            amount,
            taxable: rule.taxable,
            eligible,
            ineligible_reason,
        });
    }

    AllowanceResult {
        items,
        total_amount,
        taxable_amount,
        non_taxable_amount,
    }
}

/// Checks the conditions in declaration order, returning the first failure.
fn first_failed_condition(
    conditions: &AllowanceConditions,
    attendance: &AttendanceSummary,
) -> Option<String> {
    if let Some(minimum) = conditions.minimum_working_days {
        if attendance.working_days < minimum {
            return Some(format!(
                "requires at least {minimum} working days, worked {}",
                attendance.working_days
            ));
        }
    }

    if let Some(minimum) = conditions.minimum_working_hours {
        if attendance.working_hours < minimum {
            return Some(format!(
                "requires at least {minimum} working hours, worked {}",
                attendance.working_hours
            ));
        }
    }

    if conditions.require_no_absence && attendance.absence_days > 0 {
        return Some(format!(
            "requires no absences, had {} absence day(s)",
            attendance.absence_days
        ));
    }

    if conditions.require_no_late_arrival && attendance.late_count > 0 {
        return Some(format!(
            "requires no late arrivals, had {}",
            attendance.late_count
        ));
    }

    if conditions.require_no_early_leave && attendance.early_leave_count > 0 {
        return Some(format!(
            "requires no early leaves, had {}",
            attendance.early_leave_count
        ));
    }

    None
}
