//! Output value objects for the payroll calculation engine.
//!
//! This module contains the result types produced by the individual engines
//! and the root [`PayrollResult`] aggregate. All outputs are immutable
//! snapshots; every value is created fresh per calculation call. Currency
//! amounts are whole-unit integers; per-bucket amounts are rounded
//! independently so every itemized breakdown sums exactly to its total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The time split computed for a single shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursResult {
    /// Minutes from check-in to check-out, floored at zero.
    pub gross_minutes: u32,
    /// Gross minutes less the effective break when breaks are unpaid.
    pub net_minutes: u32,
    /// Whole working hours (gross minutes / 60).
    pub working_hours: u32,
    /// Net minutes falling outside the night window.
    pub regular_minutes: u32,
    /// Net minutes falling inside the night window.
    pub night_minutes: u32,
    /// Sum of recorded break minutes.
    pub total_break_minutes: u32,
    /// Break minutes used for payroll purposes after clamping/defaulting.
    pub effective_break_minutes: u32,
    /// Whether the shift overlaps the configured night window.
    pub is_night_shift: bool,
    /// Whether the shift crosses midnight.
    pub is_overnight: bool,
    /// Whether the recorded break meets the effective minimum.
    pub break_compliant: bool,
}

/// Classified and priced overtime for a period.
///
/// The four minute buckets are mutually exclusive per day: a holiday day's
/// minutes go entirely to the holiday bucket, a weekend day's to the weekend
/// bucket, and ordinary days split between regular and night. Each bucket's
/// amount is rounded independently, so the bucket amounts always sum to
/// [`OvertimeResult::total_amount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Overtime minutes on ordinary days outside the night window.
    pub regular_minutes: u32,
    /// Overtime minutes on ordinary days inside the night window.
    pub night_minutes: u32,
    /// Overtime minutes on public holidays.
    pub holiday_minutes: u32,
    /// Overtime minutes on weekends.
    pub weekend_minutes: u32,
    /// Total overtime minutes attributed across all buckets.
    pub total_minutes: u32,
    /// Pay for the regular bucket, in whole currency units.
    pub regular_amount: i64,
    /// Pay for the night bucket, in whole currency units.
    pub night_amount: i64,
    /// Pay for the holiday bucket, in whole currency units.
    pub holiday_amount: i64,
    /// Pay for the weekend bucket, in whole currency units.
    pub weekend_amount: i64,
    /// Sum of the four already-rounded bucket amounts.
    pub total_amount: i64,
}

/// One allowance rule's outcome in the itemized breakdown.
///
/// Ineligible rules stay in the output with a zero amount and a
/// human-readable reason, so a payslip can show why an allowance was
/// withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceItem {
    /// The rule's display name.
    pub name: String,
    /// The contributed amount; zero when ineligible.
    pub amount: i64,
    /// Whether the allowance is taxable.
    pub taxable: bool,
    /// Whether the rule's conditions were met.
    pub eligible: bool,
    /// Why the rule was ineligible, if it was.
    pub ineligible_reason: Option<String>,
}

/// The evaluated allowances for a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceResult {
    /// Every configured rule, eligible or not.
    pub items: Vec<AllowanceItem>,
    /// Sum of eligible amounts.
    pub total_amount: i64,
    /// Sum of eligible taxable amounts.
    pub taxable_amount: i64,
    /// Sum of eligible non-taxable amounts.
    pub non_taxable_amount: i64,
}

/// One deduction line in the itemized breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// The deduction's display name.
    pub name: String,
    /// The deducted amount in whole currency units.
    pub amount: i64,
}

/// The computed deductions for a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Late-arrival penalty in whole currency units.
    pub late_penalty: i64,
    /// Early-leave penalty in whole currency units.
    pub early_leave_penalty: i64,
    /// Itemized deductions, penalties included when non-zero.
    pub items: Vec<DeductionItem>,
    /// Sum of penalties and rule deductions.
    pub total_amount: i64,
}

/// The complete result of one payroll calculation.
///
/// This is the root output: one per employee per period, consumed by the
/// collaborating persistence layer for storage and by a reporting layer for
/// presentation. Net salary is not floored at zero; interpreting a negative
/// net is the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Base salary derived from the salary-type formula.
    pub base_salary: i64,
    /// The hourly rate used for overtime and break pricing.
    pub hourly_rate: Decimal,
    /// Classified and priced overtime.
    pub overtime: OvertimeResult,
    /// Evaluated allowances.
    pub allowances: AllowanceResult,
    /// Computed deductions.
    pub deductions: DeductionResult,
    /// Deduction for unpaid break time, in whole currency units.
    pub break_deduction: i64,
    /// Base salary + overtime + allowances.
    pub gross_salary: i64,
    /// Rule deductions, penalties, and the break deduction combined.
    pub total_deductions: i64,
    /// Gross salary less total deductions, rounded per the configured policy.
    pub net_salary: i64,
}
