//! Configuration value objects.
//!
//! Each struct here is immutable for the duration of one calculation and
//! carries optional fields whose absence falls back to documented defaults.
//! None of these types validate their numeric values; a negative configured
//! rate flows through to a negative result exactly as supplied, and rejecting
//! such configuration is the loading collaborator's responsibility.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// Standard working days per month assumed when not configured.
pub const DEFAULT_STANDARD_WORKING_DAYS: u32 = 22;

/// Standard working hours per day assumed when not configured.
pub const DEFAULT_STANDARD_WORKING_HOURS: u32 = 8;

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Whether break time counts as paid working time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakType {
    /// Breaks are paid; they do not reduce net working minutes.
    #[default]
    Paid,
    /// Breaks are unpaid; effective break minutes reduce net working minutes.
    Unpaid,
}

/// Break tracking and capping configuration.
///
/// The default configuration is the least restrictive one: tracking off,
/// breaks paid, no minimums or maximums, night window 22:00–05:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakConfig {
    /// Whether recorded breaks are tracked and capped.
    pub track_breaks: bool,
    /// Whether breaks are paid or unpaid.
    pub break_type: BreakType,
    /// Minimum break minutes enforced when tracking is on.
    pub minimum_break_minutes: Option<u32>,
    /// Night-shift-specific minimum; falls back to the general minimum.
    pub night_minimum_break_minutes: Option<u32>,
    /// Maximum break minutes credited; unbounded when unset.
    pub maximum_break_minutes: Option<u32>,
    /// Break duration substituted when no breaks are recorded and tracking is off.
    pub default_break_minutes: Option<u32>,
    /// Night-shift-specific default; falls back to the general default.
    pub night_default_break_minutes: Option<u32>,
    /// Whether the jurisdiction's legal minimum raises the configured minimum.
    pub use_legal_minimum: bool,
    /// The jurisdiction whose legal minimums apply.
    pub locale: Locale,
    /// Start of the night window; 22:00 when unset.
    pub night_window_start: Option<NaiveTime>,
    /// End of the night window; 05:00 when unset.
    pub night_window_end: Option<NaiveTime>,
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            track_breaks: false,
            break_type: BreakType::Paid,
            minimum_break_minutes: None,
            night_minimum_break_minutes: None,
            maximum_break_minutes: None,
            default_break_minutes: None,
            night_default_break_minutes: None,
            use_legal_minimum: false,
            locale: Locale::Other,
            night_window_start: None,
            night_window_end: None,
        }
    }
}

impl BreakConfig {
    /// Returns the configured night window, defaulting to 22:00–05:00.
    pub fn night_window(&self) -> (NaiveTime, NaiveTime) {
        (
            self.night_window_start.unwrap_or_else(|| hms(22, 0)),
            self.night_window_end.unwrap_or_else(|| hms(5, 0)),
        )
    }
}

/// The configured multipliers for the four overtime buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeMultipliers {
    /// Multiplier for overtime on ordinary days outside the night window.
    pub regular: Decimal,
    /// Multiplier for overtime inside the night window.
    pub night: Decimal,
    /// Multiplier for overtime on public holidays.
    pub holiday: Decimal,
    /// Multiplier for overtime on weekends.
    pub weekend: Decimal,
}

impl Default for OvertimeMultipliers {
    fn default() -> Self {
        Self {
            regular: Decimal::new(125, 2),
            night: Decimal::new(150, 2),
            holiday: Decimal::new(135, 2),
            weekend: Decimal::new(135, 2),
        }
    }
}

/// Overtime classification and pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeConfig {
    /// Whether overtime is calculated at all.
    pub enabled: bool,
    /// Per-day overtime cap in hours; uncapped when unset.
    pub max_overtime_hours_per_day: Option<u32>,
    /// Per-month overtime cap in hours; uncapped when unset.
    pub max_overtime_hours_per_month: Option<u32>,
    /// Bucket multipliers applied to the hourly rate.
    pub multipliers: OvertimeMultipliers,
    /// The jurisdiction whose multiplier floors apply to validation.
    pub locale: Locale,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_overtime_hours_per_day: None,
            max_overtime_hours_per_month: None,
            multipliers: OvertimeMultipliers::default(),
            locale: Locale::Other,
        }
    }
}

/// Attendance conditions gating a conditional allowance rule.
///
/// Checks run in declaration order; the first failed condition supplies the
/// rule's ineligibility reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowanceConditions {
    /// Minimum working days in the period.
    pub minimum_working_days: Option<u32>,
    /// Minimum working hours in the period.
    pub minimum_working_hours: Option<u32>,
    /// Requires zero absence days.
    pub require_no_absence: bool,
    /// Requires zero late arrivals.
    pub require_no_late_arrival: bool,
    /// Requires zero early leaves.
    pub require_no_early_leave: bool,
}

/// One allowance rule.
///
/// A rule without conditions is a fixed allowance and always contributes its
/// amount; a rule with conditions contributes only when every condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceRule {
    /// The rule's display name.
    pub name: String,
    /// The amount contributed when eligible, in whole currency units.
    pub amount: i64,
    /// Whether the allowance is taxable.
    #[serde(default)]
    pub taxable: bool,
    /// Eligibility conditions; absent for fixed allowances.
    #[serde(default)]
    pub conditions: Option<AllowanceConditions>,
}

/// The configured allowance rules for a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowanceConfig {
    /// Rules evaluated against the period's attendance summary.
    pub rules: Vec<AllowanceRule>,
}

/// How a deduction rule's amount is determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeductionKind {
    /// A fixed amount in whole currency units.
    Fixed {
        /// The deducted amount.
        amount: i64,
    },
    /// A percentage of gross salary.
    Percentage {
        /// The percentage applied to gross salary (e.g. `4.5` for 4.5%).
        percentage: Decimal,
    },
}

/// One deduction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRule {
    /// The rule's display name.
    pub name: String,
    /// Explicit application order; rules without one sort last.
    #[serde(default)]
    pub order: Option<i32>,
    /// How the amount is determined.
    #[serde(flatten)]
    pub kind: DeductionKind,
}

/// Penalty and deduction-rule configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionConfig {
    /// Whether the late-arrival penalty applies.
    pub late_penalty_enabled: bool,
    /// Penalty per minute of late arrival.
    pub late_penalty_per_minute: Option<Decimal>,
    /// Whether the early-leave penalty applies.
    pub early_leave_penalty_enabled: bool,
    /// Penalty per minute of early leave.
    pub early_leave_penalty_per_minute: Option<Decimal>,
    /// Ordered deduction rules.
    pub rules: Vec<DeductionRule>,
}

/// Direction used when rounding a timestamp to an interval boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingDirection {
    /// Round forward to the next boundary.
    Up,
    /// Round back to the previous boundary.
    Down,
    /// Round to the closest boundary; exact halves round up.
    Nearest,
}

/// Timestamp rounding configuration.
///
/// When either field is absent, timestamps pass through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRoundingConfig {
    /// Rounding interval in minutes (5, 10, 15, 30, or 60).
    pub interval_minutes: Option<u32>,
    /// Rounding direction.
    pub direction: Option<RoundingDirection>,
}

/// Rounding mode applied to the net salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round to the closest multiple; exact halves round away from zero.
    #[default]
    Nearest,
}

/// Net salary rounding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    /// The rounding mode; nearest when unset.
    pub mode: RoundingMode,
    /// The whole-currency granularity the net salary is snapped to.
    pub unit: u32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            mode: RoundingMode::Nearest,
            unit: 1,
        }
    }
}

/// Payroll assembly configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Standard working days per month; 22 when unset or zero.
    pub standard_working_days_per_month: Option<u32>,
    /// Standard working hours per day; 8 when unset or zero.
    pub standard_working_hours_per_day: Option<u32>,
    /// Net salary rounding policy.
    pub rounding: Option<RoundingConfig>,
}

impl PayrollConfig {
    /// Returns the standard working days per month.
    ///
    /// A configured zero is treated as unset so rate derivation can never
    /// divide by zero.
    pub fn standard_working_days(&self) -> u32 {
        match self.standard_working_days_per_month {
            Some(days) if days > 0 => days,
            _ => DEFAULT_STANDARD_WORKING_DAYS,
        }
    }

    /// Returns the standard working hours per day.
    ///
    /// A configured zero is treated as unset so rate derivation can never
    /// divide by zero.
    pub fn standard_working_hours(&self) -> u32 {
        match self.standard_working_hours_per_day {
            Some(hours) if hours > 0 => hours,
            _ => DEFAULT_STANDARD_WORKING_HOURS,
        }
    }

    /// Returns the net salary rounding policy, defaulting to nearest.
    pub fn rounding(&self) -> RoundingConfig {
        self.rounding.unwrap_or_default()
    }
}

/// A fully-resolved, read-only configuration snapshot for one company.
///
/// Each section is optional; an absent section degrades to the documented
/// default behavior for that engine (no overtime, no allowances, paid
/// untracked breaks, and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    /// Payroll assembly settings.
    pub payroll: Option<PayrollConfig>,
    /// Break tracking settings.
    pub breaks: Option<BreakConfig>,
    /// Overtime settings.
    pub overtime: Option<OvertimeConfig>,
    /// Allowance rules.
    pub allowances: Option<AllowanceConfig>,
    /// Deduction rules and penalties.
    pub deductions: Option<DeductionConfig>,
    /// Timestamp rounding settings.
    pub time_rounding: Option<TimeRoundingConfig>,
}
