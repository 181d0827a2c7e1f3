//! Payroll assembly functionality.
//!
//! This module orchestrates the other engines: it derives base salary from
//! the salary-type formula, derives an hourly rate through an explicit
//! fallback chain, prices overtime, evaluates allowances and deductions, and
//! assembles gross and net salary under the configured rounding policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    AllowanceConfig, BreakConfig, BreakType, CompanySettings, DeductionConfig, OvertimeConfig,
    PayrollConfig,
};
use crate::models::{
    AttendanceSummary, DailyOvertimeDetail, EmployeeSalaryInfo, PayrollResult, SalaryType,
};

use super::allowance::calculate_allowances;
use super::deduction::calculate_deductions;
use super::money::{round_currency, round_to_unit};
use super::overtime::calculate_overtime;

/// Everything one payroll calculation consumes.
///
/// Attendance data and each configuration section are optional: an absent
/// attendance summary means no attendance data was collected for the period,
/// and an absent configuration section degrades to that engine's documented
/// default behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee's salary type and rates.
    pub salary: EmployeeSalaryInfo,
    /// Aggregated attendance totals for the period, if collected.
    #[serde(default)]
    pub attendance: Option<AttendanceSummary>,
    /// Per-day overtime detail for the period.
    #[serde(default)]
    pub overtime_details: Vec<DailyOvertimeDetail>,
    /// Break accounting configuration.
    #[serde(default)]
    pub break_config: Option<BreakConfig>,
    /// Overtime configuration; absent means no overtime is paid.
    #[serde(default)]
    pub overtime_config: Option<OvertimeConfig>,
    /// Allowance rules; absent means no allowances.
    #[serde(default)]
    pub allowance_config: Option<AllowanceConfig>,
    /// Deduction rules and penalties; absent means no deductions.
    #[serde(default)]
    pub deduction_config: Option<DeductionConfig>,
    /// Payroll assembly configuration.
    #[serde(default)]
    pub payroll_config: Option<PayrollConfig>,
}

impl PayrollInput {
    /// Builds an input from a company settings snapshot and per-call data.
    pub fn from_settings(
        settings: &CompanySettings,
        salary: EmployeeSalaryInfo,
        attendance: Option<AttendanceSummary>,
        overtime_details: Vec<DailyOvertimeDetail>,
    ) -> Self {
        Self {
            salary,
            attendance,
            overtime_details,
            break_config: settings.breaks.clone(),
            overtime_config: settings.overtime.clone(),
            allowance_config: settings.allowances.clone(),
            deduction_config: settings.deductions.clone(),
            payroll_config: settings.payroll.clone(),
        }
    }
}

/// Derives the hourly rate used for overtime and break pricing.
///
/// The fallback rules are evaluated in sequence and the first one with a
/// value wins:
///
/// 1. the explicit hourly rate;
/// 2. the daily rate divided by standard working hours per day;
/// 3. the monthly salary divided by standard days × standard hours;
/// 4. the shift rate divided by standard hours (a shift approximates one
///    standard day).
///
/// With no rate set at all, the result is zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::derive_hourly_rate;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{EmployeeSalaryInfo, SalaryType};
/// use rust_decimal::Decimal;
///
/// let mut salary = EmployeeSalaryInfo::new(SalaryType::Daily);
/// salary.daily_rate = Some(Decimal::new(16000, 0));
///
/// let rate = derive_hourly_rate(&salary, &PayrollConfig::default());
/// assert_eq!(rate, Decimal::new(2000, 0)); // 16000 / 8
/// ```
pub fn derive_hourly_rate(salary: &EmployeeSalaryInfo, config: &PayrollConfig) -> Decimal {
    let hours_per_day = Decimal::from(config.standard_working_hours());
    let days_per_month = Decimal::from(config.standard_working_days());

    let fallbacks: [&dyn Fn() -> Option<Decimal>; 4] = [
        &|| salary.hourly_rate,
        &|| salary.daily_rate.map(|rate| rate / hours_per_day),
        &|| {
            salary
                .monthly_salary
                .map(|monthly| monthly / (days_per_month * hours_per_day))
        },
        &|| salary.shift_rate.map(|rate| rate / hours_per_day),
    ];

    fallbacks
        .iter()
        .find_map(|rule| rule())
        .unwrap_or(Decimal::ZERO)
}

/// Derives base salary from the salary-type formula.
///
/// Monthly salaries are prorated by `working days / standard days` (full
/// salary when no attendance data was supplied); daily, hourly, and
/// shift-based salaries multiply their rate by the matching attendance
/// count. A missing required rate yields zero rather than an error.
fn calculate_base_salary(
    salary: &EmployeeSalaryInfo,
    attendance: Option<&AttendanceSummary>,
    config: &PayrollConfig,
) -> i64 {
    match salary.salary_type {
        SalaryType::Monthly => {
            let Some(monthly) = salary.monthly_salary else {
                return 0;
            };
            match attendance {
                None => round_currency(monthly),
                Some(summary) => round_currency(
                    monthly * Decimal::from(summary.working_days)
                        / Decimal::from(config.standard_working_days()),
                ),
            }
        }
        SalaryType::Daily => {
            let days = attendance.map_or(0, |summary| summary.working_days);
            salary
                .daily_rate
                .map_or(0, |rate| round_currency(rate * Decimal::from(days)))
        }
        SalaryType::Hourly => {
            let hours = attendance.map_or(0, |summary| summary.working_hours);
            salary
                .hourly_rate
                .map_or(0, |rate| round_currency(rate * Decimal::from(hours)))
        }
        SalaryType::ShiftBased => {
            let shifts = attendance.map_or(0, |summary| summary.shift_count);
            salary
                .shift_rate
                .map_or(0, |rate| round_currency(rate * Decimal::from(shifts)))
        }
    }
}

/// Runs one complete payroll calculation.
///
/// Pipeline: base salary → overtime pay → allowances → break deduction (for
/// unpaid breaks: `total break minutes / 60 × hourly rate`, rounded) →
/// gross = base + overtime + allowances → deductions, which combine with the
/// break deduction into total deductions → net = gross − total deductions,
/// rounded per the configured policy.
///
/// Net salary is not floored at zero; a negative net is passed through for
/// the caller to interpret.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::calculation::PayrollInput;
/// use payroll_engine::models::{AttendanceSummary, EmployeeSalaryInfo, SalaryType};
/// use rust_decimal::Decimal;
///
/// let mut salary = EmployeeSalaryInfo::new(SalaryType::Monthly);
/// salary.monthly_salary = Some(Decimal::new(300000, 0));
///
/// let input = PayrollInput {
///     salary,
///     attendance: Some(AttendanceSummary {
///         working_days: 20,
///         ..AttendanceSummary::default()
///     }),
///     overtime_details: vec![],
///     break_config: None,
///     overtime_config: None,
///     allowance_config: None,
///     deduction_config: None,
///     payroll_config: None,
/// };
///
/// let result = calculate_payroll(&input);
/// assert_eq!(result.base_salary, 272727); // 300000 * 20 / 22
/// assert_eq!(result.net_salary, 272727);
/// ```
pub fn calculate_payroll(input: &PayrollInput) -> PayrollResult {
    let payroll_config = input.payroll_config.clone().unwrap_or_default();
    let attendance = input.attendance.clone().unwrap_or_default();

    let base_salary =
        calculate_base_salary(&input.salary, input.attendance.as_ref(), &payroll_config);
    let hourly_rate = derive_hourly_rate(&input.salary, &payroll_config);
    debug!(base_salary, %hourly_rate, "derived base salary and hourly rate");

    let overtime = match &input.overtime_config {
        Some(config) => calculate_overtime(&input.overtime_details, config, hourly_rate),
        None => Default::default(),
    };

    let allowances = match &input.allowance_config {
        Some(config) => calculate_allowances(config, &attendance),
        None => Default::default(),
    };

    let break_config = input.break_config.clone().unwrap_or_default();
    let break_deduction = if break_config.break_type == BreakType::Unpaid {
        round_currency(
            Decimal::from(attendance.total_break_minutes) * hourly_rate / Decimal::from(60),
        )
    } else {
        0
    };

    let gross_salary = base_salary + overtime.total_amount + allowances.total_amount;
    debug!(
        overtime_amount = overtime.total_amount,
        allowance_amount = allowances.total_amount,
        gross_salary,
        "assembled gross salary"
    );

    let deductions = match &input.deduction_config {
        Some(config) => calculate_deductions(config, &attendance, gross_salary),
        None => Default::default(),
    };

    let total_deductions = deductions.total_amount + break_deduction;
    let net_salary = round_to_unit(gross_salary - total_deductions, &payroll_config.rounding());
    debug!(total_deductions, net_salary, "assembled net salary");

    PayrollResult {
        base_salary,
        hourly_rate,
        overtime,
        allowances,
        deductions,
        break_deduction,
        gross_salary,
        total_deductions,
        net_salary,
    }
}
