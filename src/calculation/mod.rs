//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: timestamp rounding,
//! jurisdiction legal minimums, break accounting, working-hours splitting,
//! overtime classification and pricing, allowance evaluation, deduction
//! application, and the payroll orchestrator that assembles gross and net
//! salary from the other engines.

mod allowance;
mod breaks;
mod deduction;
mod legal;
mod money;
mod overtime;
mod payroll;
mod time_rounding;
mod working_hours;

pub use allowance::calculate_allowances;
pub use breaks::{
    effective_break_minutes, is_break_compliant, is_night_shift, net_working_minutes,
    night_overlap_minutes, total_break_minutes,
};
pub use deduction::calculate_deductions;
pub use legal::{LegalOvertimeRates, legal_minimum_break_minutes, legal_overtime_rates};
pub use money::{round_currency, round_to_unit};
pub use overtime::{
    MultiplierCompliance, MultiplierViolation, calculate_overtime, validate_multipliers,
};
pub use payroll::{PayrollInput, calculate_payroll, derive_hourly_rate};
pub use time_rounding::round_time;
pub use working_hours::calculate_working_hours;
