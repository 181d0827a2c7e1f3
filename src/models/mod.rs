//! Core data models for the payroll calculation engine.
//!
//! This module contains the input and output value objects used throughout
//! the engine. Inputs are supplied fully populated by the collaborating
//! persistence/config layer; outputs are immutable snapshots created fresh
//! per calculation call.

mod attendance;
mod locale;
mod payroll_result;
mod salary;

pub use attendance::{AttendanceSummary, BreakRecord, DailyOvertimeDetail};
pub use locale::Locale;
pub use payroll_result::{
    AllowanceItem, AllowanceResult, DeductionItem, DeductionResult, OvertimeResult, PayrollResult,
    WorkingHoursResult,
};
pub use salary::{EmployeeSalaryInfo, SalaryType};
