//! Per-company configuration for payroll calculation.
//!
//! Configuration is supplied as a fully-resolved, read-only snapshot per
//! calculation call. Invalidation means constructing a new snapshot; nothing
//! in this module mutates shared state.

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{
    AllowanceConditions, AllowanceConfig, AllowanceRule, BreakConfig, BreakType, CompanySettings,
    DEFAULT_STANDARD_WORKING_DAYS, DEFAULT_STANDARD_WORKING_HOURS, DeductionConfig, DeductionKind,
    DeductionRule, OvertimeConfig, OvertimeMultipliers, PayrollConfig, RoundingConfig,
    RoundingDirection, RoundingMode, TimeRoundingConfig,
};
