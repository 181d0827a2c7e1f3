//! Employee salary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The formula by which an employee's base salary is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// A fixed monthly salary, prorated by worked days.
    Monthly,
    /// A per-day rate multiplied by working days.
    Daily,
    /// A per-hour rate multiplied by working hours.
    Hourly,
    /// A per-shift rate multiplied by the number of shifts.
    ShiftBased,
}

/// Salary information for one employee.
///
/// At most one rate field is authoritative for the salary type; the others
/// may still be present and participate in hourly-rate derivation fallbacks.
/// A missing required field yields a zero base salary rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSalaryInfo {
    /// How the base salary is computed.
    pub salary_type: SalaryType,
    /// Monthly salary, authoritative for [`SalaryType::Monthly`].
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Daily rate, authoritative for [`SalaryType::Daily`].
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    /// Hourly rate, authoritative for [`SalaryType::Hourly`].
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Shift rate, authoritative for [`SalaryType::ShiftBased`].
    #[serde(default)]
    pub shift_rate: Option<Decimal>,
}

impl EmployeeSalaryInfo {
    /// Creates salary info of the given type with all rate fields unset.
    pub fn new(salary_type: SalaryType) -> Self {
        Self {
            salary_type,
            monthly_salary: None,
            daily_rate: None,
            hourly_rate: None,
            shift_rate: None,
        }
    }
}
