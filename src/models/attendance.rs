//! Attendance input models.
//!
//! This module defines the read-only attendance records supplied by the
//! collaborating persistence layer: aggregated period totals, individual
//! break records, and per-day overtime detail.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single recorded break within a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakRecord {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
}

impl BreakRecord {
    /// Returns the duration of the break in minutes, floored at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::BreakRecord;
    /// use chrono::NaiveDateTime;
    ///
    /// let record = BreakRecord {
    ///     start_time: NaiveDateTime::parse_from_str("2026-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-01-15 12:45:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(record.duration_minutes(), 45);
    /// ```
    pub fn duration_minutes(&self) -> u32 {
        (self.end_time - self.start_time).num_minutes().max(0) as u32
    }
}

/// Aggregated, read-only attendance totals for one employee over one period.
///
/// Produced by an external collaborator; this engine only consumes it. All
/// counts are non-negative. A missing summary is treated as all zeroes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceSummary {
    /// Number of days the employee worked in the period.
    pub working_days: u32,
    /// Whole working hours in the period.
    pub working_hours: u32,
    /// Total working minutes in the period.
    pub working_minutes: u32,
    /// Total minutes of late arrival across the period.
    pub late_minutes: u32,
    /// Number of late arrivals.
    pub late_count: u32,
    /// Total minutes of early leave across the period.
    pub early_leave_minutes: u32,
    /// Number of early leaves.
    pub early_leave_count: u32,
    /// Number of full absence days.
    pub absence_days: u32,
    /// Total recorded break minutes across the period.
    pub total_break_minutes: u32,
    /// Number of shifts worked in the period.
    pub shift_count: u32,
}

/// Per-day overtime detail driving the overtime engine.
///
/// Ordering of a list of these is caller-defined (typically chronological);
/// entries are processed independently except for the running monthly
/// accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyOvertimeDetail {
    /// Overtime minutes worked outside the night window.
    pub regular_minutes: u32,
    /// Overtime minutes worked inside the night window.
    pub night_minutes: u32,
    /// Whether the day is a public holiday.
    pub is_holiday: bool,
    /// Whether the day is a weekend.
    pub is_weekend: bool,
}

impl DailyOvertimeDetail {
    /// Returns the day's total overtime minutes.
    pub fn total_minutes(&self) -> u32 {
        self.regular_minutes + self.night_minutes
    }
}
