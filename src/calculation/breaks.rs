//! Break accounting functionality.
//!
//! This module aggregates break records, clamps them against configured and
//! legal minimums/maximums, detects night shifts, and derives net working
//! minutes. All functions are pure; a disabled or default configuration
//! yields the least-restrictive result (no deduction, full attribution as
//! worked time).

use chrono::{NaiveDateTime, NaiveTime};

use crate::config::{BreakConfig, BreakType};
use crate::models::BreakRecord;

use super::legal::legal_minimum_break_minutes;

/// Sums the actual break minutes across all records.
///
/// An empty slice yields zero.
pub fn total_break_minutes(records: &[BreakRecord]) -> u32 {
    records.iter().map(|r| r.duration_minutes()).sum()
}

/// The minimum break that applies to a shift, combining the configured and
/// legal floors.
fn minimum_break_minutes(config: &BreakConfig, working_hours: u32, is_night_shift: bool) -> u32 {
    let configured = if is_night_shift {
        config
            .night_minimum_break_minutes
            .or(config.minimum_break_minutes)
    } else {
        config.minimum_break_minutes
    }
    .unwrap_or(0);

    if config.use_legal_minimum {
        configured.max(legal_minimum_break_minutes(
            config.locale,
            working_hours,
            is_night_shift,
        ))
    } else {
        configured
    }
}

/// Returns the break minutes used for payroll purposes.
///
/// With break tracking disabled the result is zero. Otherwise the actual
/// minutes are clamped into `[minimum, maximum]`, where the minimum is the
/// night-shift-specific configured minimum if applicable (else the general
/// minimum), raised to the legal minimum when legal-minimum enforcement is
/// on, and the maximum defaults to unbounded. A configured maximum below the
/// minimum yields the minimum.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::effective_break_minutes;
/// use payroll_engine::config::BreakConfig;
///
/// let config = BreakConfig {
///     track_breaks: true,
///     minimum_break_minutes: Some(45),
///     maximum_break_minutes: Some(90),
///     ..BreakConfig::default()
/// };
///
/// assert_eq!(effective_break_minutes(20, &config, 8, false), 45);
/// assert_eq!(effective_break_minutes(60, &config, 8, false), 60);
/// assert_eq!(effective_break_minutes(120, &config, 8, false), 90);
/// ```
pub fn effective_break_minutes(
    actual_minutes: u32,
    config: &BreakConfig,
    working_hours: u32,
    is_night_shift: bool,
) -> u32 {
    if !config.track_breaks {
        return 0;
    }

    let minimum = minimum_break_minutes(config, working_hours, is_night_shift);
    let maximum = config.maximum_break_minutes.unwrap_or(u32::MAX).max(minimum);
    actual_minutes.clamp(minimum, maximum)
}

/// Derives net working minutes from gross minutes and break minutes.
///
/// Paid breaks leave the gross unchanged; unpaid breaks are subtracted,
/// floored at zero.
pub fn net_working_minutes(gross_minutes: u32, break_minutes: u32, config: &BreakConfig) -> u32 {
    match config.break_type {
        BreakType::Paid => gross_minutes,
        BreakType::Unpaid => gross_minutes.saturating_sub(break_minutes),
    }
}

/// Returns the minutes of overlap between a shift and the night window.
///
/// Handles a window that crosses midnight (e.g. 22:00–05:00), a shift that
/// crosses midnight, and both at once, by walking the window's nightly
/// instances across the shift's date range.
pub fn night_overlap_minutes(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window_start: NaiveTime,
    window_end: NaiveTime,
) -> u32 {
    if end <= start {
        return 0;
    }

    let mut total: i64 = 0;
    // The previous day's window instance can spill past midnight into the
    // shift, so the walk starts one day early.
    let mut day = start.date().pred_opt().unwrap_or(start.date());
    let last = end.date();

    while day <= last {
        let instance_start = day.and_time(window_start);
        let instance_end = if window_end <= window_start {
            match day.succ_opt() {
                Some(next) => next.and_time(window_end),
                None => break,
            }
        } else {
            day.and_time(window_end)
        };

        let overlap_start = start.max(instance_start);
        let overlap_end = end.min(instance_end);
        if overlap_end > overlap_start {
            total += (overlap_end - overlap_start).num_minutes();
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    total.max(0) as u32
}

/// Returns true if the shift interval overlaps the configured night window.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::is_night_shift;
/// use payroll_engine::config::BreakConfig;
/// use chrono::NaiveDateTime;
///
/// let config = BreakConfig::default(); // night window 22:00-05:00
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-16 01:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_night_shift(start, end, &config));
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!is_night_shift(start, end, &config));
/// ```
pub fn is_night_shift(start: NaiveDateTime, end: NaiveDateTime, config: &BreakConfig) -> bool {
    let (window_start, window_end) = config.night_window();
    night_overlap_minutes(start, end, window_start, window_end) > 0
}

/// Returns true when the recorded break meets the effective minimum.
///
/// With break tracking disabled there is nothing to comply with.
pub fn is_break_compliant(
    actual_minutes: u32,
    config: &BreakConfig,
    working_hours: u32,
    is_night_shift: bool,
) -> bool {
    if !config.track_breaks {
        return true;
    }
    actual_minutes >= minimum_break_minutes(config, working_hours, is_night_shift)
}
