//! Working-hours calculation functionality.
//!
//! This module combines check-in/check-out timestamps with break data into
//! the gross/net/night/regular minute split for one shift, handling both
//! same-day and overnight shifts.

use chrono::{Duration, NaiveDateTime};

use crate::config::{BreakConfig, TimeRoundingConfig};
use crate::models::{BreakRecord, WorkingHoursResult};

use super::breaks::{
    effective_break_minutes, is_break_compliant, is_night_shift, net_working_minutes,
    night_overlap_minutes, total_break_minutes,
};
use super::time_rounding::round_time;

/// Computes the time split for one shift.
///
/// Check-in and check-out are first rounded per the time-rounding
/// configuration (the default configuration leaves them untouched). A
/// checkout earlier than the check-in is advanced by one day before
/// durations are computed, so same-date clock pairs describe overnight
/// shifts naturally; the overnight flag reports whether the shift crosses
/// midnight either way.
///
/// Break handling: when break records are present, or break tracking is
/// enabled, recorded minutes are clamped by [`effective_break_minutes`].
/// When no breaks are recorded and tracking is disabled, the configured
/// default break duration (night-shift-specific if applicable) is
/// substituted before net minutes are computed.
///
/// Night minutes are the portion of net time falling inside the configured
/// night window, computed by interval overlap including wrap-around windows;
/// regular minutes are the remainder.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_working_hours;
/// use payroll_engine::config::{BreakConfig, BreakType, TimeRoundingConfig};
/// use chrono::NaiveDateTime;
///
/// let config = BreakConfig {
///     track_breaks: true,
///     break_type: BreakType::Unpaid,
///     ..BreakConfig::default()
/// };
///
/// let check_in = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out = NaiveDateTime::parse_from_str("2026-01-15 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = calculate_working_hours(
///     check_in,
///     check_out,
///     &[],
///     &config,
///     &TimeRoundingConfig::default(),
/// );
/// assert_eq!(result.gross_minutes, 540);
/// assert_eq!(result.working_hours, 9);
/// assert!(!result.is_overnight);
/// ```
pub fn calculate_working_hours(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    breaks: &[BreakRecord],
    config: &BreakConfig,
    rounding: &TimeRoundingConfig,
) -> WorkingHoursResult {
    let check_in = round_time(check_in, rounding);
    let check_out = round_time(check_out, rounding);

    let shift_end = if check_out < check_in {
        check_out + Duration::days(1)
    } else {
        check_out
    };
    let is_overnight = shift_end.date() > check_in.date();

    let gross_minutes = (shift_end - check_in).num_minutes().max(0) as u32;
    let working_hours = gross_minutes / 60;
    let night = is_night_shift(check_in, shift_end, config);

    let recorded_break_minutes = total_break_minutes(breaks);
    let effective_break = if breaks.is_empty() && !config.track_breaks {
        if night {
            config
                .night_default_break_minutes
                .or(config.default_break_minutes)
        } else {
            config.default_break_minutes
        }
        .unwrap_or(0)
    } else {
        effective_break_minutes(recorded_break_minutes, config, working_hours, night)
    };

    let break_compliant = is_break_compliant(recorded_break_minutes, config, working_hours, night);
    let net_minutes = net_working_minutes(gross_minutes, effective_break, config);

    let (window_start, window_end) = config.night_window();
    let night_minutes =
        night_overlap_minutes(check_in, shift_end, window_start, window_end).min(net_minutes);
    let regular_minutes = net_minutes - night_minutes;

    WorkingHoursResult {
        gross_minutes,
        net_minutes,
        working_hours,
        regular_minutes,
        night_minutes,
        total_break_minutes: recorded_break_minutes,
        effective_break_minutes: effective_break,
        is_night_shift: night,
        is_overnight,
        break_compliant,
    }
}
