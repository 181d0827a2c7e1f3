//! Timestamp rounding functionality.
//!
//! This module rounds check-in/check-out timestamps to a configured interval
//! boundary (5, 10, 15, 30, or 60 minutes) in a configured direction.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::config::{RoundingDirection, TimeRoundingConfig};

/// Rounds a timestamp to the configured interval boundary.
///
/// The timestamp is first truncated to whole minutes, then shifted to the
/// nearest valid boundary per the configured direction. A timestamp already
/// on a boundary is only truncated. The remainder is computed on minutes
/// since midnight, and rounding up across midnight advances the date.
///
/// When either the interval or the direction is absent (or the interval is
/// zero), the input is returned unchanged.
///
/// With [`RoundingDirection::Nearest`], a remainder of exactly half the
/// interval rounds up.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_time;
/// use payroll_engine::config::{RoundingDirection, TimeRoundingConfig};
/// use chrono::NaiveDateTime;
///
/// let config = TimeRoundingConfig {
///     interval_minutes: Some(15),
///     direction: Some(RoundingDirection::Nearest),
/// };
///
/// let early = NaiveDateTime::parse_from_str("2026-01-15 09:07:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let rounded = round_time(early, &config);
/// assert_eq!(rounded.to_string(), "2026-01-15 09:00:00");
///
/// let late = NaiveDateTime::parse_from_str("2026-01-15 09:08:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let rounded = round_time(late, &config);
/// assert_eq!(rounded.to_string(), "2026-01-15 09:15:00");
/// ```
pub fn round_time(timestamp: NaiveDateTime, config: &TimeRoundingConfig) -> NaiveDateTime {
    let (Some(interval), Some(direction)) = (config.interval_minutes, config.direction) else {
        return timestamp;
    };
    if interval == 0 {
        return timestamp;
    }

    let truncated = timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp);

    let minutes_of_day = truncated.hour() * 60 + truncated.minute();
    let remainder = minutes_of_day % interval;
    if remainder == 0 {
        return truncated;
    }

    match direction {
        RoundingDirection::Down => truncated - Duration::minutes(i64::from(remainder)),
        RoundingDirection::Up => truncated + Duration::minutes(i64::from(interval - remainder)),
        RoundingDirection::Nearest => {
            if remainder * 2 >= interval {
                truncated + Duration::minutes(i64::from(interval - remainder))
            } else {
                truncated - Duration::minutes(i64::from(remainder))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn config(interval: u32, direction: RoundingDirection) -> TimeRoundingConfig {
        TimeRoundingConfig {
            interval_minutes: Some(interval),
            direction: Some(direction),
        }
    }

    #[test]
    fn test_nearest_rounds_down_below_half() {
        let rounded = round_time(
            make_datetime("2026-01-15 09:07:00"),
            &config(15, RoundingDirection::Nearest),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:00:00"));
    }

    #[test]
    fn test_nearest_rounds_up_above_half() {
        let rounded = round_time(
            make_datetime("2026-01-15 09:08:00"),
            &config(15, RoundingDirection::Nearest),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:15:00"));
    }

    #[test]
    fn test_nearest_tie_rounds_up() {
        // Remainder of exactly half the interval rounds up.
        let rounded = round_time(
            make_datetime("2026-01-15 09:05:00"),
            &config(10, RoundingDirection::Nearest),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:10:00"));
    }

    #[test]
    fn test_up_direction() {
        let rounded = round_time(
            make_datetime("2026-01-15 09:01:00"),
            &config(30, RoundingDirection::Up),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:30:00"));
    }

    #[test]
    fn test_down_direction() {
        let rounded = round_time(
            make_datetime("2026-01-15 09:29:00"),
            &config(30, RoundingDirection::Down),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:00:00"));
    }

    #[test]
    fn test_on_boundary_only_truncates() {
        let rounded = round_time(
            make_datetime("2026-01-15 09:15:42"),
            &config(15, RoundingDirection::Up),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:15:00"));
    }

    #[test]
    fn test_seconds_truncated_before_rounding() {
        // 09:07:59 truncates to 09:07, which rounds down with nearest/15.
        let rounded = round_time(
            make_datetime("2026-01-15 09:07:59"),
            &config(15, RoundingDirection::Nearest),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 09:00:00"));
    }

    #[test]
    fn test_rounding_up_crosses_midnight() {
        let rounded = round_time(
            make_datetime("2026-01-15 23:58:00"),
            &config(15, RoundingDirection::Up),
        );
        assert_eq!(rounded, make_datetime("2026-01-16 00:00:00"));
    }

    #[test]
    fn test_hourly_interval() {
        let rounded = round_time(
            make_datetime("2026-01-15 09:31:00"),
            &config(60, RoundingDirection::Nearest),
        );
        assert_eq!(rounded, make_datetime("2026-01-15 10:00:00"));
    }

    #[test]
    fn test_absent_interval_returns_input_unchanged() {
        let input = make_datetime("2026-01-15 09:07:42");
        let config = TimeRoundingConfig {
            interval_minutes: None,
            direction: Some(RoundingDirection::Up),
        };
        assert_eq!(round_time(input, &config), input);
    }

    #[test]
    fn test_absent_direction_returns_input_unchanged() {
        let input = make_datetime("2026-01-15 09:07:42");
        let config = TimeRoundingConfig {
            interval_minutes: Some(15),
            direction: None,
        };
        assert_eq!(round_time(input, &config), input);
    }

    #[test]
    fn test_zero_interval_returns_input_unchanged() {
        let input = make_datetime("2026-01-15 09:07:42");
        let config = TimeRoundingConfig {
            interval_minutes: Some(0),
            direction: Some(RoundingDirection::Down),
        };
        assert_eq!(round_time(input, &config), input);
    }
}
