//! Live countdown derivation for running sessions
//!
//! A session ends `duration` hours after `date + start_time`. The deriver
//! reports how much of that span is left at a supplied instant, clamped at
//! zero. It is side-effect-free and safe to recompute every second; expiry
//! never advances the booking status by itself.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

/// Remaining session time decomposed for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// A session with nothing left displays as finished
    pub fn is_finished(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_finished() {
            write!(f, "finished")
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        }
    }
}

/// Wall-clock instant at which the session ends
pub fn session_end(date: NaiveDate, start_time: NaiveTime, duration_hours: i16) -> NaiveDateTime {
    date.and_time(start_time) + Duration::hours(duration_hours as i64)
}

/// Time left until the session ends, zero once `now` has passed the end
pub fn remaining(
    date: NaiveDate,
    start_time: NaiveTime,
    duration_hours: i16,
    now: NaiveDateTime,
) -> TimeRemaining {
    let left = session_end(date, start_time, duration_hours) - now;
    if left <= Duration::zero() {
        return TimeRemaining::ZERO;
    }
    let secs = left.num_seconds();
    TimeRemaining {
        hours: secs / 3600,
        minutes: (secs % 3600) / 60,
        seconds: secs % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_full_duration_at_start() {
        let left = remaining(date(), time(14, 0, 0), 2, date().and_time(time(14, 0, 0)));
        assert_eq!(left.total_seconds(), 2 * 3600);
        assert_eq!(left.hours, 2);
        assert!(!left.is_finished());
    }

    #[test]
    fn test_zero_at_exact_end() {
        let left = remaining(date(), time(14, 0, 0), 2, date().and_time(time(16, 0, 0)));
        assert_eq!(left, TimeRemaining::ZERO);
        assert!(left.is_finished());
    }

    #[test]
    fn test_never_negative_after_end() {
        let day_after = date().succ_opt().unwrap();
        let left = remaining(date(), time(14, 0, 0), 2, day_after.and_time(time(9, 0, 0)));
        assert_eq!(left, TimeRemaining::ZERO);
    }

    #[test]
    fn test_decomposition() {
        // 1h 30m 15s before the end of a 21:00 + 4h session (ends 01:00 next day)
        let now = date().and_time(time(23, 29, 45));
        let left = remaining(date(), time(21, 0, 0), 4, now);
        assert_eq!(left.hours, 1);
        assert_eq!(left.minutes, 30);
        assert_eq!(left.seconds, 15);
        assert_eq!(left.to_string(), "01:30:15");
    }

    #[test]
    fn test_display_finished() {
        assert_eq!(TimeRemaining::ZERO.to_string(), "finished");
    }
}
