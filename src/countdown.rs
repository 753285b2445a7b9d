// SPDX-License-Identifier: MPL-2.0
//! Countdown time arithmetic.
//!
//! Decomposes the span between a current instant and a fixed target instant
//! into display units. The target carries its own UTC offset, so a wall-clock
//! moment in a specific zone is honored no matter where the app runs.

use chrono::{DateTime, FixedOffset, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const DAYS_PER_YEAR: i64 = 365;

/// Remaining time split into display units.
///
/// `days` counts whole days modulo a fixed 365-day year; leap years are not
/// accounted for. Once the target has passed, `is_past` is set and all numeric
/// fields stay at zero — there is no negative time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBreakdown {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub is_past: bool,
}

impl TimeBreakdown {
    /// The terminal state: the target instant has been reached.
    pub fn arrived() -> Self {
        Self {
            is_past: true,
            ..Self::default()
        }
    }

    /// Reconstructs the total number of remaining whole seconds.
    pub fn total_seconds(&self) -> u64 {
        (self.years * DAYS_PER_YEAR as u64 + self.days) * SECS_PER_DAY as u64
            + self.hours * SECS_PER_HOUR as u64
            + self.minutes * SECS_PER_MINUTE as u64
            + self.seconds
    }
}

/// Computes the time remaining from `now` until `target`.
///
/// Pure and total: every pair of instants produces a breakdown, never an
/// error. Whole seconds are truncated, not rounded.
pub fn remaining(now: DateTime<Utc>, target: DateTime<FixedOffset>) -> TimeBreakdown {
    let span = target.signed_duration_since(now);
    if span <= chrono::TimeDelta::zero() {
        return TimeBreakdown::arrived();
    }

    let delta = span.num_seconds();

    TimeBreakdown {
        years: (delta / (SECS_PER_DAY * DAYS_PER_YEAR)) as u64,
        days: ((delta / SECS_PER_DAY) % DAYS_PER_YEAR) as u64,
        hours: ((delta / SECS_PER_HOUR) % 24) as u64,
        minutes: ((delta / SECS_PER_MINUTE) % 60) as u64,
        seconds: (delta % 60) as u64,
        is_past: false,
    }
}

/// Parses a target instant from an RFC 3339 string, keeping its UTC offset.
pub fn parse_target(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn one_hour_before_target_in_named_zone() {
        let target = parse_target("2034-02-10T00:00:00-07:00").expect("valid target");
        let now = parse_target("2034-02-09T23:00:00-07:00")
            .expect("valid now")
            .with_timezone(&Utc);

        let breakdown = remaining(now, target);

        assert_eq!(
            breakdown,
            TimeBreakdown {
                years: 0,
                days: 0,
                hours: 1,
                minutes: 0,
                seconds: 0,
                is_past: false,
            }
        );
    }

    #[test]
    fn target_offset_is_honored_across_zones() {
        // Midnight in UTC-7 is 07:00 UTC; an hour earlier in UTC must agree.
        let target = parse_target("2034-02-10T00:00:00-07:00").expect("valid target");
        let now = utc(2034, 2, 10, 6, 0, 0);

        let breakdown = remaining(now, target);
        assert_eq!(breakdown.hours, 1);
        assert!(!breakdown.is_past);
    }

    #[test]
    fn past_target_is_terminal_and_zeroed() {
        let target = parse_target("2020-01-01T00:00:00+00:00").expect("valid target");
        let now = utc(2026, 8, 6, 12, 0, 0);

        let breakdown = remaining(now, target);
        assert_eq!(breakdown, TimeBreakdown::arrived());
        assert_eq!(breakdown.total_seconds(), 0);
    }

    #[test]
    fn exact_arrival_counts_as_past() {
        let target = parse_target("2030-06-15T08:30:00+02:00").expect("valid target");
        let now = target.with_timezone(&Utc);

        assert!(remaining(now, target).is_past);
    }

    #[test]
    fn fields_stay_inside_their_ranges() {
        let target = parse_target("2040-12-31T23:59:59+00:00").expect("valid target");
        let mut now = utc(2026, 1, 1, 0, 0, 0);

        for _ in 0..500 {
            let b = remaining(now, target);
            assert!(b.seconds < 60);
            assert!(b.minutes < 60);
            assert!(b.hours < 24);
            assert!(b.days < 365);
            assert!(!b.is_past);
            now += chrono::Duration::seconds(86_399);
        }
    }

    #[test]
    fn whole_year_decomposes_without_remainder() {
        let target = parse_target("2035-01-01T00:00:00+00:00").expect("valid target");
        let now = utc(2034, 1, 1, 0, 0, 0);

        let b = remaining(now, target);
        // 2034 has no leap day, so the fixed 365-day year divides evenly.
        assert_eq!(b.years, 1);
        assert_eq!(b.days, 0);
        assert_eq!(b.hours, 0);
    }

    #[test]
    fn remaining_seconds_strictly_decrease_until_zero() {
        let target = parse_target("2026-08-06T12:00:10+00:00").expect("valid target");
        let mut now = utc(2026, 8, 6, 12, 0, 0);
        let mut previous = remaining(now, target).total_seconds();
        assert_eq!(previous, 10);

        loop {
            now += chrono::Duration::seconds(1);
            let b = remaining(now, target);
            if b.is_past {
                assert_eq!(b.total_seconds(), 0);
                break;
            }
            assert!(b.total_seconds() < previous);
            previous = b.total_seconds();
        }
    }

    #[test]
    fn sub_second_remainder_truncates() {
        let target = parse_target("2026-08-06T12:00:01+00:00").expect("valid target");
        let now = utc(2026, 8, 6, 12, 0, 0) + chrono::Duration::milliseconds(400);

        // 600ms left truncates to zero whole seconds, but the target has not
        // passed yet so the terminal state is not entered.
        let b = remaining(now, target);
        assert!(!b.is_past);
        assert_eq!(b.total_seconds(), 0);
    }

    #[test]
    fn parse_target_rejects_garbage() {
        assert!(parse_target("next february").is_err());
        assert!(parse_target("2034-02-10").is_err());
    }
}
