// web_app/model/countdown.rs - Countdown arithmetic
//
// The countdown shows whole days, hours, minutes, and seconds left until a
// target instant, and a terminal "EXPIRED" state once it has passed.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Re-render interval of the countdown display
pub const COUNTDOWN_TICK_MS: u32 = 1000;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownState {
    Running {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Expired,
}

impl CountdownState {
    /// State at `now` for a countdown ending at `target`
    pub fn at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance = (target - now).num_milliseconds();
        if distance < 0 {
            return CountdownState::Expired;
        }

        CountdownState::Running {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }

    /// Labelled, zero-padded fields in display order; empty once expired
    pub fn fields(&self) -> Vec<(String, &'static str)> {
        match *self {
            CountdownState::Running { days, hours, minutes, seconds } => vec![
                (format!("{days:02}"), "Days"),
                (format!("{hours:02}"), "Hours"),
                (format!("{minutes:02}"), "Minutes"),
                (format!("{seconds:02}"), "Seconds"),
            ],
            CountdownState::Expired => Vec::new(),
        }
    }
}

/// Parse a countdown target as written in page markup.
///
/// Accepts RFC 3339 (`2026-12-31T23:59:00Z`, with offset) and naive
/// `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD HH:MM:SS`, read as UTC.
pub fn parse_countdown_target(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_breakdown() {
        let target = base() + Duration::days(3) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);
        assert_eq!(
            CountdownState::at(target, base()),
            CountdownState::Running { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn test_sub_second_remainder_floors() {
        let target = base() + Duration::milliseconds(1999);
        assert_eq!(
            CountdownState::at(target, base()),
            CountdownState::Running { days: 0, hours: 0, minutes: 0, seconds: 1 }
        );
    }

    #[test]
    fn test_exact_target_is_not_expired() {
        assert!(!CountdownState::at(base(), base()).is_expired());
    }

    #[test]
    fn test_past_target_is_expired() {
        let target = base() - Duration::milliseconds(1);
        assert!(CountdownState::at(target, base()).is_expired());
        assert!(CountdownState::Expired.fields().is_empty());
    }

    #[test]
    fn test_fields_zero_padded() {
        let state = CountdownState::Running { days: 120, hours: 1, minutes: 0, seconds: 9 };
        let values: Vec<String> = state.fields().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["120", "01", "00", "09"]);
    }

    #[test]
    fn test_parse_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(parse_countdown_target("2026-12-31T23:59:00Z"), Some(expected));
        assert_eq!(parse_countdown_target("2026-12-31T23:59"), Some(expected));
        assert_eq!(parse_countdown_target("2026-12-31 23:59:00"), Some(expected));
        assert_eq!(
            parse_countdown_target("2027-01-01T01:59:00+02:00"),
            Some(expected)
        );
        assert_eq!(parse_countdown_target("next tuesday"), None);
    }
}
