//! Wall-clock source for the timestamp component.

use chrono::{DateTime, Utc};

/// Provides the current time with sub-second precision.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at `seconds` past the Unix epoch.
    ///
    /// Out-of-range values fall back to the epoch itself.
    pub fn at_timestamp(seconds: i64) -> Self {
        Self(DateTime::from_timestamp(seconds, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// `now` scaled by `exponent` and rounded to the nearest integer.
///
/// Equivalent to `round(seconds_with_fraction * exponent)` but exact, with
/// no float rounding for large timestamps.
pub(crate) fn scaled_timestamp(now: DateTime<Utc>, exponent: i64) -> i64 {
    const NANOS_PER_SEC: i64 = 1_000_000_000;

    let whole = now.timestamp().saturating_mul(exponent);
    let nanos = i64::from(now.timestamp_subsec_nanos());
    let fraction = (nanos * exponent + NANOS_PER_SEC / 2) / NANOS_PER_SEC;
    whole.saturating_add(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at_timestamp(1711972800);
        assert_eq!(clock.now().timestamp(), 1711972800);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now().timestamp() > 1704067200);
    }

    #[test]
    fn test_scaled_whole_seconds() {
        let now = FixedClock::at_timestamp(1711972800).now();
        assert_eq!(scaled_timestamp(now, 1), 1711972800);
        assert_eq!(scaled_timestamp(now, 10_000), 17119728000000);
    }

    #[test]
    fn test_scaled_rounds_fraction() {
        let now = DateTime::from_timestamp(100, 250_000_000).unwrap();
        assert_eq!(scaled_timestamp(now, 1), 100);
        assert_eq!(scaled_timestamp(now, 10), 1003);

        let now = DateTime::from_timestamp(100, 500_000_000).unwrap();
        assert_eq!(scaled_timestamp(now, 1), 101);

        let now = DateTime::from_timestamp(100, 123_456_789).unwrap();
        assert_eq!(scaled_timestamp(now, 1000), 100123);
        assert_eq!(scaled_timestamp(now, 10_000), 1001235);
    }
}
