//! Clock-style duration value type
//!
//! A [`Duration`] is an immutable hours/minutes/seconds record:
//! - hours: >= 0, unbounded above
//! - minutes, seconds: clock fields in 0..=59
//!
//! Values arrive field-built from picker state, so validity is an
//! explicit predicate rather than a constructor guarantee: every
//! operation checks [`Duration::is_valid`] before doing any work, and
//! an invalid value is always rejected, never normalized.

use std::fmt;

use crate::error::{DurationError, DurationResult};

/// Seconds in one minute
pub const SECS_PER_MINUTE: i64 = 60;
/// Minutes in one hour
pub const MINUTES_PER_HOUR: i64 = 60;
/// Seconds in one hour
pub const SECS_PER_HOUR: i64 = SECS_PER_MINUTE * MINUTES_PER_HOUR;

/// Clock-style duration: hours/minutes/seconds
///
/// Fields are signed so that out-of-range values handed in by callers
/// are representable; operations reject them via [`Duration::is_valid`].
/// Derived `PartialEq` is structural; the checked, validity-aware
/// comparison is [`Duration::try_eq`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Build a duration from raw fields. Does not validate.
    #[inline]
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Duration {
            hours,
            minutes,
            seconds,
        }
    }

    /// Check the domain invariant: hours >= 0, minutes and seconds in 0..=59.
    /// Hours are deliberately unbounded above.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.hours >= 0
            && self.minutes >= 0
            && self.minutes < MINUTES_PER_HOUR
            && self.seconds >= 0
            && self.seconds < SECS_PER_MINUTE
    }

    /// Convert to a flat second count.
    ///
    /// Large hour values are legal and produce a correspondingly large
    /// count; there is no upper bound check.
    pub fn to_seconds(&self) -> DurationResult<i64> {
        if !self.is_valid() {
            return Err(DurationError::InvalidDuration {
                op: "to_seconds",
                inputs: format!("{{duration: {self:?}}}"),
                offending: format!("{self:?}"),
            });
        }

        Ok(self.hours * SECS_PER_HOUR + self.minutes * SECS_PER_MINUTE + self.seconds)
    }

    /// Split a flat second count into hours/minutes/seconds.
    /// The result is valid by construction.
    pub fn from_seconds(seconds: i64) -> DurationResult<Duration> {
        if seconds < 0 {
            return Err(DurationError::NegativeSeconds {
                op: "from_seconds",
                inputs: format!("{{seconds: {seconds}}}"),
                advice: "",
            });
        }

        Ok(Duration {
            hours: seconds / SECS_PER_HOUR,
            minutes: (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: seconds % SECS_PER_MINUTE,
        })
    }

    /// Field-wise equality, defined only on valid durations
    pub fn try_eq(&self, other: &Duration) -> DurationResult<bool> {
        if let Some(bad) = find_invalid(&[*self, *other]) {
            return Err(DurationError::InvalidDuration {
                op: "try_eq",
                inputs: format!("{{d1: {self:?}}}, {{d2: {other:?}}}"),
                offending: format!("{bad:?}"),
            });
        }

        Ok(self.hours == other.hours
            && self.minutes == other.minutes
            && self.seconds == other.seconds)
    }

    /// Checked field-wise copy.
    ///
    /// The type is `Copy`, so this exists for field-built values of
    /// unknown provenance: it rejects an invalid source instead of
    /// propagating it.
    pub fn try_clone(&self) -> DurationResult<Duration> {
        if !self.is_valid() {
            return Err(DurationError::InvalidDuration {
                op: "try_clone",
                inputs: format!("{{duration: {self:?}}}"),
                offending: format!("{self:?}"),
            });
        }

        Ok(Duration {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        })
    }
}

/// First invalid element of `durations`, if any
pub(crate) fn find_invalid(durations: &[Duration]) -> Option<Duration> {
    durations.iter().copied().find(|d| !d.is_valid())
}

impl fmt::Display for Duration {
    /// Raw `HH:MM:SS` rendering of the fields. Does not validate; the
    /// checked, field-selective rendering is [`Duration::format`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_negative_hours_invalid() {
        assert!(!Duration::new(-1, 0, 0).is_valid());
    }

    #[test]
    fn test_minutes_too_large_invalid() {
        assert!(!Duration::new(1, 62, 5).is_valid());
    }

    #[test]
    fn test_seconds_too_large_invalid() {
        assert!(!Duration::new(1, 5, 62).is_valid());
    }

    #[test]
    fn test_clock_fields_in_range_valid() {
        assert!(Duration::new(0, 5, 59).is_valid());
        assert!(Duration::ZERO.is_valid());
        // hours have no upper bound
        assert!(Duration::new(10_000, 59, 59).is_valid());
    }

    #[test]
    fn test_to_seconds_invalid_duration() {
        let err = Duration::new(0, 0, 61).to_seconds().unwrap_err();
        assert!(matches!(err, DurationError::InvalidDuration { .. }));
        assert_eq!(err.operation(), "to_seconds");
    }

    #[test]
    fn test_to_seconds_zero() {
        assert_eq!(Duration::ZERO.to_seconds().unwrap(), 0);
    }

    #[test]
    fn test_to_seconds_value() {
        assert_eq!(Duration::new(7, 23, 30).to_seconds().unwrap(), 26610);
    }

    #[test]
    fn test_from_seconds_negative() {
        let err = Duration::from_seconds(-2).unwrap_err();
        assert!(matches!(err, DurationError::NegativeSeconds { .. }));
        assert_eq!(err.operation(), "from_seconds");
    }

    #[test]
    fn test_from_seconds_zero() {
        assert_eq!(Duration::from_seconds(0).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_from_seconds_value() {
        assert_eq!(
            Duration::from_seconds(26610).unwrap(),
            Duration::new(7, 23, 30)
        );
    }

    #[test]
    fn test_try_eq_invalid_duration() {
        let bad = Duration::new(0, 0, 61);
        let good = Duration::new(7, 23, 30);

        let err = bad.try_eq(&good).unwrap_err();
        assert!(matches!(err, DurationError::InvalidDuration { .. }));
        assert_eq!(err.operation(), "try_eq");
    }

    #[test]
    fn test_try_eq_both_zero() {
        assert!(Duration::ZERO.try_eq(&Duration::ZERO).unwrap());
    }

    #[test]
    fn test_try_eq_one_zero() {
        assert!(!Duration::ZERO.try_eq(&Duration::new(7, 23, 30)).unwrap());
    }

    #[test]
    fn test_try_eq_equal_values() {
        let d1 = Duration::new(7, 23, 30);
        let d2 = Duration::new(7, 23, 30);
        assert!(d1.try_eq(&d2).unwrap());
    }

    #[test]
    fn test_try_eq_off_by_one_second() {
        let d1 = Duration::new(7, 23, 29);
        let d2 = Duration::new(7, 23, 30);
        assert!(!d1.try_eq(&d2).unwrap());
    }

    #[test]
    fn test_try_clone_invalid_duration() {
        let err = Duration::new(0, 0, 61).try_clone().unwrap_err();
        assert_eq!(err.operation(), "try_clone");
    }

    #[test]
    fn test_try_clone_copies_fields() {
        let d = Duration::new(7, 23, 30);
        let cloned = d.try_clone().unwrap();
        assert_eq!(cloned, d);

        // the clone is an independent value
        let mut moved = cloned;
        moved.seconds = 0;
        assert_eq!(moved.seconds, 0);
        assert_eq!(d.seconds, 30);
    }

    #[test]
    fn test_display_is_raw_clock_string() {
        assert_eq!(Duration::new(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(Duration::new(10, 22, 35).to_string(), "10:22:35");
    }

    #[test]
    fn test_find_invalid_reports_first_offender() {
        let bad = Duration::new(0, 60, 0);
        assert_eq!(find_invalid(&[Duration::ZERO, bad, bad]), Some(bad));
        assert_eq!(find_invalid(&[Duration::ZERO]), None);
    }

    proptest! {
        #[test]
        fn prop_seconds_roundtrip(s in 0i64..=1_000_000_000) {
            let d = Duration::from_seconds(s).unwrap();
            prop_assert!(d.is_valid());
            prop_assert_eq!(d.to_seconds().unwrap(), s);
        }

        #[test]
        fn prop_duration_roundtrip(h in 0i64..=100_000, m in 0i64..60, s in 0i64..60) {
            let d = Duration::new(h, m, s);
            let back = Duration::from_seconds(d.to_seconds().unwrap()).unwrap();
            prop_assert_eq!(back, d);
        }
    }
}
