//! Millisecond time offsets.
//!
//! `TimeOffset` is the single time unit used by cues, the position finder and
//! the scheduler. It is signed so that differences such as
//! `cue.start - position` can be computed directly; callers decide what a
//! negative value means.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::time::Duration;

use crate::error::PlayerError;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// A position or span on the playback timeline, in whole milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOffset(i64);

impl TimeOffset {
    /// The start of the timeline.
    pub const ZERO: TimeOffset = TimeOffset(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * MILLIS_PER_SECOND)
    }

    /// Build an offset from clock components (`hours:minutes:seconds,millis`).
    pub const fn from_hms_millis(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self(
            hours * MILLIS_PER_HOUR
                + minutes * MILLIS_PER_MINUTE
                + seconds * MILLIS_PER_SECOND
                + millis,
        )
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Convert to a timer delay. Negative offsets clamp to zero.
    pub fn to_delay(self) -> Duration {
        Duration::from_millis(self.0.max(0) as u64)
    }

    /// Add a signed number of milliseconds, never going below zero.
    ///
    /// Used for relative seeks, where the resulting position must stay on
    /// the timeline.
    pub fn saturating_shift(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis).max(0))
    }
}

impl From<Duration> for TimeOffset {
    fn from(duration: Duration) -> Self {
        Self(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }
}

impl Add for TimeOffset {
    type Output = TimeOffset;

    fn add(self, rhs: TimeOffset) -> TimeOffset {
        TimeOffset(self.0 + rhs.0)
    }
}

impl Sub for TimeOffset {
    type Output = TimeOffset;

    fn sub(self, rhs: TimeOffset) -> TimeOffset {
        TimeOffset(self.0 - rhs.0)
    }
}

impl fmt::Display for TimeOffset {
    /// Formats as `HH:MM:SS,mmm`, prefixed with `-` for negative values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total = self.0.unsigned_abs();
        let hours = total / MILLIS_PER_HOUR as u64;
        let minutes = (total / MILLIS_PER_MINUTE as u64) % 60;
        let seconds = (total / MILLIS_PER_SECOND as u64) % 60;
        let millis = total % MILLIS_PER_SECOND as u64;
        write!(
            f,
            "{}{:02}:{:02}:{:02},{:03}",
            sign, hours, minutes, seconds, millis
        )
    }
}

impl FromStr for TimeOffset {
    type Err = PlayerError;

    /// Parse `HH:MM:SS,mmm`.
    ///
    /// The millisecond separator may also be `.` (WebVTT style), and the
    /// millisecond part may be shorter than three digits (`,5` is 500 ms).
    /// Minutes and seconds must be below 60. Hours are limited only by the
    /// `i64` millisecond range; anything larger is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlayerError::InvalidTimeString(s.to_string());
        let trimmed = s.trim();

        let (clock, millis) = match trimmed.find([',', '.']) {
            Some(pos) => (&trimmed[..pos], Some(&trimmed[pos + 1..])),
            None => (trimmed, None),
        };

        let parts: Vec<&str> = clock.split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(invalid());
        };

        let hours = parse_component(hours).ok_or_else(invalid)?;
        let minutes = parse_component(minutes).ok_or_else(invalid)?;
        let seconds = parse_component(seconds).ok_or_else(invalid)?;
        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }

        let millis = match millis {
            None => 0,
            Some(digits) if (1..=3).contains(&digits.len()) => {
                let value = parse_component(digits).ok_or_else(invalid)?;
                // Right-pad so ",5" means 500 ms
                value * 10i64.pow(3 - digits.len() as u32)
            }
            Some(_) => return Err(invalid()),
        };

        checked_hms_millis(hours, minutes, seconds, millis)
            .map(TimeOffset)
            .ok_or_else(invalid)
    }
}

fn checked_hms_millis(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Option<i64> {
    hours
        .checked_mul(MILLIS_PER_HOUR)?
        .checked_add(minutes * MILLIS_PER_MINUTE)?
        .checked_add(seconds * MILLIS_PER_SECOND)?
        .checked_add(millis)
}

fn parse_component(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
