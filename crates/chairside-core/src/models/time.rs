//! Time-of-day values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors from parsing an `"HH:MM"` time of day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("expected HH:MM, got {0:?}")]
    Format(String),

    #[error("time out of range: {0}")]
    OutOfRange(String),
}

/// A time of day with minute precision, stored as minutes since midnight.
///
/// The textual form is the fixed-width, zero-padded `"HH:MM"`, which is also
/// what serde reads and writes. Comparison is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeParseError> {
        if hour > 23 || minute > 59 {
            return Err(TimeParseError::OutOfRange(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Build from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeParseError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeParseError::OutOfRange(format!("{} minutes", minutes)));
        }
        Ok(Self(minutes))
    }

    /// Build from a compile-time constant. `minutes` must be below 1440.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Signed number of minutes from `self` to `later`.
    ///
    /// Negative when `later` is actually earlier.
    pub fn minutes_until(self, later: ClockTime) -> i32 {
        i32::from(later.0) - i32::from(self.0)
    }

    /// Advance by `minutes`, or `None` when the result would pass midnight.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        let total = self.0.checked_add(minutes)?;
        (total < MINUTES_PER_DAY).then_some(Self(total))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bytes = s.as_bytes();
        // Fixed width only: "9:00" is rejected so string and numeric order agree.
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TimeParseError::Format(s.to_string()));
        }
        let digits = |part: &str| -> Result<u16, TimeParseError> {
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimeParseError::Format(s.to_string()));
            }
            part.parse().map_err(|_| TimeParseError::Format(s.to_string()))
        };
        let hour = digits(&s[..2])?;
        let minute = digits(&s[3..])?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: ClockTime = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!("9:30".parse::<ClockTime>(), Err(TimeParseError::Format(_))));
        assert!(matches!("09-30".parse::<ClockTime>(), Err(TimeParseError::Format(_))));
        assert!(matches!("ab:cd".parse::<ClockTime>(), Err(TimeParseError::Format(_))));
        assert!(matches!("+9:30".parse::<ClockTime>(), Err(TimeParseError::Format(_))));
        assert!(matches!("24:00".parse::<ClockTime>(), Err(TimeParseError::OutOfRange(_))));
        assert!(matches!("12:60".parse::<ClockTime>(), Err(TimeParseError::OutOfRange(_))));
    }

    #[test]
    fn test_ordering_matches_clock() {
        let early: ClockTime = "08:59".parse().unwrap();
        let late: ClockTime = "10:00".parse().unwrap();
        assert!(early < late);
        assert_eq!(early.minutes_until(late), 61);
        assert_eq!(late.minutes_until(early), -61);
    }

    #[test]
    fn test_checked_add() {
        let t = ClockTime::from_hm(23, 30).unwrap();
        assert_eq!(t.checked_add_minutes(29).unwrap().to_string(), "23:59");
        assert!(t.checked_add_minutes(30).is_none());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let t = ClockTime::from_hm(14, 5).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"14:05\"");

        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
