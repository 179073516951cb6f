//! Clock time handling for itinerary legs.
//!
//! Leg times arrive as "HH:MM" strings pasted from booking confirmations.
//! This module provides a validated time-of-day type. Times are naive local
//! clock values specific to each leg's own location; no timezone or date
//! rollover is modelled.

use chrono::{NaiveTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A validated 24-hour time of day.
///
/// Accepts both "H:MM" and "HH:MM" on parse, since confirmation emails are
/// inconsistent about zero-padding. Always displays as zero-padded "HH:MM".
///
/// # Examples
///
/// ```
/// use travel_server::domain::ClockTime;
///
/// let time = ClockTime::parse("9:05").unwrap();
/// assert_eq!(time.to_string(), "09:05");
/// assert_eq!(time.minutes_of_day(), 9 * 60 + 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    time: NaiveTime,
}

impl ClockTime {
    /// Create a clock time from hour and minute components.
    ///
    /// Returns `None` if the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(Self { time })
    }

    /// Parse a time from "H:MM" or "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_server::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    /// assert!(ClockTime::parse("8:20").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse("1430").is_err());
    /// assert!(ClockTime::parse("14:3").is_err());
    /// assert!(ClockTime::parse("25:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        // H:MM is 4 bytes, HH:MM is 5
        let colon_pos = match bytes.len() {
            4 => 1,
            5 => 2,
            _ => return Err(TimeError::new("expected H:MM or HH:MM format")),
        };

        if bytes[colon_pos] != b':' {
            return Err(TimeError::new("expected colon between hour and minute"));
        }

        let hour = parse_digits(&bytes[0..colon_pos])
            .ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_digits(&bytes[colon_pos + 1..])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the time as plain minutes since midnight.
    ///
    /// Connection gaps are computed as the difference of two of these values,
    /// with no rollover handling.
    pub fn minutes_of_day(&self) -> i64 {
        self.hour() as i64 * 60 + self.minute() as i64
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(D::Error::custom)
    }
}

/// Parse one or two ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [d] => (*d as char).to_digit(10),
        [d1, d2] => {
            let d1 = (*d1 as char).to_digit(10)?;
            let d2 = (*d2 as char).to_digit(10)?;
            Some(d1 * 10 + d2)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ClockTime::parse("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = ClockTime::parse("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = ClockTime::parse("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_single_digit_hour() {
        let t = ClockTime::parse("9:05").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
        assert_eq!(t, ClockTime::parse("09:05").unwrap());
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse("1430").is_err());
        assert!(ClockTime::parse("14:3").is_err());
        assert!(ClockTime::parse("14:300").is_err());
        assert!(ClockTime::parse("").is_err());
        assert!(ClockTime::parse(":30").is_err());

        // Missing colon
        assert!(ClockTime::parse("14-30").is_err());
        assert!(ClockTime::parse("14.30").is_err());

        // Non-digit characters
        assert!(ClockTime::parse("ab:cd").is_err());
        assert!(ClockTime::parse("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        // Hour out of range
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("99:99").is_err());

        // Minute out of range
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("12:99").is_err());
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(ClockTime::parse("00:00").unwrap().to_string(), "00:00");
        assert_eq!(ClockTime::parse("9:05").unwrap().to_string(), "09:05");
        assert_eq!(ClockTime::parse("23:59").unwrap().to_string(), "23:59");
    }

    #[test]
    fn minutes_of_day() {
        assert_eq!(ClockTime::parse("00:00").unwrap().minutes_of_day(), 0);
        assert_eq!(ClockTime::parse("01:30").unwrap().minutes_of_day(), 90);
        assert_eq!(ClockTime::parse("23:59").unwrap().minutes_of_day(), 1439);
    }

    #[test]
    fn ordering() {
        let t1 = ClockTime::parse("10:00").unwrap();
        let t2 = ClockTime::parse("10:01").unwrap();
        let t3 = ClockTime::parse("11:00").unwrap();

        assert!(t1 < t2);
        assert!(t2 < t3);
        assert!(t3 > t1);
    }

    #[test]
    fn from_hm_bounds() {
        assert!(ClockTime::from_hm(23, 59).is_some());
        assert!(ClockTime::from_hm(24, 0).is_none());
        assert!(ClockTime::from_hm(0, 60).is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let t = ClockTime::parse("10:40").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"10:40\"");

        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
        assert!(serde_json::from_str::<ClockTime>("\"noon\"").is_err());
    }
}
