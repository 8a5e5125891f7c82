// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Time`] value type.
//!
//! A `Time` is an hours/minutes/seconds triple with no calendar date and no
//! timezone. It parses from and formats to the canonical `HH:MM[:SS]` text
//! form, converts to and from chrono's naive clock types, and participates
//! in the SQL scan/value protocol defined in [`crate::sql`].
//!
//! No range invariant is enforced on the fields: the parser accepts any
//! base-10 integer per segment and the formatter reproduces it. Supplying
//! sane clock values is the caller's responsibility.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

// ═══════════════════════════════════════════════════════════════════════════
// Time
// ═══════════════════════════════════════════════════════════════════════════

/// A wall-clock time of day.
///
/// The fields are public and unconstrained; `Time` is a plain value type
/// that can be built by parsing, by conversion from a chrono clock type, or
/// by direct assignment.
///
/// # Examples
///
/// ```
/// use daytime::Time;
///
/// let t: Time = "09:30".parse().unwrap();
/// assert_eq!(t, Time::new(9, 30, 0));
/// assert_eq!(t.to_string(), "09:30");
///
/// let t: Time = "14:05:22".parse().unwrap();
/// assert_eq!(t.to_string(), "14:05:22");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl Time {
    /// Create a `Time` from its components.
    #[inline]
    pub const fn new(hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Parse a `HH:MM[:SS]` string, panicking on malformed input.
    ///
    /// Intended for compile-time-constant literals and startup-time
    /// configuration only; every other call site should go through
    /// [`str::parse`] and handle the [`FormatError`].
    ///
    /// # Panics
    ///
    /// Panics if `text` does not parse as a time.
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        match text.parse() {
            Ok(time) => time,
            Err(err) => panic!("must_parse({text:?}): {err}"),
        }
    }

    /// Convert to a [`chrono::NaiveTime`].
    ///
    /// Returns `None` when the fields do not form a representable clock
    /// time (negative components, hours ≥ 24, and so on).
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let hours = u32::try_from(self.hours).ok()?;
        let minutes = u32::try_from(self.minutes).ok()?;
        let seconds = u32::try_from(self.seconds).ok()?;
        NaiveTime::from_hms_opt(hours, minutes, seconds)
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────

impl FromStr for Time {
    type Err = FormatError;

    /// Parse the canonical text form.
    ///
    /// The input is split on `:`; the first three segments are hours,
    /// minutes and seconds positionally. Missing trailing segments stay
    /// zero, segments beyond the third are validated and then ignored.
    /// Assignment is atomic: on the first segment that fails to parse as a
    /// base-10 integer the partially filled value is discarded and the
    /// error is returned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut time = Time::default();
        for (i, segment) in s.split(':').enumerate() {
            let n = segment.parse::<i32>().map_err(|source| FormatError {
                segment: segment.to_owned(),
                source,
            })?;
            match i {
                0 => time.hours = n,
                1 => time.minutes = n,
                2 => time.seconds = n,
                _ => {}
            }
        }
        Ok(time)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────

impl fmt::Display for Time {
    /// Format as `HH:MM`, or `HH:MM:SS` when seconds is non-zero.
    ///
    /// Each field is zero-padded to at least two digits; wider values are
    /// never truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            write!(f, "{:02}:{:02}", self.hours, self.minutes)
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        }
    }
}

// ── Chrono conversions ────────────────────────────────────────────────────

impl From<NaiveTime> for Time {
    #[inline]
    fn from(time: NaiveTime) -> Self {
        Self::new(
            time.hour() as i32,
            time.minute() as i32,
            time.second() as i32,
        )
    }
}

impl From<NaiveDateTime> for Time {
    /// Keep the clock components, drop the date and sub-second fields.
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        datetime.time().into()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const PARSE_TABLE: &[(&str, &str)] = &[
        ("12:34:56", "12:34:56"),
        ("12:34", "12:34"),
        ("12", "12:00"),
        ("1", "01:00"),
        ("7:5:9", "07:05:09"),
        ("100:02", "100:02"),
    ];

    #[test]
    fn test_parse_formats_canonically() {
        for (given, expected) in PARSE_TABLE {
            let time: Time = given.parse().expect(given);
            assert_eq!(time.to_string(), *expected, "input {given:?}");
        }
    }

    #[test]
    fn test_format_parse_is_idempotent() {
        for (given, _) in PARSE_TABLE {
            let time: Time = given.parse().unwrap();
            let reparsed: Time = time.to_string().parse().unwrap();
            assert_eq!(reparsed, time);
        }
    }

    #[test]
    fn test_zero_seconds_are_dropped() {
        let time: Time = "09:30:00".parse().unwrap();
        assert_eq!(time.to_string(), "09:30");
    }

    #[test]
    fn test_missing_segments_default_to_zero() {
        assert_eq!("8".parse::<Time>().unwrap(), Time::new(8, 0, 0));
        assert_eq!("8:15".parse::<Time>().unwrap(), Time::new(8, 15, 0));
    }

    #[test]
    fn test_extra_segments_are_validated_then_ignored() {
        assert_eq!("1:2:3:4".parse::<Time>().unwrap(), Time::new(1, 2, 3));
        assert!("1:2:3:x".parse::<Time>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_integer_segments() {
        let err = "12:abcdef".parse::<Time>().unwrap_err();
        assert_eq!(err.segment(), "abcdef");

        assert!("".parse::<Time>().is_err());
        assert!("12:".parse::<Time>().is_err());
    }

    #[test]
    #[should_panic(expected = "must_parse")]
    fn test_must_parse_panics_on_malformed_input() {
        Time::must_parse("invalid input");
    }

    #[test]
    fn test_must_parse_accepts_literals() {
        assert_eq!(Time::must_parse("12:34"), Time::new(12, 34, 0));
    }

    #[test]
    fn test_from_chrono_clock_types() {
        let naive = NaiveTime::from_hms_opt(12, 34, 0).unwrap();
        assert_eq!(Time::from(naive), Time::must_parse("12:34"));

        let datetime = NaiveDateTime::new(
            chrono::NaiveDate::from_ymd_opt(1992, 2, 23).unwrap(),
            NaiveTime::from_hms_milli_opt(12, 34, 0, 250).unwrap(),
        );
        assert_eq!(Time::from(datetime), Time::must_parse("12:34"));
    }

    #[test]
    fn test_to_naive_time() {
        let time = Time::must_parse("23:59:59");
        assert_eq!(
            time.to_naive_time(),
            NaiveTime::from_hms_opt(23, 59, 59)
        );

        assert_eq!(Time::new(100, 0, 0).to_naive_time(), None);
        assert_eq!(Time::new(-1, 30, 0).to_naive_time(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_is_a_quoted_string() {
        let time = Time::must_parse("12:34:56");
        assert_eq!(serde_json::to_string(&time).unwrap(), r#""12:34:56""#);

        let back: Time = serde_json::from_str(r#""12:34:56""#).unwrap();
        assert_eq!(back, time);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_malformed_strings() {
        assert!(serde_json::from_str::<Time>(r#""12:abcdef""#).is_err());
        assert!(serde_json::from_str::<Time>("null").is_err());
    }
}
