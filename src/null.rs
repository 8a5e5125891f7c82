// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`NullTime`] value type.
//!
//! `NullTime` is a [`Time`] plus a validity flag. Every protocol the pair
//! supports — text, JSON, SQL scan, SQL value — first checks whether the
//! input is a representation of *absence* (an empty string, the sentinel
//! string `"null"`, a JSON `null`, a SQL `NULL`) and only then delegates to
//! `Time`. None of the `Time` logic is duplicated here.
//!
//! The `"null"` *string* sentinel is deliberate: it lets JSON-derived
//! strings round-trip through plain text and SQL text columns. It applies
//! to strings only, never to raw byte sequences.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;
use crate::time::Time;

// ═══════════════════════════════════════════════════════════════════════════
// NullTime
// ═══════════════════════════════════════════════════════════════════════════

/// A nullable wall-clock time of day.
///
/// When `valid` is `false` the embedded `time` is semantically ignored by
/// every formatting and marshaling path; it may hold stale or zero data.
///
/// # Examples
///
/// ```
/// use daytime::NullTime;
///
/// let t: NullTime = "09:30".parse().unwrap();
/// assert!(t.valid);
/// assert_eq!(t.to_string(), "09:30");
///
/// let absent: NullTime = "".parse().unwrap();
/// assert!(!absent.valid);
/// assert_eq!(absent.to_string(), "");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullTime {
    pub time: Time,
    pub valid: bool,
}

impl NullTime {
    /// The absent value: `valid` is `false`, the payload is the zero time.
    #[inline]
    pub const fn null() -> Self {
        Self {
            time: Time::new(0, 0, 0),
            valid: false,
        }
    }

    /// Parse like [`str::parse`], panicking on malformed input.
    ///
    /// The empty string and `"null"` are valid inputs (the absent value);
    /// only inputs that fail the underlying [`Time`] parse panic. For
    /// trusted literals only, as with [`Time::must_parse`].
    ///
    /// # Panics
    ///
    /// Panics if `text` is neither an absence sentinel nor a valid time.
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        match text.parse() {
            Ok(time) => time,
            Err(err) => panic!("must_parse({text:?}): {err}"),
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<Time> for NullTime {
    #[inline]
    fn from(time: Time) -> Self {
        Self { time, valid: true }
    }
}

impl From<Option<Time>> for NullTime {
    #[inline]
    fn from(time: Option<Time>) -> Self {
        match time {
            Some(time) => time.into(),
            None => Self::null(),
        }
    }
}

impl From<NullTime> for Option<Time> {
    #[inline]
    fn from(time: NullTime) -> Self {
        time.valid.then_some(time.time)
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────

impl FromStr for NullTime {
    type Err = FormatError;

    /// Parse the canonical text form, treating `""` and `"null"` as the
    /// absent value. Anything else is delegated to [`Time`]'s parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "null" {
            return Ok(Self::null());
        }
        Ok(Self {
            time: s.parse()?,
            valid: true,
        })
    }
}

// ── Formatting ────────────────────────────────────────────────────────────

impl fmt::Display for NullTime {
    /// The absent value formats as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            self.time.fmt(f)
        } else {
            Ok(())
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for NullTime {
    /// The absent value serializes as `null`, a present one as the
    /// canonical quoted string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            serializer.collect_str(&self.time)
        } else {
            serializer.serialize_none()
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for NullTime {
    /// Accepts `null` or a string. The inner string goes through the
    /// [`FromStr`] path, so `""` and `"null"` also deserialize as the
    /// absent value.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => text.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::null()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
