// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! SQL driver scan/value protocol.
//!
//! Database drivers hand column values to applications as one of a small,
//! closed set of shapes. [`SqlValueRef`] models that set as a tagged union;
//! [`Time::from_sql`] and [`NullTime::from_sql`] dispatch over it, and
//! [`Time::to_sql`] / [`NullTime::to_sql`] produce the owned [`SqlValue`]
//! handed back to the driver — always formatted text, or an explicit null
//! for an absent [`NullTime`], never a numeric or native date-time value.
//!
//! With the `rusqlite` feature enabled both types additionally implement
//! `rusqlite::types::FromSql` and `rusqlite::types::ToSql`, so they can be
//! bound and read directly as statement parameters and columns.

use chrono::NaiveDateTime;

use crate::error::ScanError;
use crate::null::NullTime;
use crate::time::Time;

// ═══════════════════════════════════════════════════════════════════════════
// Driver values
// ═══════════════════════════════════════════════════════════════════════════

/// A borrowed column value as produced by a SQL driver.
///
/// | Variant | `Time::from_sql` | `NullTime::from_sql` |
/// |---|---|---|
/// | `Text` | text parse | absent when `""` or `"null"`, else text parse |
/// | `Bytes` | text parse (lossy UTF-8) | absent when empty, else as `Time` |
/// | `DateTime` | clock components | as `Time` |
/// | `Null` | unsupported | absent |
/// | `Integer`, `Real` | unsupported | unsupported |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlValueRef<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'a str),
    Bytes(&'a [u8]),
    DateTime(NaiveDateTime),
}

impl SqlValueRef<'_> {
    /// The variant name used in [`ScanError::UnsupportedType`].
    pub const fn type_name(&self) -> &'static str {
        match self {
            SqlValueRef::Null => "null",
            SqlValueRef::Integer(_) => "integer",
            SqlValueRef::Real(_) => "real",
            SqlValueRef::Text(_) => "text",
            SqlValueRef::Bytes(_) => "bytes",
            SqlValueRef::DateTime(_) => "datetime",
        }
    }
}

impl<'a> From<&'a str> for SqlValueRef<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        SqlValueRef::Text(text)
    }
}

impl<'a> From<&'a [u8]> for SqlValueRef<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        SqlValueRef::Bytes(bytes)
    }
}

impl From<NaiveDateTime> for SqlValueRef<'_> {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        SqlValueRef::DateTime(datetime)
    }
}

/// An owned column value handed back to a SQL driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Text(String),
}

impl SqlValue {
    /// `true` for [`SqlValue::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// The text payload, or `None` for [`SqlValue::Null`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Null => None,
            SqlValue::Text(text) => Some(text),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Scan / value
// ═══════════════════════════════════════════════════════════════════════════

impl Time {
    /// Decode a driver value.
    ///
    /// Text and byte values go through the text parser; byte values are
    /// converted lossily first, so invalid UTF-8 surfaces as the format
    /// error of the failing segment. A native date-time contributes its
    /// clock components, ignoring date and sub-second fields. Everything
    /// else is rejected with [`ScanError::UnsupportedType`].
    pub fn from_sql(value: SqlValueRef<'_>) -> Result<Self, ScanError> {
        match value {
            SqlValueRef::Text(text) => Ok(text.parse()?),
            SqlValueRef::Bytes(bytes) => Ok(String::from_utf8_lossy(bytes).parse()?),
            SqlValueRef::DateTime(datetime) => Ok(datetime.into()),
            other => Err(ScanError::UnsupportedType(other.type_name())),
        }
    }

    /// Encode as a driver value: always the canonical text form.
    #[inline]
    pub fn to_sql(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl NullTime {
    /// Decode a driver value, mapping representations of absence to the
    /// null state.
    ///
    /// `Null`, an empty byte value, and the strings `""` and `"null"` all
    /// decode as absent. Everything else delegates to [`Time::from_sql`].
    /// Byte values equal to `null` are *not* an absence sentinel; they fail
    /// the text parse like any other non-time bytes.
    pub fn from_sql(value: SqlValueRef<'_>) -> Result<Self, ScanError> {
        match value {
            SqlValueRef::Null => Ok(Self::null()),
            SqlValueRef::Text("") | SqlValueRef::Text("null") => Ok(Self::null()),
            SqlValueRef::Bytes(b) if b.is_empty() => Ok(Self::null()),
            other => Ok(Self {
                time: Time::from_sql(other)?,
                valid: true,
            }),
        }
    }

    /// Encode as a driver value: an explicit null when absent, otherwise
    /// the canonical text form.
    #[inline]
    pub fn to_sql(&self) -> SqlValue {
        if self.valid {
            self.time.to_sql()
        } else {
            SqlValue::Null
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// rusqlite bindings
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "rusqlite")]
mod sqlite {
    use rusqlite::types::{
        FromSql, FromSqlError, FromSqlResult, Null, ToSql, ToSqlOutput, ValueRef,
    };

    use super::{NullTime, SqlValueRef, Time};

    /// SQLite TEXT cells must be valid UTF-8 to count as strings; BLOB
    /// cells stay raw bytes, keeping the string-only `"null"` sentinel
    /// behavior intact.
    fn decode(value: ValueRef<'_>) -> FromSqlResult<SqlValueRef<'_>> {
        Ok(match value {
            ValueRef::Null => SqlValueRef::Null,
            ValueRef::Integer(i) => SqlValueRef::Integer(i),
            ValueRef::Real(r) => SqlValueRef::Real(r),
            ValueRef::Text(t) => SqlValueRef::Text(
                std::str::from_utf8(t).map_err(|err| FromSqlError::Other(Box::new(err)))?,
            ),
            ValueRef::Blob(b) => SqlValueRef::Bytes(b),
        })
    }

    impl FromSql for Time {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            Time::from_sql(decode(value)?).map_err(|err| FromSqlError::Other(Box::new(err)))
        }
    }

    impl FromSql for NullTime {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            NullTime::from_sql(decode(value)?).map_err(|err| FromSqlError::Other(Box::new(err)))
        }
    }

    impl ToSql for Time {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(self.to_string().into())
        }
    }

    impl ToSql for NullTime {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            if self.valid {
                Ok(self.time.to_string().into())
            } else {
                Ok(Null.into())
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════


#[cfg(all(test, feature = "rusqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;

    use super::*;

    #[test]
    fn test_sqlite_roundtrip() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE shifts (starts_at TEXT, ends_at TEXT)", [])
            .unwrap();
        conn.execute(
            "INSERT INTO shifts (starts_at, ends_at) VALUES (?1, ?2)",
            rusqlite::params![Time::must_parse("09:30"), NullTime::null()],
        )
        .unwrap();

        let (starts_at, ends_at): (Time, NullTime) = conn
            .query_row("SELECT starts_at, ends_at FROM shifts", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();

        assert_eq!(starts_at, Time::must_parse("09:30"));
        assert!(!ends_at.valid);
    }

    #[test]
    fn test_sqlite_text_sentinels_scan_as_absent() {
        let conn = Connection::open_in_memory().unwrap();
        for sentinel in ["''", "'null'"] {
            let time: NullTime = conn
                .query_row(&format!("SELECT {sentinel}"), [], |row| row.get(0))
                .unwrap();
            assert!(!time.valid, "sentinel {sentinel}");
        }
    }

    #[test]
    fn test_sqlite_rejects_numeric_columns() {
        let conn = Connection::open_in_memory().unwrap();
        let result: Result<Time, _> = conn.query_row("SELECT 42", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
