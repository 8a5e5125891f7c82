// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time-of-day primitives.
//!
//! This crate provides a compact time-of-day value — hours, minutes,
//! seconds, with no calendar date and no timezone — and a nullable variant,
//! both able to round-trip through text, JSON, and the SQL scan/value
//! protocol.
//!
//! # Core types
//!
//! - [`Time`] — an hours/minutes/seconds triple with the canonical
//!   `HH:MM[:SS]` text form.
//! - [`NullTime`] — a `Time` plus a validity flag; "empty" and "null"-ish
//!   inputs across every protocol become the absent value instead of a
//!   parse error.
//! - [`SqlValueRef`] / [`SqlValue`] — the closed set of driver column
//!   values the SQL protocol dispatches over.
//! - [`FormatError`] / [`ScanError`] — the two recoverable failure modes.
//!
//! # Protocols
//!
//! | Protocol | In | Out |
//! |----------|----|-----|
//! | Text | [`str::parse`] | [`ToString::to_string`] |
//! | JSON (`serde` feature) | `Deserialize` | `Serialize`, always a quoted string or `null` |
//! | SQL scan | [`Time::from_sql`] / [`NullTime::from_sql`] | — |
//! | SQL value | — | [`Time::to_sql`] / [`NullTime::to_sql`] |
//!
//! # Example
//!
//! ```
//! use daytime::{NullTime, Time};
//!
//! let open = Time::must_parse("09:30");
//! assert_eq!(open.to_string(), "09:30");
//!
//! let close: NullTime = "".parse().unwrap();
//! assert!(!close.valid);
//! assert!(close.to_sql().is_null());
//! ```
//!
//! # Features
//!
//! - `serde` (default) — JSON via manual `Serialize`/`Deserialize` impls.
//! - `rusqlite` — `FromSql`/`ToSql` bindings for SQLite columns and
//!   statement parameters.

mod error;
mod null;
mod sql;
mod time;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{FormatError, ScanError};
pub use null::NullTime;
pub use sql::{SqlValue, SqlValueRef};
pub use time::Time;
