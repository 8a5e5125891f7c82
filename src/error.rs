// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for time-of-day parsing and SQL scanning.

use std::num::ParseIntError;
use thiserror::Error;

/// A segment of a `HH:MM[:SS]` string failed to parse as a base-10 integer.
///
/// Carries the offending segment verbatim so callers can report which part
/// of the input was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time segment {segment:?}: {source}")]
pub struct FormatError {
    pub(crate) segment: String,
    pub(crate) source: ParseIntError,
}

impl FormatError {
    /// The input segment that failed to parse.
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

/// Failure while scanning a SQL driver value.
///
/// Scanning either fails like a text parse ([`ScanError::Format`]) or
/// rejects a driver value whose variant carries no textual or date-time
/// representation at all ([`ScanError::UnsupportedType`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The value carried text, but the text was not a valid time.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The driver value variant cannot represent a time of day.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
}
