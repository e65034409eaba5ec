//! Position-range conversion for field `spec` strings.
//!
//! A spec is `"<start>,<end>"` with optional whitespace around each bound.
//! Bounds are passed through as written: no ordering check and no
//! non-negativity check. The downstream record mapper owns those rules.

use fwt_common::Error;
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Column offsets `(start, end)` a field occupies within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PositionRange {
    pub start: i64,
    pub end: i64,
}

impl PositionRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl From<PositionRange> for (i64, i64) {
    fn from(range: PositionRange) -> Self {
        (range.start, range.end)
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Why a spec string could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("must be comma separated, e.g. 1,2")]
    MissingComma,

    #[error("bound '{part}' is not an integer: {source}")]
    NotAnInteger {
        part: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for PositionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once(',').ok_or(RangeError::MissingComma)?;
        Ok(PositionRange {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }
}

fn parse_bound(part: &str) -> Result<i64, RangeError> {
    let trimmed = part.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| RangeError::NotAnInteger {
            part: trimmed.to_string(),
            source,
        })
}

/// Convert a spec string into a [`PositionRange`].
pub fn to_range(text: &str) -> fwt_common::Result<PositionRange> {
    text.parse().map_err(|e: RangeError| Error::InvalidRange {
        input: text.to_string(),
        reason: e.to_string(),
    })
}
