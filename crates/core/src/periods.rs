//! Monthly period keys.
//!
//! A [`Period`] identifies the calendar month a snapshot belongs to. Its
//! canonical text form is `MM/YYYY` with a zero-padded month, which is also
//! how it is persisted and exchanged over the API. Ordering is chronological
//! (year first, then month) rather than lexicographic on the canonical
//! string, so series spanning year boundaries sort correctly.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised while parsing or validating a period key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid period '{0}': expected MM/YYYY")]
    Malformed(String),

    #[error("Period '{0}' is out of range: month must be 01-12 and year 2000-2099")]
    OutOfRange(String),
}

/// A calendar month key.
///
/// `Ord` compares `(year, month)`, i.e. chronologically. The field order
/// matters for the derived implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Period { year, month }
    }

    /// Parses a `<month>/<year>` string into a period, normalizing the
    /// month to its canonical zero-padded form.
    ///
    /// Surrounding whitespace is tolerated and the month may have one or
    /// two digits. Range checks are deliberately not applied here; callers
    /// on the create path use [`Period::is_valid`] for that.
    pub fn parse(raw: &str) -> std::result::Result<Period, PeriodError> {
        let trimmed = raw.trim();
        let (month_part, year_part) = trimmed
            .split_once('/')
            .ok_or_else(|| PeriodError::Malformed(trimmed.to_string()))?;
        let month = month_part
            .trim()
            .parse::<u32>()
            .map_err(|_| PeriodError::Malformed(trimmed.to_string()))?;
        let year = year_part
            .trim()
            .parse::<i32>()
            .map_err(|_| PeriodError::Malformed(trimmed.to_string()))?;
        Ok(Period { year, month })
    }

    /// True iff the period falls in the accepted range: month 01-12 and a
    /// four-digit year beginning with "20".
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && (2000..=2099).contains(&self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Period::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Period::parse(&raw).map_err(de::Error::custom)
    }
}
