use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, RANGE_SEPARATOR, prelude::*};

/// Which ends of a span count as inside it.
///
/// Bounds are taken in date order, so `First` always means the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Include {
    None   = 0,
    First  = 1,
    Second = 2,
    #[default]
    Both   = 3,
}

impl Include {
    const fn includes_first(self) -> bool {
        matches!(self, Self::First | Self::Both)
    }

    const fn includes_second(self) -> bool {
        matches!(self, Self::Second | Self::Both)
    }
}

impl TryFrom<u8> for Include {
    type Error = DateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Both),
            _ => Err(DateError::InvalidInclude(code)),
        }
    }
}

impl From<Include> for u8 {
    fn from(include: Include) -> Self {
        include as Self
    }
}

/// Represents a span between two calendar dates.
/// The start date must be on or before the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error reading or validating one of the dates.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the range covered by two dates given in either order
    pub fn spanning(d1: CalendarDate, d2: CalendarDate) -> Self {
        Self {
            start: d1.min(d2),
            end:   d1.max(d2),
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Number of days in the range, counting both ends
    pub const fn len_days(&self) -> u32 {
        self.end.to_serial() - self.start.to_serial() + 1
    }

    /// Checks if the range contains a given date, with `include` deciding the ends
    pub const fn contains(&self, date: &CalendarDate, include: Include) -> bool {
        let after_start = if include.includes_first() {
            date.is_on_or_after(&self.start)
        } else {
            date.is_after(&self.start)
        };
        let before_end = if include.includes_second() {
            date.is_on_or_before(&self.end)
        } else {
            date.is_before(&self.end)
        };
        after_start && before_end
    }

    /// Checks if this range shares at least one day with another range
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start.is_on_or_before(&other.end) && other.start.is_on_or_before(&self.end)
    }

    /// Checks if this range is completely contained within another range
    pub const fn is_within(&self, other: &Self) -> bool {
        other.start.is_on_or_before(&self.start) && self.end.is_on_or_before(&other.end)
    }
}

impl CalendarDate {
    /// Whether this date lies between `d1` and `d2`, taken in either order.
    ///
    /// `include` decides whether the earlier and later bounds count.
    pub fn is_in_range(&self, d1: &CalendarDate, d2: &CalendarDate, include: Include) -> bool {
        DateRange::spanning(*d1, *d2).contains(self, include)
    }

    /// [`CalendarDate::is_in_range`] with both bounds included
    pub fn is_between(&self, d1: &CalendarDate, d2: &CalendarDate) -> bool {
        self.is_in_range(d1, d2, Include::Both)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<CalendarDate>()?;
                let end = end_str.trim().parse::<CalendarDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
