mod annotated;
mod arith;
mod consts;
mod names;
mod prelude;
mod range;
pub mod serial;
mod types;
mod weekday;

#[cfg(test)]
mod test_utils;

pub use annotated::AnnotatedDate;
pub use consts::*;
pub use names::DateNames;
pub use range::{DateRange, Include, RangeError};
pub use types::{Day, Month, Year, is_leap_year, last_day_of_month, leap_year_count};
pub use weekday::{Relative, WeekInMonth, Weekday};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::num::{NonZeroU8, NonZeroU16};
use std::str::FromStr;

/// A proleptic Gregorian date between 1900-01-01 and 9999-12-31.
///
/// The serial number and the `(day, month, year)` triple are both stored and
/// always describe the same day. Values are ordered by serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    serial: u32,
    year:   Year,
    month:  Month,
    day:    Day,
}

/// Broad classification of a [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A year, month, day or serial falls outside the supported calendar.
    OutOfRange,
    /// A weekday, week-in-month, include or relative code is not recognised.
    InvalidArgument,
    /// Text could not be read as a date.
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },
    #[error("Serial {0} out of range (must be {min}-{max})", min = SERIAL_LOWER_BOUND, max = SERIAL_UPPER_BOUND)]
    SerialOutOfRange(i64),
    #[error("Invalid day-of-the-week code: {0}")]
    InvalidWeekday(u8),
    #[error("Invalid week-in-month code: {0}")]
    InvalidWeekInMonth(u8),
    #[error("Invalid range inclusion code: {0}")]
    InvalidInclude(u8),
    #[error("Invalid relative position code: {0}")]
    InvalidRelative(i8),
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}

impl DateError {
    /// Classifies this error as a range, argument or parse failure
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYear(_)
            | Self::InvalidMonth(_)
            | Self::InvalidDay { .. }
            | Self::SerialOutOfRange(_) => ErrorKind::OutOfRange,
            Self::InvalidWeekday(_)
            | Self::InvalidWeekInMonth(_)
            | Self::InvalidInclude(_)
            | Self::InvalidRelative(_) => ErrorKind::InvalidArgument,
            Self::InvalidFormat(_) | Self::EmptyInput => ErrorKind::Parse,
        }
    }
}

// Lets typed codes flow through the same `TryInto` bounds as raw integers.
impl From<Infallible> for DateError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl CalendarDate {
    /// Earliest supported date, 1 January 1900
    pub const MIN: Self = Self::from_parts_unchecked(SERIAL_LOWER_BOUND, MIN_YEAR, JANUARY, MIN_DAY);
    /// Latest supported date, 31 December 9999
    pub const MAX: Self = Self::from_parts_unchecked(SERIAL_UPPER_BOUND, MAX_YEAR, DECEMBER, MAX_DAY);

    /// Creates a date from a `(day, month, year)` triple.
    ///
    /// # Errors
    /// Returns an `OutOfRange` error if any component is outside the supported
    /// calendar or the day exceeds the length of its month.
    pub fn from_dmy(day: u8, month: u8, year: u16) -> Result<Self, DateError> {
        let (day, month, year) = serial::validate(day, month, year)?;
        Ok(Self::from_checked(day, month, year))
    }

    /// Creates a date from typed components, checking the day against its month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of `month` in `year`.
    pub fn from_typed(day: Day, month: Month, year: Year) -> Result<Self, DateError> {
        let day = Day::new(day.get(), month, year)?;
        Ok(Self::from_checked(day, month, year))
    }

    /// Components must already be checked against each other
    pub(crate) const fn from_checked(day: Day, month: Month, year: Year) -> Self {
        Self {
            serial: serial::serial_of(day, month, year),
            year,
            month,
            day,
        }
    }

    /// Creates a date from its serial number.
    ///
    /// # Errors
    /// Returns `DateError::SerialOutOfRange` outside `SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND`.
    pub fn from_serial(serial: u32) -> Result<Self, DateError> {
        let (day, month, year) = serial::decode(serial)?;
        Ok(Self {
            serial,
            year,
            month,
            day,
        })
    }

    /// Signed variant of [`CalendarDate::from_serial`] for the results of arithmetic.
    pub(crate) fn from_serial_i64(serial: i64) -> Result<Self, DateError> {
        let serial = u32::try_from(serial).map_err(|_| DateError::SerialOutOfRange(serial))?;
        Self::from_serial(serial)
    }

    /// Builds a bound constant; every component must be non-zero.
    const fn from_parts_unchecked(serial: u32, year: u16, month: u8, day: u8) -> Self {
        Self {
            serial,
            year: Year::from_raw(NonZeroU16::MIN.saturating_add(year - 1)),
            month: Month::from_raw(NonZeroU8::MIN.saturating_add(month - 1)),
            day: Day::from_raw(NonZeroU8::MIN.saturating_add(day - 1)),
        }
    }

    /// Serial day number; 2 is 1 January 1900
    #[inline]
    pub const fn to_serial(&self) -> u32 {
        self.serial
    }

    /// Returns the year (1900..=9999)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the packed `(day, month, year)` triple
    pub const fn to_dmy(&self) -> (u8, u8, u16) {
        (self.day(), self.month(), self.year())
    }

    /// Day of the week as a code in `0..=6`, Sunday being 0.
    pub const fn day_of_week_code(&self) -> u8 {
        // Serial 2 was a Monday
        ((self.serial + 6) % DAYS_IN_WEEK as u32) as u8
    }

    /// Day of the week
    pub const fn day_of_week(&self) -> Weekday {
        Weekday::from_code_wrapping(self.day_of_week_code())
    }

    /// Number of days from `other` to `self`; positive when `self` is later.
    pub const fn compare(&self, other: &Self) -> i64 {
        self.serial as i64 - other.serial as i64
    }

    /// Same day as `other`
    pub const fn is_on(&self, other: &Self) -> bool {
        self.serial == other.serial
    }

    /// Strictly earlier than `other`
    pub const fn is_before(&self, other: &Self) -> bool {
        self.serial < other.serial
    }

    /// Same day as or earlier than `other`
    pub const fn is_on_or_before(&self, other: &Self) -> bool {
        self.serial <= other.serial
    }

    /// Strictly later than `other`
    pub const fn is_after(&self, other: &Self) -> bool {
        self.serial > other.serial
    }

    /// Same day as or later than `other`
    pub const fn is_on_or_after(&self, other: &Self) -> bool {
        self.serial >= other.serial
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serial.cmp(&other.serial)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses an ISO 8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_component::<u16>(year)?;
                let month = Self::parse_component::<u8>(month)?;
                let day = Self::parse_component::<u8>(day)?;
                Self::from_dmy(day, month, year)
            },
            _ => Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {s}",
                parts.len()
            ))),
        }
    }
}

impl CalendarDate {
    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u8, u8, u16)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (u8, u8, u16)) -> Result<Self, Self::Error> {
        Self::from_dmy(value.0, value.1, value.2)
    }
}

impl TryFrom<u32> for CalendarDate {
    type Error = DateError;

    fn try_from(serial: u32) -> Result<Self, Self::Error> {
        Self::from_serial(serial)
    }
}

impl From<CalendarDate> for u32 {
    fn from(date: CalendarDate) -> Self {
        date.serial
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
