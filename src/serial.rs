//! Conversion between `(day, month, year)` triples and serial day numbers.
//!
//! Serial 2 is 1 January 1900 and serial 2958465 is 31 December 9999. Serial 1
//! is never produced, mirroring the spreadsheet numbering this encoding comes from.

use crate::consts::{DAYS_IN_YEAR, JANUARY, MIN_DAY, MIN_YEAR, SERIAL_LOWER_BOUND, SERIAL_UPPER_BOUND};
use crate::types::{Day, Month, Year, cumulative_days, leap_year_count};
use crate::DateError;

/// Serial of 1 January of `year`, without range checks.
const fn first_serial_of_year(year: u16) -> u32 {
    let years_elapsed = (year - MIN_YEAR) as u32;
    years_elapsed * DAYS_IN_YEAR + leap_year_count(year - 1) + SERIAL_LOWER_BOUND
}

/// Serial number of an already validated date.
pub(crate) const fn serial_of(day: Day, month: Month, year: Year) -> u32 {
    let table = cumulative_days(year.get());
    let days_before_month = table[month.get() as usize - 1] as u32;
    first_serial_of_year(year.get()) + days_before_month + day.get() as u32 - 1
}

/// Converts a calendar date to its serial number.
///
/// # Errors
/// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` when the
/// triple is not a date in 1900-01-01..=9999-12-31.
pub fn to_serial(day: u8, month: u8, year: u16) -> Result<u32, DateError> {
    let (day, month, year) = validate(day, month, year)?;
    Ok(serial_of(day, month, year))
}

/// Converts a serial number back to its `(day, month, year)` triple.
///
/// # Errors
/// Returns `DateError::SerialOutOfRange` when `serial` is outside
/// `SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND`.
pub fn from_serial(serial: u32) -> Result<(u8, u8, u16), DateError> {
    let (day, month, year) = decode(serial)?;
    Ok((day.get(), month.get(), year.get()))
}

pub(crate) fn validate(day: u8, month: u8, year: u16) -> Result<(Day, Month, Year), DateError> {
    let year = Year::new(year)?;
    let month = Month::new(month)?;
    let day = Day::new(day, month, year)?;
    Ok((day, month, year))
}

pub(crate) fn decode(serial: u32) -> Result<(Day, Month, Year), DateError> {
    if !(SERIAL_LOWER_BOUND..=SERIAL_UPPER_BOUND).contains(&serial) {
        return Err(DateError::SerialOutOfRange(i64::from(serial)));
    }

    // Dividing by the leap-year length never overshoots, so only walk forward
    let days = serial - SERIAL_LOWER_BOUND;
    let mut year = MIN_YEAR + (days / (DAYS_IN_YEAR + 1)) as u16;
    while first_serial_of_year(year + 1) <= serial {
        year += 1;
    }

    let day_of_year = (serial - first_serial_of_year(year)) as u16;
    let table = cumulative_days(year);
    let mut month = JANUARY;
    while table[month as usize] <= day_of_year {
        month += 1;
    }
    let day = (day_of_year - table[month as usize - 1]) as u8 + MIN_DAY;

    validate(day, month, year)
}
