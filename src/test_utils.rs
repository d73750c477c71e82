//! Shorthand constructors for tests.

use crate::CalendarDate;

/// Builds a date from `(year, month, day)`, panicking on invalid input.
pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_dmy(day, month, year)
        .unwrap_or_else(|e| panic!("invalid test date {year}-{month:02}-{day:02}: {e}"))
}

/// Every date from `start` for `count` days.
pub fn days_from(start: CalendarDate, count: u32) -> impl Iterator<Item = CalendarDate> {
    (0..count).map(move |offset| {
        CalendarDate::from_serial(start.to_serial() + offset)
            .unwrap_or_else(|e| panic!("serial past the supported range: {e}"))
    })
}

