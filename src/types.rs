use crate::consts::{
    CENTURY_CYCLE, CUMULATIVE_DAYS, GREGORIAN_CYCLE, LEAP_CUMULATIVE_DAYS, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1900..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is outside the supported range.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub(crate) const fn from_raw(value: NonZeroU16) -> Self {
        Self(value)
    }

    /// Whether this year has a 29th of February
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub(crate) const fn from_raw(value: NonZeroU8) -> Self {
        Self(value)
    }

    /// Quarter of the year this month falls in (1..=4)
    #[inline]
    pub const fn quarter(self) -> u8 {
        (self.get() - 1) / 3 + 1
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits the given month of the given year
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, month: Month, year: Year) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            day: value,
            month: month.get(),
            year: year.get(),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > last_day_of_month(month, year.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_raw(value: NonZeroU8) -> Self {
        Self(value)
    }

    /// Last day of `month` in `year`
    pub const fn last_of(month: Month, year: Year) -> Self {
        // Month lengths are never zero
        Self(NonZeroU8::MIN.saturating_add(last_day_of_month(month, year.get()) - 1))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the lower bound and the longest month apply
        if value < MIN_DAY || value > MAX_DAY {
            return Err(DateError::InvalidDay {
                day: value,
                month: 0,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month: 0,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of leap years in `MIN_YEAR..=year`; zero for years before `MIN_YEAR`.
pub const fn leap_year_count(year: u16) -> u32 {
    const fn leaps_since_year_zero(year: u32) -> u32 {
        year / LEAP_YEAR_CYCLE as u32 - year / CENTURY_CYCLE as u32 + year / GREGORIAN_CYCLE as u32
    }

    if year < MIN_YEAR {
        return 0;
    }
    leaps_since_year_zero(year as u32) - leaps_since_year_zero(MIN_YEAR as u32)
}

/// Cumulative month table for the given year
#[inline]
pub(crate) const fn cumulative_days(year: u16) -> &'static [u16; 13] {
    if is_leap_year(year) {
        &LEAP_CUMULATIVE_DAYS
    } else {
        &CUMULATIVE_DAYS
    }
}

/// Number of days in `month` of `year`
pub const fn last_day_of_month(month: Month, year: u16) -> u8 {
    let table = cumulative_days(year);
    let m = month.get() as usize;
    (table[m] - table[m - 1]) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1900).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_before_epoch() {
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(1899), Err(DateError::InvalidYear(1899))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_display_and_into() {
        let y = year(2024);
        assert_eq!(y.to_string(), "2024");
        let value: u16 = y.into();
        assert_eq!(value, 2024);
        assert!(y.is_leap());
    }

    #[test]
    fn test_year_serde() {
        let y = year(2024);
        let json = serde_json::to_string(&y).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(y, parsed);

        assert!(serde_json::from_str::<Year>("1899").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_quarter() {
        let expected = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        for (m, quarter) in (1..=12).zip(expected) {
            assert_eq!(month(m).quarter(), quarter, "Month {m} has incorrect quarter");
        }
    }

    #[test]
    fn test_month_try_from_u8() {
        let m: Month = 8.try_into().unwrap();
        assert_eq!(m.get(), 8);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, month(1), year(2024)).is_ok());
        assert!(Day::new(31, month(1), year(2024)).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, month(2), year(2023)).is_ok());
        assert!(Day::new(29, month(2), year(2023)).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, month(2), year(2024)).is_ok());
        assert!(Day::new(30, month(2), year(2024)).is_err());

        // April - 30 days
        assert!(Day::new(30, month(4), year(2024)).is_ok());
        assert!(Day::new(31, month(4), year(2024)).is_err());
    }

    #[test]
    fn test_day_new_invalid_reports_context() {
        let result = Day::new(32, month(1), year(2024));
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                day: 32,
                month: 1,
                year: 2024
            })
        ));
        assert!(matches!(
            Day::new(0, month(1), year(2024)),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_day_last_of() {
        assert_eq!(Day::last_of(month(2), year(1900)).get(), 28);
        assert_eq!(Day::last_of(month(2), year(2000)).get(), 29);
        assert_eq!(Day::last_of(month(9), year(2023)).get(), 30);
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(32).is_err());
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, month(8), year(2024)).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1996,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1997,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_leap_year_count_matches_predicate() {
        let mut count = 0;
        for y in MIN_YEAR..=MAX_YEAR {
            if is_leap_year(y) {
                count += 1;
            }
            assert_eq!(leap_year_count(y), count, "Leap year count through {y}");
        }
    }

    #[test]
    fn test_leap_year_count_known_values() {
        assert_eq!(leap_year_count(1899), 0);
        assert_eq!(leap_year_count(1900), 0);
        assert_eq!(leap_year_count(1904), 1);
        assert_eq!(leap_year_count(2000), 25);
        assert_eq!(leap_year_count(9999), 1964);
    }

    #[test]
    fn test_last_day_of_month_31_day_months() {
        for m in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(last_day_of_month(month(m), 2024), 31, "Month {m} should have 31 days");
        }
    }

    #[test]
    fn test_last_day_of_month_30_day_months() {
        for m in [4, 6, 9, 11] {
            assert_eq!(last_day_of_month(month(m), 2024), 30, "Month {m} should have 30 days");
        }
    }

    #[test]
    fn test_last_day_of_month_february() {
        assert_eq!(last_day_of_month(month(2), 2023), 28);
        assert_eq!(last_day_of_month(month(2), 1900), 28, "Century year not divisible by 400");
        assert_eq!(last_day_of_month(month(2), 2024), 29);
        assert_eq!(last_day_of_month(month(2), 2000), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_last_day_of_month_needs_valid_month() {
        assert!(Month::new(0).is_err());
        assert!(Month::new(13).is_err());
        for m in 1..=MAX_MONTH {
            let last = last_day_of_month(month(m), 2024);
            assert!((28..=MAX_DAY).contains(&last), "Month {m} has {last} days");
        }
    }

    #[test]
    fn test_cumulative_tables_are_consistent() {
        let common: u16 = (1..=12).map(|m| u16::from(last_day_of_month(month(m), 2023))).sum();
        let leap: u16 = (1..=12).map(|m| u16::from(last_day_of_month(month(m), 2024))).sum();
        assert_eq!(common, CUMULATIVE_DAYS[12]);
        assert_eq!(leap, LEAP_CUMULATIVE_DAYS[12]);
    }
}
