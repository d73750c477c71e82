//! Day, month and year arithmetic.
//!
//! Month and year steps keep the day of the month where possible and clamp it
//! to the last day of the target month otherwise, so 31 May plus one month is
//! 30 June.

use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::{CalendarDate, DateError, Day, Month, Year, last_day_of_month};

impl CalendarDate {
    /// Moves by `days`, which may be negative.
    ///
    /// # Errors
    /// Returns `DateError::SerialOutOfRange` if the result leaves the supported calendar.
    pub fn add_days(&self, days: i32) -> Result<Self, DateError> {
        Self::from_serial_i64(i64::from(self.to_serial()) + i64::from(days))
    }

    /// Moves by `months`, clamping the day to the length of the target month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year is unsupported.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let months_per_year = i64::from(MAX_MONTH);
        let index = i64::from(self.year()) * months_per_year + i64::from(self.month()) - 1 + i64::from(months);
        let year = year_in_range(index.div_euclid(months_per_year))?;
        // Remainder lies in 0..12
        let month = Month::new(index.rem_euclid(months_per_year) as u8 + 1)?;
        self.with_clamped_day(month, year)
    }

    /// Moves by `years`; 29 February becomes 28 February in a common year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year is unsupported.
    pub fn add_years(&self, years: i32) -> Result<Self, DateError> {
        let year = year_in_range(i64::from(self.year()) + i64::from(years))?;
        self.with_clamped_day(self.month_typed(), year)
    }

    /// Last day of this date's month
    pub fn end_of_month(&self) -> Self {
        let month = self.month_typed();
        let year = self.year_typed();
        Self::from_checked(Day::last_of(month, year), month, year)
    }

    fn with_clamped_day(&self, month: Month, year: Year) -> Result<Self, DateError> {
        let last = last_day_of_month(month, year.get());
        let day = self.day().min(last);
        #[cfg(feature = "log")]
        if day != self.day() {
            log::debug!(
                "Clamped day {} to {day} moving {} to {year}-{:02}",
                self.day(),
                self,
                month.get()
            );
        }
        Ok(Self::from_checked(Day::new(day, month, year)?, month, year))
    }
}

fn year_in_range(year: i64) -> Result<Year, DateError> {
    if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        let reported = u16::try_from(year).unwrap_or(if year < 0 { 0 } else { u16::MAX });
        return Err(DateError::InvalidYear(reported));
    }
    // Checked above, so the narrowing is lossless
    Year::new(year as u16)
}
