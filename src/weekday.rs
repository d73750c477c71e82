use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DAYS_IN_WEEK, DateError, Day, MIN_DAY, Month, Year, last_day_of_month, prelude::*};

/// Day of the week, coded `0..=6` from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday    = 0,
    Monday    = 1,
    Tuesday   = 2,
    Wednesday = 3,
    Thursday  = 4,
    Friday    = 5,
    Saturday  = 6,
}

impl Weekday {
    /// All weekdays in code order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday code (0..=6)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_code_wrapping(code: u8) -> Self {
        Self::ALL[(code % DAYS_IN_WEEK) as usize]
    }

    /// Whether `code` names a weekday
    pub const fn is_valid_code(code: u8) -> bool {
        code < DAYS_IN_WEEK
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if !Self::is_valid_code(code) {
            return Err(DateError::InvalidWeekday(code));
        }
        Ok(Self::from_code_wrapping(code))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.code()
    }
}

/// Which occurrence of a weekday to look for relative to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum Relative {
    Preceding = -1,
    Nearest   = 0,
    Following = 1,
}

impl TryFrom<i8> for Relative {
    type Error = DateError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Preceding),
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Following),
            _ => Err(DateError::InvalidRelative(code)),
        }
    }
}

impl From<Relative> for i8 {
    fn from(relative: Relative) -> Self {
        relative as Self
    }
}

/// Occurrence of a weekday within a month. `Last` is coded 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum WeekInMonth {
    Last   = 0,
    First  = 1,
    Second = 2,
    Third  = 3,
    Fourth = 4,
}

impl TryFrom<u8> for WeekInMonth {
    type Error = DateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Last),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            _ => Err(DateError::InvalidWeekInMonth(code)),
        }
    }
}

impl From<WeekInMonth> for u8 {
    fn from(week: WeekInMonth) -> Self {
        week as Self
    }
}

const WEEK: i32 = DAYS_IN_WEEK as i32;

impl CalendarDate {
    /// Latest `target` weekday strictly before this date.
    ///
    /// `target` may be a [`Weekday`] or a raw code.
    ///
    /// # Errors
    /// `DateError::InvalidWeekday` for a bad code, or an out-of-range error
    /// when the result would precede 1900-01-01.
    pub fn previous_day_of_week<W>(&self, target: W) -> Result<Self, DateError>
    where
        W: TryInto<Weekday>,
        DateError: From<W::Error>,
    {
        let (base, target) = self.weekday_codes(target)?;
        let adjust = if base > target {
            (target - base).min(0)
        } else {
            -WEEK + (target - base).max(0)
        };
        self.add_days(adjust)
    }

    /// Earliest `target` weekday on or after this date.
    ///
    /// When this date already falls on `target` it is returned unchanged; see
    /// [`CalendarDate::next_day_of_week`] for a strictly later result.
    ///
    /// # Errors
    /// `DateError::InvalidWeekday` for a bad code, or an out-of-range error
    /// when the result would follow 9999-12-31.
    pub fn following_day_of_week<W>(&self, target: W) -> Result<Self, DateError>
    where
        W: TryInto<Weekday>,
        DateError: From<W::Error>,
    {
        let (base, target) = self.weekday_codes(target)?;
        self.add_days(Self::following_shift(base, target))
    }

    /// Earliest `target` weekday strictly after this date.
    ///
    /// # Errors
    /// Same as [`CalendarDate::following_day_of_week`].
    pub fn next_day_of_week<W>(&self, target: W) -> Result<Self, DateError>
    where
        W: TryInto<Weekday>,
        DateError: From<W::Error>,
    {
        let (base, target) = self.weekday_codes(target)?;
        match Self::following_shift(base, target) {
            0 => self.add_days(WEEK),
            shift => self.add_days(shift),
        }
    }

    /// The `target` weekday closest to this date, at most three days away.
    ///
    /// # Errors
    /// `DateError::InvalidWeekday` for a bad code, or an out-of-range error
    /// at the ends of the supported calendar.
    pub fn nearest_day_of_week<W>(&self, target: W) -> Result<Self, DateError>
    where
        W: TryInto<Weekday>,
        DateError: From<W::Error>,
    {
        let (base, target) = self.weekday_codes(target)?;
        let mut adjust = target - base;
        if adjust > WEEK / 2 {
            adjust -= WEEK;
        } else if adjust < -(WEEK / 2) {
            adjust += WEEK;
        }
        self.add_days(adjust)
    }

    /// Dispatches to the preceding, nearest or following search.
    ///
    /// # Errors
    /// See the individual searches.
    pub fn day_of_week_relative<W>(&self, relative: Relative, target: W) -> Result<Self, DateError>
    where
        W: TryInto<Weekday>,
        DateError: From<W::Error>,
    {
        match relative {
            Relative::Preceding => self.previous_day_of_week(target),
            Relative::Nearest => self.nearest_day_of_week(target),
            Relative::Following => self.following_day_of_week(target),
        }
    }

    /// The first to fourth, or last, `weekday` of a month.
    ///
    /// # Errors
    /// Only fails if the computed day does not exist, which valid inputs rule out.
    pub fn weekday_in_month(
        week: WeekInMonth,
        weekday: Weekday,
        month: Month,
        year: Year,
    ) -> Result<Self, DateError> {
        let first = Self::from_checked(Day::new(MIN_DAY, month, year)?, month, year);
        let day = match week {
            WeekInMonth::Last => {
                let last_day = last_day_of_month(month, year.get());
                let last = Self::from_checked(Day::new(last_day, month, year)?, month, year);
                let back = (i32::from(last.day_of_week_code()) - i32::from(weekday.code())).rem_euclid(WEEK);
                i32::from(last_day) - back
            },
            nth => {
                let ahead = (i32::from(weekday.code()) - i32::from(first.day_of_week_code())).rem_euclid(WEEK);
                i32::from(MIN_DAY) + ahead + WEEK * (i32::from(u8::from(nth)) - 1)
            },
        };
        let day = u8::try_from(day).map_err(|_| DateError::InvalidDay {
            day: 0,
            month: month.get(),
            year: year.get(),
        })?;
        Ok(Self::from_checked(Day::new(day, month, year)?, month, year))
    }

    fn weekday_codes<W>(&self, target: W) -> Result<(i32, i32), DateError>
    where
        W: TryInto<Weekday>,
        DateError: From<W::Error>,
    {
        let target: Weekday = target.try_into()?;
        Ok((i32::from(self.day_of_week_code()), i32::from(target.code())))
    }

    const fn following_shift(base: i32, target: i32) -> i32 {
        if base > target {
            WEEK + (target - base)
        } else {
            target - base
        }
    }
}
