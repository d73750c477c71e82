//! Month and weekday display names.
//!
//! Names are supplied by the caller rather than looked up from the process
//! locale; [`DateNames::english`] is provided as a starting point.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DATE_SEPARATOR, Month, Weekday};

/// Full and abbreviated names for months (January first) and weekdays (Sunday first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateNames {
    pub months:         [String; 12],
    pub short_months:   [String; 12],
    pub weekdays:       [String; 7],
    pub short_weekdays: [String; 7],
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl DateNames {
    /// English names, abbreviated to three letters
    pub fn english() -> Self {
        Self {
            months:         ENGLISH_MONTHS.map(str::to_owned),
            short_months:   ENGLISH_MONTHS.map(|name| name[..3].to_owned()),
            weekdays:       Weekday::ALL.map(|day| day.to_string()),
            short_weekdays: Weekday::ALL.map(|day| day.to_string()[..3].to_owned()),
        }
    }

    pub fn month_name(&self, month: Month, shortened: bool) -> &str {
        let names = if shortened { &self.short_months } else { &self.months };
        &names[usize::from(month.get() - 1)]
    }

    pub fn weekday_name(&self, weekday: Weekday, shortened: bool) -> &str {
        let names = if shortened {
            &self.short_weekdays
        } else {
            &self.weekdays
        };
        &names[usize::from(weekday.code())]
    }
}

impl Default for DateNames {
    fn default() -> Self {
        Self::english()
    }
}

impl CalendarDate {
    /// Formats as `day-MonthName-year`, e.g. `9-November-2001`.
    pub fn format_with(&self, names: &DateNames) -> String {
        format!(
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            self.day(),
            names.month_name(self.month_typed(), false),
            self.year()
        )
    }
}
