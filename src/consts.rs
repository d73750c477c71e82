/// Minimum valid year (inclusive), the spreadsheet epoch
pub const MIN_YEAR: u16 = 1900;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Length of the longest month
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Serial number of 1 January 1900. Serial 1 is reserved, as in spreadsheets.
pub const SERIAL_LOWER_BOUND: u32 = 2;
/// Serial number of 31 December 9999
pub const SERIAL_UPPER_BOUND: u32 = 2_958_465;

/// Days in a common year
pub const DAYS_IN_YEAR: u32 = 365;
/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Days elapsed by the end of each month in a common year.
/// Index 0 is the start of the year, so `[m - 1]` is the offset before month `m`.
pub const CUMULATIVE_DAYS: [u16; 13] = [
    0,   // start of year
    31,  // January
    59,  // February
    90,  // March
    120, // April
    151, // May
    181, // June
    212, // July
    243, // August
    273, // September
    304, // October
    334, // November
    365, // December
];

/// Days elapsed by the end of each month in a leap year
pub const LEAP_CUMULATIVE_DAYS: [u16; 13] = [
    0,   // start of year
    31,  // January
    60,  // February
    91,  // March
    121, // April
    152, // May
    182, // June
    213, // July
    244, // August
    274, // September
    305, // October
    335, // November
    366, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
