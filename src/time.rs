//! Calendar dates as seen by the almanac formula.
//!
//! The formula only needs the calendar fields of a date and its ordinal day within the
//! year. [`CalendarDay`] is the seam through which those are read, so callers can hand
//! in their own date type (or a chrono one with the `chrono` feature) without the
//! calculation ever deriving day-of-year itself.

use crate::{Error, Result};
use core::fmt;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone};

/// Days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date that exposes its calendar fields and 1-based ordinal day.
pub trait CalendarDay {
    /// Calendar year (proleptic Gregorian).
    fn year(&self) -> i32;
    /// Month of the year (1-12).
    fn month(&self) -> u32;
    /// Day of the month (1-31).
    fn day(&self) -> u32;
    /// Day of the year, starting at 1 for January 1st (365 or 366 in leap years).
    fn ordinal(&self) -> u32;
}

/// A validated Gregorian calendar date with its precomputed ordinal day.
///
/// # Example
/// ```
/// # use sun_times::time::{CalendarDate, CalendarDay};
/// let date = CalendarDate::new(2024, 3, 1).unwrap();
/// assert_eq!(date.ordinal(), 61); // 2024 is a leap year
/// assert_eq!(date.to_string(), "2024-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    ordinal: u32,
}

impl CalendarDate {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in
    /// that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }

        Ok(Self {
            year,
            month,
            day,
            ordinal: ordinal_of(year, month, day),
        })
    }

    /// Creates a date from a year and its 1-based ordinal day.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the ordinal is 0 or past the end of the year.
    ///
    /// # Example
    /// ```
    /// # use sun_times::time::CalendarDate;
    /// let date = CalendarDate::from_ordinal(2023, 365).unwrap();
    /// assert_eq!(date, CalendarDate::new(2023, 12, 31).unwrap());
    /// assert!(CalendarDate::from_ordinal(2023, 366).is_err());
    /// ```
    pub fn from_ordinal(year: i32, ordinal: u32) -> Result<Self> {
        if ordinal == 0 || ordinal > days_in_year(year) {
            return Err(Error::invalid_date("ordinal day is out of range for year"));
        }

        let mut month = 12;
        while ordinal <= days_before_month(year, month) {
            month -= 1;
        }
        let day = ordinal - days_before_month(year, month);

        Ok(Self {
            year,
            month,
            day,
            ordinal,
        })
    }

    /// Copies the calendar fields of any [`CalendarDay`] as reported by it.
    #[must_use]
    pub fn of<D: CalendarDay + ?Sized>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            ordinal: date.ordinal(),
        }
    }

    /// Converts to a chrono `NaiveDate`.
    ///
    /// # Errors
    /// Returns `InvalidDate` if chrono cannot represent the date.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Result<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(Error::invalid_date("date is outside the range supported by chrono"))
    }
}

impl CalendarDay for CalendarDate {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u32 {
        self.month
    }

    fn day(&self) -> u32 {
        self.day
    }

    fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::of(&date)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDay for chrono::NaiveDate {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn ordinal(&self) -> u32 {
        Datelike::ordinal(self)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDay for chrono::NaiveDateTime {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn ordinal(&self) -> u32 {
        Datelike::ordinal(self)
    }
}

/// Reads the local calendar fields of the datetime; no timezone conversion is applied.
#[cfg(feature = "chrono")]
impl<Tz: TimeZone> CalendarDay for chrono::DateTime<Tz> {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    fn ordinal(&self) -> u32 {
        Datelike::ordinal(self)
    }
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given year (365 or 366).
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Month is expected to be in 1..=12.
const fn days_before_month(year: i32, month: u32) -> u32 {
    let leap_day = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_day
}

const fn ordinal_of(year: i32, month: u32, day: u32) -> u32 {
    days_before_month(year, month) + day
}
