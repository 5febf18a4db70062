//! Core data types for sunrise/sunset calculations.

use crate::error::check_zenith;
use crate::time::CalendarDate;
use crate::{Error, Result};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// The solar event to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The sun crosses the zenith angle while ascending.
    Rise,
    /// The sun crosses the zenith angle while descending.
    Set,
}

impl Event {
    /// Both events, in the order they happen on a regular day.
    pub const ALL: [Self; 2] = [Self::Rise, Self::Set];

    /// Lower-case name of the event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rise => "rise",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `rise`/`sunrise` and `set`/`sunset`, ignoring ASCII case.
///
/// # Example
/// ```
/// # use sun_times::{Error, Event};
/// assert_eq!("Sunrise".parse::<Event>(), Ok(Event::Rise));
/// assert_eq!("set".parse::<Event>(), Ok(Event::Set));
/// assert_eq!("noon".parse::<Event>(), Err(Error::UnknownEvent));
/// ```
impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("rise") || name.eq_ignore_ascii_case("sunrise") {
            Ok(Self::Rise)
        } else if name.eq_ignore_ascii_case("set") || name.eq_ignore_ascii_case("sunset") {
            Ok(Self::Set)
        } else {
            Err(Error::unknown_event())
        }
    }
}

impl TryFrom<&str> for Event {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Predefined zenith angles for sunrise/sunset and twilight calculations.
///
/// The zenith is the angle between the sun and the point directly overhead at the
/// moment of the event; 90° would be the geometric horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Zenith {
    /// Official sunrise/sunset: upper limb on the horizon, accounting for refraction
    #[default]
    Official,
    /// Civil twilight (sun is 6° below horizon)
    Civil,
    /// Nautical twilight (sun is 12° below horizon)
    Nautical,
    /// Astronomical twilight (sun is 18° below horizon)
    Astronomical,
    /// Custom zenith angle
    Custom(f64),
}

impl Zenith {
    /// Zenith of official sunrise/sunset in degrees.
    pub const OFFICIAL_DEGREES: f64 = 90.8333;

    /// Gets the zenith angle in degrees for this definition.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => Self::OFFICIAL_DEGREES,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
            Self::Custom(degrees) => *degrees,
        }
    }

    /// Creates a custom zenith with the specified angle.
    ///
    /// # Errors
    /// Returns `InvalidZenith` if the angle is outside 0 to 180 degrees.
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith(degrees)?;
        Ok(Self::Custom(degrees))
    }
}

/// UTC time of day at which a solar event occurs, on the requested calendar date.
///
/// The date is always the date the calculation was asked for; the time of day is
/// wrapped into it rather than carried into a neighbouring day.
///
/// Equality and ordering both compare the date and then [`seconds_of_day`](Self::seconds_of_day).
#[derive(Debug, Clone, Copy)]
pub struct SunTime {
    date: CalendarDate,
    hour: u8,
    minute: u8,
    second: f64,
}

impl SunTime {
    pub(crate) const fn new(date: CalendarDate, hour: u8, minute: u8, second: f64) -> Self {
        Self {
            date,
            hour,
            minute,
            second,
        }
    }

    /// Calendar date the event was computed for.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Hour of the day in UTC (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Seconds within the minute, including the fraction (0 to < 60).
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Fractional hours since 00:00 UTC.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0 + self.second / 3600.0
    }

    /// Seconds since 00:00 UTC.
    #[must_use]
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second
    }

    /// Converts to a chrono UTC datetime, truncated to nanoseconds.
    ///
    /// # Errors
    /// Returns `InvalidDate` if chrono cannot represent the date or time.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self) -> Result<chrono::DateTime<chrono::Utc>> {
        let whole_seconds = self.second as u32;
        let nanos = ((self.second - f64::from(whole_seconds)) * 1e9) as u32;
        let time = chrono::NaiveTime::from_hms_nano_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            whole_seconds,
            nanos,
        )
        .ok_or(Error::invalid_date("time of day is out of range"))?;

        Ok(self.date.to_naive_date()?.and_time(time).and_utc())
    }
}

impl PartialEq for SunTime {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.seconds_of_day() == other.seconds_of_day()
    }
}

impl PartialOrd for SunTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.date.cmp(&other.date) {
            Ordering::Equal => self.seconds_of_day().partial_cmp(&other.seconds_of_day()),
            ordering => Some(ordering),
        }
    }
}

/// Formats as an ISO 8601 UTC timestamp with millisecond precision.
impl fmt::Display for SunTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:06.3}Z",
            self.date, self.hour, self.minute, self.second
        )
    }
}

/// Sunrise and sunset of one date at one location.
///
/// Either side is `None` when the sun does not cross the zenith that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    /// Time of sunrise
    pub rise: Option<SunTime>,
    /// Time of sunset
    pub set: Option<SunTime>,
}

impl SunTimes {
    /// Checks if both a rise and a set exist.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        self.rise.is_some() && self.set.is_some()
    }

    /// Hours from rise to set, when both exist.
    ///
    /// Far from Greenwich the UTC sunset can wrap to an earlier hour than the UTC
    /// sunrise of the same date (most of the Americas in summer); the span then runs
    /// across 00:00 UTC and a day is added.
    ///
    /// # Example
    /// ```
    /// use sun_times::{almanac, Zenith, time::CalendarDate};
    ///
    /// // Los Angeles: sunrise ~12:42 UTC, sunset ~03:07 UTC
    /// let date = CalendarDate::new(2024, 6, 21).unwrap();
    /// let times = almanac::sun_times(&date, 34.05, -118.24, Zenith::Official);
    /// assert!(times.set.unwrap() < times.rise.unwrap());
    /// assert!((times.daylight_hours().unwrap() - 14.43).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn daylight_hours(&self) -> Option<f64> {
        let (rise, set) = (self.rise?, self.set?);
        let span = set.hours() - rise.hours();
        Some(if span < 0.0 { span + 24.0 } else { span })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> CalendarDate {
        CalendarDate::new(2024, 6, 21).unwrap()
    }

    #[test]
    fn test_zenith_degrees() {
        assert_eq!(Zenith::Official.degrees(), 90.8333);
        assert_eq!(Zenith::Civil.degrees(), 96.0);
        assert_eq!(Zenith::Nautical.degrees(), 102.0);
        assert_eq!(Zenith::Astronomical.degrees(), 108.0);
        assert_eq!(Zenith::default(), Zenith::Official);

        let custom = Zenith::custom(93.0).unwrap();
        assert_eq!(custom.degrees(), 93.0);

        assert!(Zenith::custom(-1.0).is_err());
        assert!(Zenith::custom(181.0).is_err());
    }

    #[test]
    fn test_event_parsing() {
        assert_eq!("rise".parse::<Event>(), Ok(Event::Rise));
        assert_eq!(" SUNSET ".parse::<Event>(), Ok(Event::Set));
        assert_eq!(Event::try_from("Set"), Ok(Event::Set));
        assert_eq!("dusk".parse::<Event>(), Err(Error::UnknownEvent));
        assert_eq!("".parse::<Event>(), Err(Error::UnknownEvent));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_event_display_round_trips() {
        for event in Event::ALL {
            assert_eq!(event.to_string().parse::<Event>(), Ok(event));
        }
    }

    #[test]
    fn test_sun_time_hours() {
        let time = SunTime::new(date(), 19, 39, 54.0);
        assert!((time.hours() - (19.0 + 39.0 / 60.0 + 54.0 / 3600.0)).abs() < 1e-12);
        assert_eq!(time.seconds_of_day(), 19.0 * 3600.0 + 39.0 * 60.0 + 54.0);
        assert_eq!(time.date(), date());
    }

    #[test]
    fn test_sun_time_ordering() {
        let morning = SunTime::new(date(), 4, 59, 14.0);
        let evening = SunTime::new(date(), 19, 39, 54.0);
        let next_day = SunTime::new(CalendarDate::new(2024, 6, 22).unwrap(), 0, 0, 0.0);

        assert!(morning < evening);
        assert!(evening < next_day);
    }

    #[test]
    fn test_sun_time_equality_matches_ordering() {
        let carried = SunTime::new(date(), 10, 0, 60.0);
        let split = SunTime::new(date(), 10, 1, 0.0);
        assert_eq!(carried.partial_cmp(&split), Some(Ordering::Equal));
        assert_eq!(carried, split);

        let later = SunTime::new(date(), 10, 1, 0.5);
        assert_ne!(split, later);
        assert!(split < later);

        let other_day = SunTime::new(CalendarDate::new(2024, 6, 22).unwrap(), 10, 1, 0.0);
        assert_ne!(split, other_day);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_sun_time_display() {
        let time = SunTime::new(date(), 4, 59, 13.994_792);
        assert_eq!(time.to_string(), "2024-06-21T04:59:13.995Z");

        let time = SunTime::new(date(), 23, 5, 7.5);
        assert_eq!(time.to_string(), "2024-06-21T23:05:07.500Z");
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_sun_time_to_datetime() {
        use chrono::{TimeZone, Utc};

        let time = SunTime::new(date(), 19, 39, 54.25);
        let datetime = time.to_datetime().unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 6, 21, 19, 39, 54).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(datetime, expected);
    }

    #[test]
    fn test_sun_times_daylight() {
        let times = SunTimes {
            rise: Some(SunTime::new(date(), 5, 0, 0.0)),
            set: Some(SunTime::new(date(), 19, 30, 0.0)),
        };
        assert!(times.is_regular_day());
        assert!((times.daylight_hours().unwrap() - 14.5).abs() < 1e-12);

        let polar = SunTimes {
            rise: None,
            set: None,
        };
        assert!(!polar.is_regular_day());
        assert_eq!(polar.daylight_hours(), None);

        let wrapped = SunTimes {
            rise: Some(SunTime::new(date(), 19, 58, 0.0)),
            set: Some(SunTime::new(date(), 8, 0, 0.0)),
        };
        assert!(wrapped.is_regular_day());
        let span = wrapped.daylight_hours().unwrap();
        assert!((span - (12.0 + 2.0 / 60.0)).abs() < 1e-12, "got {span}");

        let rise_only = SunTimes {
            rise: Some(SunTime::new(date(), 5, 0, 0.0)),
            set: None,
        };
        assert_eq!(rise_only.daylight_hours(), None);
    }
}
