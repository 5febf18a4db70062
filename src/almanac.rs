//! Sunrise/sunset algorithm from the *Almanac for Computers* (1990).
//!
//! A single-pass formula published by the U.S. Naval Observatory's Nautical Almanac
//! Office. It seeds the sun's position from an approximate day-of-year, derives the
//! declination and right ascension from a linear mean-anomaly model, and turns the local
//! hour angle at the requested zenith into a UTC time of day. Accuracy is about one
//! minute for latitudes outside the polar circles.
//!
//! Each stage is exposed as a function so the intermediate values can be inspected:
//!
//! 1. [`approximate_time`] from event, date and longitude
//! 2. [`SolarCoordinates::from_approximate_time`] (mean anomaly, true longitude,
//!    declination, right ascension)
//! 3. [`cos_local_hour_angle`] and [`suns_local_hour`], which is where a missing
//!    event is detected
//! 4. [`local_mean_time`], [`utc_hours`] and [`split_hours`]
//!
//! Latitudes of exactly ±90° make the hour-angle denominator vanish; the resulting
//! non-finite cosine fails the range check and the event is reported as absent.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{
    acos, asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    radians_to_degrees, sin, tan,
};
use crate::time::{CalendarDate, CalendarDay};
use crate::types::{Event, SunTime, SunTimes, Zenith};
use crate::Result;

/// Degrees of Earth rotation per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

const HOURS_PER_DAY: f64 = 24.0;

/// Converts a longitude into an hour offset from Greenwich.
#[must_use]
pub fn longitude_hour(longitude: f64) -> f64 {
    longitude / DEGREES_PER_HOUR
}

/// Nominal local hour of the event: 06:00 for sunrise, 18:00 for sunset.
#[must_use]
pub const fn base_time(event: Event) -> f64 {
    match event {
        Event::Rise => 6.0,
        Event::Set => 18.0,
    }
}

/// Approximate time of the event as a fractional day of the year.
///
/// `t = N + (base_time - longitude / 15) / 24`, with `N` the date's ordinal day.
#[must_use]
pub fn approximate_time<D: CalendarDay + ?Sized>(event: Event, date: &D, longitude: f64) -> f64 {
    f64::from(date.ordinal()) + (base_time(event) - longitude_hour(longitude)) / HOURS_PER_DAY
}

/// Sun's mean anomaly in degrees.
#[must_use]
pub fn mean_anomaly(approximate_time: f64) -> f64 {
    0.9856 * approximate_time - 3.289
}

/// Sun's true ecliptic longitude in degrees, normalized to [0, 360).
#[must_use]
pub fn true_longitude(mean_anomaly: f64) -> f64 {
    normalize_degrees_0_to_360(
        mean_anomaly
            + 1.916 * sin(degrees_to_radians(mean_anomaly))
            + 0.020 * sin(degrees_to_radians(2.0 * mean_anomaly))
            + 282.634,
    )
}

/// Right ascension straight from `atan`, normalized to [0, 360).
///
/// `atan` of a tangent loses the quadrant, so this value is only correct when the true
/// longitude happens to lie in the same quadrant. Use [`right_ascension`].
#[must_use]
pub fn uncorrected_right_ascension(true_longitude: f64) -> f64 {
    let tan_right_ascension = 0.91764 * tan(degrees_to_radians(true_longitude));
    normalize_degrees_0_to_360(radians_to_degrees(atan(tan_right_ascension)))
}

/// Sun's right ascension in degrees, moved into the same 90° quadrant as the true
/// longitude.
///
/// # Example
/// ```
/// # use sun_times::almanac::{right_ascension, uncorrected_right_ascension};
/// // late summer: the sun's longitude is in the second quadrant
/// let longitude = 159.94;
/// assert!(uncorrected_right_ascension(longitude) > 270.0);
/// assert!((90.0..180.0).contains(&right_ascension(longitude)));
/// ```
#[must_use]
pub fn right_ascension(true_longitude: f64) -> f64 {
    let raw = uncorrected_right_ascension(true_longitude);
    raw + (quadrant(true_longitude) - quadrant(raw))
}

/// Start of the 90° quadrant containing `degrees`.
fn quadrant(degrees: f64) -> f64 {
    floor(degrees / 90.0) * 90.0
}

/// Position of the sun derived from the approximate event time.
///
/// All angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    mean_anomaly: f64,
    true_longitude: f64,
    sin_declination: f64,
    cos_declination: f64,
    right_ascension: f64,
}

impl SolarCoordinates {
    /// Computes the sun's position for an approximate time from [`approximate_time`].
    #[must_use]
    pub fn from_approximate_time(approximate_time: f64) -> Self {
        let mean_anomaly = mean_anomaly(approximate_time);
        let true_longitude = true_longitude(mean_anomaly);

        let sin_declination = 0.39782 * sin(degrees_to_radians(true_longitude));
        let cos_declination = cos(asin(sin_declination));

        Self {
            mean_anomaly,
            true_longitude,
            sin_declination,
            cos_declination,
            right_ascension: right_ascension(true_longitude),
        }
    }

    /// Mean anomaly (M).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// True ecliptic longitude (L), in [0, 360).
    #[must_use]
    pub const fn true_longitude(&self) -> f64 {
        self.true_longitude
    }

    /// Sine of the declination.
    #[must_use]
    pub const fn sin_declination(&self) -> f64 {
        self.sin_declination
    }

    /// Cosine of the declination, never negative.
    #[must_use]
    pub const fn cos_declination(&self) -> f64 {
        self.cos_declination
    }

    /// Quadrant-corrected right ascension (RA) in degrees.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Right ascension in hours.
    #[must_use]
    pub fn right_ascension_hours(&self) -> f64 {
        self.right_ascension / DEGREES_PER_HOUR
    }
}

/// Cosine of the sun's local hour angle when it stands at `zenith` degrees.
///
/// The event exists only when the value lies within [-1, 1]; above 1 the sun stays
/// below the zenith all day, below -1 it never descends to it.
#[must_use]
pub fn cos_local_hour_angle(coordinates: &SolarCoordinates, latitude: f64, zenith: f64) -> f64 {
    let latitude = degrees_to_radians(latitude);
    (cos(degrees_to_radians(zenith)) - coordinates.sin_declination * sin(latitude))
        / (coordinates.cos_declination * cos(latitude))
}

/// Local hour angle of the event in hours, or `None` when the sun does not reach the
/// zenith.
///
/// Sunrise takes the reflected branch (`360° - H`).
#[must_use]
pub fn suns_local_hour(event: Event, cos_local_hour_angle: f64) -> Option<f64> {
    if !(-1.0..=1.0).contains(&cos_local_hour_angle) {
        return None;
    }

    let hour_angle = radians_to_degrees(acos(cos_local_hour_angle));
    let hour_angle = match event {
        Event::Rise => 360.0 - hour_angle,
        Event::Set => hour_angle,
    };
    Some(hour_angle / DEGREES_PER_HOUR)
}

/// Local mean time of the event in hours: `T = H + RA - 0.06571 t - 6.622`.
#[must_use]
pub fn local_mean_time(
    suns_local_hour: f64,
    right_ascension_hours: f64,
    approximate_time: f64,
) -> f64 {
    suns_local_hour + right_ascension_hours - 0.06571 * approximate_time - 6.622
}

/// Converts local mean time to UTC hours and wraps once into [0, 24).
#[must_use]
pub fn utc_hours(local_mean_time: f64, longitude: f64) -> f64 {
    wrap_utc_hours(local_mean_time - longitude_hour(longitude))
}

/// Shifts hours by at most one day in each direction to land in [0, 24).
///
/// Offsets of two or more days are left out of range; the formula's coefficients keep
/// real inputs within one day.
#[must_use]
pub fn wrap_utc_hours(hours: f64) -> f64 {
    let mut wrapped = hours;
    if wrapped < 0.0 {
        wrapped += HOURS_PER_DAY;
    }
    // also catches -1e-17 + 24 rounding up to 24
    if wrapped >= HOURS_PER_DAY {
        wrapped -= HOURS_PER_DAY;
    }

    #[cfg(feature = "log")]
    if wrapped != hours {
        log::trace!("wrapped UTC hours {hours} to {wrapped}");
    }

    wrapped
}

/// Splits fractional hours into hour, minute and seconds.
///
/// Expects `utc_hours` in [0, 24).
#[must_use]
pub fn split_hours(utc_hours: f64) -> (u8, u8, f64) {
    let hour = floor(utc_hours);
    let minutes = (utc_hours - hour) * 60.0;
    let minute = floor(minutes);
    let second = (minutes - minute) * 60.0;

    (hour as u8, minute as u8, second)
}

/// Input of a single sunrise or sunset calculation.
///
/// The zenith is fixed when the request is built ([`Zenith::Official`] unless replaced
/// with [`with_zenith`](Self::with_zenith)) and nothing changes afterwards.
///
/// # Example
/// ```
/// use sun_times::{Event, SunEventRequest, Zenith, time::CalendarDate};
///
/// let date = CalendarDate::new(2024, 6, 21)?;
/// let request = SunEventRequest::checked(Event::Set, &date, 36.72016, -4.42034)?
///     .with_zenith(Zenith::Civil);
///
/// let dusk = request.calculate().expect("Málaga has a civil dusk in June");
/// assert_eq!((dusk.hour(), dusk.minute()), (20, 10));
/// # Ok::<(), sun_times::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEventRequest {
    event: Event,
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
}

impl SunEventRequest {
    /// Creates a request for the official zenith.
    ///
    /// Coordinates are taken as given; see [`checked`](Self::checked).
    #[must_use]
    pub fn new<D: CalendarDay + ?Sized>(
        event: Event,
        date: &D,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            event,
            date: CalendarDate::of(date),
            latitude,
            longitude,
            zenith: Zenith::default(),
        }
    }

    /// Creates a request after validating the coordinates.
    ///
    /// # Errors
    /// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
    pub fn checked<D: CalendarDay + ?Sized>(
        event: Event,
        date: &D,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(event, date, latitude, longitude))
    }

    /// Returns the same request with a different zenith.
    #[must_use]
    pub const fn with_zenith(self, zenith: Zenith) -> Self {
        Self { zenith, ..self }
    }

    /// Requested event.
    #[must_use]
    pub const fn event(&self) -> Event {
        self.event
    }

    /// Requested date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Observer longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Zenith defining the event.
    #[must_use]
    pub const fn zenith(&self) -> Zenith {
        self.zenith
    }

    /// Runs the calculation.
    ///
    /// Returns `None` when the sun does not cross the zenith on this date at this
    /// location (polar day or polar night).
    #[must_use]
    pub fn calculate(&self) -> Option<SunTime> {
        let approximate_time = approximate_time(self.event, &self.date, self.longitude);
        let coordinates = SolarCoordinates::from_approximate_time(approximate_time);

        let cos_hour_angle =
            cos_local_hour_angle(&coordinates, self.latitude, self.zenith.degrees());
        let Some(local_hour) = suns_local_hour(self.event, cos_hour_angle) else {
            #[cfg(feature = "log")]
            log::trace!(
                "no sun{} on {} at ({}, {}): cos(H) = {cos_hour_angle}",
                self.event,
                self.date,
                self.latitude,
                self.longitude
            );
            return None;
        };

        let local_mean_time = local_mean_time(
            local_hour,
            coordinates.right_ascension_hours(),
            approximate_time,
        );
        let (hour, minute, second) = split_hours(utc_hours(local_mean_time, self.longitude));
        let time = SunTime::new(self.date, hour, minute, second);

        #[cfg(feature = "log")]
        log::debug!(
            "sun{} at ({}, {}) zenith {}°: {time}",
            self.event,
            self.latitude,
            self.longitude,
            self.zenith.degrees()
        );

        Some(time)
    }
}

/// Computes the UTC time of sunrise or sunset for a date and location.
///
/// Coordinates are not validated; out-of-range values produce meaningless times or
/// `None`. The result always carries the input date.
///
/// # Arguments
/// * `event` - Sunrise or sunset
/// * `date` - Calendar date providing year, month, day and ordinal day
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `zenith` - Zenith angle of the event in degrees ([`Zenith::OFFICIAL_DEGREES`] for
///   standard sunrise/sunset)
///
/// # Returns
/// `Some(SunTime)` or `None` when the sun does not cross the zenith that day
///
/// # Example
/// ```
/// use sun_times::{compute_event, Event, Zenith, time::CalendarDate};
///
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// let sunset = compute_event(Event::Set, &date, 36.72016, -4.42034, Zenith::OFFICIAL_DEGREES)
///     .unwrap();
/// assert_eq!((sunset.hour(), sunset.minute()), (19, 39));
///
/// // Svalbard in midsummer: the sun never sets
/// assert!(compute_event(Event::Set, &date, 78.0, 15.0, Zenith::OFFICIAL_DEGREES).is_none());
/// ```
#[must_use]
pub fn compute_event<D: CalendarDay + ?Sized>(
    event: Event,
    date: &D,
    latitude: f64,
    longitude: f64,
    zenith: f64,
) -> Option<SunTime> {
    SunEventRequest::new(event, date, latitude, longitude)
        .with_zenith(Zenith::Custom(zenith))
        .calculate()
}

/// Official sunrise in UTC.
#[must_use]
pub fn sunrise<D: CalendarDay + ?Sized>(date: &D, latitude: f64, longitude: f64) -> Option<SunTime> {
    SunEventRequest::new(Event::Rise, date, latitude, longitude).calculate()
}

/// Official sunset in UTC.
#[must_use]
pub fn sunset<D: CalendarDay + ?Sized>(date: &D, latitude: f64, longitude: f64) -> Option<SunTime> {
    SunEventRequest::new(Event::Set, date, latitude, longitude).calculate()
}

/// Both events for one date, location and zenith.
///
/// # Example
/// ```
/// use sun_times::{almanac, Zenith, time::CalendarDate};
///
/// let date = CalendarDate::new(2024, 12, 21).unwrap();
/// let times = almanac::sun_times(&date, 36.72016, -4.42034, Zenith::Official);
/// assert!(times.is_regular_day());
/// assert!((times.daylight_hours().unwrap() - 9.65).abs() < 0.01);
/// ```
#[must_use]
pub fn sun_times<D: CalendarDay + ?Sized>(
    date: &D,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> SunTimes {
    let request = |event| SunEventRequest::new(event, date, latitude, longitude).with_zenith(zenith);
    SunTimes {
        rise: request(Event::Rise).calculate(),
        set: request(Event::Set).calculate(),
    }
}

/// Official sunrise as a chrono UTC datetime.
///
/// Accepts any chrono date or datetime; only its calendar fields are read, in whatever
/// timezone the value carries.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sun_times::almanac;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let sunrise = almanac::sunrise_utc(&date, 48.8566, 2.3522).unwrap();
/// assert_eq!(sunrise.format("%H:%M").to_string(), "03:46");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunrise_utc<D: CalendarDay + ?Sized>(
    date: &D,
    latitude: f64,
    longitude: f64,
) -> Option<chrono::DateTime<chrono::Utc>> {
    sunrise(date, latitude, longitude)?.to_datetime().ok()
}

/// Official sunset as a chrono UTC datetime.
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunset_utc<D: CalendarDay + ?Sized>(
    date: &D,
    latitude: f64,
    longitude: f64,
) -> Option<chrono::DateTime<chrono::Utc>> {
    sunset(date, latitude, longitude)?.to_datetime().ok()
}
