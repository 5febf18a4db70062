//! Walks through the formula stage by stage using only the numeric API.
//!
//! Everything used here is available without `std` or `chrono` (enable `libm` instead).

use sun_times::almanac::{
    SolarCoordinates, approximate_time, cos_local_hour_angle, local_mean_time, split_hours,
    suns_local_hour, utc_hours,
};
use sun_times::{CalendarDate, Event, Zenith};

fn main() {
    // Vienna on the June solstice
    let (latitude, longitude) = (48.21, 16.37);
    let Ok(date) = CalendarDate::from_ordinal(2024, 173) else {
        return;
    };

    println!("{date}: sunset in Vienna, step by step\n");

    let t = approximate_time(Event::Set, &date, longitude);
    println!("approximate time t:    {t:.6}");

    let coordinates = SolarCoordinates::from_approximate_time(t);
    println!("mean anomaly M:        {:.6}°", coordinates.mean_anomaly());
    println!("true longitude L:      {:.6}°", coordinates.true_longitude());
    println!("right ascension RA:    {:.6}°", coordinates.right_ascension());
    println!("sin(declination):      {:.6}", coordinates.sin_declination());

    let cos_h = cos_local_hour_angle(&coordinates, latitude, Zenith::OFFICIAL_DEGREES);
    println!("cos(H):                {cos_h:.6}");

    let Some(local_hour) = suns_local_hour(Event::Set, cos_h) else {
        println!("the sun does not set today");
        return;
    };
    println!("local hour angle H:    {local_hour:.6} h");

    let lmt = local_mean_time(local_hour, coordinates.right_ascension_hours(), t);
    let utc = utc_hours(lmt, longitude);
    let (hour, minute, second) = split_hours(utc);
    println!("local mean time T:     {lmt:.6} h");
    println!("UTC:                   {hour:02}:{minute:02}:{second:06.3}");
}
