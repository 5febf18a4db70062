//! Sunrise and sunset for a handful of cities using the plain numeric API.

use sun_times::{CalendarDate, Event, Zenith, almanac, compute_event};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let date = CalendarDate::new(2024, 6, 21)?;

    let cities = [
        ("Málaga", 36.72016, -4.42034),
        ("San Francisco", 37.7749, -122.4194),
        ("Sydney", -33.8688, 151.2093),
        ("Longyearbyen", 78.22, 15.65),
    ];

    println!("Sunrise and sunset on {date} (UTC)\n");

    for (name, latitude, longitude) in cities {
        let times = almanac::sun_times(&date, latitude, longitude, Zenith::Official);
        let show = |time: Option<sun_times::SunTime>| {
            time.map_or_else(|| "none".to_string(), |t| t.to_string())
        };

        println!("{name} ({latitude:.2}, {longitude:.2})");
        println!("  sunrise: {}", show(times.rise));
        println!("  sunset:  {}", show(times.set));
        match times.daylight_hours() {
            Some(hours) => println!("  daylight: {hours:.2} h"),
            None => println!("  daylight: sun does not cross the horizon"),
        }
        println!();
    }

    // events can also be named at runtime
    let event: Event = "sunset".parse()?;
    if let Some(time) = compute_event(event, &date, 36.72016, -4.42034, Zenith::OFFICIAL_DEGREES) {
        println!("Parsed \"{event}\" for Málaga: {time}");
    }

    Ok(())
}
