//! Twilight times converted to local time with chrono and chrono-tz.

use chrono::NaiveDate;
use chrono_tz::Tz;
use sun_times::{Event, SunEventRequest, Zenith};

struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Tromsø, Norway",
            latitude: 69.6496,
            longitude: 18.956,
            timezone: chrono_tz::Europe::Oslo,
        },
        City {
            name: "Madrid, Spain",
            latitude: 40.4168,
            longitude: -3.7038,
            timezone: chrono_tz::Europe::Madrid,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            timezone: chrono_tz::Pacific::Auckland,
        },
    ];

    let zeniths = [
        ("Sunrise/Sunset", Zenith::Official),
        ("Civil", Zenith::Civil),
        ("Nautical", Zenith::Nautical),
        ("Astronomical", Zenith::Astronomical),
    ];

    let date = NaiveDate::from_ymd_opt(2023, 12, 21).ok_or("invalid date")?;

    for city in &cities {
        println!("=== {} ({}) ===", city.name, city.timezone);

        for (label, zenith) in zeniths {
            let mut line = format!("{label:>15}:");
            for event in Event::ALL {
                let request = SunEventRequest::checked(event, &date, city.latitude, city.longitude)?
                    .with_zenith(zenith);
                let local = match request.calculate() {
                    Some(time) => time
                        .to_datetime()?
                        .with_timezone(&city.timezone)
                        .format("%H:%M")
                        .to_string(),
                    None => "--:--".to_string(),
                };
                line.push_str(&format!(" {event} {local}"));
            }
            println!("{line}");
        }
        println!();
    }

    Ok(())
}
