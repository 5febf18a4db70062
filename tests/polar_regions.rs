//! Dates and places where the sun does not cross the requested zenith.

use sun_times::{CalendarDate, Event, Zenith, almanac, compute_event};

const OFFICIAL: f64 = Zenith::OFFICIAL_DEGREES;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn midnight_sun_has_no_sunrise_or_sunset() {
    let midsummer = date(2024, 6, 21);

    // Svalbard
    assert!(compute_event(Event::Rise, &midsummer, 78.0, 15.0, OFFICIAL).is_none());
    assert!(compute_event(Event::Set, &midsummer, 78.0, 15.0, OFFICIAL).is_none());

    // Antarctic summer
    let midwinter = date(2024, 12, 21);
    assert!(compute_event(Event::Rise, &midwinter, -78.0, 166.7, OFFICIAL).is_none());
    assert!(compute_event(Event::Set, &midwinter, -78.0, 166.7, OFFICIAL).is_none());
}

#[test]
fn polar_night_has_no_sunrise_or_sunset() {
    let midwinter = date(2024, 12, 21);

    // Tromsø
    assert!(compute_event(Event::Rise, &midwinter, 69.65, 18.96, OFFICIAL).is_none());
    assert!(compute_event(Event::Set, &midwinter, 69.65, 18.96, OFFICIAL).is_none());

    let midsummer = date(2024, 6, 21);
    assert!(compute_event(Event::Rise, &midsummer, -69.65, 18.96, OFFICIAL).is_none());
}

#[test]
fn twilight_exists_during_polar_night() {
    let midwinter = date(2024, 12, 21);

    let dawn = compute_event(Event::Rise, &midwinter, 69.65, 18.96, Zenith::Civil.degrees())
        .expect("Tromsø has civil twilight around noon in December");
    assert_eq!((dawn.hour(), dawn.minute()), (8, 31));

    let astronomical = compute_event(
        Event::Rise,
        &midwinter,
        69.65,
        18.96,
        Zenith::Astronomical.degrees(),
    )
    .unwrap();
    assert!(astronomical < dawn);
}

#[test]
fn short_day_just_below_arctic_circle() {
    let midwinter = date(2024, 12, 21);
    let times = almanac::sun_times(&midwinter, 67.0, 18.96, Zenith::Official);

    let daylight = times.daylight_hours().expect("the sun still rises at 67°N");
    assert!(daylight > 1.0 && daylight < 2.0, "got {daylight} hours");
}

#[test]
fn every_arctic_latitude_has_midnight_sun_at_the_solstice() {
    let midsummer = date(2023, 6, 21);
    for tenth in 670..=900 {
        let latitude = f64::from(tenth) / 10.0;
        for event in Event::ALL {
            assert!(
                compute_event(event, &midsummer, latitude, 0.0, OFFICIAL).is_none(),
                "unexpected {event} at latitude {latitude}"
            );
        }
    }
}

#[test]
fn equator_has_events_every_day() {
    for year in [2023, 2024] {
        let days = if year == 2024 { 366 } else { 365 };
        for ordinal in 1..=days {
            let day = CalendarDate::from_ordinal(year, ordinal).unwrap();
            for event in Event::ALL {
                let time = compute_event(event, &day, 0.0, 0.0, OFFICIAL)
                    .unwrap_or_else(|| panic!("no {event} at the equator on {day}"));
                assert!(time.hour() < 24);
                assert!(time.minute() < 60);
                assert!((0.0..60.0).contains(&time.second()));
            }
        }
    }
}

#[test]
fn poles_are_degenerate_but_do_not_panic() {
    let equinox = date(2024, 3, 20);
    for latitude in [90.0, -90.0] {
        for event in Event::ALL {
            // cos(latitude) is ~6e-17, so cos(H) explodes past the [-1, 1] range
            assert!(compute_event(event, &equinox, latitude, 0.0, OFFICIAL).is_none());
        }
    }
}
