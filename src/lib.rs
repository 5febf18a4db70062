//! # Sun Times
//!
//! Sunrise and sunset times in UTC for any date and location.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library implements the sunrise/sunset formula from the *Almanac for Computers*
//! (Nautical Almanac Office, U.S. Naval Observatory, 1990): a closed-form, single-pass
//! calculation accurate to about a minute. It is not a precise ephemeris, but it is
//! cheap, deterministic and needs nothing beyond the calendar date and coordinates.
//!
//! ## Features
//!
//! - Sunrise, sunset and twilight (civil, nautical, astronomical or any custom zenith)
//! - Polar day and polar night reported as `None`, never as an error
//! - Every stage of the formula is exposed in [`almanac`] for inspection
//! - Thread-safe: pure functions over immutable values
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Accept chrono dates and return `DateTime<Utc>`
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `log`: Emit `trace`/`debug` records through the `log` facade
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sun-times = "0.1"
//!
//! # Minimal std (no chrono)
//! sun-times = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sun-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (numeric API)
//! ```rust
//! use sun_times::{almanac, time::CalendarDate};
//!
//! // Málaga, Spain on the June solstice
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let sunrise = almanac::sunrise(&date, 36.72016, -4.42034).unwrap();
//! let sunset = almanac::sunset(&date, 36.72016, -4.42034).unwrap();
//!
//! println!("Sunrise: {sunrise}"); // 2024-06-21T04:59:13.995Z
//! println!("Sunset: {sunset}"); // 2024-06-21T19:39:54.360Z
//! ```
//!
//! ### Twilight and polar regions
//! ```rust
//! use sun_times::{compute_event, Event, Zenith, time::CalendarDate};
//!
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//!
//! // Civil dawn in Málaga
//! let dawn = compute_event(Event::Rise, &date, 36.72016, -4.42034, Zenith::Civil.degrees());
//! assert!(dawn.is_some());
//!
//! // Midnight sun on Svalbard: there is no sunset to report
//! let sunset = compute_event(Event::Set, &date, 78.0, 15.0, Zenith::OFFICIAL_DEGREES);
//! assert!(sunset.is_none());
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use sun_times::almanac;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//! let sunset = almanac::sunset_utc(&date, 48.8566, 2.3522).unwrap();
//! println!("Sunset in Paris: {}", sunset.to_rfc3339());
//! # }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, north positive (-90° to +90°)
//! - **Longitude**: degrees, east positive (-180° to +180°)
//! - **Zenith angle**: 0° = directly overhead, 90° = geometric horizon; official
//!   sunrise/sunset uses 90.8333° to account for refraction and the solar radius
//! - **Result date**: always the requested calendar date; the UTC time of day is wrapped
//!   into it

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of formula constants in tests
)]

// Public API exports
pub use crate::almanac::{SunEventRequest, compute_event};
pub use crate::error::{Error, Result};
pub use crate::time::{CalendarDate, CalendarDay};
pub use crate::types::{Event, SunTime, SunTimes, Zenith};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;
