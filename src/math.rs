//! Angle helpers and the float functions used by the almanac formula.
//!
//! The trigonometric wrappers dispatch to the standard library when the `std` feature is
//! enabled and to `libm` otherwise, so the same formula runs in `no_std` builds.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Degrees in a full turn.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Converts degrees to radians as `degrees / 360 * 2π`.
#[inline]
#[must_use]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / FULL_CIRCLE_DEGREES * 2.0 * PI
}

/// Converts radians to degrees as `radians * 360 / 2π`.
#[inline]
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians * FULL_CIRCLE_DEGREES / (2.0 * PI)
}

/// Normalizes an angle in degrees to the range [0, 360).
///
/// A single remainder plus a sign fix-up, so any finite input is handled in constant
/// time. Non-finite input stays non-finite.
///
/// # Example
/// ```
/// # use sun_times::math::normalize_degrees_0_to_360;
/// assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
/// assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
/// ```
#[must_use]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % FULL_CIRCLE_DEGREES;
    if normalized < 0.0 {
        let wrapped = normalized + FULL_CIRCLE_DEGREES;
        // tiny negative remainders round up to exactly 360
        if wrapped >= FULL_CIRCLE_DEGREES {
            0.0
        } else {
            wrapped
        }
    } else {
        normalized
    }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
