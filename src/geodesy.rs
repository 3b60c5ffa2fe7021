//! Great-circle distance and human-readable distance/duration literals.
//!
//! Used both for cache matching (where exact numeric behavior decides
//! whether a route is reused) and for the labels shown next to a route.

use crate::coordinate::Coordinate;

/// Earth diameter in kilometers (2 x 6371).
const EARTH_DIAMETER_KM: f64 = 12742.0;

/// Degrees to radians.
const DEG_TO_RAD: f64 = 0.017453292519943295;

/// Duration sentinel meaning "unknown".
pub const UNKNOWN_DURATION: f64 = -1.0;

/// Haversine distance between two points in kilometers.
pub fn distance(from: Coordinate, to: Coordinate) -> f64 {
    let cos = f64::cos;

    let a = 0.5 - cos((to.latitude - from.latitude) * DEG_TO_RAD) / 2.0
        + cos(from.latitude * DEG_TO_RAD)
            * cos(to.latitude * DEG_TO_RAD)
            * (1.0 - cos((to.longitude - from.longitude) * DEG_TO_RAD))
            / 2.0;

    EARTH_DIAMETER_KM * a.sqrt().asin()
}

/// Distance with unit postfix: meters below one kilometer, else km with one decimal.
pub fn literal(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{} m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{} km", one_decimal(distance_km))
    }
}

/// One-decimal rendering where an exact binary tie rounds up (1.25 -> 1.3).
///
/// `{:.1}` already rounds non-ties from the exact binary value (1.15 is
/// 1.1499.. and stays 1.1), but sends exact ties to the even digit.
fn one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    // The product is exact when fma reports no rounding error.
    let exact = value.mul_add(10.0, -scaled) == 0.0;

    if exact && scaled.fract() == 0.5 {
        let tenths = scaled.floor() as i64 + 1;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }

    format!("{:.1}", value)
}

/// Duration literal such as `45s`, `2min5s` or `1h 30min`.
///
/// Minute and hour components are truncated, not rounded.
/// [`UNKNOWN_DURATION`] renders as `NaN`.
pub fn time_literal(seconds: f64) -> String {
    if seconds == UNKNOWN_DURATION {
        return "NaN".to_string();
    }

    if seconds < 60.0 {
        return format!("{}s", seconds);
    }

    if seconds <= 3599.0 {
        let secs = (seconds % 60.0) as i64;
        let mins = (seconds / 60.0) as i64;
        return if secs > 0 {
            format!("{}min{}s", mins, secs)
        } else {
            format!("{}min", mins)
        };
    }

    let hours = (seconds / 3600.0) as i64;
    let mins = ((seconds % 3600.0) / 60.0) as i64;
    if mins > 0 {
        format!("{}h {}min", hours, mins)
    } else {
        format!("{}h ", hours)
    }
}
