/* Copyright 2024-2025 the sunlamp developers
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>.
 */

//! Apparent position of the sun for a time and place
//!
//! This uses a relatively simple closed-form model that ignores all
//! kinds of effects:
//! - precession/nutation/frame bias
//! - refraction
//! - light travel time
//! - relativistic effects (aberration, deflection)
//! - polar motion
//! - leap seconds and the difference between UTC and UT1
//!
//! It is good to a fraction of a degree, which is plenty for pointing a
//! light source but nowhere near good enough for navigation.
//!
//! The calculation is pure: identical inputs give bit-identical outputs,
//! and it touches no shared state, so it may be called freely from any
//! thread. There is no error path. Latitude and longitude are not
//! validated; out-of-range or non-finite inputs flow through the
//! arithmetic (non-finite inputs come out as NaN).

// Lots of variables from external equations don't have snake case
#![allow(non_snake_case)]

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::f64::consts::PI;

/// Where the sun appears in the sky, in radians.
///
/// Azimuth is the compass angle of the sun projected onto the horizon,
/// in [0, 2π); altitude is the angle above the horizon, in [-π/2, π/2].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Normalize an angle in radians to one revolution.
///
/// A negative angle maps to `2π - (|angle| mod 2π)`, which lands on 2π
/// itself for exact negative multiples of 2π; such a value is left alone
/// by a second application, so the function is idempotent even there.
fn wrap_angle(angle: f64) -> f64 {
    if angle < 0.0 {
        2.0 * PI - (angle.abs() % (2.0 * PI))
    } else if angle > 2.0 * PI {
        angle % (2.0 * PI)
    } else {
        angle
    }
}

/// Days since the J2000 epoch for a civil date, ignoring time of day.
fn julian_date(year: i64, month: i64, day: i64) -> f64 {
    let days = 367 * year - 7 * (year + (month + 9) / 12) / 4 + 275 * month / 9 + day;
    days as f64 - 730531.5
}

/// Reconstruct the full-circle azimuth from its tangent.
///
/// The quadrant is recovered from the signs of the numerator and
/// denominator rather than by calling atan2, so that the branch
/// thresholds stay exactly `d < 0`, else `n < 0`.
fn azimuth(hour_angle: f64, declination: f64, latitude: f64) -> f64 {
    let n = -hour_angle.sin();
    let d = declination.tan() * latitude.cos() - latitude.sin() * hour_angle.cos();
    let mut azimuth = (n / d).atan();
    if d < 0.0 {
        azimuth += PI;
    } else if n < 0.0 {
        azimuth += 2.0 * PI;
    }
    azimuth
}

/// Compute the sun's azimuth and altitude as seen from a location.
///
/// The time is converted to UTC internally; latitude and longitude are
/// in degrees.
pub fn sun_position<Tz: TimeZone>(
    time: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    let time = time.with_timezone(&Utc);
    let hours =
        (time.num_seconds_from_midnight() as f64 + 1e-9 * (time.nanosecond() as f64)) / 3600.0;

    let mut JD = julian_date(time.year().into(), time.month().into(), time.day().into());
    let mut T = JD / 36525.0;

    // Sidereal time is derived from the date-only JD; the fractional day
    // enters through the solar-to-sidereal scale factor instead.
    let sidereal_hours = 6.6974 + 2400.0513 * T;
    let sidereal_UT = sidereal_hours + (366.2422 / 365.2422) * hours;
    let sidereal = sidereal_UT * 15.0 + longitude;

    // The ephemeris terms below use the time-of-day-adjusted JD.
    JD += hours / 24.0;
    T = JD / 36525.0;

    // Mean longitude and mean anomaly
    let L = wrap_angle((280.466 + 36000.77 * T).to_radians());
    let g = wrap_angle((357.529 + 35999.05 * T).to_radians());

    // Equation of center and ecliptic longitude
    let C = ((1.915 - 0.005 * T) * g.sin() + 0.02 * (2.0 * g).sin()).to_radians();
    let λ = wrap_angle(L + C);

    // Obliquity of the ecliptic
    let ε = (23.439 - 0.013 * T).to_radians();

    let α = f64::atan2(ε.cos() * λ.sin(), λ.cos());
    // The upstream formula feeds right ascension into the declination
    // where the textbook formula takes the ecliptic longitude. Kept as
    // written so that outputs stay reproducible against it.
    let δ = (α.sin() * ε.sin()).asin();

    let mut hour_angle = wrap_angle(sidereal.to_radians()) - α;
    if hour_angle > PI {
        hour_angle -= 2.0 * PI;
    }

    let lat = latitude.to_radians();
    let altitude = (lat.sin() * δ.sin() + lat.cos() * δ.cos() * hour_angle.cos()).asin();
    SunPosition {
        azimuth: azimuth(hour_angle, δ, lat),
        altitude,
    }
}
