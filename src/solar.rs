use chrono::{Datelike, NaiveDate};

use crate::types::{Observer, SolarSample};

pub const EARTH_AXIAL_TILT: f64 = 23.439281;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const SOLAR_NOON_MINUTES: f64 = 720.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Day count since January 1st of the date's own year, where January 1st is 1.
pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn solar_declination(date: NaiveDate) -> f64 {
    let n = day_of_year(date) as f64;
    EARTH_AXIAL_TILT * deg_to_rad(((n + 284.0) / 365.0) * 360.0).sin()
}

/// Equation of time in minutes, rounded to two decimals.
///
/// The rounding is part of the model: every downstream value is computed
/// from the rounded figure.
pub fn equation_of_time(date: NaiveDate) -> f64 {
    let n = day_of_year(date) as f64;
    let b = 360.0 * ((n - 81.0) / 365.0);
    let eot = 9.87 * deg_to_rad(2.0 * b).sin()
        - 7.53 * deg_to_rad(b).cos()
        - 1.5 * deg_to_rad(b).sin();
    round_to_hundredths(eot)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Nearest time zone centre meridian. Halves round towards +inf.
pub fn standard_meridian(longitude: f64) -> f64 {
    DEGREES_PER_HOUR * (longitude / DEGREES_PER_HOUR + 0.5).floor()
}

/// Converts a civil clock hour into apparent solar time, in hours.
pub fn apparent_solar_time(date: NaiveDate, clock_hour: f64, longitude: f64) -> f64 {
    let minutes = clock_hour * 60.0
        + MINUTES_PER_DEGREE * (standard_meridian(longitude) - longitude)
        + equation_of_time(date);
    minutes / 60.0
}

pub fn hour_angle(apparent_solar_time: f64) -> f64 {
    ((apparent_solar_time * 60.0) - SOLAR_NOON_MINUTES) / MINUTES_PER_DEGREE
}

/// Altitude above the horizon, in degrees, from declination and hour angle.
pub fn altitude_from_angles(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_alt =
        lat_rad.cos() * dec_rad.cos() * ha_rad.cos() + lat_rad.sin() * dec_rad.sin();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

pub fn solar_altitude(date: NaiveDate, clock_hour: f64, observer: &Observer) -> f64 {
    solar_sample(date, clock_hour, observer).altitude
}

pub fn solar_sample(date: NaiveDate, clock_hour: f64, observer: &Observer) -> SolarSample {
    let ast = apparent_solar_time(date, clock_hour, observer.longitude);
    let ha = hour_angle(ast);
    let decl = solar_declination(date);
    SolarSample {
        day_of_year: day_of_year(date),
        declination: decl,
        equation_of_time: equation_of_time(date),
        apparent_solar_time: ast,
        hour_angle: ha,
        altitude: altitude_from_angles(observer.latitude, decl, ha),
    }
}

/// Length of the arc spanned by `angle_deg` on a circle of `radius`.
pub fn arc_length(angle_deg: f64, radius: f64) -> f64 {
    radius * deg_to_rad(angle_deg)
}
