pub mod config;
pub mod curve;
pub mod error;
pub mod ring;
pub mod solar;
pub mod types;

pub use config::SundialConfig;

pub use curve::{fit_quadratic_curve, quadratic_segments};

pub use error::{Result, SundialError};

pub use ring::{
    build_angle_gridlines, build_dial_mask_region, build_hour_tracks, build_layout,
    build_month_gridlines, build_outline, column_step, hole_position, ALTITUDE_SCALE,
    CANONICAL_ANGLES,
};

pub use solar::{
    altitude_from_angles, apparent_solar_time, arc_length, day_of_year, deg_to_rad,
    equation_of_time, hour_angle, rad_to_deg, solar_altitude, solar_declination, solar_sample,
    standard_meridian, EARTH_AXIAL_TILT,
};

pub use types::{
    AnglePoint, HourTrack, MonthLine, Observer, Point, QuadraticSegment, Rectangle,
    RingGeometry, RingLayout, SolarSample,
};
