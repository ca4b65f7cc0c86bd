use serde::Serialize;

use crate::error::{ensure_positive, Result};

/// Dimensions of the tube the dial is wrapped around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGeometry {
    width: f64,
    diameter: f64,
}

impl RingGeometry {
    pub fn new(width: f64, diameter: f64) -> Result<Self> {
        Ok(Self {
            width: ensure_positive("width", width)?,
            diameter: ensure_positive("diameter", diameter)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Length of the strip once the ring is cut open and flattened.
    pub fn circumference(&self) -> f64 {
        self.diameter * std::f64::consts::PI
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSample {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub apparent_solar_time: f64,
    pub hour_angle: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Horizontal gridline at the arc length of a fixed ring angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnglePoint {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub deg: f64,
}

/// Vertical gridline marking one reference date column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLine {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub label: String,
}

/// Sun positions for one clock hour, one point per reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourTrack {
    pub hour: f64,
    pub points: Vec<Point>,
}

/// One `quadraticCurveTo`-style step: bend towards `control`, stop at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadraticSegment {
    pub control: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingLayout {
    pub geometry: RingGeometry,
    pub angle_gridlines: Vec<AnglePoint>,
    pub month_gridlines: Vec<MonthLine>,
    pub hour_tracks: Vec<HourTrack>,
    pub hour_curves: Vec<Vec<Point>>,
    pub dial_mask_region: Rectangle,
    pub outline: Rectangle,
    pub hole: Point,
}

impl RingLayout {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
