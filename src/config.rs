//! Layout input: ring dimensions, reference dates and sample hours.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, SundialError};
use crate::types::{Observer, RingGeometry};

pub const DEFAULT_RING_DIAMETER: f64 = 18.5;
pub const DEFAULT_RING_WIDTH: f64 = 12.0;
pub const DEFAULT_ORIGIN_ANGLE: f64 = 45.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SundialConfig {
    pub ring_width: f64,
    pub ring_diameter: f64,
    pub reference_dates: Vec<NaiveDate>,
    pub reference_labels: Vec<String>,
    pub sample_hours: Vec<f64>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default = "default_origin_angle")]
    pub origin_angle: f64,
}

fn default_origin_angle() -> f64 {
    DEFAULT_ORIGIN_ANGLE
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for SundialConfig {
    /// The southern-hemisphere template: one column per solstice, equinox
    /// and the mid-season dates between them, wrapping back to December.
    fn default() -> Self {
        let reference_dates = vec![
            ymd(2025, 12, 21),
            ymd(2025, 10, 15),
            ymd(2025, 9, 22),
            ymd(2025, 7, 15),
            ymd(2025, 6, 21),
            ymd(2025, 4, 15),
            ymd(2025, 3, 20),
            ymd(2025, 2, 15),
            ymd(2025, 12, 21),
        ];
        let reference_labels = [
            "Summer Solstice",
            "",
            "Vernal Equinox",
            "",
            "Winter Solstice",
            "",
            "Autumn Equinox",
            "",
            "Summer Solstice",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        Self {
            ring_width: DEFAULT_RING_WIDTH,
            ring_diameter: DEFAULT_RING_DIAMETER,
            reference_dates,
            reference_labels,
            sample_hours: (5..=12).map(f64::from).collect(),
            latitude: 0.0,
            longitude: 0.0,
            origin_angle: DEFAULT_ORIGIN_ANGLE,
        }
    }
}

impl SundialConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn geometry(&self) -> Result<RingGeometry> {
        RingGeometry::new(self.ring_width, self.ring_diameter)
    }

    pub fn observer(&self) -> Observer {
        Observer {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Checks every precondition of a layout build, failing on the first
    /// one that does not hold.
    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        if self.reference_dates.len() < 2 {
            return Err(SundialError::TooFewDates(self.reference_dates.len()));
        }
        if self.reference_labels.len() != self.reference_dates.len() {
            return Err(SundialError::LabelCountMismatch {
                dates: self.reference_dates.len(),
                labels: self.reference_labels.len(),
            });
        }
        if self.sample_hours.is_empty() {
            return Err(SundialError::NoHours);
        }
        for &hour in &self.sample_hours {
            ensure_finite("sample hour", hour)?;
        }
        ensure_finite("origin angle", self.origin_angle)?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SundialError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SundialError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}
