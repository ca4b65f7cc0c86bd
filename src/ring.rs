use chrono::NaiveDate;
use log::{debug, trace};

use crate::config::SundialConfig;
use crate::curve;
use crate::error::{ensure_finite, ensure_positive, Result, SundialError};
use crate::solar::{arc_length, solar_altitude};
use crate::types::{
    AnglePoint, HourTrack, MonthLine, Observer, Point, Rectangle, RingGeometry, RingLayout,
};

/// Ring angles that get a horizontal gridline. The first and last bound
/// the band the hour curves are drawn in.
pub const CANONICAL_ANGLES: [f64; 5] = [45.0, 90.0, 135.0, 180.0, 225.0];

/// Altitude is doubled before it is laid onto the ring so the yearly
/// swing of each hour is visible on a small template.
pub const ALTITUDE_SCALE: f64 = 2.0;

pub const DIAL_MASK_LEFT_MARGIN: f64 = 5.0;
pub const DIAL_MASK_EXTRA_WIDTH: f64 = 20.0;

pub fn column_step(width: f64, columns: usize) -> Result<f64> {
    if columns < 2 {
        return Err(SundialError::TooFewDates(columns));
    }
    Ok(ensure_positive("width", width)? / (columns - 1) as f64)
}

pub fn top_arc(radius: f64) -> f64 {
    arc_length(CANONICAL_ANGLES[0], radius)
}

pub fn bottom_arc(radius: f64) -> f64 {
    arc_length(CANONICAL_ANGLES[CANONICAL_ANGLES.len() - 1], radius)
}

pub fn build_angle_gridlines(geometry: &RingGeometry) -> Vec<AnglePoint> {
    let radius = geometry.radius();
    CANONICAL_ANGLES
        .iter()
        .map(|&deg| {
            let y = arc_length(deg, radius);
            AnglePoint {
                x0: 0.0,
                y0: y,
                x1: geometry.width(),
                y1: y,
                deg,
            }
        })
        .collect()
}

pub fn build_month_gridlines<S: AsRef<str>>(
    dates: &[NaiveDate],
    width: f64,
    top_arc: f64,
    bottom_arc: f64,
    labels: &[S],
) -> Result<Vec<MonthLine>> {
    if labels.len() != dates.len() {
        return Err(SundialError::LabelCountMismatch {
            dates: dates.len(),
            labels: labels.len(),
        });
    }
    let step = column_step(width, dates.len())?;
    Ok(labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = step * i as f64;
            MonthLine {
                x0: x,
                y0: top_arc,
                x1: x,
                y1: bottom_arc,
                label: label.as_ref().to_string(),
            }
        })
        .collect())
}

pub fn build_hour_tracks(
    dates: &[NaiveDate],
    width: f64,
    hours: &[f64],
    origin_deg: f64,
    radius: f64,
    observer: &Observer,
) -> Result<Vec<HourTrack>> {
    let step = column_step(width, dates.len())?;
    let radius = ensure_positive("radius", radius)?;
    if hours.is_empty() {
        return Err(SundialError::NoHours);
    }
    let origin = arc_length(ensure_finite("origin angle", origin_deg)?, radius);

    hours
        .iter()
        .map(|&hour| -> Result<HourTrack> {
            ensure_finite("sample hour", hour)?;
            let points: Vec<Point> = dates
                .iter()
                .enumerate()
                .map(|(i, &date)| {
                    let alt = solar_altitude(date, hour, observer);
                    Point::new(step * i as f64, origin + arc_length(alt * ALTITUDE_SCALE, radius))
                })
                .collect();
            trace!("hour {} track spans y {:?}", hour, y_span(&points));
            Ok(HourTrack { hour, points })
        })
        .collect()
}

fn y_span(points: &[Point]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        })
}

/// Clip band for hour dots and curves, between the top and bottom
/// angle gridlines. Widened to leave room for the hour labels.
pub fn build_dial_mask_region(geometry: &RingGeometry) -> Rectangle {
    let top = top_arc(geometry.radius());
    let bottom = bottom_arc(geometry.radius());
    Rectangle {
        x: -DIAL_MASK_LEFT_MARGIN,
        y: top,
        width: geometry.width() + DIAL_MASK_EXTRA_WIDTH,
        height: bottom - top,
    }
}

pub fn build_outline(geometry: &RingGeometry) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: geometry.width(),
        height: geometry.circumference(),
    }
}

/// Centre of the sighting hole, mirrored from the origin angle.
pub fn hole_position(geometry: &RingGeometry, origin_deg: f64) -> Point {
    Point::new(
        geometry.width() / 2.0,
        arc_length(360.0 - origin_deg, geometry.radius()),
    )
}

pub fn build_layout(config: &SundialConfig) -> Result<RingLayout> {
    config.validate()?;
    let geometry = config.geometry()?;
    let radius = geometry.radius();
    debug!(
        "building ring layout: width {}, diameter {}, {} dates, {} hours",
        geometry.width(),
        geometry.diameter(),
        config.reference_dates.len(),
        config.sample_hours.len()
    );

    let angle_gridlines = build_angle_gridlines(&geometry);
    let month_gridlines = build_month_gridlines(
        &config.reference_dates,
        geometry.width(),
        top_arc(radius),
        bottom_arc(radius),
        &config.reference_labels,
    )?;
    let hour_tracks = build_hour_tracks(
        &config.reference_dates,
        geometry.width(),
        &config.sample_hours,
        config.origin_angle,
        radius,
        &config.observer(),
    )?;
    let hour_curves = hour_tracks
        .iter()
        .map(|track| curve::fit_quadratic_curve(&track.points))
        .collect::<Result<Vec<_>>>()?;

    let layout = RingLayout {
        geometry,
        angle_gridlines,
        month_gridlines,
        hour_tracks,
        hour_curves,
        dial_mask_region: build_dial_mask_region(&geometry),
        outline: build_outline(&geometry),
        hole: hole_position(&geometry, config.origin_angle),
    };
    debug!(
        "ring layout ready: {} gridlines, {} month lines, {} hour curves",
        layout.angle_gridlines.len(),
        layout.month_gridlines.len(),
        layout.hour_curves.len()
    );
    Ok(layout)
}
