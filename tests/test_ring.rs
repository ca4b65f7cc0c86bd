use std::sync::LazyLock;

use chrono::NaiveDate;

use sundial_ring::ring::*;
use sundial_ring::solar::{arc_length, solar_altitude};
use sundial_ring::types::*;
use sundial_ring::{SundialConfig, SundialError};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

static CONFIG: LazyLock<SundialConfig> = LazyLock::new(SundialConfig::default);

static RING: LazyLock<RingGeometry> = LazyLock::new(|| CONFIG.geometry().unwrap());

static LAYOUT: LazyLock<RingLayout> = LazyLock::new(|| build_layout(&CONFIG).unwrap());

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Column step ──

#[test]
fn test_column_step_divides_width() {
    assert_approx!(column_step(12.0, 9).unwrap(), 1.5, 1e-12);
    assert_approx!(column_step(12.0, 2).unwrap(), 12.0, 1e-12);
}

#[test]
fn test_column_step_needs_two_columns() {
    assert!(matches!(column_step(12.0, 1), Err(SundialError::TooFewDates(1))));
    assert!(matches!(column_step(12.0, 0), Err(SundialError::TooFewDates(0))));
}

#[test]
fn test_column_step_rejects_bad_width() {
    assert!(matches!(
        column_step(0.0, 9),
        Err(SundialError::InvalidGeometry { field: "width", .. })
    ));
}

// ── Angle gridlines ──

#[test]
fn test_angle_gridlines_canonical() {
    let lines = build_angle_gridlines(&RING);
    assert_eq!(lines.len(), 5);
    let degs: Vec<f64> = lines.iter().map(|l| l.deg).collect();
    assert_eq!(degs, vec![45.0, 90.0, 135.0, 180.0, 225.0]);
}

#[test]
fn test_angle_gridlines_horizontal_across_width() {
    for line in build_angle_gridlines(&RING) {
        assert_approx!(line.x0, 0.0, 1e-12);
        assert_approx!(line.x1, RING.width(), 1e-12);
        assert_approx!(line.y0, line.y1, 1e-12);
        assert_approx!(line.y0, arc_length(line.deg, RING.radius()), 1e-12);
    }
}

#[test]
fn test_angle_gridlines_ascending() {
    let lines = build_angle_gridlines(&RING);
    for pair in lines.windows(2) {
        assert!(pair[0].y0 < pair[1].y0);
    }
    assert_approx!(lines[0].y0, top_arc(RING.radius()), 1e-12);
    assert_approx!(lines[4].y0, bottom_arc(RING.radius()), 1e-12);
}

// ── Month gridlines ──

#[test]
fn test_month_gridlines_span_width() {
    let lines = build_month_gridlines(
        &CONFIG.reference_dates,
        RING.width(),
        1.0,
        2.0,
        &CONFIG.reference_labels,
    )
    .unwrap();
    assert_eq!(lines.len(), 9);
    assert_approx!(lines[0].x0, 0.0, 1e-12);
    assert_approx!(lines[8].x0, RING.width(), 1e-9);
    for line in &lines {
        assert_approx!(line.x0, line.x1, 1e-12);
        assert_approx!(line.y0, 1.0, 1e-12);
        assert_approx!(line.y1, 2.0, 1e-12);
    }
    assert_eq!(lines[0].label, "Summer Solstice");
    assert_eq!(lines[4].label, "Winter Solstice");
    assert_eq!(lines[1].label, "");
}

#[test]
fn test_month_gridlines_two_dates() {
    let dates = [date(2025, 6, 21), date(2025, 12, 21)];
    let lines = build_month_gridlines(&dates, 7.0, 0.0, 1.0, &["June", "December"]).unwrap();
    assert_approx!(lines[0].x0, 0.0, 1e-12);
    assert_approx!(lines[1].x0, 7.0, 1e-12);
}

#[test]
fn test_month_gridlines_label_mismatch() {
    let dates = [date(2025, 6, 21), date(2025, 12, 21)];
    let result = build_month_gridlines(&dates, 7.0, 0.0, 1.0, &["June"]);
    assert!(matches!(
        result,
        Err(SundialError::LabelCountMismatch { dates: 2, labels: 1 })
    ));
}

#[test]
fn test_month_gridlines_no_dates() {
    let dates: [NaiveDate; 0] = [];
    let labels: [&str; 0] = [];
    assert!(matches!(
        build_month_gridlines(&dates, 7.0, 0.0, 1.0, &labels),
        Err(SundialError::TooFewDates(0))
    ));
}

// ── Hour tracks ──

#[test]
fn test_hour_tracks_shape() {
    let tracks = &LAYOUT.hour_tracks;
    assert_eq!(tracks.len(), 8);
    let step = RING.width() / 8.0;
    for (track, hour) in tracks.iter().zip(5..=12) {
        assert_approx!(track.hour, hour, 1e-12);
        assert_eq!(track.points.len(), 9);
        for (i, p) in track.points.iter().enumerate() {
            assert_approx!(p.x, step * i as f64, 1e-9);
        }
        assert_approx!(track.points[8].x, RING.width(), 1e-9);
    }
}

#[test]
fn test_hour_track_position_formula() {
    let observer = Observer::default();
    let tracks = build_hour_tracks(
        &CONFIG.reference_dates,
        RING.width(),
        &[9.0],
        45.0,
        RING.radius(),
        &observer,
    )
    .unwrap();
    for (p, &d) in tracks[0].points.iter().zip(&CONFIG.reference_dates) {
        let alt = solar_altitude(d, 9.0, &observer);
        let expected = arc_length(45.0, RING.radius()) + arc_length(alt * 2.0, RING.radius());
        assert_approx!(p.y, expected, 1e-12);
    }
}

#[test]
fn test_noon_track_inside_mask() {
    let noon = LAYOUT.hour_tracks.last().unwrap();
    for p in &noon.points {
        assert!(LAYOUT.dial_mask_region.contains(p), "{:?}", p);
    }
}

#[test]
fn test_hour_tracks_advance_towards_noon() {
    // the sun climbs until noon, so each later hour lies further round the ring
    for pair in LAYOUT.hour_tracks.windows(2) {
        for (a, b) in pair[0].points.iter().zip(&pair[1].points) {
            assert!(a.y < b.y);
        }
    }
}

#[test]
fn test_hour_tracks_follow_observer() {
    let here = build_hour_tracks(&CONFIG.reference_dates, 12.0, &[12.0], 45.0, 9.25, &Observer::default())
        .unwrap();
    let there = build_hour_tracks(
        &CONFIG.reference_dates,
        12.0,
        &[12.0],
        45.0,
        9.25,
        &Observer {
            latitude: -34.6,
            longitude: -58.4,
        },
    )
    .unwrap();
    assert_ne!(here[0].points, there[0].points);
}

#[test]
fn test_hour_tracks_preconditions() {
    let dates = &CONFIG.reference_dates;
    let obs = Observer::default();
    assert!(matches!(
        build_hour_tracks(dates, 12.0, &[], 45.0, 9.25, &obs),
        Err(SundialError::NoHours)
    ));
    assert!(matches!(
        build_hour_tracks(dates, 12.0, &[f64::NAN], 45.0, 9.25, &obs),
        Err(SundialError::NonFinite { .. })
    ));
    assert!(matches!(
        build_hour_tracks(dates, 12.0, &[9.0], 45.0, 0.0, &obs),
        Err(SundialError::InvalidGeometry { field: "radius", .. })
    ));
    assert!(matches!(
        build_hour_tracks(&dates[..1], 12.0, &[9.0], 45.0, 9.25, &obs),
        Err(SundialError::TooFewDates(1))
    ));
}

// ── Mask, outline, hole ──

#[test]
fn test_dial_mask_region_bounds() {
    let mask = build_dial_mask_region(&RING);
    assert_approx!(mask.x, -5.0, 1e-12);
    assert_approx!(mask.width, RING.width() + 20.0, 1e-12);
    assert_approx!(mask.y, arc_length(45.0, RING.radius()), 1e-12);
    assert_approx!(mask.y + mask.height, arc_length(225.0, RING.radius()), 1e-12);
}

#[test]
fn test_outline_is_full_strip() {
    let outline = build_outline(&RING);
    assert_approx!(outline.width, 12.0, 1e-12);
    assert_approx!(outline.height, 18.5 * std::f64::consts::PI, 1e-12);
}

#[test]
fn test_hole_outside_mask() {
    let hole = hole_position(&RING, 45.0);
    assert_approx!(hole.x, 6.0, 1e-12);
    assert_approx!(hole.y, arc_length(315.0, RING.radius()), 1e-12);
    assert!(!LAYOUT.dial_mask_region.contains(&hole));
    assert!(build_outline(&RING).contains(&hole));
}

// ── Full layout ──

#[test]
fn test_layout_counts() {
    assert_eq!(LAYOUT.angle_gridlines.len(), 5);
    assert_eq!(LAYOUT.month_gridlines.len(), 9);
    assert_eq!(LAYOUT.hour_curves.len(), LAYOUT.hour_tracks.len());
}

#[test]
fn test_layout_curves_keep_endpoints() {
    for (curve, track) in LAYOUT.hour_curves.iter().zip(&LAYOUT.hour_tracks) {
        assert_eq!(curve.len(), track.points.len());
        assert_eq!(curve.first(), track.points.first());
        assert_eq!(curve.last(), track.points.last());
    }
}

#[test]
fn test_layout_month_lines_between_bounds() {
    for line in &LAYOUT.month_gridlines {
        assert_approx!(line.y0, LAYOUT.angle_gridlines[0].y0, 1e-12);
        assert_approx!(line.y1, LAYOUT.angle_gridlines[4].y0, 1e-12);
    }
}

#[test]
fn test_layout_json_keys() {
    let json = LAYOUT.to_json().unwrap();
    for key in [
        "angleGridlines",
        "monthGridlines",
        "hourTracks",
        "hourCurves",
        "dialMaskRegion",
    ] {
        assert!(json.contains(key), "missing {}", key);
    }
}

#[test]
fn test_layout_rejects_invalid_config() {
    let config = SundialConfig {
        reference_labels: vec!["only one".to_string()],
        ..Default::default()
    };
    assert!(matches!(
        build_layout(&config),
        Err(SundialError::LabelCountMismatch { dates: 9, labels: 1 })
    ));
}
