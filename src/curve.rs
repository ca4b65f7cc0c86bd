use crate::error::{Result, SundialError};
use crate::types::{Point, QuadraticSegment};

/// Smooths a sampled track into the on-curve points of a piecewise
/// quadratic path.
///
/// Interior entry `i` is the midpoint of sample `i` and sample `i + 1`;
/// the first and last samples are kept as they are. A track of `n`
/// points yields `n` points: both endpoints plus `n - 2` midpoints.
pub fn fit_quadratic_curve(points: &[Point]) -> Result<Vec<Point>> {
    if points.len() < 2 {
        return Err(SundialError::TrackTooShort(points.len()));
    }
    let mut fitted = Vec::with_capacity(points.len());
    fitted.push(points[0]);
    fitted.extend(points[1..].windows(2).map(|w| w[0].midpoint(&w[1])));
    fitted.push(points[points.len() - 1]);
    Ok(fitted)
}

/// Expands a track into the segments a renderer strokes after moving to
/// the first sample. Each interior sample bends the path while the
/// fitted midpoint ends the segment, so corners are rounded. The final
/// segment degenerates onto the last sample.
pub fn quadratic_segments(points: &[Point]) -> Result<Vec<QuadraticSegment>> {
    let fitted = fit_quadratic_curve(points)?;
    Ok(points
        .iter()
        .zip(fitted.iter())
        .skip(1)
        .map(|(sample, end)| QuadraticSegment {
            control: *sample,
            end: *end,
        })
        .collect())
}
