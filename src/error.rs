use thiserror::Error;

pub type Result<T> = std::result::Result<T, SundialError>;

#[derive(Debug, Error)]
pub enum SundialError {
    #[error("ring {field} must be a positive finite number, got {value}")]
    InvalidGeometry { field: &'static str, value: f64 },
    #[error("at least two reference dates are required, got {0}")]
    TooFewDates(usize),
    #[error("at least one sample hour is required")]
    NoHours,
    #[error("{labels} labels given for {dates} reference dates")]
    LabelCountMismatch { dates: usize, labels: usize },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("latitude must lie within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must lie within [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
    #[error("a curve needs at least two points, got {0}")]
    TrackTooShort(usize),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SundialError::InvalidGeometry { field, value })
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SundialError::NonFinite { field, value })
    }
}
