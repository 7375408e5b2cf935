use thiserror::Error;

use crate::limits;
use crate::model::LatLng;

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("parameter '{0}' must be finite")]
    NonFinite(&'static str),
    #[error("parameter '{param}' out of range")]
    OutOfRange { param: &'static str, min: f64, max: f64, got: f64 },
    #[error("polygon already holds {max} points")]
    TooManyPoints { max: usize },
    #[error("set already holds {max} polygons")]
    TooManyPolygons { max: usize },
    #[error("invalid polygon index {index} (count {count})")]
    InvalidIndex { index: usize, count: usize },
    #[error("config: {0}")]
    Config(String),
}

impl EditError {
    /// Stable machine-readable code, mirrored in the JS error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            EditError::NonFinite(_) => "non_finite",
            EditError::OutOfRange { .. } => "out_of_range",
            EditError::TooManyPoints { .. } => "too_many_points",
            EditError::TooManyPolygons { .. } => "too_many_polygons",
            EditError::InvalidIndex { .. } => "invalid_index",
            EditError::Config(_) => "config_parse",
        }
    }
}

impl From<serde_json::Error> for EditError {
    fn from(e: serde_json::Error) -> Self {
        EditError::Config(e.to_string())
    }
}

pub(crate) fn check_point(p: LatLng, len: usize) -> Result<(), EditError> {
    if !p.lat.is_finite() {
        return Err(EditError::NonFinite("lat"));
    }
    if !p.lng.is_finite() {
        return Err(EditError::NonFinite("lng"));
    }
    if !limits::in_lat_bounds(p.lat) {
        return Err(EditError::OutOfRange { param: "lat", min: limits::LAT_MIN, max: limits::LAT_MAX, got: p.lat });
    }
    if !limits::in_lng_bounds(p.lng) {
        return Err(EditError::OutOfRange { param: "lng", min: limits::LNG_MIN, max: limits::LNG_MAX, got: p.lng });
    }
    if len >= limits::MAX_POINTS {
        return Err(EditError::TooManyPoints { max: limits::MAX_POINTS });
    }
    Ok(())
}
