//! Error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}, expected #rrggbb")]
    InvalidHex(String),
}

/// Encoded polyline that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("failed to decode polyline: {0}")]
    Decode(String),

    #[error("failed to encode polyline: {0}")]
    Encode(String),
}

/// Failure reported by, or while talking to, a directions service.
#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("directions request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("directions service returned {code}: {message}")]
    Status { code: String, message: String },
}

/// Reasons the fine route path produced nothing.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Directions(#[from] DirectionsError),

    #[error("directions response contains no route")]
    NoRoute,

    #[error("failed to decode leg geometry: {0}")]
    Geometry(#[from] PolylineError),

    #[error("route geometry has fewer than two points")]
    EmptyGeometry,

    #[error("no color pair for leg {leg}")]
    MissingColors { leg: usize },
}
