//! Route objects handed to the map renderer.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Duration shown for routes synthesized without connectivity.
pub const NO_INTERNET: &str = "no internet";

/// One drawable, single-colored sub-line of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// At least two points.
    pub points: Vec<Coordinate>,
    /// `#rrggbb`.
    pub color: String,
}

impl RouteSegment {
    pub fn new(points: Vec<Coordinate>, color: String) -> Self {
        Self { points, color }
    }
}

/// A complete route: colored segments plus distance and duration labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub lines: Vec<RouteSegment>,
    /// Waypoints the route was requested for; empty for abstract routes.
    pub targets: Vec<Coordinate>,
    pub literal: String,
    /// Formatted duration, or [`NO_INTERNET`].
    pub duration: String,
    /// Total distance in meters, only known for routes from a directions service.
    pub meters: Option<f64>,
}

impl RouteResult {
    /// True for routes synthesized offline.
    pub fn is_abstract(&self) -> bool {
        self.meters.is_none()
    }
}
