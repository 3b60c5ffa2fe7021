//! routeline: colored, cached routes through ordered waypoints.
//!
//! Routes come from a directions service when online and are reused from a
//! geospatial cache when a new request is close enough to a previous one.
//! Offline, a straight-line approximation is drawn instead.

pub mod cache;
pub mod color;
pub mod connectivity;
pub mod coordinate;
pub mod directions;
pub mod error;
pub mod geodesy;
pub mod pipeline;
pub mod polyline;
pub mod route;
pub mod traits;

pub use cache::{CacheTolerances, MatchStatus, RouteCache};
pub use color::{ColorPair, Rgb};
pub use coordinate::Coordinate;
pub use error::{ColorError, DirectionsError, PolylineError, RouteError};
pub use pipeline::RoutePipeline;
pub use route::{RouteResult, RouteSegment};
