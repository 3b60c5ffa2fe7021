//! Route pipeline: cache lookup, fetch, partition into colored segments.
//!
//! Online requests go through the [`RouteCache`] and, on a miss, the
//! directions service. Offline requests get an abstract route made of
//! straight lines between the targets, which is never cached. Every
//! failure on the way is logged and turned into `None`.

use tracing::{debug, warn};

use crate::cache::RouteCache;
use crate::color::{ColorPair, blend_steps};
use crate::coordinate::Coordinate;
use crate::directions::RouteDescription;
use crate::error::RouteError;
use crate::geodesy::{distance, literal, time_literal};
use crate::polyline::Polyline;
use crate::route::{NO_INTERNET, RouteResult, RouteSegment};
use crate::traits::{Connectivity, DirectionsProvider, SettingsStore, TravelMode};

/// Segments per leg of a fetched route.
const SEGMENTS_PER_LEG: usize = 5;

/// Points each abstract leg is subdivided into.
const ABSTRACT_POINTS: usize = 5;

/// Color fraction increment between consecutive segments of a leg.
const STEP: f64 = 0.2;

pub struct RoutePipeline<D, N, S> {
    directions: D,
    connectivity: N,
    settings: S,
    cache: RouteCache,
}

impl<D, N, S> RoutePipeline<D, N, S>
where
    D: DirectionsProvider,
    N: Connectivity,
    S: SettingsStore,
{
    pub fn new(directions: D, connectivity: N, settings: S, cache: RouteCache) -> Self {
        Self {
            directions,
            connectivity,
            settings,
            cache,
        }
    }

    /// Builds a colored route through `targets`.
    ///
    /// `colors[i]` shades the leg from `targets[i]` to `targets[i + 1]`.
    /// Returns `None` for fewer than two targets or when the route could not
    /// be produced.
    pub fn get_route(
        &mut self,
        targets: &[Coordinate],
        colors: &[ColorPair],
    ) -> Option<RouteResult> {
        if targets.len() < 2 {
            return None;
        }

        if self.connectivity.is_connected() {
            self.fine(targets, colors)
        } else {
            debug!(targets = targets.len(), "offline, drawing abstract route");
            abstract_route(targets, colors)
        }
    }

    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut RouteCache {
        &mut self.cache
    }

    fn fine(&mut self, targets: &[Coordinate], colors: &[ColorPair]) -> Option<RouteResult> {
        if let Some(route) = self.cache.exists(targets) {
            return Some(route);
        }

        match self.fetch(targets, colors) {
            Ok(result) => {
                self.cache.push(targets, result.clone());
                Some(result)
            }
            Err(err) => {
                warn!(error = %err, targets = targets.len(), "fine route failed");
                None
            }
        }
    }

    fn fetch(
        &self,
        targets: &[Coordinate],
        colors: &[ColorPair],
    ) -> Result<RouteResult, RouteError> {
        let mode = TravelMode::from_settings(&self.settings);

        // Origin, waypoints, destination: the request keeps the target order.
        let route = self.directions.directions(targets, mode)?.into_route()?;
        let legs = decode_legs(&route, targets.len())?;

        let mut lines = Vec::new();
        for (leg, points) in legs.iter().enumerate() {
            let leg_colors = colors.get(leg).ok_or(RouteError::MissingColors { leg })?;
            lines.extend(partition_leg(points, leg_colors));
        }

        if lines.is_empty() {
            return Err(RouteError::EmptyGeometry);
        }

        Ok(RouteResult {
            lines,
            targets: targets.to_vec(),
            literal: literal(route.distance / 1000.0),
            duration: time_literal(route.duration),
            meters: Some(route.distance),
        })
    }
}

/// One point sequence per leg: the overview geometry for a two-point
/// request, concatenated step geometries otherwise.
fn decode_legs(
    route: &RouteDescription,
    targets: usize,
) -> Result<Vec<Vec<Coordinate>>, RouteError> {
    if targets == 2 {
        return Ok(vec![Polyline::decode(&route.geometry)?.into_points()]);
    }

    route
        .legs
        .iter()
        .map(|leg| {
            let mut points = Vec::new();
            for step in &leg.steps {
                points.extend(Polyline::decode(&step.geometry)?.into_points());
            }
            Ok::<_, RouteError>(points)
        })
        .collect()
}

/// Splits a leg into five segments of `len / 5` points each, consecutive
/// segments sharing their boundary point. Trailing points go to the fifth
/// segment.
///
/// Legs shorter than five points get one segment per point pair.
pub fn partition_leg(points: &[Coordinate], colors: &ColorPair) -> Vec<RouteSegment> {
    let partition = points.len() / SEGMENTS_PER_LEG;

    if partition == 0 {
        return points
            .windows(2)
            .enumerate()
            .map(|(step, pair)| {
                RouteSegment::new(pair.to_vec(), blend_steps(step as f64 * STEP, colors))
            })
            .collect();
    }

    (0..SEGMENTS_PER_LEG)
        .filter_map(|step| {
            let start = step * partition;
            let end = if step == SEGMENTS_PER_LEG - 1 {
                points.len()
            } else {
                start + partition + 1
            };

            // A five-point leg leaves a lone last point already covered by segment four.
            if end - start < 2 {
                return None;
            }

            Some(RouteSegment::new(
                points[start..end].to_vec(),
                blend_steps(step as f64 * STEP, colors),
            ))
        })
        .collect()
}

/// Straight-line route used when offline.
///
/// Each leg is subdivided into five points drawn as four segments. Returns
/// `None` only when a leg has no color pair.
pub fn abstract_route(targets: &[Coordinate], colors: &[ColorPair]) -> Option<RouteResult> {
    let mut km = 0.0;
    let mut lines = Vec::new();

    for (leg, pair) in targets.windows(2).enumerate() {
        let Some(leg_colors) = colors.get(leg) else {
            warn!(leg, "abstract route is missing a color pair");
            return None;
        };

        km += distance(pair[0], pair[1]);

        let points = subdivide(pair[0], pair[1]);
        lines.extend(points.windows(2).enumerate().map(|(step, sub)| {
            RouteSegment::new(sub.to_vec(), blend_steps(step as f64 * STEP, leg_colors))
        }));
    }

    Some(RouteResult {
        lines,
        targets: Vec::new(),
        literal: literal(km),
        duration: NO_INTERNET.to_string(),
        meters: None,
    })
}

/// Inserts midpoints between every adjacent pair until the line has
/// [`ABSTRACT_POINTS`] points (2, 3, 5).
fn subdivide(from: Coordinate, to: Coordinate) -> Vec<Coordinate> {
    let mut points = vec![from, to];

    while points.len() < ABSTRACT_POINTS {
        let mut next = Vec::with_capacity(points.len() * 2 - 1);
        for pair in points.windows(2) {
            next.push(pair[0]);
            next.push(pair[0].midpoint(&pair[1]));
        }
        next.push(to);
        points = next;
    }

    points
}
