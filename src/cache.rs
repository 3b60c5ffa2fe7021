//! Geospatial cache of previously computed routes.
//!
//! Entries are keyed implicitly by their own `targets`. A lookup walks the
//! entries newest-first and classifies each candidate as a match, stale
//! (evicted on the spot) or incompatible (left alone). There is no TTL;
//! staleness is only discovered when a new query is compared against an
//! entry.

use tracing::debug;

use crate::coordinate::Coordinate;
use crate::geodesy::distance;
use crate::route::RouteResult;

/// Distance limits used to decide whether a cached route can be reused.
#[derive(Debug, Clone)]
pub struct CacheTolerances {
    /// Max destination drift (km) for two-point routes.
    pub destination_km: f64,
    /// Max origin drift (km), for both partitions.
    pub origin_km: f64,
    /// Max drift (km) of any non-origin point for multi-point routes.
    pub waypoint_km: f64,
}

impl Default for CacheTolerances {
    fn default() -> Self {
        Self {
            destination_km: 0.01,
            origin_km: 0.015,
            waypoint_km: 1.0,
        }
    }
}

/// Outcome of comparing a query against one cached entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Reuse the entry.
    Match,
    /// Same request drifted too far; evict.
    Stale,
    /// Different request; skip but keep.
    Incompatible,
}

/// Route cache split into two-point and multi-point partitions.
#[derive(Debug, Clone, Default)]
pub struct RouteCache {
    tolerances: CacheTolerances,
    pairs: Vec<RouteResult>,
    multi: Vec<RouteResult>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerances(tolerances: CacheTolerances) -> Self {
        Self {
            tolerances,
            ..Self::default()
        }
    }

    /// Stores a result in the partition selected by `targets.len()`.
    pub fn push(&mut self, targets: &[Coordinate], result: RouteResult) {
        if targets.len() > 2 {
            self.multi.push(result);
        } else {
            self.pairs.push(result);
        }
    }

    /// Looks up a reusable route, evicting stale entries met along the way.
    ///
    /// Evictions stick even when the lookup ends in a miss.
    pub fn exists(&mut self, targets: &[Coordinate]) -> Option<RouteResult> {
        if targets.len() < 2 {
            return None;
        }

        let multi = targets.len() > 2;
        let tolerances = &self.tolerances;
        let entries = if multi { &mut self.multi } else { &mut self.pairs };

        let mut i = entries.len();
        while i > 0 {
            i -= 1;
            let status = if multi {
                match_multiple(tolerances, targets, &entries[i].targets)
            } else {
                match_single(tolerances, targets, &entries[i].targets)
            };

            match status {
                MatchStatus::Match => {
                    debug!(index = i, multi, "route cache hit");
                    return Some(entries[i].clone());
                }
                MatchStatus::Stale => {
                    debug!(index = i, multi, "evicting stale cached route");
                    entries.remove(i);
                }
                MatchStatus::Incompatible => {}
            }
        }

        None
    }

    /// Number of cached two-point routes.
    pub fn pair_len(&self) -> usize {
        self.pairs.len()
    }

    /// Number of cached routes with three or more targets.
    pub fn multi_len(&self) -> usize {
        self.multi.len()
    }

    pub fn len(&self) -> usize {
        self.pairs.len() + self.multi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Two-point rule: destination within `destination_km`, then origin within
/// `origin_km`. Failing either makes the entry stale.
pub fn match_single(
    tolerances: &CacheTolerances,
    targets: &[Coordinate],
    cached: &[Coordinate],
) -> MatchStatus {
    if cached.len() < 2 || targets.len() < 2 {
        return MatchStatus::Incompatible;
    }

    if distance(targets[1], cached[1]) > tolerances.destination_km {
        return MatchStatus::Stale;
    }

    if distance(targets[0], cached[0]) <= tolerances.origin_km {
        MatchStatus::Match
    } else {
        MatchStatus::Stale
    }
}

/// Multi-point rule: an origin drift beyond `origin_km` is stale, any later
/// point beyond `waypoint_km` is a different request.
pub fn match_multiple(
    tolerances: &CacheTolerances,
    targets: &[Coordinate],
    cached: &[Coordinate],
) -> MatchStatus {
    if cached.is_empty() || targets.len() != cached.len() {
        return MatchStatus::Incompatible;
    }

    if distance(targets[0], cached[0]) > tolerances.origin_km {
        return MatchStatus::Stale;
    }

    let same = targets
        .iter()
        .zip(cached)
        .skip(1)
        .all(|(query, stored)| distance(*query, *stored) <= tolerances.waypoint_km);

    if same {
        MatchStatus::Match
    } else {
        MatchStatus::Incompatible
    }
}
