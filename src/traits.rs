//! Collaborator seams for the route pipeline.
//!
//! The pipeline only depends on these traits; the HTTP implementations in
//! [`crate::directions`] and [`crate::connectivity`] are one option, tests
//! and host applications can supply their own.

use std::collections::HashMap;

use crate::coordinate::Coordinate;
use crate::directions::DirectionsResponse;
use crate::error::DirectionsError;

/// Settings key selecting [`TravelMode::Driving`].
pub const DRIVING_KEY: &str = "driving";

/// Reports whether the network is reachable.
pub trait Connectivity {
    fn is_connected(&self) -> bool;
}

impl<F> Connectivity for F
where
    F: Fn() -> bool,
{
    fn is_connected(&self) -> bool {
        self()
    }
}

/// Fetches a route description covering `coordinates` in order.
pub trait DirectionsProvider {
    fn directions(
        &self,
        coordinates: &[Coordinate],
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsError>;
}

impl<T> DirectionsProvider for &T
where
    T: DirectionsProvider + ?Sized,
{
    fn directions(
        &self,
        coordinates: &[Coordinate],
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        (**self).directions(coordinates, mode)
    }
}

/// Persisted user preferences.
pub trait SettingsStore {
    fn get_bool(&self, key: &str) -> bool;
}

impl SettingsStore for HashMap<String, bool> {
    fn get_bool(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

/// Directions profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Walking,
}

impl TravelMode {
    pub fn from_settings<S: SettingsStore + ?Sized>(settings: &S) -> Self {
        if settings.get_bool(DRIVING_KEY) {
            TravelMode::Driving
        } else {
            TravelMode::Walking
        }
    }
}
