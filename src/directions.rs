//! HTTP adapter for Mapbox / OSRM style directions services.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{DirectionsError, RouteError};
use crate::traits::{DirectionsProvider, TravelMode};

/// Status code of a successful directions response.
pub const STATUS_OK: &str = "Ok";

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Everything before the profile segment, without a trailing slash.
    pub base_url: String,
    pub access_token: Option<String>,
    pub driving_profile: String,
    pub walking_profile: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com/directions/v5/mapbox".to_string(),
            access_token: None,
            driving_profile: "driving".to_string(),
            walking_profile: "walking".to_string(),
            timeout_secs: 10,
        }
    }
}

impl DirectionsConfig {
    /// Settings for a self-hosted OSRM `route/v1` endpoint.
    pub fn osrm(base_url: impl Into<String>) -> Self {
        Self {
            base_url: format!("{}/route/v1", base_url.into()),
            access_token: None,
            driving_profile: "car".to_string(),
            walking_profile: "foot".to_string(),
            timeout_secs: 10,
        }
    }

    fn profile(&self, mode: TravelMode) -> &str {
        match mode {
            TravelMode::Driving => &self.driving_profile,
            TravelMode::Walking => &self.walking_profile,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Request URL for `coordinates` in the given mode.
    pub fn url(&self, coordinates: &[Coordinate], mode: TravelMode) -> String {
        let coords = coordinates
            .iter()
            .map(|coord| format!("{:.6},{:.6}", coord.longitude, coord.latitude))
            .collect::<Vec<_>>()
            .join(";");

        let mut url = format!(
            "{}/{}/{}.json?steps=true&geometries=polyline",
            self.config.base_url,
            self.config.profile(mode),
            coords
        );
        if let Some(token) = &self.config.access_token {
            url.push_str("&access_token=");
            url.push_str(token);
        }
        url
    }
}

impl DirectionsProvider for DirectionsClient {
    fn directions(
        &self,
        coordinates: &[Coordinate],
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = self.url(coordinates, mode);
        debug!(points = coordinates.len(), ?mode, "requesting directions");

        // Error bodies carry a vendor code, so the status line is not checked here.
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.json::<DirectionsResponse>())?;

        Ok(body)
    }
}

/// Top-level directions payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteDescription>,
}

impl DirectionsResponse {
    /// First route option of a successful response.
    pub fn into_route(self) -> Result<RouteDescription, RouteError> {
        if self.code != STATUS_OK {
            return Err(DirectionsError::Status {
                code: self.code,
                message: self.message.unwrap_or_default(),
            }
            .into());
        }

        self.routes.into_iter().next().ok_or(RouteError::NoRoute)
    }
}

/// One route option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescription {
    /// Encoded polyline of the whole route.
    #[serde(default)]
    pub geometry: String,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Route portion between two consecutive requested coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Encoded polyline of this maneuver.
    pub geometry: String,
}
