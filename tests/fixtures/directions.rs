//! Directions payload builders.

use routeline::Coordinate;
use routeline::directions::{DirectionsResponse, Leg, RouteDescription, STATUS_OK, Step};
use routeline::polyline::Polyline;

/// `n` evenly spaced points from `from` to `to`, snapped to the 1e-5 grid
/// so they survive polyline encoding unchanged.
pub fn straight_line(from: Coordinate, to: Coordinate, n: usize) -> Vec<Coordinate> {
    let snap = |v: f64| (v * 1e5).round() / 1e5;
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Coordinate::new(
                snap(from.latitude + (to.latitude - from.latitude) * t),
                snap(from.longitude + (to.longitude - from.longitude) * t),
            )
        })
        .collect()
}

pub fn encode(points: &[Coordinate]) -> String {
    Polyline::new(points.to_vec())
        .encode()
        .expect("fixture points are in range")
}

/// Successful response for a two-point request.
pub fn single_leg_response(points: &[Coordinate], meters: f64, seconds: f64) -> DirectionsResponse {
    DirectionsResponse {
        code: STATUS_OK.to_string(),
        message: None,
        routes: vec![RouteDescription {
            geometry: encode(points),
            distance: meters,
            duration: seconds,
            legs: vec![Leg {
                distance: meters,
                duration: seconds,
                steps: vec![Step {
                    geometry: encode(points),
                }],
            }],
        }],
    }
}

/// Successful response whose legs are made of the given steps.
pub fn multi_leg_response(
    legs: &[Vec<Vec<Coordinate>>],
    meters: f64,
    seconds: f64,
) -> DirectionsResponse {
    let share = legs.len().max(1) as f64;
    DirectionsResponse {
        code: STATUS_OK.to_string(),
        message: None,
        routes: vec![RouteDescription {
            geometry: String::new(),
            distance: meters,
            duration: seconds,
            legs: legs
                .iter()
                .map(|steps| Leg {
                    distance: meters / share,
                    duration: seconds / share,
                    steps: steps
                        .iter()
                        .map(|points| Step {
                            geometry: encode(points),
                        })
                        .collect(),
                })
                .collect(),
        }],
    }
}

pub fn status_response(code: &str) -> DirectionsResponse {
    DirectionsResponse {
        code: code.to_string(),
        message: Some("no route found".to_string()),
        routes: Vec::new(),
    }
}
