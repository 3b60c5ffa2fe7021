//! Polyline representation for route geometries.
//!
//! Directions services ship geometry in the compact encoded-polyline
//! format (precision 5). Decoding happens here, at the boundary; the rest
//! of the crate only sees coordinate sequences.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::PolylineError;

/// Decimal places of the encoded format used by directions services.
const PRECISION: u32 = 5;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        let line = polyline::decode_polyline(encoded, PRECISION)
            .map_err(|err| PolylineError::Decode(err.to_string()))?;

        // x is longitude, y is latitude.
        let points = line
            .coords()
            .map(|coord| Coordinate::new(coord.y, coord.x))
            .collect();

        Ok(Self { points })
    }

    /// Encodes the points, rounding each component to 1e-5 degrees.
    pub fn encode(&self) -> Result<String, PolylineError> {
        let coords = self.points.iter().map(|point| Coord {
            x: point.longitude,
            y: point.latitude,
        });

        polyline::encode_coordinates(coords, PRECISION)
            .map_err(|err| PolylineError::Encode(err.to_string()))
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Coordinate> {
        vec![
            Coordinate::new(38.5, -120.2),
            Coordinate::new(40.7, -120.95),
            Coordinate::new(43.252, -126.453),
        ]
    }

    #[test]
    fn test_decode_reference_polyline() {
        let polyline = Polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
        assert_eq!(polyline.points(), &sample()[..]);
    }

    #[test]
    fn test_encode_reference_polyline() {
        let polyline = Polyline::new(sample());
        assert_eq!(polyline.encode().unwrap(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_decode_keeps_lat_lng_order() {
        let polyline = Polyline::decode("_p~iF~ps|U").unwrap();
        assert_eq!(polyline.points(), &[Coordinate::new(38.5, -120.2)]);
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::decode("").unwrap();
        assert!(polyline.points().is_empty());
        assert_eq!(Polyline::new(vec![]).encode().unwrap(), "");
    }

    #[test]
    fn test_decode_missing_longitude() {
        let err = Polyline::decode("_p~iF").unwrap_err();
        assert!(matches!(err, PolylineError::Decode(_)));
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = Polyline::decode("_p~iF ps|U").unwrap_err();
        assert!(matches!(err, PolylineError::Decode(_)));
    }

    #[test]
    fn test_encode_out_of_range() {
        let polyline = Polyline::new(vec![Coordinate::new(95.0, 10.0)]);
        assert!(matches!(polyline.encode(), Err(PolylineError::Encode(_))));
    }

    #[test]
    fn test_into_points() {
        let polyline = Polyline::new(sample());
        assert_eq!(polyline.into_points(), sample());
    }
}
