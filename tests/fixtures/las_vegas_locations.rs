//! Real Las Vegas locations used as route targets.

use routeline::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const WYNN: Location = Location::new("Wynn Las Vegas", 36.1263781, -115.1658180);
pub const BELLAGIO: Location = Location::new("Bellagio", 36.1126, -115.1767);
pub const CAESARS: Location = Location::new("Caesars Palace", 36.1162, -115.1745);
pub const MGM_GRAND: Location = Location::new("MGM Grand", 36.1023654, -115.1688720);
pub const LONGHORN: Location = Location::new("Longhorn Casino", 36.1070664, -115.0591256);

/// Roughly `meters` north of `coord`.
pub fn north_of(coord: Coordinate, meters: f64) -> Coordinate {
    Coordinate::new(coord.latitude + meters / 111_195.0, coord.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_vegas_area() {
        for loc in [WYNN, BELLAGIO, CAESARS, MGM_GRAND, LONGHORN] {
            assert!(loc.lat > 35.9 && loc.lat < 36.3, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(
                loc.lng > -115.4 && loc.lng < -114.8,
                "{} lng out of range: {}",
                loc.name,
                loc.lng
            );
        }
    }
}
