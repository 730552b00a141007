//! Geographic helpers: points on the map and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Latitude offset (degrees) that covers `km` along a meridian.
pub fn degrees_of_latitude(km: f64) -> f64 {
    (km / EARTH_RADIUS_KM).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = GeoPoint::new(4.7016, -74.1469);
        assert!(p.distance_km(&p).abs() < 1e-9);
    }

    #[test]
    fn test_bogota_to_medellin() {
        // BOG -> MDE is roughly 215 km
        let bog = GeoPoint::new(4.7016, -74.1469);
        let mde = GeoPoint::new(6.1645, -75.4231);
        let d = bog.distance_km(&mde);
        assert!((200.0..230.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(-4.1936, -69.9432);
        let b = GeoPoint::new(12.5836, -81.7112);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_meridian_offset_round_trips() {
        let a = GeoPoint::new(4.0, -74.0);
        let b = GeoPoint::new(4.0 + degrees_of_latitude(15.0), -74.0);
        assert!((a.distance_km(&b) - 15.0).abs() < 1e-6);
    }
}
