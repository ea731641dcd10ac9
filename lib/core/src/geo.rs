//! Great-circle distance between coordinates
//!
//! Distances use the haversine formula on a sphere with a fixed Earth radius.
//! Inputs are degrees; results are kilometers.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the haversine distance between two coordinates
///
/// # Arguments
/// * `lat1`, `lon1` - First coordinate in degrees
/// * `lat2`, `lon2` - Second coordinate in degrees
///
/// # Returns
/// Distance in kilometers, always >= 0 for finite inputs
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1.0 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to another point in kilometers
    #[inline]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kebun Raya Bogor and Monas, Jakarta
    const BOGOR: GeoPoint = GeoPoint { latitude: -6.5976, longitude: 106.7996 };
    const JAKARTA: GeoPoint = GeoPoint { latitude: -6.1754, longitude: 106.8272 };

    #[test]
    fn test_zero_distance_to_self() {
        assert_eq!(BOGOR.distance_km(&BOGOR), 0.0);
        assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = BOGOR.distance_km(&JAKARTA);
        let back = JAKARTA.distance_km(&BOGOR);
        assert_eq!(there, back);
    }

    #[test]
    fn test_bogor_to_jakarta() {
        let d = BOGOR.distance_km(&JAKARTA);
        assert!((d - 47.0).abs() < 1.0, "Expected ~47 km, got {}", d);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!(d.is_finite());
        assert!((d - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_finite_check() {
        assert!(BOGOR.is_finite());
        assert!(!GeoPoint::new(f64::NAN, 106.8).is_finite());
        assert!(!GeoPoint::new(-6.5, f64::INFINITY).is_finite());
    }
}
