//! Real locations along US freight corridors (I-15, I-40, I-80).
//!
//! Coordinates sourced from OpenStreetMap, rounded to five decimals so they
//! survive the polyline encoding exactly.

#![allow(dead_code)]

use truck_route_core::GeoPoint;

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

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

pub const NEW_YORK: Location = Location::new("New York City Hall", 40.7128, -74.006);
pub const LOS_ANGELES: Location = Location::new("Los Angeles City Hall", 34.0522, -118.2437);

// ============================================================================
// I-15 Las Vegas -> Barstow
// ============================================================================

pub const I15_SOUTHBOUND: &[Location] = &[
    Location::new("Las Vegas", 36.17497, -115.13722),
    Location::new("Jean", 35.77887, -115.32389),
    Location::new("Primm", 35.61027, -115.38972),
    Location::new("Baker", 35.26525, -116.07447),
    Location::new("Yermo", 34.90526, -116.82282),
    Location::new("Barstow", 34.89859, -117.02282),
];

// ============================================================================
// Truck stops
// ============================================================================

pub const TRUCK_STOPS: &[Location] = &[
    Location::new("Love's Travel Stop Barstow", 34.87446, -117.08558),
    Location::new("Pilot Travel Center Tehachapi", 35.13195, -118.44811),
    Location::new("TA Ontario", 34.06394, -117.55104),
    Location::new("Flying J Little America WY", 41.54285, -109.85874),
];

/// Worked example from the public polyline encoding reference.
pub const REFERENCE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

pub fn reference_points() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(38.5, -120.2),
        GeoPoint::new(40.7, -120.95),
        GeoPoint::new(43.252, -126.453),
    ]
}
