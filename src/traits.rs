//! Seams to the external collaborators: route computation and geocoding.
//!
//! Concrete HTTP adapters live in `backend` and `ors`; tests and callers can
//! plug in their own implementations.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::geo_point::GeoPoint;
use crate::route::Route;

/// Computes a truck-legal route between two points.
pub trait RouteProvider {
    /// Short name used in logs and on [`crate::route::PlannedRoute`].
    fn name(&self) -> &str;

    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, RouteError>;
}

/// Resolves a free-text address into candidate points.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, RouteError>;
}

/// Minimum query length worth sending to a geocoder.
pub const MIN_GEOCODE_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
}

impl GeocodeResult {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
