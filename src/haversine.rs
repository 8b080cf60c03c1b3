//! Great-circle distance and the straight-line route estimate (fallback when
//! every routing service is unavailable).
//!
//! Ignores roads entirely, so it is a lower bound on driving distance, but it
//! is always available.

use rayon::prelude::*;

use crate::error::RouteError;
use crate::geo_point::GeoPoint;
use crate::route::{Maneuver, Route, RouteGeometry, RouteStep, RouteSummary};
use crate::traits::RouteProvider;

/// Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Average truck speed assumption for time estimation.
pub const DEFAULT_SPEED_MPH: f64 = 55.0;

/// Paths at least this long have their legs summed in parallel.
const PARALLEL_MIN_POINTS: usize = 4096;

const FALLBACK_INSTRUCTION: &str = "Head directly to the destination";

/// Haversine distance between two points in statute miles.
///
/// Inputs are not range-checked.
pub fn haversine_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h just outside [0, 1] near the poles and antipodes,
    // and out-of-range latitudes make the cosine product negative.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Sum of leg distances along a path, in miles.
pub fn path_length_miles(points: &[GeoPoint]) -> f64 {
    let leg = |pair: &[GeoPoint]| haversine_miles(pair[0], pair[1]);

    if points.len() < PARALLEL_MIN_POINTS {
        points.windows(2).map(leg).sum()
    } else {
        points.par_windows(2).map(leg).sum()
    }
}

/// Straight-line route estimator.
///
/// Produces a two-point route with a single synthetic step, timed at an
/// assumed average speed.
#[derive(Debug, Clone)]
pub struct StraightLineEstimator {
    /// Assumed average driving speed in mph.
    pub speed_mph: f64,
}

impl Default for StraightLineEstimator {
    fn default() -> Self {
        Self {
            speed_mph: DEFAULT_SPEED_MPH,
        }
    }
}

impl StraightLineEstimator {
    pub fn new(speed_mph: f64) -> Self {
        Self { speed_mph }
    }

    /// Convert distance in miles to travel time in hours.
    pub fn duration_hours(&self, miles: f64) -> f64 {
        miles / self.speed_mph
    }

    pub fn estimate(&self, start: GeoPoint, end: GeoPoint) -> Route {
        let distance_miles = haversine_miles(start, end);
        let duration_secs = self.duration_hours(distance_miles) * 3600.0;

        Route {
            geometry: RouteGeometry::Decoded(vec![start, end]),
            summary: RouteSummary {
                distance_miles,
                duration_secs,
            },
            steps: vec![RouteStep {
                instruction: FALLBACK_INSTRUCTION.to_string(),
                distance_miles,
                duration_secs,
                maneuver: Maneuver::Depart,
            }],
            fallback: true,
        }
    }
}

impl RouteProvider for StraightLineEstimator {
    fn name(&self) -> &str {
        "straight-line"
    }

    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, RouteError> {
        Ok(self.estimate(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: GeoPoint = GeoPoint::new(40.7128, -74.0060);
    const LOS_ANGELES: GeoPoint = GeoPoint::new(34.0522, -118.2437);

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_miles(GeoPoint::new(36.1, -115.1), GeoPoint::new(36.1, -115.1));
        assert_eq!(dist, 0.0, "Same point should have zero distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // New York to Los Angeles, ~2445 miles on a 3956-mile sphere.
        let dist = haversine_miles(NEW_YORK, LOS_ANGELES);
        assert!(
            (dist - 2445.0).abs() < 24.45,
            "NY to LA should be ~2445mi, got {}",
            dist
        );
    }

    #[test]
    fn test_haversine_symmetric() {
        let forward = haversine_miles(NEW_YORK, LOS_ANGELES);
        let backward = haversine_miles(LOS_ANGELES, NEW_YORK);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_latitudes_stay_finite() {
        let dist = haversine_miles(GeoPoint::new(91.11, 0.0), GeoPoint::new(88.89, 180.0));
        assert!(dist.is_finite() && dist >= 0.0, "got {}", dist);

        for i in 0..2000 {
            let lat1 = 90.0 + 0.37 * i as f64;
            let from = GeoPoint::new(lat1, 0.0);
            let to = GeoPoint::new(180.0 - lat1, 180.0);
            let dist = haversine_miles(from, to);
            assert!(dist.is_finite() && dist >= 0.0, "{:?} -> {:?}: {}", from, to, dist);
        }
    }

    #[test]
    fn test_path_length_sums_legs() {
        let a = GeoPoint::new(36.17, -115.14);
        let b = GeoPoint::new(35.0, -116.0);
        let c = GeoPoint::new(34.05, -118.24);
        let expected = haversine_miles(a, b) + haversine_miles(b, c);
        assert!((path_length_miles(&[a, b, c]) - expected).abs() < 1e-9);
        assert_eq!(path_length_miles(&[a]), 0.0);
        assert_eq!(path_length_miles(&[]), 0.0);
    }

    #[test]
    fn test_path_length_parallel_matches_sequential() {
        let points: Vec<GeoPoint> = (0..PARALLEL_MIN_POINTS * 2)
            .map(|i| GeoPoint::new(0.0, i as f64 * 0.001))
            .collect();
        let sequential: f64 = points
            .windows(2)
            .map(|pair| haversine_miles(pair[0], pair[1]))
            .sum();
        let total = path_length_miles(&points);
        assert!((total - sequential).abs() < 1e-6);
    }

    #[test]
    fn test_reasonable_travel_time() {
        let estimator = StraightLineEstimator::new(55.0);
        // 110 miles at 55 mph = 2 hours
        assert_eq!(estimator.duration_hours(110.0), 2.0);
    }

    #[test]
    fn test_estimate_single_step() {
        let estimator = StraightLineEstimator::default();
        let route = estimator.estimate(NEW_YORK, LOS_ANGELES);

        assert!(route.fallback);
        assert_eq!(route.geometry, RouteGeometry::Decoded(vec![NEW_YORK, LOS_ANGELES]));
        assert_eq!(route.steps.len(), 1);
        assert_eq!(route.steps[0].distance_miles, route.summary.distance_miles);

        let hours = route.summary.duration_hours();
        assert!((hours - route.summary.distance_miles / 55.0).abs() < 1e-9);
    }
}
