//! Route model shared by the routing adapters, the fallback estimator, and
//! the planner.

use serde::{Deserialize, Serialize};

use crate::geo_point::GeoPoint;
use crate::polyline::{self, Polyline, PolylineError};

/// Route geometry as a routing service may return it.
///
/// Services send either the compact encoded string or an already-decoded
/// coordinate list. Only the `Encoded` variant goes through the polyline
/// decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteGeometry {
    Encoded(String),
    /// Points in `{lat, lng}` form (or `[lat, lng]` pairs).
    Decoded(Vec<GeoPoint>),
    /// GeoJSON LineString; coordinates are `[lng, lat]`.
    GeoJson { coordinates: Vec<[f64; 2]> },
}

impl RouteGeometry {
    pub fn coordinates(&self) -> Result<Polyline, PolylineError> {
        match self {
            RouteGeometry::Encoded(encoded) => polyline::decode(encoded),
            RouteGeometry::Decoded(points) => Ok(Polyline::new(points.clone())),
            RouteGeometry::GeoJson { coordinates } => Ok(Polyline::new(
                coordinates.iter().copied().map(GeoPoint::from_lng_lat).collect(),
            )),
        }
    }

    pub fn into_coordinates(self) -> Result<Polyline, PolylineError> {
        match self {
            RouteGeometry::Decoded(points) => Ok(Polyline::new(points)),
            other => other.coordinates(),
        }
    }
}

impl Default for RouteGeometry {
    fn default() -> Self {
        RouteGeometry::Decoded(Vec::new())
    }
}

/// Totals for a whole route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Statute miles.
    #[serde(rename = "distance", default)]
    pub distance_miles: f64,
    #[serde(rename = "duration", default)]
    pub duration_secs: f64,
}

impl RouteSummary {
    pub fn duration_hours(&self) -> f64 {
        self.duration_secs / 3600.0
    }
}

/// Instruction type as numbered by OpenRouteService.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Maneuver {
    Left,
    Right,
    SharpLeft,
    SharpRight,
    SlightLeft,
    SlightRight,
    #[default]
    Straight,
    EnterRoundabout,
    ExitRoundabout,
    UTurn,
    Goal,
    Depart,
    KeepLeft,
    KeepRight,
    Unknown(u8),
}

impl From<u8> for Maneuver {
    fn from(code: u8) -> Self {
        match code {
            0 => Maneuver::Left,
            1 => Maneuver::Right,
            2 => Maneuver::SharpLeft,
            3 => Maneuver::SharpRight,
            4 => Maneuver::SlightLeft,
            5 => Maneuver::SlightRight,
            6 => Maneuver::Straight,
            7 => Maneuver::EnterRoundabout,
            8 => Maneuver::ExitRoundabout,
            9 => Maneuver::UTurn,
            10 => Maneuver::Goal,
            11 => Maneuver::Depart,
            12 => Maneuver::KeepLeft,
            13 => Maneuver::KeepRight,
            other => Maneuver::Unknown(other),
        }
    }
}

impl From<Maneuver> for u8 {
    fn from(maneuver: Maneuver) -> Self {
        match maneuver {
            Maneuver::Left => 0,
            Maneuver::Right => 1,
            Maneuver::SharpLeft => 2,
            Maneuver::SharpRight => 3,
            Maneuver::SlightLeft => 4,
            Maneuver::SlightRight => 5,
            Maneuver::Straight => 6,
            Maneuver::EnterRoundabout => 7,
            Maneuver::ExitRoundabout => 8,
            Maneuver::UTurn => 9,
            Maneuver::Goal => 10,
            Maneuver::Depart => 11,
            Maneuver::KeepLeft => 12,
            Maneuver::KeepRight => 13,
            Maneuver::Unknown(code) => code,
        }
    }
}

/// One turn-by-turn step as sent by the routing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    #[serde(default)]
    pub instruction: String,
    #[serde(rename = "distance", default)]
    pub distance_miles: f64,
    #[serde(rename = "duration", default)]
    pub duration_secs: f64,
    #[serde(rename = "type", default)]
    pub maneuver: Maneuver,
}

/// A route as returned by a provider, geometry still in wire form.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub geometry: RouteGeometry,
    pub summary: RouteSummary,
    pub steps: Vec<RouteStep>,
    /// Set when the route is a straight-line estimate rather than a road route.
    pub fallback: bool,
}

impl Route {
    /// Numbered direction list for display.
    pub fn directions(&self) -> Vec<Direction> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| Direction::from_step(index, step))
            .collect()
    }

    /// Decodes the geometry and produces the result handed to the map layer.
    pub fn into_planned(self, provider: &str) -> Result<PlannedRoute, PolylineError> {
        let directions = self.directions();
        let coordinates = self.geometry.into_coordinates()?;
        Ok(PlannedRoute {
            provider: provider.to_string(),
            coordinates,
            summary: self.summary,
            directions,
            fallback: self.fallback,
        })
    }
}

/// Display form of a [`RouteStep`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Direction {
    pub index: usize,
    pub instruction: String,
    pub distance_miles: f64,
    pub duration_minutes: i64,
    pub maneuver: Maneuver,
}

impl Direction {
    fn from_step(index: usize, step: &RouteStep) -> Self {
        Self {
            index,
            instruction: step.instruction.clone(),
            distance_miles: step.distance_miles,
            duration_minutes: (step.duration_secs / 60.0).round() as i64,
            maneuver: step.maneuver,
        }
    }
}

/// Fully decoded route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    /// Name of the provider that produced the route.
    pub provider: String,
    pub coordinates: Polyline,
    pub summary: RouteSummary,
    pub directions: Vec<Direction>,
    pub fallback: bool,
}

/// Directions payload shared by the backend and OpenRouteService:
/// `{ routes: [ { geometry, summary, segments: [ { steps } ] } ] }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<WireRoute>,
}

impl DirectionsResponse {
    pub fn into_first_route(self) -> Option<Route> {
        self.routes.into_iter().next().map(Route::from)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRoute {
    #[serde(default)]
    geometry: RouteGeometry,
    #[serde(default)]
    summary: RouteSummary,
    #[serde(default)]
    segments: Vec<WireSegment>,
}

#[derive(Debug, Deserialize)]
struct WireSegment {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

impl From<WireRoute> for Route {
    fn from(wire: WireRoute) -> Self {
        Self {
            geometry: wire.geometry,
            summary: wire.summary,
            steps: wire
                .segments
                .into_iter()
                .flat_map(|segment| segment.steps)
                .collect(),
            fallback: false,
        }
    }
}
