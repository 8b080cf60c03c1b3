//! Crate error type.

use std::fmt;

use crate::geo_point::GeoPoint;
use crate::polyline::PolylineError;

#[derive(Debug)]
pub enum RouteError {
    /// Transport failure talking to a routing or data service.
    Http(reqwest::Error),
    /// Service answered with a non-success status.
    Status { status: u16, body: String },
    /// Route geometry could not be decoded.
    Geometry(PolylineError),
    /// Service answered but had no route to offer.
    NoRoute(String),
    /// A start or end point with non-finite coordinates.
    InvalidPoint(GeoPoint),
    Config(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Http(err) => write!(f, "request failed: {}", err),
            RouteError::Status { status, body } => {
                write!(f, "service returned status {}: {}", status, body)
            }
            RouteError::Geometry(err) => write!(f, "bad route geometry: {}", err),
            RouteError::NoRoute(reason) => write!(f, "no route: {}", reason),
            RouteError::InvalidPoint(point) => {
                write!(f, "invalid point ({}, {})", point.lat, point.lng)
            }
            RouteError::Config(reason) => write!(f, "configuration error: {}", reason),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Http(err) => Some(err),
            RouteError::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Http(err)
    }
}

impl From<PolylineError> for RouteError {
    fn from(err: PolylineError) -> Self {
        RouteError::Geometry(err)
    }
}
