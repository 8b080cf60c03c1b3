//! truck-route-core
//!
//! Route geometry codec, great-circle estimates, and the typed seams to the
//! truck routing backend.

pub mod backend;
pub mod error;
pub mod geo_point;
pub mod haversine;
pub mod ors;
pub mod planner;
pub mod poi;
pub mod polyline;
pub mod route;
pub mod traits;

pub use error::RouteError;
pub use geo_point::GeoPoint;
pub use polyline::{Polyline, PolylineError};
