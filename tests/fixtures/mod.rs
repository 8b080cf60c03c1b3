//! Test fixtures for truck-route-core.
//!
//! Provides realistic test data:
//! - Real truck stops and cities along US freight corridors
//! - Encoded geometries with known decodings
//! - One-shot local HTTP endpoints

pub mod corridor_locations;
pub mod http;

pub use corridor_locations::*;
pub use http::*;
