//! OpenRouteService directions adapter (heavy goods vehicle profile).
//!
//! Used directly when the backend cannot produce a route.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::backend::{join_url, read_json};
use crate::error::RouteError;
use crate::geo_point::GeoPoint;
use crate::route::{DirectionsResponse, Route};
use crate::traits::RouteProvider;

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub api_key: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            api_key: String::new(),
            profile: "driving-hgv".to_string(),
            timeout_secs: 15,
        }
    }
}

impl OrsConfig {
    /// Reads `ORS_API_KEY` and `ORS_BASE_URL`. Returns `None` without a key.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("ORS_API_KEY").ok().filter(|key| !key.is_empty())?;
        let defaults = Self::default();
        Some(Self {
            base_url: std::env::var("ORS_BASE_URL").unwrap_or(defaults.base_url),
            api_key,
            ..defaults
        })
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, RouteError> {
        if config.api_key.is_empty() {
            return Err(RouteError::Config("OpenRouteService API key is empty".to_string()));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn directions_url(&self) -> String {
        join_url(
            &self.config.base_url,
            &format!("v2/directions/{}", self.config.profile),
        )
    }
}

impl RouteProvider for OrsClient {
    fn name(&self) -> &str {
        "openrouteservice"
    }

    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, RouteError> {
        let body = DirectionsRequest::new(start, end);
        let url = self.directions_url();
        debug!(%url, ?start, ?end, "requesting ORS directions");

        let response: DirectionsResponse = read_json(
            self.client
                .post(url)
                .header(reqwest::header::AUTHORIZATION, self.config.api_key.as_str())
                .json(&body)
                .send()?,
        )?;

        response
            .into_first_route()
            .ok_or_else(|| RouteError::NoRoute("openrouteservice returned no routes".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    /// `[lng, lat]` pairs.
    coordinates: [[f64; 2]; 2],
    instructions: bool,
    units: &'static str,
}

impl DirectionsRequest {
    fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            coordinates: [start.to_lng_lat(), end.to_lng_lat()],
            instructions: true,
            units: "mi",
        }
    }
}
