//! HTTP adapter for the truck routing backend: routes, geocoding, and the
//! truck stop / restriction data sets.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RouteError;
use crate::geo_point::GeoPoint;
use crate::poi::{Restriction, TruckStop};
use crate::route::{DirectionsResponse, Route};
use crate::traits::{GeocodeResult, Geocoder, MIN_GEOCODE_QUERY_LEN, RouteProvider};

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8001/api`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001/api".to_string(),
            timeout_secs: 15,
        }
    }
}

impl BackendConfig {
    /// Reads `TRUCK_ROUTE_API_URL` and `TRUCK_ROUTE_TIMEOUT_SECS`, keeping
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("TRUCK_ROUTE_API_URL").unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("TRUCK_ROUTE_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, RouteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Asks the backend to populate its demo data set.
    pub fn seed_data(&self) -> Result<(), RouteError> {
        self.client
            .post(self.url("seed-data"))
            .send()
            .and_then(|resp| resp.error_for_status())?;
        Ok(())
    }

    pub fn truck_stops(&self) -> Result<Vec<TruckStop>, RouteError> {
        self.get_json("truck-stops")
    }

    pub fn restrictions(&self) -> Result<Vec<Restriction>, RouteError> {
        self.get_json("restrictions")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RouteError> {
        let url = self.url(path);
        debug!(%url, "backend GET");
        read_json(self.client.get(url).send()?)
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }
}

impl RouteProvider for BackendClient {
    fn name(&self) -> &str {
        "backend"
    }

    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, RouteError> {
        let body = CalculateRouteRequest {
            start_lat: start.lat,
            start_lng: start.lng,
            end_lat: end.lat,
            end_lng: end.lng,
        };
        let url = self.url("calculate-route");
        debug!(%url, ?start, ?end, "requesting truck route");

        let response: CalculateRouteResponse =
            read_json(self.client.post(url).json(&body).send()?)?;
        response.into_route()
    }
}

impl Geocoder for BackendClient {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, RouteError> {
        let query = query.trim();
        if query.chars().count() < MIN_GEOCODE_QUERY_LEN {
            return Ok(Vec::new());
        }

        let response: GeocodeResponse = read_json(
            self.client
                .get(self.url("geocode"))
                .query(&[("address", query)])
                .send()?,
        )?;
        Ok(response.results)
    }
}

/// Joins a base URL and a relative path with exactly one slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Like `error_for_status`, but keeps the response body, which carries the
/// service's own error message.
pub(crate) fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, RouteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().unwrap_or_default();
        Err(RouteError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T, RouteError> {
    Ok(check_status(response)?.json::<T>()?)
}

#[derive(Debug, Serialize)]
struct CalculateRouteRequest {
    start_lat: f64,
    start_lng: f64,
    end_lat: f64,
    end_lng: f64,
}

#[derive(Debug, Deserialize)]
struct CalculateRouteResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    route: Option<DirectionsResponse>,
    #[serde(default)]
    error: Option<String>,
}

impl CalculateRouteResponse {
    fn into_route(self) -> Result<Route, RouteError> {
        if !self.success {
            return Err(RouteError::NoRoute(
                self.error
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ));
        }
        self.route
            .and_then(DirectionsResponse::into_first_route)
            .ok_or_else(|| RouteError::NoRoute("backend returned no routes".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}
