//! Route planning with provider fallback.
//!
//! Providers are tried in order; the first one that returns a decodable
//! route wins. When every provider fails the straight-line estimate is used,
//! so a start/end pair with finite coordinates always yields a route.

use tracing::{debug, warn};

use crate::backend::{BackendClient, BackendConfig};
use crate::error::RouteError;
use crate::geo_point::GeoPoint;
use crate::haversine::StraightLineEstimator;
use crate::ors::{OrsClient, OrsConfig};
use crate::route::PlannedRoute;
use crate::traits::RouteProvider;

pub struct RoutePlanner {
    providers: Vec<Box<dyn RouteProvider + Send + Sync>>,
    estimator: StraightLineEstimator,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(StraightLineEstimator::default())
    }
}

impl RoutePlanner {
    pub fn new(estimator: StraightLineEstimator) -> Self {
        Self {
            providers: Vec::new(),
            estimator,
        }
    }

    /// Backend first, then OpenRouteService when configured.
    pub fn standard(backend: BackendConfig, ors: Option<OrsConfig>) -> Result<Self, RouteError> {
        let mut planner = Self::default().with_provider(BackendClient::new(backend)?);
        if let Some(ors) = ors {
            planner = planner.with_provider(OrsClient::new(ors)?);
        }
        Ok(planner)
    }

    /// Same as [`RoutePlanner::standard`] with both configs read from the environment.
    pub fn from_env() -> Result<Self, RouteError> {
        Self::standard(BackendConfig::from_env(), OrsConfig::from_env())
    }

    /// Appends a provider to the end of the chain.
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: RouteProvider + Send + Sync + 'static,
    {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    pub fn plan(&self, start: GeoPoint, end: GeoPoint) -> Result<PlannedRoute, RouteError> {
        for point in [start, end] {
            if !point.lat.is_finite() || !point.lng.is_finite() {
                return Err(RouteError::InvalidPoint(point));
            }
        }

        for provider in &self.providers {
            let planned = provider
                .route(start, end)
                .and_then(|route| route.into_planned(provider.name()).map_err(RouteError::from));

            match planned {
                Ok(planned) => {
                    debug!(
                        provider = provider.name(),
                        points = planned.coordinates.len(),
                        miles = planned.summary.distance_miles,
                        "route planned"
                    );
                    return Ok(planned);
                }
                Err(err) => {
                    warn!(provider = provider.name(), error = %err, "route provider failed");
                }
            }
        }

        warn!(
            providers = self.providers.len(),
            "no provider produced a route, using straight-line estimate"
        );
        let route = self.estimator.estimate(start, end);
        Ok(route.into_planned(self.estimator.name())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_uses_estimate() {
        let planner = RoutePlanner::default();
        let planned = planner
            .plan(GeoPoint::new(36.17, -115.14), GeoPoint::new(34.05, -118.24))
            .unwrap();

        assert!(planned.fallback);
        assert_eq!(planned.provider, "straight-line");
        assert_eq!(planned.coordinates.len(), 2);
        assert_eq!(planned.directions.len(), 1);
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let planner = RoutePlanner::default();
        let result = planner.plan(GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(1.0, 1.0));
        assert!(matches!(result, Err(RouteError::InvalidPoint(_))));
    }

    #[test]
    fn test_standard_chain_order() {
        let planner = RoutePlanner::standard(
            BackendConfig::default(),
            Some(OrsConfig {
                api_key: "test-key".to_string(),
                ..OrsConfig::default()
            }),
        )
        .unwrap();
        assert_eq!(planner.provider_names(), vec!["backend", "openrouteservice"]);

        let backend_only = RoutePlanner::standard(BackendConfig::default(), None).unwrap();
        assert_eq!(backend_only.provider_names(), vec!["backend"]);
    }
}
