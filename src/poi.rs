//! Truck stops and road restrictions served by the backend, plus the layer
//! filter deciding which of them are shown on the map.

use serde::{Deserialize, Serialize};

use crate::geo_point::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Fuel,
    Rest,
    Parking,
    WeighStation,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckStop {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl TruckStop {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Street address when known, otherwise the state.
    pub fn display_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .filter(|address| !address.is_empty())
            .or(self.state.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    NoTrucks,
    HeightLimit,
    WeightLimit,
    TimeRestriction,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    #[serde(default)]
    pub id: Option<String>,
    pub road_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "restriction_type")]
    pub kind: RestrictionKind,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub limit_value: Option<f64>,
}

impl Restriction {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Height limits are in feet; every other limit is a weight in pounds.
    pub fn limit_unit(&self) -> &'static str {
        match self.kind {
            RestrictionKind::HeightLimit => "ft",
            _ => "lbs",
        }
    }

    /// "13.5 ft", "80000 lbs", or `None` without a limit value.
    pub fn limit_label(&self) -> Option<String> {
        self.limit_value
            .map(|value| format!("{} {}", value, self.limit_unit()))
    }

    /// Active window, when the restriction only applies part of the day.
    pub fn time_window(&self) -> Option<(&str, &str)> {
        let start = self.start_time.as_deref()?;
        Some((start, self.end_time.as_deref().unwrap_or("")))
    }
}

/// Which map layers are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFilter {
    pub fuel: bool,
    pub rest: bool,
    pub parking: bool,
    pub weigh: bool,
    pub restrictions: bool,
}

impl Default for LayerFilter {
    fn default() -> Self {
        Self {
            fuel: true,
            rest: true,
            parking: true,
            weigh: false,
            restrictions: true,
        }
    }
}

impl LayerFilter {
    pub fn shows(&self, kind: StopKind) -> bool {
        match kind {
            StopKind::Fuel => self.fuel,
            StopKind::Rest => self.rest,
            StopKind::Parking => self.parking,
            StopKind::WeighStation => self.weigh,
            StopKind::Other => false,
        }
    }

    pub fn visible_stops<'a>(&self, stops: &'a [TruckStop]) -> Vec<&'a TruckStop> {
        stops.iter().filter(|stop| self.shows(stop.kind)).collect()
    }

    pub fn visible_restrictions<'a>(&self, restrictions: &'a [Restriction]) -> &'a [Restriction] {
        if self.restrictions {
            restrictions
        } else {
            &[]
        }
    }
}
