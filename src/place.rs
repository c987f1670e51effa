//! Places the user references while assembling a trip.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the pair as `(lat, lng)`.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Classification of a point of interest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiType {
    #[default]
    Spot,
    Restaurant,
}

impl fmt::Display for PoiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiType::Spot => f.write_str("spot"),
            PoiType::Restaurant => f.write_str("restaurant"),
        }
    }
}

/// A named place. Identity is the exact, case-sensitive `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub poi_type: Option<PoiType>,
}

impl Place {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            poi_type: None,
        }
    }

    pub fn with_type(mut self, poi_type: PoiType) -> Self {
        self.poi_type = Some(poi_type);
        self
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn is_restaurant(&self) -> bool {
        self.poi_type == Some(PoiType::Restaurant)
    }
}
