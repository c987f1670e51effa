//! Polyline representation for day paths drawn on the map.
//!
//! Points are kept decoded as latitude/longitude pairs. Conversion to an
//! output format (GeoJSON positions) happens at the rendering boundary.

use serde::{Deserialize, Serialize};

use crate::geo::{self, Bounds};
use crate::place::Coordinates;

/// A path connecting stops in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinates>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinates> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Great-circle length of the path in kilometers.
    pub fn length_km(&self) -> f64 {
        geo::path_length_km(&self.points)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(&self.points)
    }

    /// Positions in GeoJSON `[lng, lat]` order.
    pub fn geojson_positions(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|point| [point.lng, point.lat]).collect()
    }
}
