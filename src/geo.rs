//! Great-circle distances and viewport fitting for the map.

use serde::{Deserialize, Serialize};

use crate::place::Coordinates;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Web Mercator tile edge in pixels.
const TILE_SIZE_PX: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Haversine distance between two points in kilometers.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Sum of consecutive leg distances along a path.
pub fn path_length_km(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|leg| haversine_km(leg[0], leg[1]))
        .sum()
}

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box containing every point, `None` for an empty set.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Bounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };

        Some(points.fold(seed, |bounds, point| Bounds {
            south: bounds.south.min(point.lat),
            west: bounds.west.min(point.lng),
            north: bounds.north.max(point.lat),
            east: bounds.east.max(point.lng),
        }))
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lng)
    }

    /// Largest integer zoom at which the box fits a `width` x `height` pixel
    /// view with `padding` pixels on every side, capped at `max_zoom`.
    pub fn fit_zoom(&self, width: u32, height: u32, padding: u32, max_zoom: u8) -> u8 {
        let usable_w = (f64::from(width) - 2.0 * f64::from(padding)).max(1.0);
        let usable_h = (f64::from(height) - 2.0 * f64::from(padding)).max(1.0);

        let x_fraction = (self.east - self.west) / 360.0;
        let y_fraction =
            (mercator_y(self.north) - mercator_y(self.south)) / (2.0 * std::f64::consts::PI);

        let zoom_x = (usable_w / (TILE_SIZE_PX * x_fraction)).log2();
        let zoom_y = (usable_h / (TILE_SIZE_PX * y_fraction)).log2();
        let zoom = zoom_x.min(zoom_y).floor();

        if zoom.is_nan() {
            return max_zoom;
        }
        zoom.clamp(0.0, f64::from(max_zoom)) as u8
    }
}

fn mercator_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln()
}
