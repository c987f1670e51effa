//! Multi-day map rendering.
//!
//! A render is a full recomputation from the result store, the catalog and
//! the day selection. Each displayed day becomes one colored path through its
//! resolvable stops plus one marker per stop. Stops whose names are missing
//! from the catalog are skipped.

use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::catalog::PlaceCatalog;
use crate::geo::Bounds;
use crate::place::Coordinates;
use crate::polyline::Polyline;
use crate::response::{DayResult, ResultStore};

/// Day colors, indexed by `day index % PALETTE.len()`.
pub const PALETTE: [&str; 8] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#9a6324",
];

pub const EMPTY_SELECTION_MESSAGE: &str = "Nothing to show on the map for this selection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width_px: u32,
    pub height_px: u32,
    pub padding_px: u32,
    pub max_zoom: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 600,
            padding_px: 40,
            max_zoom: 15,
        }
    }
}

/// Color for the day at `day_index` in the full itinerary.
pub fn day_color(day_index: usize) -> &'static str {
    PALETTE[day_index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub bounds: Bounds,
    pub center: Coordinates,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPath {
    pub day: String,
    pub color: &'static str,
    pub polyline: Polyline,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub day: String,
    pub name: String,
    /// One-based position of the stop in the day's route.
    pub stop_number: usize,
    pub position: Coordinates,
    pub color: &'static str,
    /// Hover text: day label and stop position.
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub viewport: Viewport,
    pub paths: Vec<DayPath>,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapView {
    /// No displayed day has a resolvable stop.
    Empty { message: &'static str },
    Scene(MapScene),
}

impl MapView {
    pub fn is_empty(&self) -> bool {
        matches!(self, MapView::Empty { .. })
    }

    pub fn scene(&self) -> Option<&MapScene> {
        match self {
            MapView::Scene(scene) => Some(scene),
            MapView::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    options: RenderOptions,
}

struct DayLayer {
    path: Option<DayPath>,
    markers: Vec<Marker>,
}

impl MapRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, results: &ResultStore, catalog: &PlaceCatalog) -> MapView {
        let days = results.days_to_display();

        let layers: Vec<DayLayer> = days
            .par_iter()
            .map(|(day_index, day)| render_day(*day_index, day, catalog))
            .collect();

        let mut paths = Vec::new();
        let mut markers = Vec::new();
        for layer in layers {
            paths.extend(layer.path);
            markers.extend(layer.markers);
        }

        let Some(bounds) = Bounds::enclosing(markers.iter().map(|marker| &marker.position)) else {
            debug!(selection = %results.selected_day(), "no resolvable stops to draw");
            return MapView::Empty {
                message: EMPTY_SELECTION_MESSAGE,
            };
        };

        let zoom = bounds.fit_zoom(
            self.options.width_px,
            self.options.height_px,
            self.options.padding_px,
            self.options.max_zoom,
        );

        MapView::Scene(MapScene {
            viewport: Viewport {
                bounds,
                center: bounds.center(),
                zoom,
            },
            paths,
            markers,
        })
    }
}

fn render_day(day_index: usize, day: &DayResult, catalog: &PlaceCatalog) -> DayLayer {
    let color = day_color(day_index);

    let markers: Vec<Marker> = day
        .route
        .iter()
        .enumerate()
        .filter_map(|(position, stop)| {
            let Some(coordinates) = catalog.get(&stop.name) else {
                debug!(day = %day.date, stop = %stop.name, "stop has no catalog entry, not drawn");
                return None;
            };
            let stop_number = position + 1;
            Some(Marker {
                day: day.date.clone(),
                name: stop.name.clone(),
                stop_number,
                position: coordinates,
                color,
                tooltip: format!("{} · stop {}", day.date, stop_number),
            })
        })
        .collect();

    let path = (markers.len() >= 2).then(|| {
        let polyline = Polyline::new(markers.iter().map(|marker| marker.position).collect());
        DayPath {
            day: day.date.clone(),
            color,
            distance_km: polyline.length_km(),
            polyline,
        }
    });

    DayLayer { path, markers }
}

impl MapScene {
    /// GeoJSON `FeatureCollection` with one `LineString` per day path and one
    /// `Point` per marker.
    pub fn to_geojson(&self) -> Value {
        let lines = self.paths.iter().map(|path| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": path.polyline.geojson_positions(),
                },
                "properties": {
                    "day": path.day,
                    "color": path.color,
                    "distance_km": path.distance_km,
                },
            })
        });

        let points = self.markers.iter().map(|marker| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [marker.position.lng, marker.position.lat],
                },
                "properties": {
                    "day": marker.day,
                    "name": marker.name,
                    "stop": marker.stop_number,
                    "color": marker.color,
                    "tooltip": marker.tooltip,
                },
            })
        });

        json!({
            "type": "FeatureCollection",
            "features": lines.chain(points).collect::<Vec<_>>(),
        })
    }
}
