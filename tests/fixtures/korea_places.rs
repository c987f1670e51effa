//! Real places along a Seoul to Busan trip.
//!
//! Coordinates are approximate building centroids from OpenStreetMap.

#![allow(dead_code)]

use trip_planner::place::Place;

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn place(&self) -> Place {
        Place::new(self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Anchors (rail stations)
// ============================================================================

pub const SEOUL_STATION: Location = Location::new("Seoul Station", 37.5547, 126.9707);
pub const BUSAN_STATION: Location = Location::new("Busan Station", 35.1151, 129.0423);

// ============================================================================
// Sightseeing spots
// ============================================================================

pub const SPOTS: &[Location] = &[
    Location::new("Gyeongbokgung", 37.5796, 126.9770),
    Location::new("Bukchon Hanok Village", 37.5826, 126.9830),
    Location::new("N Seoul Tower", 37.5512, 126.9882),
    Location::new("Bulguksa", 35.7900, 129.3320),
    Location::new("Cheomseongdae", 35.8347, 129.2190),
    Location::new("Haeundae Beach", 35.1587, 129.1604),
    Location::new("Gamcheon Culture Village", 35.0975, 129.0106),
];

// ============================================================================
// Restaurants
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Gwangjang Market", 37.5700, 126.9996),
    Location::new("Tosokchon Samgyetang", 37.5781, 126.9717),
    Location::new("Jagalchi Market", 35.0967, 129.0305),
];

// ============================================================================
// Lodging
// ============================================================================

pub const LODGING: &[Location] = &[
    Location::new("Lotte Hotel Seoul", 37.5651, 126.9810),
    Location::new("Hilton Gyeongju", 35.8367, 129.2847),
    Location::new("Paradise Hotel Busan", 35.1605, 129.1644),
];

pub fn spot(name: &str) -> Location {
    *SPOTS
        .iter()
        .chain(RESTAURANTS)
        .chain(LODGING)
        .find(|location| location.name == name)
        .unwrap_or_else(|| panic!("unknown fixture location {name}"))
}
