//! Role annotations for stops in the textual itinerary.

use std::fmt;

use crate::days::DayLabel;
use crate::itinerary::ItineraryConfig;

/// What a place is to the trip on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceRole {
    Lodging,
    Start,
    End,
    Restaurant,
    Unlabeled,
}

impl fmt::Display for PlaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self {
            PlaceRole::Lodging => "lodging",
            PlaceRole::Start => "start",
            PlaceRole::End => "end",
            PlaceRole::Restaurant => "restaurant",
            PlaceRole::Unlabeled => "",
        };
        f.write_str(marker)
    }
}

/// Classifies `name` within `day`. First match wins: the day's effective
/// lodging, the start anchor, the end anchor, a restaurant-typed point of
/// interest.
pub fn classify(name: &str, day: &str, config: &ItineraryConfig) -> PlaceRole {
    let is_lodging = day
        .parse::<DayLabel>()
        .ok()
        .and_then(|label| config.effective_lodging(label.index()))
        .and_then(|slot| slot.place.as_ref())
        .is_some_and(|place| place.name == name);

    if is_lodging {
        return PlaceRole::Lodging;
    }
    if config.start().is_some_and(|place| place.name == name) {
        return PlaceRole::Start;
    }
    if config.end().is_some_and(|place| place.name == name) {
        return PlaceRole::End;
    }

    let is_restaurant = config
        .points_of_interest()
        .iter()
        .any(|poi| poi.name == name && poi.is_restaurant());
    if is_restaurant {
        return PlaceRole::Restaurant;
    }

    PlaceRole::Unlabeled
}

/// Display string for a stop: the name, plus a role marker when it has one.
pub fn label(name: &str, day: &str, config: &ItineraryConfig) -> String {
    match classify(name, day, config) {
        PlaceRole::Unlabeled => name.to_string(),
        role => format!("{name} ({role})"),
    }
}
