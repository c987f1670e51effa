//! Name to coordinate lookup derived from the itinerary configuration.
//!
//! Optimized routes only carry place names, so the map resolves them through
//! this catalog. It is rebuilt from scratch whenever it is needed and never
//! edited directly.

use std::collections::HashMap;

use crate::itinerary::ItineraryConfig;
use crate::place::{Coordinates, Place};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceCatalog {
    entries: HashMap<String, Coordinates>,
}

impl PlaceCatalog {
    /// Merges start, end, points of interest, then lodging (day order).
    /// The first entry registered under a name wins.
    pub fn rebuild(config: &ItineraryConfig) -> Self {
        let lodging = config
            .lodging_by_day()
            .iter()
            .filter_map(|slot| slot.place.as_ref());

        let places = config
            .start()
            .into_iter()
            .chain(config.end())
            .chain(config.points_of_interest())
            .chain(lodging);

        let mut catalog = Self::default();
        for place in places {
            catalog.insert_first(place);
        }
        catalog
    }

    fn insert_first(&mut self, place: &Place) {
        self.entries
            .entry(place.name.clone())
            .or_insert_with(|| place.coordinates());
    }

    pub fn get(&self, name: &str) -> Option<Coordinates> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
