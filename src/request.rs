//! Request payload for the optimization service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::days::DayLabel;
use crate::error::{Anchor, ValidationError};
use crate::itinerary::{ItineraryConfig, LodgingSlot};
use crate::place::Place;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub start: Place,
    pub end: Place,
    pub days: usize,
    pub destinations: Vec<Place>,
    /// Keyed `Day1..DayN` in day order.
    pub accommodations: BTreeMap<DayLabel, Accommodation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_weights: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_spots_per_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_restaurants_per_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_last_day: Option<bool>,
}

/// Lodging for one day. An unset lodging is sent with an empty name and no
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_luggage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midday_rest: Option<bool>,
}

impl Accommodation {
    fn from_slot(slot: &LodgingSlot, with_flags: bool) -> Self {
        let (name, lat, lng) = match &slot.place {
            Some(place) => (place.name.clone(), Some(place.lat), Some(place.lng)),
            None => (String::new(), None, None),
        };

        Self {
            name,
            lat,
            lng,
            drop_luggage: with_flags.then_some(slot.drop_luggage),
            midday_rest: with_flags.then_some(slot.midday_rest),
        }
    }
}

/// Validates the configuration and assembles the request payload.
///
/// Fails only when the start or end anchor is unset.
pub fn build(config: &ItineraryConfig) -> Result<OptimizeRequest, ValidationError> {
    let start = config
        .start()
        .ok_or(ValidationError::MissingAnchor(Anchor::Start))?;
    let end = config
        .end()
        .ok_or(ValidationError::MissingAnchor(Anchor::End))?;

    let variant = config.variant();
    let days = config.trip_length_days();

    let accommodations = (0..days)
        .filter_map(|day| {
            config.effective_lodging(day).map(|slot| {
                (
                    DayLabel::from_index(day),
                    Accommodation::from_slot(slot, variant.lodging_flags),
                )
            })
        })
        .collect();

    let daily_weights = variant.intensity.then(|| {
        config
            .daily_weights()
            .iter()
            .map(|intensity| intensity.weight())
            .collect()
    });

    let constraints = config.constraints();
    let limits = variant.daily_limits;

    Ok(OptimizeRequest {
        start: anchor(start),
        end: anchor(end),
        days,
        destinations: config.points_of_interest().to_vec(),
        accommodations,
        daily_weights,
        max_spots_per_day: limits.then_some(constraints.max_spots_per_day),
        max_restaurants_per_day: limits.then_some(constraints.max_restaurants_per_day),
        include_last_day: limits.then_some(constraints.include_last_day),
    })
}

fn anchor(place: &Place) -> Place {
    Place::new(place.name.clone(), place.lat, place.lng)
}
