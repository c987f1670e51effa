//! Mutable trip configuration assembled by the user before submission.
//!
//! All per-day arrays are [`DaySlots`] and are resized together by
//! [`ItineraryConfig::set_trip_length`], so the surviving prefix of entered
//! data is kept whenever the trip length changes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::days::DaySlots;
use crate::error::ConfigError;
use crate::place::{Place, PoiType};

pub const MIN_TRIP_DAYS: usize = 1;
pub const MAX_TRIP_DAYS: usize = 7;
pub const DEFAULT_TRIP_DAYS: usize = 3;

/// How packed a day should be. Closed set with a fixed numeric weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    Packed,
    #[default]
    Moderate,
    Relaxed,
    Rest,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Packed,
        Intensity::Moderate,
        Intensity::Relaxed,
        Intensity::Rest,
    ];

    /// Weight sent to the optimization service.
    pub fn weight(self) -> u8 {
        match self {
            Intensity::Packed => 3,
            Intensity::Moderate => 2,
            Intensity::Relaxed => 1,
            Intensity::Rest => 0,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intensity::Packed => "packed",
            Intensity::Moderate => "moderate",
            Intensity::Relaxed => "relaxed",
            Intensity::Rest => "rest",
        };
        f.write_str(label)
    }
}

/// Lodging for one night plus its per-day flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LodgingSlot {
    pub place: Option<Place>,
    /// Stop by the lodging first to drop luggage.
    pub drop_luggage: bool,
    /// Return to the lodging for a rest in the middle of the day.
    pub midday_rest: bool,
}

/// Per-day capacity limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConstraints {
    pub max_spots_per_day: u32,
    pub max_restaurants_per_day: u32,
    /// Whether the final (departure) day is scheduled with stops too.
    pub include_last_day: bool,
}

impl Default for DayConstraints {
    fn default() -> Self {
        Self {
            max_spots_per_day: 3,
            max_restaurants_per_day: 2,
            include_last_day: true,
        }
    }
}

/// Optional fields of the request schema a deployment recognizes.
///
/// Fields of a disabled option are still tracked in the configuration but
/// are left out of the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormVariant {
    /// Send `daily_weights` from per-day [`Intensity`].
    pub intensity: bool,
    /// Track one extra weight for the arrival day (`days + 1` weights).
    pub arrival_day_weight: bool,
    /// Send `drop_luggage` / `midday_rest` with each accommodation.
    pub lodging_flags: bool,
    /// Send `max_spots_per_day`, `max_restaurants_per_day` and `include_last_day`.
    pub daily_limits: bool,
}

impl FormVariant {
    pub const BASIC: FormVariant = FormVariant {
        intensity: false,
        arrival_day_weight: false,
        lodging_flags: false,
        daily_limits: false,
    };

    pub const WEIGHTED: FormVariant = FormVariant {
        intensity: true,
        arrival_day_weight: true,
        lodging_flags: true,
        daily_limits: false,
    };

    pub const LIMITED: FormVariant = FormVariant {
        intensity: false,
        arrival_day_weight: false,
        lodging_flags: false,
        daily_limits: true,
    };
}

impl Default for FormVariant {
    fn default() -> Self {
        FormVariant::LIMITED
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryConfig {
    variant: FormVariant,
    start: Option<Place>,
    end: Option<Place>,
    trip_length_days: usize,
    points_of_interest: Vec<Place>,
    lodging_by_day: DaySlots<LodgingSlot>,
    daily_weights: DaySlots<Intensity>,
    same_lodging_for_all_days: bool,
    constraints: DayConstraints,
    pending_poi_type: PoiType,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}

impl ItineraryConfig {
    pub fn new(variant: FormVariant) -> Self {
        let days = DEFAULT_TRIP_DAYS;
        Self {
            variant,
            start: None,
            end: None,
            trip_length_days: days,
            points_of_interest: Vec::new(),
            lodging_by_day: DaySlots::with_len(days, LodgingSlot::default),
            daily_weights: DaySlots::with_len(weights_len(variant, days), Intensity::default),
            same_lodging_for_all_days: false,
            constraints: DayConstraints::default(),
            pending_poi_type: PoiType::default(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn start(&self) -> Option<&Place> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Place> {
        self.end.as_ref()
    }

    pub fn set_start(&mut self, place: Option<Place>) {
        self.start = place;
    }

    pub fn set_end(&mut self, place: Option<Place>) {
        self.end = place;
    }

    pub fn trip_length_days(&self) -> usize {
        self.trip_length_days
    }

    /// Changes the trip length and resizes every per-day array.
    ///
    /// Lengths outside `1..=7` are ignored; returns whether the change applied.
    pub fn set_trip_length(&mut self, days: usize) -> bool {
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&days) {
            debug!(days, "ignoring out-of-range trip length");
            return false;
        }

        self.trip_length_days = days;
        self.lodging_by_day.resize(days, LodgingSlot::default);
        self.daily_weights
            .resize(weights_len(self.variant, days), Intensity::default);
        true
    }

    pub fn points_of_interest(&self) -> &[Place] {
        &self.points_of_interest
    }

    /// Appends a point of interest tagged with `poi_type`.
    ///
    /// Returns `false` without changing anything when a point of interest
    /// with the same name already exists.
    pub fn add_point_of_interest(&mut self, place: Place, poi_type: PoiType) -> bool {
        if self.points_of_interest.iter().any(|poi| poi.name == place.name) {
            debug!(name = %place.name, "point of interest already added");
            return false;
        }

        self.points_of_interest.push(place.with_type(poi_type));
        true
    }

    /// Appends a point of interest using the pending classification.
    pub fn add_pending_point_of_interest(&mut self, place: Place) -> bool {
        let poi_type = self.pending_poi_type;
        self.add_point_of_interest(place, poi_type)
    }

    pub fn remove_point_of_interest(&mut self, index: usize) -> Result<Place, ConfigError> {
        let len = self.points_of_interest.len();
        if index >= len {
            return Err(ConfigError::PoiOutOfRange { index, len });
        }
        Ok(self.points_of_interest.remove(index))
    }

    pub fn pending_poi_type(&self) -> PoiType {
        self.pending_poi_type
    }

    pub fn set_pending_poi_type(&mut self, poi_type: PoiType) {
        self.pending_poi_type = poi_type;
    }

    pub fn lodging_by_day(&self) -> &DaySlots<LodgingSlot> {
        &self.lodging_by_day
    }

    /// Replaces the lodging place for a day. `None` clears it; flags are kept.
    pub fn set_lodging(
        &mut self,
        day_index: usize,
        place: Option<Place>,
    ) -> Result<(), ConfigError> {
        self.lodging_slot_mut(day_index)?.place = place;
        Ok(())
    }

    pub fn set_lodging_flags(
        &mut self,
        day_index: usize,
        drop_luggage: bool,
        midday_rest: bool,
    ) -> Result<(), ConfigError> {
        let slot = self.lodging_slot_mut(day_index)?;
        slot.drop_luggage = drop_luggage;
        slot.midday_rest = midday_rest;
        Ok(())
    }

    pub fn same_lodging_for_all_days(&self) -> bool {
        self.same_lodging_for_all_days
    }

    /// Stored lodging for other days is left alone; only resolution changes.
    pub fn set_same_lodging(&mut self, same: bool) {
        self.same_lodging_for_all_days = same;
    }

    /// Lodging slot that applies to a day once the same-lodging toggle is
    /// taken into account.
    pub fn effective_lodging(&self, day_index: usize) -> Option<&LodgingSlot> {
        if day_index >= self.trip_length_days {
            return None;
        }
        if self.same_lodging_for_all_days {
            self.lodging_by_day.first()
        } else {
            self.lodging_by_day.get(day_index)
        }
    }

    pub fn daily_weights(&self) -> &DaySlots<Intensity> {
        &self.daily_weights
    }

    pub fn set_intensity(&mut self, index: usize, intensity: Intensity) -> Result<(), ConfigError> {
        let days = self.daily_weights.len();
        let slot = self
            .daily_weights
            .get_mut(index)
            .ok_or(ConfigError::DayOutOfRange { index, days })?;
        *slot = intensity;
        Ok(())
    }

    pub fn constraints(&self) -> DayConstraints {
        self.constraints
    }

    pub fn set_constraints(&mut self, constraints: DayConstraints) {
        self.constraints = constraints;
    }

    fn lodging_slot_mut(&mut self, day_index: usize) -> Result<&mut LodgingSlot, ConfigError> {
        let days = self.trip_length_days;
        self.lodging_by_day
            .get_mut(day_index)
            .ok_or(ConfigError::DayOutOfRange { index: day_index, days })
    }
}

fn weights_len(variant: FormVariant, days: usize) -> usize {
    if variant.arrival_day_weight {
        days + 1
    } else {
        days
    }
}
