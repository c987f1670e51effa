//! Optimization results and the store the result views read from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::days::{DayLabel, DaySelection};
use crate::place::PoiType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub days: Vec<DayResult>,
    #[serde(default)]
    pub unplaced_suggestions: Vec<UnplacedSuggestion>,
}

/// One day of the optimized itinerary. An empty or single-stop route means
/// no travel that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayResult {
    pub date: String,
    #[serde(default, alias = "order")]
    pub route: Vec<RouteStop>,
}

impl DayResult {
    /// Parsed `DayN` label, if the date uses that form.
    pub fn label(&self) -> Option<DayLabel> {
        self.date.parse().ok()
    }
}

/// A stop in a day's route. Only the name is interpreted; anything else the
/// service sends is carried along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStop")]
pub struct RouteStop {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouteStop {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStop {
    Name(String),
    Object {
        name: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl From<RawStop> for RouteStop {
    fn from(raw: RawStop) -> Self {
        match raw {
            RawStop::Name(name) => RouteStop::named(name),
            RawStop::Object { name, extra } => RouteStop { name, extra },
        }
    }
}

/// A point of interest the optimizer could not place, with alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnplacedSuggestion {
    pub name: String,
    #[serde(rename = "type", default)]
    pub poi_type: PoiType,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Last successful response plus the day the views are focused on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    itinerary: Option<Vec<DayResult>>,
    unplaced_suggestions: Vec<UnplacedSuggestion>,
    selected_day: DaySelection,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn itinerary(&self) -> Option<&[DayResult]> {
        self.itinerary.as_deref()
    }

    pub fn unplaced_suggestions(&self) -> &[UnplacedSuggestion] {
        &self.unplaced_suggestions
    }

    pub fn selected_day(&self) -> &DaySelection {
        &self.selected_day
    }

    pub fn select_day(&mut self, selection: DaySelection) {
        self.selected_day = selection;
    }

    pub fn clear(&mut self) {
        self.itinerary = None;
        self.unplaced_suggestions.clear();
        self.selected_day = DaySelection::All;
    }

    /// Replaces the stored result wholesale and focuses all days.
    pub fn replace(&mut self, response: OptimizeResponse) {
        self.itinerary = Some(response.days);
        self.unplaced_suggestions = response.unplaced_suggestions;
        self.selected_day = DaySelection::All;
    }

    /// Dates available for selection, in itinerary order.
    pub fn day_options(&self) -> Vec<&str> {
        self.itinerary
            .iter()
            .flatten()
            .map(|day| day.date.as_str())
            .collect()
    }

    /// Days matching the current selection, paired with their position in
    /// the full itinerary.
    pub fn days_to_display(&self) -> Vec<(usize, &DayResult)> {
        self.itinerary
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, day)| self.selected_day.matches(&day.date))
            .collect()
    }
}
