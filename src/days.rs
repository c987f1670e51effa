//! Day labels, day selection and per-day storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One-based day label, rendered as `Day1`, `Day2`, ...
///
/// This is the key the optimization service expects for per-day lodging and
/// the identifier it returns in each day result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayLabel(usize);

impl DayLabel {
    /// Label for a zero-based day index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// One-based day number. Returns `None` for zero.
    pub fn new(number: usize) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    pub fn number(&self) -> usize {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a day label: {0:?}")]
pub struct ParseDayLabelError(String);

impl FromStr for DayLabel {
    type Err = ParseDayLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Canonical form only: ASCII digits with no sign or leading zero.
        s.strip_prefix("Day")
            .filter(|digits| {
                !digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit())
            })
            .and_then(|digits| digits.parse::<usize>().ok())
            .and_then(DayLabel::new)
            .ok_or_else(|| ParseDayLabelError(s.to_string()))
    }
}

impl Serialize for DayLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Which days the result views are focused on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DaySelection {
    #[default]
    All,
    /// A single day, matched against `DayResult::date` verbatim.
    Day(String),
}

impl DaySelection {
    pub fn day(date: impl Into<String>) -> Self {
        DaySelection::Day(date.into())
    }

    pub fn matches(&self, date: &str) -> bool {
        match self {
            DaySelection::All => true,
            DaySelection::Day(selected) => selected == date,
        }
    }
}

impl fmt::Display for DaySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelection::All => f.write_str("all"),
            DaySelection::Day(date) => f.write_str(date),
        }
    }
}

impl From<&str> for DaySelection {
    fn from(value: &str) -> Self {
        if value == "all" {
            DaySelection::All
        } else {
            DaySelection::Day(value.to_string())
        }
    }
}

/// Owned per-day sequence, index 0 = day 1.
///
/// Every per-day array in the itinerary goes through [`DaySlots::resize`], so
/// a length change keeps the surviving prefix untouched: growing appends fresh
/// entries, shrinking truncates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySlots<T> {
    slots: Vec<T>,
}

impl<T> DaySlots<T> {
    pub fn with_len(len: usize, fill: impl FnMut() -> T) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, fill);
        Self { slots }
    }

    pub fn resize(&mut self, len: usize, fill: impl FnMut() -> T) {
        self.slots.resize_with(len, fill);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.slots.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<'a, T> IntoIterator for &'a DaySlots<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
