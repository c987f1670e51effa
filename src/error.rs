//! Error taxonomy for building, submitting and searching.

use std::fmt;

use thiserror::Error;

/// Which trip anchor is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => f.write_str("start"),
            Anchor::End => f.write_str("end"),
        }
    }
}

/// Local validation failure. Never reaches the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the {0} place must be set before submitting")]
    MissingAnchor(Anchor),
}

/// Out-of-range edits against the itinerary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("day index {index} is outside a {days}-day trip")]
    DayOutOfRange { index: usize, days: usize },
    #[error("point of interest index {index} is outside a list of {len}")]
    PoiOutOfRange { index: usize, len: usize },
}

/// Failure talking to the optimization service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("optimization request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status; `body` is kept for message extraction.
    #[error("optimization service returned {status}")]
    Status { status: u16, body: String },
    #[error("optimization response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure talking to the place-search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("place search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("place search returned {status}")]
    Status { status: u16 },
    #[error("place search requires an API key")]
    MissingApiKey,
}

/// A submission that ran and failed, carrying the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("no submission is in flight")]
    NotInFlight,
    #[error(transparent)]
    Request(#[from] RequestFailure),
}
