//! In-memory stand-ins for the optimization service and place search.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use serde_json::Value;
use trip_planner::error::{SearchError, ServiceError};
use trip_planner::request::OptimizeRequest;
use trip_planner::response::OptimizeResponse;
use trip_planner::traits::{OptimizationService, PlaceCandidate, PlaceSearchProvider};

use super::korea_places::Location;

/// Canned outcome for the next call.
pub enum Reply {
    Days(Value),
    Status(u16, &'static str),
}

/// Records every request and answers with a canned reply.
pub struct MockOptimizer {
    reply: Reply,
    calls: Cell<usize>,
    last_request: RefCell<Option<OptimizeRequest>>,
}

impl MockOptimizer {
    pub fn replying(body: Value) -> Self {
        Self::new(Reply::Days(body))
    }

    pub fn failing(status: u16, body: &'static str) -> Self {
        Self::new(Reply::Status(status, body))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_request(&self) -> Option<OptimizeRequest> {
        self.last_request.borrow().clone()
    }
}

impl OptimizationService for MockOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());

        match &self.reply {
            Reply::Days(body) => Ok(serde_json::from_value(body.clone())?),
            Reply::Status(status, body) => Err(ServiceError::Status {
                status: *status,
                body: body.to_string(),
            }),
        }
    }
}

// ============================================================================
// Place search
// ============================================================================

/// Keyword search over a fixed set of locations, matching by substring.
pub struct MockSearch {
    locations: Vec<Location>,
    failure: Option<u16>,
    calls: Cell<usize>,
    last_query: RefCell<Option<String>>,
}

impl MockSearch {
    pub fn over(locations: &[Location]) -> Self {
        Self {
            locations: locations.to_vec(),
            failure: None,
            calls: Cell::new(0),
            last_query: RefCell::new(None),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            failure: Some(status),
            ..Self::over(&[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.borrow().clone()
    }
}

impl PlaceSearchProvider for MockSearch {
    fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, SearchError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() = Some(query.to_string());

        if let Some(status) = self.failure {
            return Err(SearchError::Status { status });
        }

        Ok(self
            .locations
            .iter()
            .filter(|location| location.name.contains(query))
            .map(|location| PlaceCandidate {
                name: location.name.to_string(),
                address: format!("{} (fixture)", location.name),
                lat: location.lat,
                lng: location.lng,
            })
            .collect())
    }
}
