//! Seams to the external services the planner consumes.
//!
//! The crate ships HTTP implementations of both; tests and embedders can
//! substitute their own.

use crate::error::{SearchError, ServiceError};
use crate::request::OptimizeRequest;
use crate::response::OptimizeResponse;

/// Route optimization: one request, one ordered itinerary back.
pub trait OptimizationService {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError>;
}

/// A place returned by a keyword search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Free-text keyword search returning candidate places.
pub trait PlaceSearchProvider {
    fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, SearchError>;
}

impl<T: OptimizationService + ?Sized> OptimizationService for &T {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError> {
        (**self).optimize(request)
    }
}

impl<T: PlaceSearchProvider + ?Sized> PlaceSearchProvider for &T {
    fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, SearchError> {
        (**self).search(query)
    }
}
