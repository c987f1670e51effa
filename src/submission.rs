//! Submission lifecycle: validate, one request in flight, store or report.
//!
//! [`SubmissionController::submit`] runs the whole exchange synchronously.
//! Callers driving the request themselves use [`SubmissionController::begin`]
//! and [`SubmissionController::finish`]; while a submission is between the
//! two, further submissions are refused.

use tracing::{info, warn};

use crate::error::{RequestFailure, ServiceError, SubmitError};
use crate::itinerary::ItineraryConfig;
use crate::optimizer::failure_message;
use crate::request::{self, OptimizeRequest};
use crate::response::{OptimizeResponse, ResultStore};
use crate::traits::OptimizationService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionController {
    in_flight: bool,
    last_error: Option<String>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Banner text of the last failed request, if any.
    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Validates and enters the in-flight state, clearing any previous
    /// result. Validation failures leave every piece of state untouched.
    pub fn begin(
        &mut self,
        config: &ItineraryConfig,
        results: &mut ResultStore,
    ) -> Result<OptimizeRequest, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }

        let request = request::build(config)?;

        results.clear();
        self.last_error = None;
        self.in_flight = true;
        info!(
            days = request.days,
            destinations = request.destinations.len(),
            "submitting itinerary for optimization"
        );
        Ok(request)
    }

    /// Leaves the in-flight state with the service outcome.
    ///
    /// An outcome arriving with nothing in flight is refused and `results`
    /// is left as it is.
    pub fn finish(
        &mut self,
        outcome: Result<OptimizeResponse, ServiceError>,
        results: &mut ResultStore,
    ) -> Result<(), SubmitError> {
        if !self.in_flight {
            warn!("discarding optimization outcome with no submission in flight");
            return Err(SubmitError::NotInFlight);
        }
        self.in_flight = false;

        match outcome {
            Ok(response) => {
                info!(days = response.days.len(), "optimization succeeded");
                results.replace(response);
                Ok(())
            }
            Err(err) => {
                let message = failure_message(&err);
                warn!(error = %err, %message, "optimization failed");
                self.last_error = Some(message.clone());
                Err(RequestFailure { message }.into())
            }
        }
    }

    /// Validates, calls the service exactly once and records the outcome.
    pub fn submit<S: OptimizationService>(
        &mut self,
        config: &ItineraryConfig,
        results: &mut ResultStore,
        service: &S,
    ) -> Result<(), SubmitError> {
        let request = self.begin(config, results)?;
        let outcome = service.optimize(&request);
        self.finish(outcome, results)
    }
}
