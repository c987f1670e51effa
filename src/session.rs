//! One planning session: configuration, results and the views over them.

use crate::catalog::PlaceCatalog;
use crate::days::DaySelection;
use crate::error::{ServiceError, SubmitError};
use crate::itinerary::{FormVariant, ItineraryConfig};
use crate::labeler;
use crate::render::{self, MapRenderer, MapView, RenderOptions};
use crate::request::OptimizeRequest;
use crate::response::{OptimizeResponse, ResultStore, UnplacedSuggestion};
use crate::submission::SubmissionController;
use crate::traits::OptimizationService;

/// One day of the textual itinerary, stops already labeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayListing {
    pub day: String,
    pub color: &'static str,
    pub stops: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ItineraryConfig,
    results: ResultStore,
    submission: SubmissionController,
    renderer: MapRenderer,
}

impl Session {
    pub fn new(variant: FormVariant, render_options: RenderOptions) -> Self {
        Self {
            config: ItineraryConfig::new(variant),
            results: ResultStore::new(),
            submission: SubmissionController::new(),
            renderer: MapRenderer::new(render_options),
        }
    }

    pub fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ItineraryConfig {
        &mut self.config
    }

    pub fn results(&self) -> &ResultStore {
        &self.results
    }

    pub fn unplaced_suggestions(&self) -> &[UnplacedSuggestion] {
        self.results.unplaced_suggestions()
    }

    pub fn select_day(&mut self, selection: DaySelection) {
        self.results.select_day(selection);
    }

    /// Catalog derived from the current configuration.
    pub fn catalog(&self) -> PlaceCatalog {
        PlaceCatalog::rebuild(&self.config)
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn submit<S: OptimizationService>(&mut self, service: &S) -> Result<(), SubmitError> {
        self.submission.submit(&self.config, &mut self.results, service)
    }

    pub fn begin_submission(&mut self) -> Result<OptimizeRequest, SubmitError> {
        self.submission.begin(&self.config, &mut self.results)
    }

    pub fn finish_submission(
        &mut self,
        outcome: Result<OptimizeResponse, ServiceError>,
    ) -> Result<(), SubmitError> {
        self.submission.finish(outcome, &mut self.results)
    }

    pub fn render_map(&self) -> MapView {
        self.renderer.render(&self.results, &self.catalog())
    }

    /// Textual itinerary for the selected day(s). Every stop is listed,
    /// including ones the map cannot place.
    pub fn itinerary_listing(&self) -> Vec<DayListing> {
        self.results
            .days_to_display()
            .into_iter()
            .map(|(day_index, day)| DayListing {
                day: day.date.clone(),
                color: render::day_color(day_index),
                stops: day
                    .route
                    .iter()
                    .map(|stop| labeler::label(&stop.name, &day.date, &self.config))
                    .collect(),
            })
            .collect()
    }
}
