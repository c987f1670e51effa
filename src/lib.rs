//! trip-planner: client-side multi-day trip planning.
//!
//! Builds optimization requests from an editable itinerary configuration and
//! turns the optimized, name-only itinerary back into a day-by-day map.

pub mod catalog;
pub mod days;
pub mod error;
pub mod geo;
pub mod itinerary;
pub mod labeler;
pub mod optimizer;
pub mod place;
pub mod polyline;
pub mod render;
pub mod request;
pub mod response;
pub mod search;
pub mod session;
pub mod submission;
pub mod traits;
