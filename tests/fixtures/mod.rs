//! Test fixtures for trip-planner.
//!
//! Provides realistic test data including:
//! - Real places in Seoul, Gyeongju and Busan
//! - Mock optimization and place-search services

pub mod korea_places;
pub mod mock_services;

pub use korea_places::*;
pub use mock_services::*;
