//! Test fixtures for route-sequencer.
//!
//! Provides realistic test data:
//! - Real Paris landmarks with their usual opening hours
//! - Neighbourhood places owning those landmarks as points of interest

pub mod paris_locations;

pub use paris_locations::*;
