//! route-sequencer
//!
//! Orders a day's trip stops with a greedy nearest-feasible-next walk that
//! respects opening hours, pinned start/end stops and place / point-of-interest
//! hierarchies.

pub mod clock;
pub mod error;
pub mod haversine;
pub mod hierarchy;
pub mod location;
pub mod matrix;
pub mod osrm;
pub mod planner;
pub mod route_config;
pub mod sequencer;
pub mod traits;

pub use error::{Error, Result};
