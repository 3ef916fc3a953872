//! Start/end pinning policies and their resolution into sequencer input.
//!
//! The sequencer only knows "walk from index 0" and "keep the last index
//! last". Everything richer (a named start, returning home, a hotel that is
//! not in the list) is expressed here by reordering or extending the stops
//! before the walk.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::location::Location;
use crate::sequencer::Pins;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Transit,
    Bicycling,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
            Self::Bicycling => "bicycling",
        };
        f.write_str(name)
    }
}

/// A point that is not one of the trip's stops, e.g. a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPoint {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CustomPoint {
    fn into_location(self, fallback_name: &str) -> Location {
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());
        Location::new(name, self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StartPolicy {
    /// Start at the first stop as given.
    #[default]
    First,
    /// Start at the stop with this id.
    Location { id: String },
    /// Start at a point outside the stop list.
    Custom(CustomPoint),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EndPolicy {
    /// Finish wherever the walk ends.
    #[default]
    Free,
    /// Finish at the last stop as given.
    Last,
    /// Finish at the stop with this id.
    Location { id: String },
    /// Finish back at the start.
    ReturnToStart,
    /// Finish at a point outside the stop list.
    Custom(CustomPoint),
}

impl StartPolicy {
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Location { .. } => "location",
            Self::Custom(_) => "custom",
        }
    }
}

impl EndPolicy {
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Last => "last",
            Self::Location { .. } => "location",
            Self::ReturnToStart => "returnToStart",
            Self::Custom(_) => "custom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub mode: TravelMode,
    pub start: StartPolicy,
    pub end: EndPolicy,
}

/// Stops reordered for the sequencer, with the pins to pass along.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub stops: Vec<Location>,
    pub pins: Pins,
}

impl RouteConfig {
    /// Reorder or extend `stops` so the start sits at index 0 and a pinned
    /// end sits at the last index.
    pub fn resolve(&self, mut stops: Vec<Location>) -> Result<ResolvedRoute> {
        match &self.start {
            StartPolicy::First => {}
            StartPolicy::Location { id } => {
                let position = position_of(&stops, id)?;
                let start = stops.remove(position);
                stops.insert(0, start);
            }
            StartPolicy::Custom(point) => {
                stops.insert(0, point.clone().into_location("Start"));
            }
        }

        let lock_last = match &self.end {
            EndPolicy::Free => false,
            EndPolicy::Last => true,
            // Ending where the walk starts is a round trip.
            EndPolicy::Location { id } if starts_at(&stops, id) => return_to_start(&mut stops),
            EndPolicy::Location { id } => {
                let position = position_of(&stops, id)?;
                let end = stops.remove(position);
                stops.push(end);
                true
            }
            EndPolicy::ReturnToStart => return_to_start(&mut stops),
            EndPolicy::Custom(point) => {
                stops.push(point.clone().into_location("End"));
                true
            }
        };

        Ok(ResolvedRoute {
            stops,
            pins: Pins::new(true, lock_last),
        })
    }
}

fn position_of(stops: &[Location], id: &str) -> Result<usize> {
    stops
        .iter()
        .position(|stop| stop.id.as_deref() == Some(id))
        .ok_or_else(|| Error::UnknownLocation(id.to_string()))
}

fn starts_at(stops: &[Location], id: &str) -> bool {
    stops.first().and_then(|stop| stop.id.as_deref()) == Some(id)
}

fn return_to_start(stops: &mut Vec<Location>) -> bool {
    match stops.first().cloned() {
        Some(start) => {
            stops.push(start);
            true
        }
        None => false,
    }
}
