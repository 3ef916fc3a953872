//! The bundled stop record, shaped like the web layer's JSON.

use serde::{Deserialize, Serialize};

use crate::clock::{self, Minutes};
use crate::traits::{Nested, Stop};

/// A stop to be visited.
///
/// Opening and closing times stay as the raw `"HH:MM"` strings the caller
/// sent; they are parsed on use and a malformed value counts as no bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_duration: Option<Minutes>,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            id: None,
            parent_id: None,
            opening_time: None,
            closing_time: None,
            visit_duration: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_window(mut self, opening: impl Into<String>, closing: impl Into<String>) -> Self {
        self.opening_time = Some(opening.into());
        self.closing_time = Some(closing.into());
        self
    }

    pub fn with_duration(mut self, minutes: Minutes) -> Self {
        self.visit_duration = Some(minutes);
        self
    }
}

impl Stop for Location {
    fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    fn opening_time(&self) -> Option<Minutes> {
        self.opening_time.as_deref().and_then(clock::parse_clock)
    }

    fn closing_time(&self) -> Option<Minutes> {
        self.closing_time.as_deref().and_then(clock::parse_clock)
    }

    fn visit_duration(&self) -> Option<Minutes> {
        self.visit_duration
    }
}

impl Nested for Location {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    // An empty parent id is a place, same as a missing one.
    fn parent_id(&self) -> Option<&String> {
        self.parent_id.as_ref().filter(|id| !id.is_empty())
    }
}
