//! Core domain traits for the route sequencer.
//!
//! These are intentionally minimal. Concrete apps implement them for their
//! own stop records; [`crate::location::Location`] is the bundled one.

use std::hash::Hash;

use crate::clock::Minutes;
use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::route_config::TravelMode;

/// Unique identifier for sequencer entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A stop that can be placed in a day's visit order.
pub trait Stop {
    /// Location coordinates (lat, lng).
    fn coordinates(&self) -> (f64, f64);

    /// Earliest time the stop can be visited (minutes after midnight).
    fn opening_time(&self) -> Option<Minutes>;

    /// Latest time a visit may start (minutes after midnight).
    fn closing_time(&self) -> Option<Minutes>;

    /// How long the visitor stays, if known.
    fn visit_duration(&self) -> Option<Minutes>;
}

impl<T: Stop + ?Sized> Stop for &T {
    fn coordinates(&self) -> (f64, f64) {
        (**self).coordinates()
    }

    fn opening_time(&self) -> Option<Minutes> {
        (**self).opening_time()
    }

    fn closing_time(&self) -> Option<Minutes> {
        (**self).closing_time()
    }

    fn visit_duration(&self) -> Option<Minutes> {
        (**self).visit_duration()
    }
}

/// Two-level place / point-of-interest membership.
pub trait Nested {
    type Id: Id;

    fn id(&self) -> Option<&Self::Id>;

    /// Owning place. `None` marks a top-level place.
    fn parent_id(&self) -> Option<&Self::Id>;

    fn is_point_of_interest(&self) -> bool {
        self.parent_id().is_some()
    }
}

/// Provides a travel-time matrix for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, mode: TravelMode, locations: &[(f64, f64)]) -> Result<DistanceMatrix>;
}
