//! Sequencing over two-level place / point-of-interest input.
//!
//! Two entry points with different semantics:
//!
//! - [`sequence_hierarchical`] drops the places and walks only the POIs,
//!   anchored on the first POI in input order.
//! - [`sequence_two_tier`] orders the places, then orders each place's POIs
//!   behind it.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::matrix::DistanceMatrix;
use crate::sequencer::{Pins, Sequencer};
use crate::traits::{Nested, Stop};

struct Layers<'a, S: Nested> {
    places: Vec<&'a S>,
    /// Aligned to `places`: the id whose POIs follow that place. `None` for
    /// promoted orphans and for a place repeating an earlier place's id.
    owns: Vec<Option<&'a S::Id>>,
    children: HashMap<&'a S::Id, Vec<&'a S>>,
    orphans: usize,
}

impl<'a, S: Nested> Layers<'a, S> {
    fn split(all: &'a [S]) -> Self {
        let place_ids: HashSet<&S::Id> = all
            .iter()
            .filter(|stop| !stop.is_point_of_interest())
            .filter_map(Nested::id)
            .collect();

        let mut claimed = HashSet::new();
        let mut layers = Self {
            places: Vec::new(),
            owns: Vec::new(),
            children: HashMap::new(),
            orphans: 0,
        };
        for stop in all {
            match stop.parent_id() {
                Some(parent) if place_ids.contains(parent) => {
                    layers.children.entry(parent).or_default().push(stop);
                }
                Some(_) => {
                    layers.orphans += 1;
                    layers.places.push(stop);
                    layers.owns.push(None);
                }
                None => {
                    // The first place with an id owns its POIs.
                    layers.places.push(stop);
                    layers.owns.push(stop.id().filter(|&id| claimed.insert(id)));
                }
            }
        }
        layers
    }
}

/// The stops the two-tier walk orders first: every place, plus any POI whose
/// parent is not in `all`, in input order. A place matrix for
/// [`Sequencer::plan_two_tier`] must be aligned to this list.
pub fn place_layer<S: Nested>(all: &[S]) -> Vec<&S> {
    Layers::split(all).places
}

impl Sequencer {
    /// Order the points of interest in `all`, ignoring places.
    ///
    /// The walk is anchored on the first POI of the filtered list, not on
    /// `all[0]`, and uses haversine travel estimates. Returns an empty list
    /// when `all` has no POIs.
    pub fn plan_hierarchical<S>(&self, all: &[S], lock_last: bool) -> Vec<S>
    where
        S: Stop + Nested + Clone,
    {
        let pois: Vec<S> = all
            .iter()
            .filter(|stop| stop.is_point_of_interest())
            .cloned()
            .collect();
        debug!(input = all.len(), pois = pois.len(), "sequencing points of interest");
        if pois.is_empty() {
            return Vec::new();
        }

        self.plan(&pois, None, Pins::new(true, lock_last)).reorder(&pois)
    }

    /// Order places, then each place's POIs, and concatenate
    /// `place, its POIs, next place, its POIs, ...`.
    ///
    /// `place_matrix` must be aligned to the place layer: every stop without
    /// a parent, plus any POI whose parent is missing, in input order. Each
    /// subtree walk starts at its place with a fresh day clock. Subtrees are
    /// sequenced in parallel.
    pub fn plan_two_tier<S>(
        &self,
        all: &[S],
        place_matrix: Option<&DistanceMatrix>,
        pins: Pins,
    ) -> Vec<S>
    where
        S: Stop + Nested + Clone + Send + Sync,
        S::Id: Send + Sync,
    {
        let Layers {
            places,
            owns,
            children,
            orphans,
        } = Layers::split(all);
        if orphans > 0 {
            warn!(
                orphans,
                "points of interest reference unknown places, sequencing them as places"
            );
        }
        debug!(
            places = places.len(),
            pois = all.len() - places.len(),
            "sequencing places then points of interest"
        );

        let place_plan = self.plan(&places, place_matrix, pins);

        place_plan
            .order
            .par_iter()
            .map(|&index| {
                let place = places[index];
                let pois = owns[index]
                    .and_then(|id| children.get(id))
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let mut subtree = Vec::with_capacity(pois.len() + 1);
                subtree.push(place);
                subtree.extend_from_slice(pois);
                self.plan(&subtree, None, Pins::new(true, false))
                    .reorder(&subtree)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<S>>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Order only the points of interest, with default options.
pub fn sequence_hierarchical<S>(all: &[S], lock_last: bool) -> Vec<S>
where
    S: Stop + Nested + Clone,
{
    Sequencer::default().plan_hierarchical(all, lock_last)
}

/// Order places and then each place's points of interest, with default
/// options.
pub fn sequence_two_tier<S>(
    all: &[S],
    place_matrix: Option<&DistanceMatrix>,
    pins: Pins,
) -> Vec<S>
where
    S: Stop + Nested + Clone + Send + Sync,
    S::Id: Send + Sync,
{
    Sequencer::default().plan_two_tier(all, place_matrix, pins)
}
