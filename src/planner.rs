//! Request/response facade for the web layer's optimize route.
//!
//! Resolves the pinning policy, asks the matrix provider (if any) for real
//! travel times, runs the requested sequencing mode and shapes the result as
//! the `optimizedPath` payload.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::{self, Minutes};
use crate::error::{Error, Result};
use crate::hierarchy;
use crate::location::Location;
use crate::matrix::DistanceMatrix;
use crate::osrm::OsrmClient;
use crate::route_config::{EndPolicy, RouteConfig, StartPolicy, TravelMode};
use crate::sequencer::{Pins, Sequence, Sequencer};
use crate::traits::{DistanceMatrixProvider, Stop};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HierarchyMode {
    /// Every location is a stop.
    #[default]
    Flat,
    /// Only points of interest are ordered; places are dropped.
    PoiOnly,
    /// Places are ordered, each followed by its points of interest.
    PlaceThenPoi,
}

impl HierarchyMode {
    const fn name(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PoiOnly => "poiOnly",
            Self::PlaceThenPoi => "placeThenPoi",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub locations: Vec<Location>,
    #[serde(flatten)]
    pub config: RouteConfig,
    #[serde(default)]
    pub hierarchy: HierarchyMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    pub id: Option<String>,
    pub name: String,
}

impl From<&Location> for PathEntry {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
        }
    }
}

/// Simulated timing for one stop of a flat route.
///
/// The starting stop only has a departure; a pinned last stop has no
/// timing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStop {
    pub id: Option<String>,
    pub name: String,
    pub arrival: Option<String>,
    pub departure: Option<String>,
    pub wait_minutes: Minutes,
    pub late: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub optimized_path: Vec<PathEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<ScheduledStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasible: Option<bool>,
}

impl OptimizeResponse {
    fn path_only(stops: &[Location]) -> Self {
        Self {
            optimized_path: stops.iter().map(PathEntry::from).collect(),
            schedule: Vec::new(),
            feasible: None,
        }
    }
}

/// Plans routes, asking `M` for travel times when a provider is set.
///
/// `M` defaults to [`OsrmClient`], the provider used in production.
pub struct RoutePlanner<M = OsrmClient> {
    sequencer: Sequencer,
    matrices: Option<M>,
}

impl RoutePlanner {
    /// A planner without a matrix provider, using haversine estimates.
    pub fn new(sequencer: Sequencer) -> Self {
        Self {
            sequencer,
            matrices: None,
        }
    }
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(Sequencer::default())
    }
}

impl<M> RoutePlanner<M> {
    /// Use `provider` for travel times instead of haversine estimates.
    pub fn with_matrix_provider<N: DistanceMatrixProvider>(self, provider: N) -> RoutePlanner<N> {
        RoutePlanner {
            sequencer: self.sequencer,
            matrices: Some(provider),
        }
    }
}

impl<M: DistanceMatrixProvider> RoutePlanner<M> {
    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse> {
        debug!(
            locations = request.locations.len(),
            mode = %request.config.mode,
            hierarchy = request.hierarchy.name(),
            "optimizing route"
        );

        match request.hierarchy {
            HierarchyMode::Flat => self.optimize_flat(request),
            HierarchyMode::PoiOnly => {
                let lock_last = simple_lock_last(request)?;
                let pois = self.sequencer.plan_hierarchical(&request.locations, lock_last);
                Ok(OptimizeResponse::path_only(&pois))
            }
            HierarchyMode::PlaceThenPoi => {
                let lock_last = simple_lock_last(request)?;
                let places = hierarchy::place_layer(&request.locations);
                let coords: Vec<(f64, f64)> =
                    places.iter().map(|place| place.coordinates()).collect();
                let matrix = self.fetch_matrix(request.config.mode, &coords);
                let ordered = self.sequencer.plan_two_tier(
                    &request.locations,
                    matrix.as_ref(),
                    Pins::new(true, lock_last),
                );
                Ok(OptimizeResponse::path_only(&ordered))
            }
        }
    }

    fn optimize_flat(&self, request: &OptimizeRequest) -> Result<OptimizeResponse> {
        let route = request.config.resolve(request.locations.clone())?;
        let coords: Vec<(f64, f64)> = route.stops.iter().map(Stop::coordinates).collect();
        let matrix = self.fetch_matrix(request.config.mode, &coords);
        let plan = self.sequencer.plan(&route.stops, matrix.as_ref(), route.pins);

        Ok(OptimizeResponse {
            optimized_path: plan
                .apply(&route.stops)
                .into_iter()
                .map(PathEntry::from)
                .collect(),
            schedule: self.schedule(&plan, &route.stops),
            feasible: Some(plan.is_feasible()),
        })
    }

    fn schedule(&self, plan: &Sequence, stops: &[Location]) -> Vec<ScheduledStop> {
        let day_start = self.sequencer.options().day_start;
        plan.order
            .iter()
            .enumerate()
            .filter_map(|(position, &index)| {
                let stop = stops.get(index)?;
                let leg = plan.leg_for(index);
                let departure = match leg {
                    Some(leg) => Some(leg.departure),
                    None if position == 0 => Some(day_start),
                    None => None,
                };
                Some(ScheduledStop {
                    id: stop.id.clone(),
                    name: stop.name.clone(),
                    arrival: leg.map(|leg| clock::format_clock(leg.arrival)),
                    departure: departure.map(clock::format_clock),
                    wait_minutes: leg.map_or(0, |leg| leg.wait),
                    late: leg.is_some_and(|leg| leg.late),
                })
            })
            .collect()
    }

    /// Travel times from the provider, or `None` to fall back to haversine.
    fn fetch_matrix(&self, mode: TravelMode, coords: &[(f64, f64)]) -> Option<DistanceMatrix> {
        // Two or fewer stops are never reordered.
        if coords.len() <= 2 {
            return None;
        }
        let provider = self.matrices.as_ref()?;
        match provider.matrix_for(mode, coords) {
            Ok(matrix) => Some(matrix),
            Err(err) => {
                warn!(error = %err, "distance matrix unavailable, using haversine estimate");
                None
            }
        }
    }
}

/// Hierarchical modes pin nothing but an optional last stop.
fn simple_lock_last(request: &OptimizeRequest) -> Result<bool> {
    let mode = request.hierarchy.name();
    if request.config.start != StartPolicy::First {
        return Err(Error::UnsupportedPolicy {
            policy: request.config.start.name(),
            mode,
        });
    }
    match request.config.end {
        EndPolicy::Free => Ok(false),
        EndPolicy::Last => Ok(true),
        ref other => Err(Error::UnsupportedPolicy {
            policy: other.name(),
            mode,
        }),
    }
}
