//! Greedy nearest-feasible-next route sequencing.
//!
//! The walk starts at index 0 on a simulated 09:00 clock and repeatedly moves
//! to the unvisited stop with the lowest score, where the score is travel
//! minutes plus waiting minutes plus a flat penalty for arriving after the
//! stop closes. Late stops are never rejected, only deprioritized, so every
//! input produces a complete order.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::clock::{self, Minutes};
use crate::haversine;
use crate::matrix::DistanceMatrix;
use crate::traits::Stop;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequenceOptions {
    /// Simulated clock at the first stop (minutes after midnight).
    pub day_start: Minutes,
    /// Dwell time for stops without a visit duration.
    pub default_visit_minutes: Minutes,
    /// Score added when a stop would be reached after it closes.
    pub late_penalty: Minutes,
    /// Pace of the haversine fallback.
    pub minutes_per_km: f64,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            day_start: clock::DAY_START,
            default_visit_minutes: clock::DEFAULT_VISIT_MINUTES,
            late_penalty: 10_000,
            minutes_per_km: 2.0,
        }
    }
}

/// Which ends of the input are fixed in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pins {
    /// Index 0 is visited first. The walk always departs from index 0, so
    /// this only records the caller's intent.
    pub first: bool,
    /// The last input stop is kept out of the walk and appended at the end.
    pub last: bool,
}

impl Pins {
    pub const fn new(first: bool, last: bool) -> Self {
        Self { first, last }
    }
}

/// Simulated timing of one walked stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// Index into the input.
    pub index: usize,
    pub travel: Minutes,
    pub arrival: Minutes,
    pub wait: Minutes,
    /// Visit start, `arrival + wait`.
    pub start: Minutes,
    pub departure: Minutes,
    /// The visit starts after the stop's closing time.
    pub late: bool,
}

/// A computed visit order plus the schedule the walk simulated for it.
///
/// `legs` has one entry per stop the walk selected. The starting stop and a
/// pinned last stop are not simulated and have no leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub order: Vec<usize>,
    pub legs: Vec<Leg>,
}

impl Sequence {
    fn unchanged(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            legs: Vec::new(),
        }
    }

    /// No simulated visit started after closing.
    pub fn is_feasible(&self) -> bool {
        self.legs.iter().all(|leg| !leg.late)
    }

    pub fn leg_for(&self, index: usize) -> Option<&Leg> {
        self.legs.iter().find(|leg| leg.index == index)
    }

    /// Borrow `stops` in sequence order.
    pub fn apply<'a, S>(&self, stops: &'a [S]) -> Vec<&'a S> {
        self.order.iter().filter_map(|&i| stops.get(i)).collect()
    }

    /// Clone `stops` into sequence order.
    pub fn reorder<S: Clone>(&self, stops: &[S]) -> Vec<S> {
        self.apply(stops).into_iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    leg: Leg,
    score: Minutes,
}

#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    options: SequenceOptions,
}

impl Sequencer {
    pub fn new(options: SequenceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    /// Compute a visit order over `stops`.
    ///
    /// A matrix that does not cover exactly `stops.len()` entries is ignored
    /// in favour of the haversine estimate.
    pub fn plan<S: Stop>(&self, stops: &[S], matrix: Option<&DistanceMatrix>, pins: Pins) -> Sequence {
        let n = stops.len();
        if n <= 2 {
            return Sequence::unchanged(n);
        }

        let matrix = matrix.filter(|matrix| {
            if matrix.len() == n {
                true
            } else {
                warn!(
                    stops = n,
                    matrix = matrix.len(),
                    "distance matrix does not match stops, using haversine estimate"
                );
                false
            }
        });
        debug!(
            stops = n,
            lock_first = pins.first,
            lock_last = pins.last,
            with_matrix = matrix.is_some(),
            "sequencing stops"
        );

        let last = n - 1;
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut legs = Vec::with_capacity(n);

        visited[0] = true;
        order.push(0);
        if pins.last {
            visited[last] = true;
        }

        let mut clock = self.options.day_start;
        let mut current = 0;
        while let Some(Candidate { leg, score }) = self.best_candidate(stops, matrix, &visited, current, clock) {
            trace!(
                index = leg.index,
                score,
                arrival = leg.arrival,
                wait = leg.wait,
                late = leg.late,
                "selected next stop"
            );
            visited[leg.index] = true;
            order.push(leg.index);
            clock = leg.departure;
            current = leg.index;
            legs.push(leg);
        }

        if pins.last {
            order.push(last);
        }

        Sequence { order, legs }
    }

    /// Lowest-scoring unvisited stop. Scanning runs in input order and only
    /// a strictly lower score replaces the best, so ties keep the earlier
    /// index.
    fn best_candidate<S: Stop>(
        &self,
        stops: &[S],
        matrix: Option<&DistanceMatrix>,
        visited: &[bool],
        current: usize,
        clock: Minutes,
    ) -> Option<Candidate> {
        let from = stops.get(current)?;
        let mut best: Option<Candidate> = None;

        for (index, stop) in stops.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let travel = self.travel_minutes(from, stop, matrix.and_then(|m| m.minutes(current, index)));
            let candidate = self.evaluate(index, stop, travel, clock);
            if best.is_none_or(|best| candidate.score < best.score) {
                best = Some(candidate);
            }
        }

        best
    }

    fn travel_minutes<S: Stop>(&self, from: &S, to: &S, from_matrix: Option<Minutes>) -> Minutes {
        from_matrix.unwrap_or_else(|| {
            haversine::estimate_travel_minutes(from.coordinates(), to.coordinates(), self.options.minutes_per_km)
        })
    }

    fn evaluate<S: Stop>(&self, index: usize, stop: &S, travel: Minutes, clock: Minutes) -> Candidate {
        let arrival = clock.saturating_add(travel);
        let wait = stop
            .opening_time()
            .map_or(0, |opening| opening.saturating_sub(arrival));
        let start = arrival.saturating_add(wait);
        let late = stop.closing_time().is_some_and(|closing| start > closing);
        let penalty = if late { self.options.late_penalty } else { 0 };
        let dwell = stop.visit_duration().unwrap_or(self.options.default_visit_minutes);

        Candidate {
            leg: Leg {
                index,
                travel,
                arrival,
                wait,
                start,
                departure: start.saturating_add(dwell),
                late,
            },
            score: travel.saturating_add(wait).saturating_add(penalty),
        }
    }
}

/// Order `stops` with default options.
///
/// Inputs of two or fewer stops come back unchanged. Otherwise the result is
/// a permutation of `stops` starting with `stops[0]`, and ending with the
/// last input stop when `pins.last` is set.
pub fn sequence<S: Stop + Clone>(stops: &[S], matrix: Option<&DistanceMatrix>, pins: Pins) -> Vec<S> {
    Sequencer::default().plan(stops, matrix, pins).reorder(stops)
}
