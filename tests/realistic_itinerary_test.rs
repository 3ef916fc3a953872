//! Realistic itinerary tests using real Paris landmarks.
//!
//! These run on haversine estimates only; the OSRM-backed variant lives in
//! `osrm_integration.rs`.

mod fixtures;

use std::collections::HashSet;

use route_sequencer::hierarchy::sequence_two_tier;
use route_sequencer::location::Location;
use route_sequencer::route_config::{EndPolicy, RouteConfig};
use route_sequencer::sequencer::{Pins, Sequencer};
use route_sequencer::traits::{Nested, Stop};

use fixtures::paris_locations::{self, HOTEL};

fn ids(stops: &[&Location]) -> Vec<String> {
    stops.iter().filter_map(|s| s.id.clone()).collect()
}

#[test]
fn test_day_starts_with_nearest_open_sights() {
    let stops = paris_locations::day_in_paris();
    let plan = Sequencer::default().plan(&stops, None, Pins::new(true, false));
    let ordered = ids(&plan.apply(&stops));

    assert_eq!(ordered[0], HOTEL.id);
    // Pompidou is closer than Sainte-Chapelle but does not open until 11:00.
    assert_eq!(ordered[1], "notre-dame");
    assert_eq!(ordered[2], "sainte-chapelle");
}

#[test]
fn test_full_day_schedule_is_consistent() {
    let stops = paris_locations::day_in_paris();
    let plan = Sequencer::default().plan(&stops, None, Pins::new(true, false));

    assert_eq!(plan.order.len(), stops.len());
    assert_eq!(plan.legs.len(), stops.len() - 1);
    for pair in plan.legs.windows(2) {
        assert!(pair[1].arrival >= pair[0].departure, "clock ran backwards: {:?}", pair);
    }
    for leg in &plan.legs {
        if let Some(opening) = stops[leg.index].opening_time() {
            assert!(leg.start >= opening, "{} visited before opening", stops[leg.index].name);
        }
    }
}

#[test]
fn test_return_to_hotel() {
    let config = RouteConfig {
        end: EndPolicy::ReturnToStart,
        ..RouteConfig::default()
    };
    let route = config.resolve(paris_locations::day_in_paris()).unwrap();
    let plan = Sequencer::default().plan(&route.stops, None, route.pins);
    let ordered = ids(&plan.apply(&route.stops));

    assert_eq!(ordered.first().map(String::as_str), Some(HOTEL.id));
    assert_eq!(ordered.last().map(String::as_str), Some(HOTEL.id));
    assert_eq!(ordered.len(), paris_locations::SIGHTS.len() + 2);
}

#[test]
fn test_neighbourhoods_keep_sights_with_their_place() {
    let stops = paris_locations::neighbourhoods();
    let ordered = sequence_two_tier(&stops, None, Pins::new(true, false));
    assert_eq!(ordered.len(), stops.len());

    // Every POI appears after its own place and before the next place.
    let mut current_place: Option<&str> = None;
    let mut seen_places = HashSet::new();
    for stop in &ordered {
        match stop.parent_id() {
            None => {
                let id = stop.id.as_deref().unwrap_or_default();
                assert!(seen_places.insert(id), "{id} visited twice");
                current_place = Some(id);
            }
            Some(parent) => assert_eq!(Some(parent.as_str()), current_place, "{} out of place", stop.name),
        }
    }
    assert_eq!(seen_places.len(), 3);

    // The first neighbourhood anchors the walk.
    assert_eq!(ordered[0].id.as_deref(), Some("cite"));
}
