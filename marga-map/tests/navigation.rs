//! End-to-end navigation tests over a small school floor.
//!
//! Layout (5 x 4 grid, y grows downward):
//!
//! ```text
//!   x:    0        1      2        3       4
//! y=0  Lab_1     c1     c2       c3     Lab_2
//! y=1  (empty)   gt1    (empty)  s1     (empty)
//! y=2  Office    c4     bt1      c5     l1
//! y=3  (empty)   Lab_3  (empty)  gt2    (empty)
//! ```
//!
//! The graph connects the corridors in a ring with rooms and amenities
//! hanging off them; s1 (stair) and l1 (lift) are transit nodes.

use std::time::Duration;

use marga_map::{
    nearest_amenity, CellKind, Facing, FloorPlan, MargaError, MoveCommand, NavInput, Navigator,
    Route, Router, TrackerConfig, TrackerEvent, TrackerState,
};

const FLOOR_DOC: &str = r#"{
    "layout": {
        "Floor_0": [
            [{"type":"room","name":"Lab_1"}, {"type":"corridor","name":"c1"}, {"type":"corridor","name":"c2"}, {"type":"corridor","name":"c3"}, {"type":"room","name":"Lab_2"}],
            [{"type":"empty"}, {"type":"girls_toilet","name":"gt1"}, {"type":"empty"}, {"type":"stair","name":"s1"}, {"type":"empty"}],
            [{"type":"room","name":"Office"}, {"type":"corridor","name":"c4"}, {"type":"boys_toilet","name":"bt1"}, {"type":"corridor","name":"c5"}, {"type":"lift","name":"l1"}],
            [{"type":"empty"}, {"type":"room","name":"Lab_3"}, {"type":"empty"}, {"type":"girls_toilet","name":"gt2"}, {"type":"empty"}]
        ],
        "Floor_1": [
            [{"type":"room","name":"Roof"}]
        ]
    },
    "nodes": {
        "Lab_1": {"type":"room","neighbors":["c1"]},
        "c1": {"type":"corridor","neighbors":["Lab_1","c2","gt1","c4"]},
        "c2": {"type":"corridor","neighbors":["c1","c3"]},
        "c3": {"type":"corridor","neighbors":["c2","Lab_2","s1","c5"]},
        "Lab_2": {"type":"room","neighbors":["c3"]},
        "gt1": {"type":"girls_toilet","neighbors":["c1"]},
        "s1": {"type":"stair","neighbors":["c3"]},
        "Office": {"type":"room","neighbors":["c4"]},
        "c4": {"type":"corridor","neighbors":["c1","Office","bt1","Lab_3","c5"]},
        "bt1": {"type":"boys_toilet","neighbors":["c4"]},
        "c5": {"type":"corridor","neighbors":["c3","c4","gt2","l1"]},
        "l1": {"type":"lift","neighbors":["c5"]},
        "Lab_3": {"type":"room","neighbors":["c4"]},
        "gt2": {"type":"girls_toilet","neighbors":["c5"]},
        "Roof": {"type":"room","neighbors":[]}
    }
}"#;

fn plan() -> FloorPlan {
    FloorPlan::from_json(FLOOR_DOC, "Floor_0").unwrap()
}

fn edge_count(route: &Route) -> usize {
    route.len() - 1
}

#[test]
fn router_returns_minimal_edge_count() {
    let plan = plan();
    let router = Router::new(&plan);
    // Lab_1 to Lab_2: c1-c2-c3 is the only corridor spine, 4 edges
    let route = router.route("Lab_1", "Lab_2").unwrap();
    assert_eq!(edge_count(&route), 4);
    assert_eq!(route.names(), ["Lab_1", "c1", "c2", "c3", "Lab_2"]);
    // Office to Lab_2 can go c4 -> c5 -> c3 or c4 -> c1 -> c2 -> c3;
    // BFS must find the 4-edge option
    let route = router.route("Office", "Lab_2").unwrap();
    assert_eq!(edge_count(&route), 4);
}

#[test]
fn router_endpoints_match_request() {
    let plan = plan();
    let router = Router::new(&plan);
    for (start, end) in [("Lab_1", "Office"), ("Lab_3", "Lab_2"), ("Office", "gt2")] {
        let route = router.route(start, end).unwrap();
        assert_eq!(route.start(), start);
        assert_eq!(route.end(), end);
    }
}

#[test]
fn transit_nodes_only_terminal() {
    let plan = plan();
    let router = Router::new(&plan);
    // every route to the stair ends at it and contains no other transit
    let route = router.route("Lab_1", "s1").unwrap();
    assert_eq!(route.end(), "s1");
    for name in &route.names()[..route.len() - 1] {
        assert!(!plan.node(name).unwrap().kind.is_transit());
    }
    // routes not aimed at transit contain none at all
    let route = router.route("Lab_1", "gt2").unwrap();
    for name in route.names() {
        assert!(!plan.node(name).unwrap().kind.is_transit());
    }
}

#[test]
fn router_is_deterministic() {
    let plan = plan();
    let router = Router::new(&plan);
    let a = router.route("Office", "Lab_2").unwrap();
    let b = router.route("Office", "Lab_2").unwrap();
    assert_eq!(a, b);
}

#[test]
fn disconnected_node_has_no_route() {
    // Roof is declared but shares no edges with the floor
    let plan = plan();
    let err = Router::new(&plan).route("Lab_1", "Roof").unwrap_err();
    assert!(matches!(err, MargaError::NoRouteFound { .. }));
}

#[test]
fn nearest_amenity_matches_category_and_distance() {
    let plan = plan();
    // from Lab_1: gt1 is 2 edges away, gt2 is 4
    let (name, route) = nearest_amenity(&plan, "Lab_1", CellKind::GirlsToilet).unwrap();
    assert_eq!(name, "gt1");
    assert_eq!(edge_count(&route), 2);
    assert_eq!(plan.node(&name).unwrap().kind, CellKind::GirlsToilet);
    // the lift is reachable even though it is a transit node: it is the
    // terminal of its own route
    let (name, route) = nearest_amenity(&plan, "Office", CellKind::Lift).unwrap();
    assert_eq!(name, "l1");
    assert_eq!(route.end(), "l1");
}

#[test]
fn full_heading_walkthrough() {
    let plan = plan();
    let mut nav = Navigator::new(plan, TrackerConfig::default());
    let begun = nav.request_route("Lab_3", "Office").unwrap();
    assert_eq!(begun.route.names(), ["Lab_3", "c4", "Office"]);
    // Lab_3 (1,3) -> c4 (1,2): north, "go straight"
    assert_eq!(begun.instruction, "Go straight towards c4.");

    let sample = |deg: f32, ms: u64| NavInput::Heading {
        degrees: deg,
        at: Duration::from_millis(ms),
    };

    // hold north for the dwell window
    nav.advance(sample(2.0, 0)).unwrap();
    let event = nav.advance(sample(358.0, 2100)).unwrap();
    // c4 (1,2) -> Office (0,2): dx < 0, "turn left"
    assert_eq!(
        event,
        TrackerEvent::Advanced {
            instruction: "Turn left towards Office.".into()
        }
    );

    // now hold west (270°) to arrive
    nav.advance(sample(270.0, 2200)).unwrap();
    let event = nav.advance(sample(270.0, 4300)).unwrap();
    assert_eq!(event, TrackerEvent::Arrived);
    assert_eq!(nav.tracker().state(), TrackerState::Arrived);
}

#[test]
fn full_command_walkthrough() {
    let plan = plan();
    let config = TrackerConfig {
        policy: marga_map::DirectionPolicy::RelativeTurn,
        ..TrackerConfig::default()
    };
    let mut nav = Navigator::new(plan, config);
    nav.request_route("Lab_3", "Office").unwrap();
    // facing starts north, Lab_3 -> c4 is north: straight ahead
    assert_eq!(
        nav.current_instruction().unwrap(),
        "Go straight towards c4."
    );

    let step = |nav: &mut Navigator, cmd| nav.advance(NavInput::Command(cmd)).unwrap();

    let event = step(&mut nav, MoveCommand::Forward);
    // next leg heads west while we face north
    assert_eq!(
        event,
        TrackerEvent::Advanced {
            instruction: "Turn left towards Office.".into()
        }
    );
    step(&mut nav, MoveCommand::TurnLeft);
    assert_eq!(nav.tracker().facing(), Some(Facing::West));
    let event = step(&mut nav, MoveCommand::Forward);
    assert_eq!(event, TrackerEvent::Arrived);
}

#[test]
fn forward_into_empty_cell_changes_nothing() {
    let plan = plan();
    let mut nav = Navigator::new(plan, TrackerConfig::default());
    nav.request_route("Lab_1", "Office").unwrap();
    // Lab_1 is at (0,0); north is out of bounds, south is empty
    let err = nav.advance(NavInput::Command(MoveCommand::Forward)).unwrap_err();
    assert!(matches!(err, MargaError::InvalidMove(_)));
    let session = nav.tracker().session().unwrap();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.position(), plan_coord(&nav, "Lab_1"));
}

fn plan_coord(nav: &Navigator, name: &str) -> marga_map::GridCoord {
    nav.plan().coordinate(name).unwrap()
}

#[test]
fn failed_request_leaves_session_untouched() {
    let plan = plan();
    let mut nav = Navigator::new(plan, TrackerConfig::default());
    nav.request_route("Lab_1", "Office").unwrap();
    // Roof has no grid cell on Floor_0, so it fails name validation
    let err = nav.request_route("Roof", "boys_toilet").unwrap_err();
    assert!(matches!(err, MargaError::UnknownLocation(_)));
    // the earlier session is untouched
    assert_eq!(nav.tracker().state(), TrackerState::Following);
}

#[test]
fn amenity_request_from_amenity_of_same_category_is_rejected() {
    // gt1 is itself the nearest girls' toilet to gt1; no session starts
    let mut nav = Navigator::new(plan(), TrackerConfig::default());
    let err = nav.request_route("gt1", "girls_toilet").unwrap_err();
    assert!(matches!(err, MargaError::SameLocation(_)));
    assert_eq!(nav.tracker().state(), TrackerState::Idle);
}

#[test]
fn selectable_destinations_exclude_corridors_and_amenities() {
    let plan = plan();
    let names = plan.selectable_destinations();
    assert_eq!(names, vec!["Lab_1", "Lab_2", "Lab_3", "Office", "Roof"]);
}

#[test]
fn second_floor_loads_independently() {
    let plan = FloorPlan::from_json(FLOOR_DOC, "Floor_1").unwrap();
    assert_eq!(plan.coordinate("Roof"), Some(marga_map::GridCoord::new(0, 0)));
    assert_eq!(plan.coordinate("Lab_1"), None);
}
