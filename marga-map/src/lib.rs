//! # Marga-Map: Indoor Wayfinding Engine
//!
//! A floor-plan routing library for indoor navigation: it loads a
//! floor-plan document into a cell grid and a named-node graph,
//! computes constrained shortest routes between locations, narrates
//! them as turn-by-turn instructions, and tracks a traveler's progress
//! from live compass samples or discrete move commands.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga_map::{FloorPlan, Navigator, TrackerConfig};
//!
//! let text = std::fs::read_to_string("stitched.json").unwrap();
//! let plan = FloorPlan::from_json(&text, "Floor_0").unwrap();
//! let mut nav = Navigator::new(plan, TrackerConfig::default());
//!
//! // "lift" is a category selector: the nearest lift is picked for you
//! let begun = nav.request_route("Room_12", "lift").unwrap();
//! println!("{}: {}", begun.route, begun.instruction);
//! ```
//!
//! ## Coordinate Frame
//!
//! Grid origin is the top-left cell; x grows rightward, y grows
//! downward. Compass bearings are degrees clockwise from north
//! (decreasing y), normalized to [0, 360).
//!
//! ## Architecture
//!
//! - [`core`]: coordinates, cells, facings, bearing math
//! - [`plan`]: floor-plan document parsing and the per-floor model
//! - [`routing`]: constrained BFS router and nearest-amenity search
//! - [`guidance`]: turn-by-turn instruction generation
//! - [`tracking`]: the route progress state machine
//!
//! Everything is synchronous and single-threaded by design: route
//! computation, instruction generation, and state transitions all run
//! inside whichever event handler called them.

pub mod core;
pub mod error;
pub mod guidance;
pub mod plan;
pub mod routing;
pub mod tracking;

// Re-export main types at crate root
pub use crate::core::{compass_from_alpha, Cell, CellKind, DisplayCategory, Facing, GridCoord};
pub use crate::error::{MargaError, Result};
pub use crate::guidance::{DirectionPolicy, InstructionGenerator, ARRIVAL_MESSAGE};
pub use crate::plan::{FloorPlan, FloorPlanDocument};
pub use crate::routing::{nearest_amenity, Route, Router};
pub use crate::tracking::{
    MoveCommand, NavInput, NavigationSession, ProgressTracker, TrackerConfig, TrackerEvent,
    TrackerState,
};

use log::info;

/// Outcome of a successful route request.
#[derive(Clone, Debug)]
pub struct RouteBegun {
    /// Resolved destination (the amenity picked, for category requests)
    pub destination: String,
    /// The computed route
    pub route: Route,
    /// First instruction to show
    pub instruction: String,
}

/// One loaded floor plus the progress tracker following routes on it.
///
/// The session-owning entry point: a route request validates its
/// endpoints, resolves category selectors through the amenity locator,
/// runs the router, and on success replaces the active session. Any
/// failure leaves the previous session running untouched.
pub struct Navigator {
    plan: FloorPlan,
    tracker: ProgressTracker,
}

impl Navigator {
    /// Create a navigator over a loaded floor.
    pub fn new(plan: FloorPlan, config: TrackerConfig) -> Self {
        Navigator {
            plan,
            tracker: ProgressTracker::new(config),
        }
    }

    /// The loaded floor plan
    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// The progress tracker
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Request a route from `start` to `end`.
    ///
    /// `end` is either a location name or one of the reserved category
    /// selectors (`girls_toilet`, `boys_toilet`, `lift`, `stair`),
    /// which route through the nearest-amenity search. Both endpoints
    /// are validated against the coordinate index before any search
    /// runs; identical endpoints are rejected up front.
    pub fn request_route(&mut self, start: &str, end: &str) -> Result<RouteBegun> {
        if self.plan.coordinate(start).is_none() {
            return Err(MargaError::UnknownLocation(start.to_string()));
        }
        if start == end {
            return Err(MargaError::SameLocation(start.to_string()));
        }

        let (destination, route) = match CellKind::from_selector(end) {
            Some(category) => {
                let (destination, route) = nearest_amenity(&self.plan, start, category)?;
                // the nearest amenity of the category can be the start
                // itself, which degenerates to a single-node route
                if route.len() < 2 {
                    return Err(MargaError::SameLocation(destination));
                }
                (destination, route)
            }
            None => {
                if self.plan.coordinate(end).is_none() {
                    return Err(MargaError::UnknownLocation(end.to_string()));
                }
                let route = Router::new(&self.plan).route(start, end)?;
                (end.to_string(), route)
            }
        };

        info!("route begun: {start} -> {destination} ({} nodes)", route.len());
        let instruction = self.tracker.start_route(&self.plan, route.clone());
        Ok(RouteBegun {
            destination,
            route,
            instruction,
        })
    }

    /// Feed one live input event to the tracker.
    pub fn advance(&mut self, input: NavInput) -> Result<TrackerEvent> {
        self.tracker.advance(&self.plan, input)
    }

    /// Instruction for the current cursor, if a route is active.
    pub fn current_instruction(&self) -> Option<String> {
        self.tracker.current_instruction(&self.plan)
    }

    /// Drop the active route and return to idle.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "layout": {
            "Floor_0": [
                [{"type":"room","name":"A"}, {"type":"corridor","name":"c1"}, {"type":"room","name":"B"}],
                [{"type":"empty"}, {"type":"lift","name":"l1"}, {"type":"empty"}]
            ]
        },
        "nodes": {
            "A": {"type":"room","neighbors":["c1"]},
            "c1": {"type":"corridor","neighbors":["A","B","l1"]},
            "B": {"type":"room","neighbors":["c1"]},
            "l1": {"type":"lift","neighbors":["c1"]}
        }
    }"#;

    fn navigator() -> Navigator {
        let plan = FloorPlan::from_json(DOC, "Floor_0").unwrap();
        Navigator::new(plan, TrackerConfig::default())
    }

    #[test]
    fn test_request_route_by_name() {
        let mut nav = navigator();
        let begun = nav.request_route("A", "B").unwrap();
        assert_eq!(begun.destination, "B");
        assert_eq!(begun.route.names(), ["A", "c1", "B"]);
        assert_eq!(begun.instruction, "Turn right towards c1.");
        assert_eq!(nav.tracker().state(), TrackerState::Following);
    }

    #[test]
    fn test_request_route_by_category() {
        let mut nav = navigator();
        let begun = nav.request_route("A", "lift").unwrap();
        assert_eq!(begun.destination, "l1");
        assert_eq!(begun.route.end(), "l1");
    }

    #[test]
    fn test_same_location_rejected_before_routing() {
        let mut nav = navigator();
        let err = nav.request_route("A", "A").unwrap_err();
        assert!(matches!(err, MargaError::SameLocation(_)));
        assert_eq!(nav.tracker().state(), TrackerState::Idle);
    }

    #[test]
    fn test_amenity_request_from_matching_amenity_rejected() {
        // the lift itself asking for the nearest lift: the locator
        // resolves to the start, which is not a route
        let mut nav = navigator();
        let err = nav.request_route("l1", "lift").unwrap_err();
        assert!(matches!(err, MargaError::SameLocation(_)));
        assert_eq!(nav.tracker().state(), TrackerState::Idle);
    }

    #[test]
    fn test_unknown_names_rejected() {
        let mut nav = navigator();
        assert!(matches!(
            nav.request_route("ghost", "B").unwrap_err(),
            MargaError::UnknownLocation(_)
        ));
        assert!(matches!(
            nav.request_route("A", "ghost").unwrap_err(),
            MargaError::UnknownLocation(_)
        ));
    }

    #[test]
    fn test_failed_request_keeps_previous_session() {
        let mut nav = navigator();
        nav.request_route("A", "B").unwrap();
        let err = nav.request_route("A", "boys_toilet").unwrap_err();
        assert!(matches!(err, MargaError::NoAmenity(_)));
        // the A -> B session is still live
        assert_eq!(nav.tracker().state(), TrackerState::Following);
        assert_eq!(nav.tracker().session().unwrap().route().end(), "B");
    }

    #[test]
    fn test_new_request_replaces_session() {
        let mut nav = navigator();
        nav.request_route("A", "B").unwrap();
        nav.request_route("B", "A").unwrap();
        let session = nav.tracker().session().unwrap();
        assert_eq!(session.route().start(), "B");
        assert_eq!(session.cursor(), 0);
    }
}
