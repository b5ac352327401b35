//! Navigation session state.

use std::time::Duration;

use crate::core::{Facing, GridCoord};
use crate::routing::Route;

/// Transient state for one computed route.
///
/// Created when a route request succeeds, replaced wholesale by the
/// next request. The progress tracker owns the cursor and facing
/// exclusively; nothing else mutates them.
#[derive(Clone, Debug)]
pub struct NavigationSession {
    route: Route,
    /// Current position on the route, 0-based, never decreases
    cursor: usize,
    /// Discrete-variant facing, rotated by turn commands
    facing: Facing,
    /// Discrete-variant grid position, stepped by move commands
    position: GridCoord,
    /// Last continuous heading sample in compass degrees
    heading_deg: f32,
    /// When the heading first entered tolerance, unset after any
    /// excursion or cursor advance
    dwell_start: Option<Duration>,
}

impl NavigationSession {
    /// Start a session at the first route node.
    pub fn new(route: Route, start_position: GridCoord) -> Self {
        NavigationSession {
            route,
            cursor: 0,
            facing: Facing::default(),
            position: start_position,
            heading_deg: 0.0,
            dwell_start: None,
        }
    }

    /// The route being followed
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Current route index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Node name at the cursor
    pub fn current_node(&self) -> &str {
        // cursor stays within the route by construction
        self.route.names()[self.cursor].as_str()
    }

    /// Has the cursor reached the final node?
    pub fn is_arrived(&self) -> bool {
        self.cursor + 1 >= self.route.len()
    }

    /// Current facing (discrete variant)
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Current grid position (discrete variant)
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Last observed heading in compass degrees
    pub fn heading_deg(&self) -> f32 {
        self.heading_deg
    }

    pub(crate) fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub(crate) fn set_position(&mut self, position: GridCoord) {
        self.position = position;
    }

    pub(crate) fn set_heading(&mut self, degrees: f32) {
        self.heading_deg = degrees;
    }

    /// Move the cursor forward to `index`. The cursor is monotonic;
    /// a smaller index is ignored.
    pub(crate) fn advance_to(&mut self, index: usize) {
        if index > self.cursor && index < self.route.len() {
            self.cursor = index;
        }
    }

    pub(crate) fn dwell_start(&self) -> Option<Duration> {
        self.dwell_start
    }

    pub(crate) fn set_dwell_start(&mut self, at: Option<Duration>) {
        self.dwell_start = at;
    }
}
