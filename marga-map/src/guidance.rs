//! Turn-by-turn instruction generation.
//!
//! Derives a human-readable directional instruction from two adjacent
//! route nodes. Two policies exist because the two tracker variants
//! grew up with different mental models:
//!
//! - [`DirectionPolicy::AbsoluteOffset`] reads the signed (dx, dy)
//!   between the node coordinates and ignores the traveler's facing.
//!   Used with continuous-heading tracking, where the compass already
//!   tells the user which way they point.
//! - [`DirectionPolicy::RelativeTurn`] compares the cardinal direction
//!   of the next edge against the current facing and phrases the
//!   rotation needed. Used with discrete move/turn commands.

use serde::{Deserialize, Serialize};

use crate::core::{offset_bearing, Facing, GridCoord};
use crate::plan::FloorPlan;
use crate::routing::Route;

/// Message shown once the cursor reaches the final route node.
pub const ARRIVAL_MESSAGE: &str = "You have arrived at your destination!";

/// Which instruction wording to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionPolicy {
    /// Instruction depends only on the grid offset between the nodes
    #[default]
    AbsoluteOffset,
    /// Instruction phrases the rotation from the current facing
    RelativeTurn,
}

/// Compass bearing (degrees, [0, 360)) required to travel from one
/// coordinate to the other. Zero when either coordinate is missing.
pub fn required_bearing(from: Option<GridCoord>, to: Option<GridCoord>) -> f32 {
    let (Some(from), Some(to)) = (from, to) else {
        return 0.0;
    };
    offset_bearing(to.x - from.x, to.y - from.y)
}

/// Instruction generator for a fixed policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionGenerator {
    policy: DirectionPolicy,
}

impl InstructionGenerator {
    /// Create a generator with the given policy.
    pub fn new(policy: DirectionPolicy) -> Self {
        InstructionGenerator { policy }
    }

    /// The configured policy
    pub fn policy(&self) -> DirectionPolicy {
        self.policy
    }

    /// Instruction for the route step at `cursor`, or the arrival
    /// message when the cursor sits on the final node.
    ///
    /// Falls back to a plain "go straight towards" when either node is
    /// missing from the coordinate index.
    pub fn instruction(
        &self,
        plan: &FloorPlan,
        route: &Route,
        cursor: usize,
        facing: Facing,
    ) -> String {
        if cursor + 1 >= route.len() {
            return ARRIVAL_MESSAGE.to_string();
        }
        // cursor + 1 < len, both lookups are in range
        let from = route.names()[cursor].as_str();
        let to = route.names()[cursor + 1].as_str();

        let (Some(from_coord), Some(to_coord)) = (plan.coordinate(from), plan.coordinate(to))
        else {
            return format!("Go straight towards {to}.");
        };

        let dx = to_coord.x - from_coord.x;
        let dy = to_coord.y - from_coord.y;

        match self.policy {
            DirectionPolicy::AbsoluteOffset => Self::absolute(dx, dy, to),
            DirectionPolicy::RelativeTurn => Self::relative(dx, dy, facing, to),
        }
    }

    fn absolute(dx: i32, dy: i32, to: &str) -> String {
        if dx > 0 {
            format!("Turn right towards {to}.")
        } else if dx < 0 {
            format!("Turn left towards {to}.")
        } else if dy < 0 {
            format!("Go straight towards {to}.")
        } else if dy > 0 {
            format!("Turn around and go straight towards {to}.")
        } else {
            format!("Go straight towards {to}.")
        }
    }

    fn relative(dx: i32, dy: i32, facing: Facing, to: &str) -> String {
        let needed = Facing::from_offset(dx, dy);
        match facing.steps_to(needed) {
            0 => format!("Go straight towards {to}."),
            1 => format!("Turn right towards {to}."),
            // rotation direction for an about-face is deliberately
            // unspecified
            2 => format!("Turn around towards {to}."),
            _ => format!("Turn left towards {to}."),
        }
    }
}
