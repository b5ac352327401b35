//! Cell types for the floor-plan grid.
//!
//! Every grid position carries a category tag and, when it denotes a
//! navigable location, a unique name. Unnamed cells occupy space for
//! rendering only and are never routed through.

use serde::{Deserialize, Serialize};

/// Semantic cell category - what kind of space is this?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    /// Unoccupied space, not traversable by the discrete tracker
    #[default]
    #[serde(rename = "empty")]
    Empty,

    /// Hallway cell connecting rooms
    #[serde(rename = "corridor")]
    Corridor,

    /// Ordinary addressable room
    #[serde(rename = "room")]
    Room,

    /// Girls' toilet amenity
    #[serde(rename = "girls_toilet")]
    GirlsToilet,

    /// Boys' toilet amenity
    #[serde(rename = "boys_toilet")]
    BoysToilet,

    /// Staircase - vertical transit, excluded from through-routing
    #[serde(rename = "stair")]
    Stair,

    /// Lift - vertical transit, excluded from through-routing
    #[serde(rename = "lift")]
    Lift,

    /// Building entrance A
    #[serde(rename = "A-entrance")]
    EntranceA,

    /// Building entrance B
    #[serde(rename = "B-entrance")]
    EntranceB,

    /// Category tag not in the table; display category falls back to
    /// the name heuristic in [`crate::plan::FloorPlan::classify`]
    #[serde(other)]
    Unknown,
}

impl CellKind {
    /// Is this a vertical transit category (stair or lift)?
    ///
    /// Transit cells are only routable as the final node of a route.
    #[inline]
    pub fn is_transit(self) -> bool {
        matches!(self, CellKind::Stair | CellKind::Lift)
    }

    /// Is this one of the four reserved amenity categories?
    #[inline]
    pub fn is_amenity(self) -> bool {
        matches!(
            self,
            CellKind::GirlsToilet | CellKind::BoysToilet | CellKind::Stair | CellKind::Lift
        )
    }

    /// Parse a reserved category selector token (`girls_toilet`,
    /// `boys_toilet`, `lift`, `stair`). Returns None for anything else,
    /// including non-amenity category names.
    pub fn from_selector(token: &str) -> Option<CellKind> {
        match token {
            "girls_toilet" => Some(CellKind::GirlsToilet),
            "boys_toilet" => Some(CellKind::BoysToilet),
            "lift" => Some(CellKind::Lift),
            "stair" => Some(CellKind::Stair),
            _ => None,
        }
    }

    /// Human-readable label for messages ("girls toilet", "lift", ...)
    pub fn label(self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Corridor => "corridor",
            CellKind::Room => "room",
            CellKind::GirlsToilet => "girls toilet",
            CellKind::BoysToilet => "boys toilet",
            CellKind::Stair => "stair",
            CellKind::Lift => "lift",
            CellKind::EntranceA => "entrance A",
            CellKind::EntranceB => "entrance B",
            CellKind::Unknown => "unknown",
        }
    }
}

/// One grid position: a category plus an optional unique location name.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell category
    #[serde(rename = "type", default)]
    pub kind: CellKind,
    /// Unique location name, present when the cell is addressable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Cell {
    /// An empty, unnamed cell (the out-of-bounds default).
    pub const EMPTY: Cell = Cell {
        kind: CellKind::Empty,
        name: None,
    };
}

/// Render category resolved by [`crate::plan::FloorPlan::classify`].
///
/// Display-only: routing decisions never depend on this (the prefix
/// heuristic behind it is a guess from naming convention).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayCategory {
    Empty,
    Corridor,
    Room,
    GirlsToilet,
    BoysToilet,
    Stair,
    Lift,
    Entrance,
}
