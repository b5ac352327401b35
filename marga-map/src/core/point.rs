//! Grid coordinate type for the floor-plan grid.

use serde::{Deserialize, Serialize};

/// Grid coordinates (integer cell indices).
///
/// Origin is the top-left corner of the floor plan: x grows rightward
/// (column index), y grows downward (row index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by the given cell offsets
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> GridCoord {
        GridCoord::new(self.x + dx, self.y + dy)
    }
}
