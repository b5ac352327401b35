//! Facing direction and compass bearing math.
//!
//! The grid frame has y growing downward, so "north" is decreasing y.
//! Bearings are compass degrees: 0° = north, 90° = east, growing
//! clockwise, normalized to [0, 360).

use serde::{Deserialize, Serialize};

/// One of the four cardinal facings, cycling north→east→south→west.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise rotation order.
    const CYCLE: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Facing after a 90° clockwise turn
    #[inline]
    pub fn turned_right(self) -> Facing {
        Self::CYCLE[(self.index() + 1) % 4]
    }

    /// Facing after a 90° counter-clockwise turn
    #[inline]
    pub fn turned_left(self) -> Facing {
        Self::CYCLE[(self.index() + 3) % 4]
    }

    /// Grid step (dx, dy) for one cell of forward movement
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    /// Compass bearing of this facing in degrees
    #[inline]
    pub fn bearing_deg(self) -> f32 {
        (self.index() as f32) * 90.0
    }

    /// Clockwise rotation steps (0..=3) from `self` to `target`.
    ///
    /// 0 = already facing it, 1 = quarter turn right, 2 = about-face,
    /// 3 = quarter turn left.
    #[inline]
    pub fn steps_to(self, target: Facing) -> u8 {
        ((target.index() + 4 - self.index()) % 4) as u8
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// Cardinal direction of the move `(dx, dy)` by dominant axis.
    ///
    /// Ties between axes resolve to the vertical (dy) axis. A zero move
    /// maps to north.
    pub fn from_offset(dx: i32, dy: i32) -> Facing {
        if dy.abs() >= dx.abs() {
            if dy > 0 {
                Facing::South
            } else {
                Facing::North
            }
        } else if dx > 0 {
            Facing::East
        } else {
            Facing::West
        }
    }

    /// Facing name for messages and logs
    pub fn label(self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }
}

/// Normalize an angle in degrees to [0, 360).
#[inline]
pub fn normalize_bearing(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Compass bearing of the grid move `(dx, dy)` in degrees.
///
/// Computed as atan2(dx, -dy): straight up the grid (decreasing y) is
/// 0°, rightward is 90°.
pub fn offset_bearing(dx: i32, dy: i32) -> f32 {
    let angle = (dx as f32).atan2(-(dy as f32)).to_degrees();
    normalize_bearing(angle)
}

/// Compass bearing from a device-orientation alpha angle.
///
/// Device frames report alpha growing counter-clockwise; the compass
/// grows clockwise, so the sample inverts.
#[inline]
pub fn compass_from_alpha(alpha_deg: f32) -> f32 {
    normalize_bearing(360.0 - alpha_deg)
}

/// Is `actual` within `tolerance` degrees of `needed`, wrapping at 360°?
pub fn within_tolerance(needed: f32, actual: f32, tolerance: f32) -> bool {
    let delta = (normalize_bearing(needed) - normalize_bearing(actual)).abs();
    delta < tolerance || delta > 360.0 - tolerance
}
