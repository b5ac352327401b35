//! Fundamental types shared across the engine.

mod cell;
mod direction;
mod point;

pub use cell::{Cell, CellKind, DisplayCategory};
pub use direction::{
    compass_from_alpha, normalize_bearing, offset_bearing, within_tolerance, Facing,
};
pub use point::GridCoord;
