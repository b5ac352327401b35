//! Route progress tracking.
//!
//! The [`ProgressTracker`] is a small state machine (`Idle` →
//! `Following` → `Arrived`) advanced by live input: continuous compass
//! samples with a dwell-time confirmation, or discrete move/turn
//! commands. The two input kinds are strategies over the same machine,
//! not separate engines; both enter through
//! [`ProgressTracker::advance`].

mod config;
mod session;
mod tracker;

pub use config::TrackerConfig;
pub use session::NavigationSession;
pub use tracker::{MoveCommand, NavInput, ProgressTracker, TrackerEvent, TrackerState};
