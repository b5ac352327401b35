//! Error types for the wayfinding engine.

use thiserror::Error;

/// Engine error type.
///
/// Only `MalformedFloorPlan` is fatal to a session; every other variant
/// is user-correctable and leaves the tracker state untouched.
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("malformed floor plan: {0}")]
    MalformedFloorPlan(String),

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("no route found from {start} to {end}")]
    NoRouteFound { start: String, end: String },

    #[error("start and end are both {0}; nothing to navigate")]
    SameLocation(String),

    #[error("no reachable {0} on this floor")]
    NoAmenity(String),

    #[error("invalid move: {0}")]
    InvalidMove(String),
}

impl From<serde_json::Error> for MargaError {
    fn from(e: serde_json::Error) -> Self {
        MargaError::MalformedFloorPlan(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
