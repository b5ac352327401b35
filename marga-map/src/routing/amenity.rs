//! Nearest-amenity search.

use log::debug;

use crate::core::CellKind;
use crate::error::{MargaError, Result};
use crate::plan::FloorPlan;
use crate::routing::{Route, Router};

/// Find the nearest node of the requested category, by route length.
///
/// Runs the router from `start` to every node whose type equals
/// `category` and keeps the route with the fewest nodes. Candidates are
/// tried in document order and only a strictly shorter route replaces
/// the best so far, so an equidistant pair resolves to whichever node
/// appears first in the document. Signals `NoAmenity` when no node of
/// the category exists or none is reachable under the transit rule.
pub fn nearest_amenity(
    plan: &FloorPlan,
    start: &str,
    category: CellKind,
) -> Result<(String, Route)> {
    let router = Router::new(plan);
    let mut best: Option<(String, Route)> = None;

    for (name, node) in plan.nodes() {
        if node.kind != category {
            continue;
        }
        let Ok(route) = router.route(start, name) else {
            continue;
        };
        let shorter = best
            .as_ref()
            .map(|(_, b)| route.len() < b.len())
            .unwrap_or(true);
        if shorter {
            best = Some((name.to_string(), route));
        }
    }

    match best {
        Some((name, route)) => {
            debug!(
                "nearest {} from {}: {} ({} nodes)",
                category.label(),
                start,
                name,
                route.len()
            );
            Ok((name, route))
        }
        None => Err(MargaError::NoAmenity(category.label().to_string())),
    }
}
