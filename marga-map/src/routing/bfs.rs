//! Breadth-first shortest-path search with the transit exclusion rule.

use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{MargaError, Result};
use crate::plan::FloorPlan;
use crate::routing::Route;

/// Shortest-path router over the node graph.
///
/// Breadth-first search, so the returned route has the minimum number
/// of edges among routes whose intermediate nodes are not stairs or
/// lifts. Ties break by discovery order, which follows each node's
/// neighbor-list order in the document; given the same document the
/// same route always comes back.
pub struct Router<'a> {
    plan: &'a FloorPlan,
}

impl<'a> Router<'a> {
    /// Create a router over the loaded floor.
    pub fn new(plan: &'a FloorPlan) -> Self {
        Router { plan }
    }

    /// Find the shortest route from `start` to `end`.
    ///
    /// A stair or lift neighbor is only expanded when it is the
    /// requested end node; vertical transit is a destination, never a
    /// thoroughfare. Unknown endpoints and exhausted searches both
    /// signal `NoRouteFound`.
    pub fn route(&self, start: &str, end: &str) -> Result<Route> {
        let no_route = || MargaError::NoRouteFound {
            start: start.to_string(),
            end: end.to_string(),
        };
        if self.plan.node(start).is_none() || self.plan.node(end).is_none() {
            return Err(no_route());
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                let route = self.reconstruct(&parent, start, end);
                debug!(
                    "route {} -> {}: {} nodes, {} expanded",
                    start,
                    end,
                    route.len(),
                    visited.len()
                );
                return Ok(route);
            }
            let node = self.plan.node(current).ok_or_else(no_route)?;
            for neighbor in &node.neighbors {
                let Some(neighbor_node) = self.plan.node(neighbor) else {
                    continue;
                };
                if neighbor_node.kind.is_transit() && neighbor != end {
                    trace!("pruning transit node {neighbor}");
                    continue;
                }
                if visited.insert(neighbor.as_str()) {
                    parent.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        debug!("no route {start} -> {end} ({} nodes reachable)", visited.len());
        Err(no_route())
    }

    fn reconstruct(&self, parent: &HashMap<&str, &str>, start: &str, end: &str) -> Route {
        let mut names = vec![end.to_string()];
        let mut current = end;
        while current != start {
            // every non-start node dequeued has a parent entry
            current = parent[current];
            names.push(current.to_string());
        }
        names.reverse();
        Route::new(names)
    }
}
