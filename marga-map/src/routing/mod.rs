//! Route computation over the node graph.
//!
//! - [`Router`]: constrained breadth-first shortest path
//! - [`nearest_amenity`]: closest node of a requested category
//!
//! Both operate on a loaded [`crate::plan::FloorPlan`] and return
//! ordered sequences of node names; coordinates stay out of routing
//! entirely (the adjacency list is authoritative).

mod amenity;
mod bfs;

pub use amenity::nearest_amenity;
pub use bfs::Router;

/// An ordered sequence of node names from start to end.
///
/// Immutable once computed. Always has at least one element; a
/// single-element route means start == end, which callers reject
/// before routing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    names: Vec<String>,
}

impl Route {
    pub(crate) fn new(names: Vec<String>) -> Route {
        debug_assert!(!names.is_empty());
        Route { names }
    }

    /// Node names in travel order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of nodes (edge count + 1)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// First node name
    pub fn start(&self) -> &str {
        &self.names[0]
    }

    /// Last node name
    pub fn end(&self) -> &str {
        &self.names[self.names.len() - 1]
    }

    /// Name at the given position, if within the route
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the first occurrence of `name` at or after `from`.
    pub fn position_from(&self, name: &str, from: usize) -> Option<usize> {
        self.names
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, n)| n.as_str() == name)
            .map(|(i, _)| i)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(" -> "))
    }
}
