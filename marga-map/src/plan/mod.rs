//! Floor plan model.
//!
//! Binds one floor of a [`FloorPlanDocument`] into the structures the
//! rest of the engine routes over: the cell [`Grid`], the named node
//! graph, and the name → coordinate index derived by scanning the grid.
//! A loaded floor is immutable; switching floors means loading a fresh
//! `FloorPlan`.

mod document;
mod grid;

pub use document::{FloorPlanDocument, NodeRecord};
pub use grid::Grid;

use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;

use crate::core::{Cell, CellKind, DisplayCategory, GridCoord};
use crate::error::{MargaError, Result};

/// One loaded floor: grid, node graph, and coordinate index.
#[derive(Debug)]
pub struct FloorPlan {
    floor_id: String,
    grid: Grid,
    nodes: IndexMap<String, NodeRecord>,
    coords: HashMap<String, GridCoord>,
}

impl FloorPlan {
    /// Bind one floor of a validated document.
    ///
    /// Fails with `MalformedFloorPlan` when the floor id is absent from
    /// the layout section.
    pub fn from_document(doc: &FloorPlanDocument, floor_id: &str) -> Result<FloorPlan> {
        let rows = doc
            .floor_layout(floor_id)
            .ok_or_else(|| {
                MargaError::MalformedFloorPlan(format!("layout has no floor {floor_id}"))
            })?
            .clone();
        let grid = Grid::from_rows(rows);

        let mut coords = HashMap::new();
        for (coord, cell) in grid.named_cells() {
            if let Some(name) = &cell.name {
                coords.insert(name.clone(), coord);
            }
        }
        debug!(
            "loaded floor {}: {}x{} grid, {} nodes, {} addressable cells",
            floor_id,
            grid.width(),
            grid.height(),
            doc.nodes.len(),
            coords.len()
        );

        Ok(FloorPlan {
            floor_id: floor_id.to_string(),
            grid,
            nodes: doc.nodes.clone(),
            coords,
        })
    }

    /// Parse JSON text and bind the given floor in one step.
    pub fn from_json(text: &str, floor_id: &str) -> Result<FloorPlan> {
        let doc = FloorPlanDocument::from_json(text)?;
        FloorPlan::from_document(&doc, floor_id)
    }

    /// Identifier of the loaded floor
    pub fn floor_id(&self) -> &str {
        &self.floor_id
    }

    /// The cell grid for this floor
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid coordinate of a named location, if the name is addressable
    /// on this floor.
    pub fn coordinate(&self, name: &str) -> Option<GridCoord> {
        self.coords.get(name).copied()
    }

    /// Graph vertex by name
    pub fn node(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.get(name)
    }

    /// All graph vertices in document order.
    ///
    /// Document order is a contract: the amenity locator breaks
    /// distance ties in favor of the earlier node.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeRecord)> {
        self.nodes.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Node names a user can pick as a start or end location: everything
    /// that is not a corridor and not one of the amenity categories,
    /// sorted alphabetically.
    pub fn selectable_destinations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .nodes
            .iter()
            .filter(|(_, node)| !node.kind.is_amenity() && node.kind != CellKind::Corridor)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Resolve a cell's render category.
    ///
    /// Fallback chain for cells whose type was not explicitly tagged:
    /// exact type match, then name-prefix heuristic (`c` → corridor,
    /// `s`/`l` → stair), then exact name match against the category
    /// table, then room. Display-only; routing never consults this.
    pub fn classify(&self, cell: &Cell) -> DisplayCategory {
        match cell.kind {
            CellKind::Empty => return DisplayCategory::Empty,
            CellKind::Corridor => return DisplayCategory::Corridor,
            CellKind::Room => return DisplayCategory::Room,
            CellKind::GirlsToilet => return DisplayCategory::GirlsToilet,
            CellKind::BoysToilet => return DisplayCategory::BoysToilet,
            CellKind::Stair => return DisplayCategory::Stair,
            CellKind::Lift => return DisplayCategory::Lift,
            CellKind::EntranceA | CellKind::EntranceB => return DisplayCategory::Entrance,
            CellKind::Unknown => {}
        }
        match cell.name.as_deref().and_then(|n| n.chars().next()) {
            Some('c') => return DisplayCategory::Corridor,
            Some('s') | Some('l') => return DisplayCategory::Stair,
            _ => {}
        }
        match cell.name.as_deref() {
            Some("empty") => DisplayCategory::Empty,
            Some("corridor") => DisplayCategory::Corridor,
            Some("room") => DisplayCategory::Room,
            Some("girls_toilet") => DisplayCategory::GirlsToilet,
            Some("boys_toilet") => DisplayCategory::BoysToilet,
            Some("stair") => DisplayCategory::Stair,
            Some("lift") => DisplayCategory::Lift,
            Some("A-entrance") | Some("B-entrance") => DisplayCategory::Entrance,
            _ => DisplayCategory::Room,
        }
    }
}
