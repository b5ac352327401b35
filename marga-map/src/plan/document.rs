//! Floor-plan document format.
//!
//! A document carries a `layout` section (per-floor 2D cell arrays) and
//! a `nodes` section (the routable location graph). Both sections use
//! `IndexMap` so the document's own ordering is preserved: node
//! iteration order is a user-visible contract for amenity tie-breaking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellKind};
use crate::error::{MargaError, Result};

/// One entry of the `nodes` section: a named graph vertex.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Category, mirrors the named cell's type
    #[serde(rename = "type", default)]
    pub kind: CellKind,
    /// Adjacent node names. Authoritative for routing; independent of
    /// grid adjacency.
    #[serde(default)]
    pub neighbors: Vec<String>,
}

/// A parsed floor-plan document, not yet bound to a floor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FloorPlanDocument {
    /// Floor identifier → 2D cell array (rows of cells, top row first)
    pub layout: IndexMap<String, Vec<Vec<Cell>>>,
    /// Node name → graph vertex
    pub nodes: IndexMap<String, NodeRecord>,
}

impl FloorPlanDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<FloorPlanDocument> {
        let doc: FloorPlanDocument = serde_json::from_str(text)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Floor identifiers present in the layout section, document order.
    pub fn floors(&self) -> impl Iterator<Item = &str> {
        self.layout.keys().map(String::as_str)
    }

    /// Cell rows for one floor, if present.
    pub fn floor_layout(&self, floor_id: &str) -> Option<&Vec<Vec<Cell>>> {
        self.layout.get(floor_id)
    }

    /// Structural validation: non-empty sections, every neighbor
    /// reference resolves to an existing node.
    fn validate(&self) -> Result<()> {
        if self.layout.is_empty() {
            return Err(MargaError::MalformedFloorPlan(
                "layout section has no floors".into(),
            ));
        }
        if self.nodes.is_empty() {
            return Err(MargaError::MalformedFloorPlan(
                "nodes section is empty".into(),
            ));
        }
        for (name, node) in &self.nodes {
            for neighbor in &node.neighbors {
                if !self.nodes.contains_key(neighbor) {
                    return Err(MargaError::MalformedFloorPlan(format!(
                        "node {name} references unknown neighbor {neighbor}"
                    )));
                }
            }
        }
        Ok(())
    }
}
