//! Directed edges between nodes.

use serde::{Deserialize, Serialize};

use crate::id::ElementId;

/// A directed connection from one node to another.
///
/// Edges are first-class elements: they live in the same ordered sequence as
/// nodes and carry their own [`ElementId`]. Handle names identify which
/// connection point on each node the edge attaches to, for node types that
/// expose more than one.
///
/// Serializes in the stored-document shape directly (camelCase handle
/// fields, omitted when unset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: ElementId,
    /// Node this edge leaves from.
    pub source: ElementId,
    /// Node this edge points at.
    pub target: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl Edge {
    /// Creates an edge with a fresh id and no handle annotations.
    pub fn new(source: ElementId, target: ElementId) -> Self {
        Edge::with_handles(source, target, None, None)
    }

    /// Creates an edge with a fresh id and the given handle annotations.
    pub fn with_handles(
        source: ElementId,
        target: ElementId,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> Self {
        Edge {
            id: ElementId::new(),
            source,
            target,
            source_handle,
            target_handle,
        }
    }

    /// Returns `true` if this edge starts or ends at `node`.
    pub fn touches(&self, node: ElementId) -> bool {
        self.source == node || self.target == node
    }
}
