//! Error types for the flow-graph core.

use thiserror::Error;

use crate::id::ElementId;

/// Errors produced by graph mutations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge endpoint does not reference a node present in the graph.
    #[error("invalid reference: no node with id {id}")]
    InvalidReference { id: ElementId },

    /// A sample index was outside a node's sample list. Nodes without a
    /// sample list count as length zero.
    #[error("sample index {index} out of range for node {id} (length {len})")]
    IndexOutOfRange {
        id: ElementId,
        index: usize,
        len: usize,
    },
}

/// Errors produced while decoding a stored flow document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Two elements in the document share an id.
    #[error("duplicate element id {id}")]
    DuplicateId { id: ElementId },

    /// An edge references a node that is not part of the document.
    #[error("edge {edge} references missing node {node}")]
    DanglingEdge { edge: ElementId, node: ElementId },

    /// The payload is not valid JSON for the document shape.
    #[error("malformed flow document: {0}")]
    Malformed(#[from] serde_json::Error),
}
