//! Core flow-graph model for the botflow studio.
//!
//! This crate holds everything the canvas edits and the service stores: the
//! typed node and edge model, the snapshot-style mutation engine, selection
//! and render-projection state, the viewport, and the stored-document codec.
//! It is UI-framework agnostic; hosts draw the projection however they like
//! and persist documents through whatever transport they have.

pub mod document;
pub mod edge;
pub mod editor;
pub mod element;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod selection;
pub mod style;
pub mod viewport;

// Re-export commonly used types at the crate root.
pub use document::FlowDocument;
pub use edge::Edge;
pub use editor::{ConfigPanel, FlowEditor};
pub use element::Element;
pub use error::{DocumentError, GraphError};
pub use graph::FlowGraph;
pub use id::ElementId;
pub use node::{Node, NodeData, NodeType, Position};
pub use selection::Selection;
pub use style::{
    project, ArrowMarker, EdgeStyle, NodeColor, NodeStyle, StyledElement, EDGE_STROKE_WIDTH,
};
pub use viewport::{Viewport, DEFAULT_ZOOM};
