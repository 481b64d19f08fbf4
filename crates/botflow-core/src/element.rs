//! The mixed element wrapper.
//!
//! A flow is one ordered sequence of nodes and edges. [`Element`] is the
//! entry type of that sequence; the graph stores elements by id and keeps
//! insertion order, which doubles as the canvas render order.

use crate::edge::Edge;
use crate::id::ElementId;
use crate::node::Node;

/// One entry in a flow's ordered element sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Node(Node),
    Edge(Edge),
}

impl Element {
    /// The element's id, regardless of kind.
    pub fn id(&self) -> ElementId {
        match self {
            Element::Node(node) => node.id,
            Element::Edge(edge) => edge.id,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Element::Edge(_))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Element::Node(_) => None,
            Element::Edge(edge) => Some(edge),
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Edge> for Element {
    fn from(edge: Edge) -> Self {
        Element::Edge(edge)
    }
}
