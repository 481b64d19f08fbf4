//! Render projection: visual attributes derived from graph and selection.
//!
//! Styling never lives on the elements themselves and is never saved. The
//! canvas recomputes this projection from scratch on every render, so the
//! highlight can never go stale or leak into a stored document.

use crate::edge::Edge;
use crate::element::Element;
use crate::graph::FlowGraph;
use crate::node::{Node, NodeType};
use crate::selection::Selection;

/// Stroke width applied to every edge.
pub const EDGE_STROKE_WIDTH: f32 = 3.0;

/// Border color assigned to each node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeColor {
    Blue,
    Red,
    Orange,
    Green,
}

impl NodeColor {
    /// The fixed color for a node type.
    pub fn for_type(node_type: NodeType) -> NodeColor {
        match node_type {
            NodeType::Intent => NodeColor::Blue,
            NodeType::InputsCollector => NodeColor::Red,
            NodeType::Process => NodeColor::Orange,
            NodeType::Response => NodeColor::Green,
        }
    }

    /// CSS color name.
    pub fn as_css(&self) -> &'static str {
        match self {
            NodeColor::Blue => "blue",
            NodeColor::Red => "red",
            NodeColor::Orange => "orange",
            NodeColor::Green => "green",
        }
    }
}

/// Arrowhead shapes the canvas can draw. The projection always assigns
/// [`ArrowMarker::ArrowClosed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowMarker {
    Arrow,
    ArrowClosed,
}

/// Visual attributes of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub border_color: NodeColor,
    pub highlighted: bool,
}

/// Visual attributes of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub marker: ArrowMarker,
    pub stroke_width: f32,
    pub highlighted: bool,
}

/// One element paired with its derived style, in render order.
#[derive(Debug, Clone, PartialEq)]
pub enum StyledElement<'a> {
    Node { node: &'a Node, style: NodeStyle },
    Edge { edge: &'a Edge, style: EdgeStyle },
}

/// Computes the render-ready projection of `graph` under `selection`.
/// Exactly the selected element, if it is still present, is flagged
/// highlighted.
pub fn project(graph: &FlowGraph, selection: Selection) -> Vec<StyledElement<'_>> {
    graph
        .elements()
        .map(|element| match element {
            Element::Node(node) => StyledElement::Node {
                node,
                style: NodeStyle {
                    border_color: NodeColor::for_type(node.node_type()),
                    highlighted: selection.is_selected(node.id),
                },
            },
            Element::Edge(edge) => StyledElement::Edge {
                edge,
                style: EdgeStyle {
                    marker: ArrowMarker::ArrowClosed,
                    stroke_width: EDGE_STROKE_WIDTH,
                    highlighted: selection.is_selected(edge.id),
                },
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ElementId;
    use crate::node::Position;

    #[test]
    fn node_colors_follow_type() {
        assert_eq!(NodeColor::for_type(NodeType::Intent), NodeColor::Blue);
        assert_eq!(
            NodeColor::for_type(NodeType::InputsCollector),
            NodeColor::Red
        );
        assert_eq!(NodeColor::for_type(NodeType::Process), NodeColor::Orange);
        assert_eq!(NodeColor::for_type(NodeType::Response), NodeColor::Green);
        assert_eq!(NodeColor::Orange.as_css(), "orange");
    }

    #[test]
    fn projection_covers_every_element_in_order() {
        let (graph, a) = FlowGraph::new().add_node(NodeType::Intent, Position::new(0.0, 0.0));
        let (graph, b) = graph.add_node(NodeType::Response, Position::new(1.0, 1.0));
        let (graph, edge) = graph.connect(a, b).unwrap();
        let styled = project(&graph, Selection::Idle);
        assert_eq!(styled.len(), 3);
        match &styled[2] {
            StyledElement::Edge { edge: e, style } => {
                assert_eq!(e.id, edge);
                assert_eq!(style.marker, ArrowMarker::ArrowClosed);
                assert_eq!(style.stroke_width, 3.0);
                assert!(!style.highlighted);
            }
            other => panic!("expected edge last, got {other:?}"),
        }
    }

    #[test]
    fn exactly_the_selected_element_is_highlighted() {
        let (graph, a) = FlowGraph::new().add_node(NodeType::Intent, Position::new(0.0, 0.0));
        let (graph, b) = graph.add_node(NodeType::Process, Position::new(1.0, 1.0));
        let styled = project(&graph, Selection::Selected(b));
        let highlighted: Vec<(ElementId, bool)> = styled
            .iter()
            .map(|element| match element {
                StyledElement::Node { node, style } => (node.id, style.highlighted),
                StyledElement::Edge { edge, style } => (edge.id, style.highlighted),
            })
            .collect();
        assert_eq!(highlighted, vec![(a, false), (b, true)]);
    }

    #[test]
    fn selected_edges_highlight_too() {
        let (graph, a) = FlowGraph::new().add_node(NodeType::Intent, Position::new(0.0, 0.0));
        let (graph, b) = graph.add_node(NodeType::Response, Position::new(1.0, 1.0));
        let (graph, edge) = graph.connect(a, b).unwrap();
        let styled = project(&graph, Selection::Selected(edge));
        match &styled[2] {
            StyledElement::Edge { style, .. } => assert!(style.highlighted),
            other => panic!("expected edge, got {other:?}"),
        }
    }
}
