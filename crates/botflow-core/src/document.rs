//! The stored flow document.
//!
//! A saved flow is a single JSON object `{elements, position, zoom}` where
//! `position` is the `[x, y]` pan offset. Node entries carry a `type`
//! discriminator alongside `{id, position, data}`; edge entries are the
//! [`Edge`] shape itself. The two are told apart structurally: nodes have a
//! `position` object, edges have `source` and `target`.
//!
//! Decoding is tolerant of what older documents omit. Missing `elements`
//! decodes as an empty flow, a missing pan offset as the origin, a missing
//! `zoom` as [`DEFAULT_ZOOM`], and missing `samples`/`script` fields as
//! empty. Unknown fields (old documents sometimes carry inline style
//! attributes) are ignored. Encoding always writes the full canonical shape
//! and never includes presentation state.

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::element::Element;
use crate::error::DocumentError;
use crate::graph::FlowGraph;
use crate::id::ElementId;
use crate::node::{Node, NodeData, NodeType, Position};
use crate::viewport::{Viewport, DEFAULT_ZOOM};

/// Wire form of a node's `data` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NodeDataWire {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    samples: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    script: Option<String>,
}

/// Wire form of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NodeWire {
    id: ElementId,
    #[serde(rename = "type")]
    node_type: NodeType,
    position: Position,
    data: NodeDataWire,
}

impl NodeWire {
    fn from_node(node: &Node) -> NodeWire {
        let data = match &node.data {
            NodeData::Intent { label, samples } | NodeData::Response { label, samples } => {
                NodeDataWire {
                    label: label.clone(),
                    samples: Some(samples.clone()),
                    script: None,
                }
            }
            NodeData::InputsCollector { label } => NodeDataWire {
                label: label.clone(),
                samples: None,
                script: None,
            },
            NodeData::Process { label, script } => NodeDataWire {
                label: label.clone(),
                samples: None,
                script: Some(script.clone()),
            },
        };
        NodeWire {
            id: node.id,
            node_type: node.node_type(),
            position: node.position,
            data,
        }
    }

    fn into_node(self) -> Node {
        let NodeDataWire {
            label,
            samples,
            script,
        } = self.data;
        let data = match self.node_type {
            NodeType::Intent => NodeData::Intent {
                label,
                samples: samples.unwrap_or_default(),
            },
            NodeType::InputsCollector => NodeData::InputsCollector { label },
            NodeType::Process => NodeData::Process {
                label,
                script: script.unwrap_or_default(),
            },
            NodeType::Response => NodeData::Response {
                label,
                samples: samples.unwrap_or_default(),
            },
        };
        Node {
            id: self.id,
            position: self.position,
            data,
        }
    }
}

/// One stored element, distinguished structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum ElementWire {
    Node(NodeWire),
    Edge(Edge),
}

impl ElementWire {
    fn into_element(self) -> Element {
        match self {
            ElementWire::Node(node) => Element::Node(node.into_node()),
            ElementWire::Edge(edge) => Element::Edge(edge),
        }
    }
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

/// A complete stored flow: element sequence plus viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    #[serde(default)]
    elements: Vec<ElementWire>,
    /// Pan offset as `[x, y]`.
    #[serde(default)]
    position: [f64; 2],
    #[serde(default = "default_zoom")]
    zoom: f64,
}

impl Default for FlowDocument {
    /// The document of an empty flow at the default viewport.
    fn default() -> Self {
        FlowDocument {
            elements: Vec::new(),
            position: [0.0, 0.0],
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl FlowDocument {
    /// Projects a graph and viewport into the storable shape.
    pub fn from_graph(graph: &FlowGraph, viewport: Viewport) -> FlowDocument {
        let elements = graph
            .elements()
            .map(|element| match element {
                Element::Node(node) => ElementWire::Node(NodeWire::from_node(node)),
                Element::Edge(edge) => ElementWire::Edge(edge.clone()),
            })
            .collect();
        FlowDocument {
            elements,
            position: [viewport.x, viewport.y],
            zoom: viewport.zoom,
        }
    }

    /// Rebuilds the graph and viewport this document describes.
    pub fn into_graph(self) -> Result<(FlowGraph, Viewport), DocumentError> {
        let viewport = Viewport::new(self.position[0], self.position[1], self.zoom);
        let elements = self
            .elements
            .into_iter()
            .map(ElementWire::into_element)
            .collect();
        let graph = FlowGraph::from_elements(elements)?;
        Ok((graph, viewport))
    }

    /// Number of stored elements, nodes and edges combined.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}
