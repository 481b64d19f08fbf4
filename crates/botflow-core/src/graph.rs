//! The flow graph and its mutation engine.
//!
//! A [`FlowGraph`] is one insertion-ordered sequence of nodes and edges,
//! keyed by element id. All mutations are snapshot-style: they borrow the
//! current graph and return a fresh one, leaving the input untouched. The
//! editor swaps its snapshot wholesale after each gesture, so callers never
//! observe a half-applied operation and a failed operation costs nothing.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::edge::Edge;
use crate::element::Element;
use crate::error::{DocumentError, GraphError};
use crate::id::ElementId;
use crate::node::{Node, NodeData, NodeType, Position};

/// An insertion-ordered flow graph with unique element ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    elements: IndexMap<ElementId, Element>,
}

impl FlowGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        FlowGraph {
            elements: IndexMap::new(),
        }
    }

    /// Builds a graph from an element sequence, enforcing id uniqueness and
    /// edge endpoint integrity. Used when decoding stored documents.
    pub fn from_elements(elements: Vec<Element>) -> Result<FlowGraph, DocumentError> {
        let mut map = IndexMap::with_capacity(elements.len());
        for element in elements {
            let id = element.id();
            if map.insert(id, element).is_some() {
                return Err(DocumentError::DuplicateId { id });
            }
        }
        let graph = FlowGraph { elements: map };
        for edge in graph.edges() {
            for endpoint in [edge.source, edge.target] {
                if graph.get_node(endpoint).is_none() {
                    return Err(DocumentError::DanglingEdge {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
        }
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// The node with `id`, if that id names a node.
    pub fn get_node(&self, id: ElementId) -> Option<&Node> {
        self.elements.get(&id).and_then(Element::as_node)
    }

    /// The edge with `id`, if that id names an edge.
    pub fn get_edge(&self, id: ElementId) -> Option<&Edge> {
        self.elements.get(&id).and_then(Element::as_edge)
    }

    /// All elements in insertion order (the canvas render order).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.elements.values().filter_map(Element::as_node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.elements.values().filter_map(Element::as_edge)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Ids of every edge that starts or ends at `node`.
    pub fn edges_touching(&self, node: ElementId) -> Vec<ElementId> {
        self.edges()
            .filter(|edge| edge.touches(node))
            .map(|edge| edge.id)
            .collect()
    }

    /// Appends a new node of `node_type` at `position` with default data.
    ///
    /// Returns the new snapshot and the created node's id.
    #[must_use]
    pub fn add_node(&self, node_type: NodeType, position: Position) -> (FlowGraph, ElementId) {
        let node = Node::new(node_type, position);
        let id = node.id;
        let mut next = self.clone();
        next.elements.insert(id, Element::Node(node));
        (next, id)
    }

    /// Appends an edge from `source` to `target`.
    ///
    /// Both endpoints must name nodes already present in the graph;
    /// otherwise no edge is created and the first offending id is reported.
    /// Self-loops and parallel edges are allowed.
    pub fn connect(
        &self,
        source: ElementId,
        target: ElementId,
    ) -> Result<(FlowGraph, ElementId), GraphError> {
        self.connect_with_handles(source, target, None, None)
    }

    /// [`connect`](Self::connect) with handle annotations on either end.
    pub fn connect_with_handles(
        &self,
        source: ElementId,
        target: ElementId,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> Result<(FlowGraph, ElementId), GraphError> {
        for endpoint in [source, target] {
            if self.get_node(endpoint).is_none() {
                return Err(GraphError::InvalidReference { id: endpoint });
            }
        }
        let edge = Edge::with_handles(source, target, source_handle, target_handle);
        let id = edge.id;
        let mut next = self.clone();
        next.elements.insert(id, Element::Edge(edge));
        Ok((next, id))
    }

    /// Removes the listed elements. Removing a node also removes every edge
    /// that touches it, so the graph never holds a dangling edge. Ids not
    /// present in the graph are ignored.
    #[must_use]
    pub fn remove_elements(&self, ids: &[ElementId]) -> FlowGraph {
        let doomed_nodes: HashSet<ElementId> = ids
            .iter()
            .copied()
            .filter(|&id| self.get_node(id).is_some())
            .collect();
        let mut doomed: HashSet<ElementId> = ids.iter().copied().collect();
        for edge in self.edges() {
            if doomed_nodes.contains(&edge.source) || doomed_nodes.contains(&edge.target) {
                doomed.insert(edge.id);
            }
        }
        let mut next = self.clone();
        next.elements.retain(|id, _| !doomed.contains(id));
        next
    }

    /// Replaces a node's label. Ids that name an edge or nothing at all are
    /// a silent no-op; the snapshot comes back unchanged.
    #[must_use]
    pub fn relabel_node(&self, id: ElementId, label: &str) -> FlowGraph {
        let mut next = self.clone();
        if let Some(Element::Node(node)) = next.elements.get_mut(&id) {
            node.data.set_label(label);
        }
        next
    }

    /// Appends a training sample to an intent or response node. Node types
    /// without a sample list, and unknown ids, are a silent no-op; callers
    /// gate on the node type before offering the operation.
    #[must_use]
    pub fn add_sample(&self, id: ElementId, text: &str) -> FlowGraph {
        let mut next = self.clone();
        if let Some(Element::Node(node)) = next.elements.get_mut(&id) {
            if let Some(samples) = node.data.samples_mut() {
                samples.push(text.to_string());
            }
        }
        next
    }

    /// Removes the sample at `index` from a node's sample list, shifting
    /// later samples down by one.
    ///
    /// Nodes without a sample list count as length zero, so any index is out
    /// of range for them. Unknown ids are a silent no-op.
    pub fn delete_sample(&self, id: ElementId, index: usize) -> Result<FlowGraph, GraphError> {
        let mut next = self.clone();
        if let Some(Element::Node(node)) = next.elements.get_mut(&id) {
            let len = node.data.samples().map_or(0, <[String]>::len);
            if index >= len {
                return Err(GraphError::IndexOutOfRange { id, index, len });
            }
            if let Some(samples) = node.data.samples_mut() {
                samples.remove(index);
            }
        }
        Ok(next)
    }

    /// Sets a process node's label and script together, atomically. Other
    /// node types and unknown ids are a silent no-op; callers gate on the
    /// node type.
    #[must_use]
    pub fn update_process_node(&self, id: ElementId, label: &str, script: &str) -> FlowGraph {
        let mut next = self.clone();
        if let Some(Element::Node(node)) = next.elements.get_mut(&id) {
            if let NodeData::Process {
                label: node_label,
                script: node_script,
            } = &mut node.data
            {
                *node_label = label.to_string();
                *node_script = script.to_string();
            }
        }
        next
    }
}
