//! Typed nodes and their per-type payloads.
//!
//! The studio supports exactly four node types. [`NodeData`] is a closed
//! tagged union over them, so the payload variant *is* the node's type: a
//! node can never change type after construction, and every consumer that
//! branches on type does so through an exhaustive match instead of a string
//! comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::ElementId;

/// Canvas position of a node, in flow coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// The closed set of node types a flow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Utterance-classification trigger.
    #[serde(rename = "intent")]
    Intent,
    /// Form-style user input collection.
    #[serde(rename = "inputsCollector")]
    InputsCollector,
    /// Embedded script hook.
    #[serde(rename = "process")]
    Process,
    /// Bot reply.
    #[serde(rename = "response")]
    Response,
}

impl NodeType {
    /// All node types, in palette order.
    pub const ALL: [NodeType; 4] = [
        NodeType::Intent,
        NodeType::InputsCollector,
        NodeType::Process,
        NodeType::Response,
    ];

    /// Wire name of the type, as stored documents spell it.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Intent => "intent",
            NodeType::InputsCollector => "inputsCollector",
            NodeType::Process => "process",
            NodeType::Response => "response",
        }
    }

    /// Default label for a freshly created node: the capitalized wire name
    /// followed by `" Node "`. The trailing space is part of the contract;
    /// saved flows contain it.
    pub fn default_label(&self) -> String {
        let name = self.as_str();
        let mut label = String::with_capacity(name.len() + 6);
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
        label.push_str(" Node ");
        label
    }

    /// Whether nodes of this type carry a sample list.
    pub fn has_samples(&self) -> bool {
        matches!(self, NodeType::Intent | NodeType::Response)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type node payload. The variant determines the node's type.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Trigger matched against user utterances; `samples` are the training
    /// phrases.
    Intent { label: String, samples: Vec<String> },
    /// Collects structured input from the user.
    InputsCollector { label: String },
    /// Runs an embedded script when the flow reaches it. The script is held
    /// as opaque text.
    Process { label: String, script: String },
    /// Sends a reply; `samples` are the phrasing variants.
    Response { label: String, samples: Vec<String> },
}

impl NodeData {
    /// Default payload for a node of `node_type`: default label, empty
    /// samples, empty script.
    pub fn defaults_for(node_type: NodeType) -> Self {
        let label = node_type.default_label();
        match node_type {
            NodeType::Intent => NodeData::Intent {
                label,
                samples: Vec::new(),
            },
            NodeType::InputsCollector => NodeData::InputsCollector { label },
            NodeType::Process => NodeData::Process {
                label,
                script: String::new(),
            },
            NodeType::Response => NodeData::Response {
                label,
                samples: Vec::new(),
            },
        }
    }

    /// The node type this payload belongs to.
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeData::Intent { .. } => NodeType::Intent,
            NodeData::InputsCollector { .. } => NodeType::InputsCollector,
            NodeData::Process { .. } => NodeType::Process,
            NodeData::Response { .. } => NodeType::Response,
        }
    }

    /// The node's display label.
    pub fn label(&self) -> &str {
        match self {
            NodeData::Intent { label, .. }
            | NodeData::InputsCollector { label }
            | NodeData::Process { label, .. }
            | NodeData::Response { label, .. } => label,
        }
    }

    pub(crate) fn set_label(&mut self, new_label: &str) {
        match self {
            NodeData::Intent { label, .. }
            | NodeData::InputsCollector { label }
            | NodeData::Process { label, .. }
            | NodeData::Response { label, .. } => *label = new_label.to_string(),
        }
    }

    /// Sample list, for the types that carry one.
    pub fn samples(&self) -> Option<&[String]> {
        match self {
            NodeData::Intent { samples, .. } | NodeData::Response { samples, .. } => {
                Some(samples.as_slice())
            }
            NodeData::InputsCollector { .. } | NodeData::Process { .. } => None,
        }
    }

    pub(crate) fn samples_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            NodeData::Intent { samples, .. } | NodeData::Response { samples, .. } => Some(samples),
            NodeData::InputsCollector { .. } | NodeData::Process { .. } => None,
        }
    }

    /// Embedded script text, for process nodes.
    pub fn script(&self) -> Option<&str> {
        match self {
            NodeData::Process { script, .. } => Some(script),
            _ => None,
        }
    }
}

/// A typed node placed on the canvas.
///
/// The id is assigned at construction and never changes. Everything visual
/// (color, highlight) is derived at render time by
/// [`style::project`](crate::style::project) and is intentionally absent
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: ElementId,
    pub position: Position,
    pub data: NodeData,
}

impl Node {
    /// Creates a node of `node_type` at `position` with a fresh id and the
    /// type's default payload.
    pub fn new(node_type: NodeType, position: Position) -> Self {
        Node {
            id: ElementId::new(),
            position,
            data: NodeData::defaults_for(node_type),
        }
    }

    /// The node's type, derived from its payload.
    pub fn node_type(&self) -> NodeType {
        self.data.node_type()
    }

    /// The node's display label.
    pub fn label(&self) -> &str {
        self.data.label()
    }
}
