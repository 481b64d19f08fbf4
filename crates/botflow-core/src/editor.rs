//! Gesture-level editing facade.
//!
//! [`FlowEditor`] owns the state a canvas holds for one open bot: the
//! current graph snapshot, the selection, and the viewport. Every gesture
//! asks the mutation engine for a new snapshot and swaps it in wholesale,
//! then reconciles the selection against the result. Panel edits gate on
//! the node type, so sample operations only ever reach intent and response
//! nodes and script edits only reach process nodes.

use crate::document::FlowDocument;
use crate::error::GraphError;
use crate::graph::FlowGraph;
use crate::id::ElementId;
use crate::node::{NodeData, NodeType, Position};
use crate::selection::Selection;
use crate::style::{self, StyledElement};
use crate::viewport::Viewport;

/// Which config panel to show for the selected node. Borrowed views into
/// the current snapshot; rebuilt after every edit.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigPanel<'a> {
    /// Label plus sample list (intent and response nodes).
    Samples {
        label: &'a str,
        samples: &'a [String],
    },
    /// Label only (inputsCollector nodes).
    LabelOnly { label: &'a str },
    /// Label plus embedded script editor (process nodes).
    Script { label: &'a str, script: &'a str },
}

/// Editing state for one open flow.
#[derive(Debug, Clone, Default)]
pub struct FlowEditor {
    graph: FlowGraph,
    selection: Selection,
    viewport: Viewport,
}

impl FlowEditor {
    /// Opens an editor on an empty flow at the default viewport.
    pub fn new() -> Self {
        FlowEditor::default()
    }

    /// Opens an editor on a restored flow.
    pub fn with_flow(graph: FlowGraph, viewport: Viewport) -> Self {
        FlowEditor {
            graph,
            selection: Selection::Idle,
            viewport,
        }
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the whole flow, as after a restore. Clears the selection.
    pub fn load(&mut self, graph: FlowGraph, viewport: Viewport) {
        self.graph = graph;
        self.viewport = viewport;
        self.selection = Selection::Idle;
    }

    /// Pan/zoom gesture.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Palette drop gesture: creates a node of `node_type` at `position`
    /// and returns its id.
    pub fn drop_node(&mut self, node_type: NodeType, position: Position) -> ElementId {
        let (graph, id) = self.graph.add_node(node_type, position);
        self.graph = graph;
        id
    }

    /// Connect gesture between two nodes.
    pub fn connect(
        &mut self,
        source: ElementId,
        target: ElementId,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> Result<ElementId, GraphError> {
        let (graph, id) =
            self.graph
                .connect_with_handles(source, target, source_handle, target_handle)?;
        self.graph = graph;
        Ok(id)
    }

    /// Click on an element: select it. Clicks on ids no longer in the graph
    /// (a stale gesture) are ignored.
    pub fn click_element(&mut self, id: ElementId) {
        if self.graph.contains(id) {
            self.selection = self.selection.click_element(id);
        }
    }

    /// Click on the empty canvas: clear the selection.
    pub fn click_canvas(&mut self) {
        self.selection = self.selection.click_canvas();
    }

    /// Delete gesture: removes the listed elements, cascading node removal
    /// to touching edges, and drops the selection if it pointed at anything
    /// that went away.
    pub fn remove_elements(&mut self, ids: &[ElementId]) {
        self.graph = self.graph.remove_elements(ids);
        self.selection = self.selection.retain_in(&self.graph);
    }

    /// Delete-key gesture on the current selection.
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selection.selected() {
            self.remove_elements(&[id]);
        }
    }

    /// Config-panel save of the label field.
    pub fn rename_node(&mut self, id: ElementId, label: &str) {
        self.graph = self.graph.relabel_node(id, label);
    }

    /// Config-panel "add sample" (intent and response panels only).
    pub fn add_sample(&mut self, id: ElementId, text: &str) {
        let Some(node) = self.graph.get_node(id) else {
            return;
        };
        match node.node_type() {
            NodeType::Intent | NodeType::Response => {
                self.graph = self.graph.add_sample(id, text);
            }
            NodeType::InputsCollector | NodeType::Process => {}
        }
    }

    /// Config-panel sample deletion (intent and response panels only).
    pub fn delete_sample(&mut self, id: ElementId, index: usize) -> Result<(), GraphError> {
        self.graph = self.graph.delete_sample(id, index)?;
        Ok(())
    }

    /// Config-panel save for a process node: label and script together.
    pub fn update_process_node(&mut self, id: ElementId, label: &str, script: &str) {
        let Some(node) = self.graph.get_node(id) else {
            return;
        };
        match node.node_type() {
            NodeType::Process => {
                self.graph = self.graph.update_process_node(id, label, script);
            }
            NodeType::Intent | NodeType::InputsCollector | NodeType::Response => {}
        }
    }

    /// The config panel for the current selection, if a node is selected.
    /// Edges have no panel.
    pub fn config_panel(&self) -> Option<ConfigPanel<'_>> {
        let id = self.selection.selected()?;
        let node = self.graph.get_node(id)?;
        Some(match &node.data {
            NodeData::Intent { label, samples } | NodeData::Response { label, samples } => {
                ConfigPanel::Samples { label, samples }
            }
            NodeData::InputsCollector { label } => ConfigPanel::LabelOnly { label },
            NodeData::Process { label, script } => ConfigPanel::Script { label, script },
        })
    }

    /// Render projection of the current state, recomputed on every call.
    pub fn render(&self) -> Vec<StyledElement<'_>> {
        style::project(&self.graph, self.selection)
    }

    /// The document to persist for the current state.
    pub fn document(&self) -> FlowDocument {
        FlowDocument::from_graph(&self.graph, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_connect_select_delete_gesture_sequence() {
        let mut editor = FlowEditor::new();
        let intent = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        let response = editor.drop_node(NodeType::Response, Position::new(200.0, 0.0));
        editor.connect(intent, response, None, None).unwrap();
        assert_eq!(editor.graph().edge_count(), 1);

        editor.click_element(intent);
        assert!(editor.selection().is_selected(intent));
        let highlighted = editor
            .render()
            .iter()
            .filter(|styled| match styled {
                StyledElement::Node { style, .. } => style.highlighted,
                StyledElement::Edge { style, .. } => style.highlighted,
            })
            .count();
        assert_eq!(highlighted, 1);

        editor.remove_selected();
        assert_eq!(editor.graph().node_count(), 1);
        assert_eq!(editor.graph().edge_count(), 0);
        assert_eq!(editor.selection(), Selection::Idle);
    }

    #[test]
    fn removing_a_node_clears_a_selection_on_its_cascaded_edge() {
        let mut editor = FlowEditor::new();
        let a = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        let b = editor.drop_node(NodeType::Process, Position::new(1.0, 0.0));
        let edge = editor.connect(a, b, None, None).unwrap();
        editor.click_element(edge);
        editor.remove_elements(&[a]);
        assert_eq!(editor.selection(), Selection::Idle);
    }

    #[test]
    fn stale_clicks_are_ignored() {
        let mut editor = FlowEditor::new();
        let id = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        editor.remove_elements(&[id]);
        editor.click_element(id);
        assert_eq!(editor.selection(), Selection::Idle);
    }

    #[test]
    fn panel_follows_the_selected_node_type() {
        let mut editor = FlowEditor::new();
        let intent = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        let collector = editor.drop_node(NodeType::InputsCollector, Position::new(1.0, 0.0));
        let process = editor.drop_node(NodeType::Process, Position::new(2.0, 0.0));

        assert_eq!(editor.config_panel(), None);

        editor.click_element(intent);
        editor.add_sample(intent, "hey");
        assert_eq!(
            editor.config_panel(),
            Some(ConfigPanel::Samples {
                label: "Intent Node ",
                samples: &["hey".to_string()],
            })
        );

        editor.click_element(collector);
        assert_eq!(
            editor.config_panel(),
            Some(ConfigPanel::LabelOnly {
                label: "InputsCollector Node ",
            })
        );

        editor.click_element(process);
        editor.update_process_node(process, "Score", "ctx.score += 1;");
        assert_eq!(
            editor.config_panel(),
            Some(ConfigPanel::Script {
                label: "Score",
                script: "ctx.score += 1;",
            })
        );
    }

    #[test]
    fn edges_have_no_config_panel() {
        let mut editor = FlowEditor::new();
        let a = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        let b = editor.drop_node(NodeType::Response, Position::new(1.0, 0.0));
        let edge = editor.connect(a, b, None, None).unwrap();
        editor.click_element(edge);
        assert_eq!(editor.config_panel(), None);
    }

    #[test]
    fn sample_edits_gate_on_node_type() {
        let mut editor = FlowEditor::new();
        let process = editor.drop_node(NodeType::Process, Position::new(0.0, 0.0));
        editor.add_sample(process, "ignored");
        assert_eq!(editor.graph().get_node(process).unwrap().data.samples(), None);

        let err = editor.delete_sample(process, 0).unwrap_err();
        assert!(matches!(err, GraphError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn script_edits_gate_on_node_type() {
        let mut editor = FlowEditor::new();
        let intent = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        editor.update_process_node(intent, "x", "y");
        assert_eq!(
            editor.graph().get_node(intent).unwrap().label(),
            "Intent Node "
        );
    }

    #[test]
    fn load_replaces_state_and_clears_selection() {
        let mut editor = FlowEditor::new();
        let id = editor.drop_node(NodeType::Intent, Position::new(0.0, 0.0));
        editor.click_element(id);

        let (other, _) = FlowGraph::new().add_node(NodeType::Response, Position::new(9.0, 9.0));
        editor.load(other.clone(), Viewport::new(1.0, 2.0, 0.5));
        assert_eq!(editor.graph(), &other);
        assert_eq!(editor.selection(), Selection::Idle);
        assert_eq!(editor.viewport(), Viewport::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn document_round_trips_through_the_editor() {
        let mut editor = FlowEditor::new();
        let intent = editor.drop_node(NodeType::Intent, Position::new(10.0, 20.0));
        let response = editor.drop_node(NodeType::Response, Position::new(300.0, 20.0));
        editor.add_sample(intent, "hello");
        editor.connect(intent, response, None, None).unwrap();
        editor.set_viewport(Viewport::new(4.0, -8.0, 1.25));

        let doc = editor.document();
        let (graph, viewport) = doc.into_graph().unwrap();
        let reopened = FlowEditor::with_flow(graph, viewport);
        assert_eq!(reopened.graph(), editor.graph());
        assert_eq!(reopened.viewport(), editor.viewport());
        assert_eq!(reopened.selection(), Selection::Idle);
    }
}
