//! Selection state for the canvas.
//!
//! At most one element is active at a time. The selection holds the id only,
//! never the element: it is a weak reference that must be dropped the moment
//! the element leaves the graph, and it is never serialized into a stored
//! flow.

use crate::graph::FlowGraph;
use crate::id::ElementId;

/// Which element, if any, is currently selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected: fresh editor, canvas click, or the selected element
    /// was removed.
    #[default]
    Idle,
    /// The element with this id is selected.
    Selected(ElementId),
}

impl Selection {
    /// Click on an element: it becomes the selection, replacing any previous
    /// one.
    pub fn click_element(self, id: ElementId) -> Selection {
        Selection::Selected(id)
    }

    /// Click on the empty canvas: back to idle.
    pub fn click_canvas(self) -> Selection {
        Selection::Idle
    }

    /// Drops the selection if the element it points at is no longer in
    /// `graph`. Covers both direct removal and edges removed by a node
    /// cascade.
    pub fn retain_in(self, graph: &FlowGraph) -> Selection {
        match self {
            Selection::Selected(id) if !graph.contains(id) => Selection::Idle,
            keep => keep,
        }
    }

    /// The selected id, if any.
    pub fn selected(&self) -> Option<ElementId> {
        match self {
            Selection::Idle => None,
            Selection::Selected(id) => Some(*id),
        }
    }

    /// Returns `true` if `id` is the selected element.
    pub fn is_selected(&self, id: ElementId) -> bool {
        *self == Selection::Selected(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeType, Position};

    #[test]
    fn starts_idle() {
        assert_eq!(Selection::default(), Selection::Idle);
        assert_eq!(Selection::default().selected(), None);
    }

    #[test]
    fn clicking_elements_replaces_the_selection() {
        let first = ElementId::new();
        let second = ElementId::new();
        let selection = Selection::Idle.click_element(first);
        assert!(selection.is_selected(first));
        let selection = selection.click_element(second);
        assert!(selection.is_selected(second));
        assert!(!selection.is_selected(first));
    }

    #[test]
    fn canvas_click_clears() {
        let selection = Selection::Idle.click_element(ElementId::new());
        assert_eq!(selection.click_canvas(), Selection::Idle);
    }

    #[test]
    fn retain_drops_selection_of_removed_elements() {
        let (graph, id) = FlowGraph::new().add_node(NodeType::Intent, Position::new(0.0, 0.0));
        let selection = Selection::Idle.click_element(id);
        assert_eq!(selection.retain_in(&graph), selection);
        let graph = graph.remove_elements(&[id]);
        assert_eq!(selection.retain_in(&graph), Selection::Idle);
    }
}
