//! Selection handling — the bridge between a rendering engine and the
//! detail panel.
//!
//! The rendering engine owns the selection; this module only sees it
//! through [`SelectionEvent`] payloads. A [`GraphView`] runs the two-state
//! session (no selection / one node selected) and owns the current panel
//! markup. Handlers are synchronous and run to completion, so events are
//! simply processed in arrival order.

use tracing::warn;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::graph::{self, Graph};
use crate::panel;

/// A selection change reported by the rendering engine.
///
/// Engine bindings translate their native callbacks into these: a select
/// callback becomes [`SelectionEvent::Selected`] with the selected node
/// ids, a deselect callback becomes [`SelectionEvent::Cleared`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The selection now holds the given node ids.
    Selected(Vec<String>),
    /// The selection became empty.
    Cleared,
}

/// The graph view: catalog, derived node/edge sets, and the detail panel.
///
/// Holds no selection id of its own; selection state lives in the engine
/// and arrives only inside event payloads.
#[derive(Debug, Clone)]
pub struct GraphView {
    catalog: Catalog,
    graph: Graph,
    panel: String,
}

impl GraphView {
    /// Build the graph for `catalog` and start with the placeholder panel.
    ///
    /// # Errors
    ///
    /// Fails with the [`graph::build`] configuration errors; a view never
    /// exists for a catalog whose graph would be inconsistent.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let graph = graph::build(&catalog)?;
        Ok(Self {
            catalog,
            graph,
            panel: panel::empty(),
        })
    }

    /// The catalog this view was built from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The derived node/edge sets.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Current detail-panel markup.
    #[must_use]
    pub fn panel(&self) -> &str {
        &self.panel
    }

    /// Apply a selection event; returns whether the panel markup changed.
    ///
    /// - Exactly one selected id that resolves: the panel shows that
    ///   entry's detail.
    /// - Exactly one selected id that does not resolve: tolerated ignore,
    ///   the panel stays as it is. This is a self-loop, not a transition;
    ///   the session state is unchanged.
    /// - Anything else (empty or multi-selection, or an explicit clear):
    ///   the panel reverts to the placeholder.
    pub fn handle(&mut self, event: &SelectionEvent) -> bool {
        match event {
            SelectionEvent::Selected(ids) if ids.len() == 1 => {
                let node_id = &ids[0];
                match self.catalog.resolve(node_id) {
                    Some(entry) => {
                        let markup = panel::detail(&entry, &self.catalog);
                        let changed = markup != self.panel;
                        self.panel = markup;
                        changed
                    }
                    None => {
                        warn!(%node_id, "selected id not in catalog; panel unchanged");
                        false
                    }
                }
            }
            SelectionEvent::Selected(_) | SelectionEvent::Cleared => {
                let markup = panel::empty();
                let changed = markup != self.panel;
                self.panel = markup;
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(id: &str) -> SelectionEvent {
        SelectionEvent::Selected(vec![id.to_string()])
    }

    #[test]
    fn starts_with_the_placeholder() {
        let view = GraphView::new(Catalog::aegis()).expect("view");
        assert_eq!(view.panel(), panel::empty());
    }

    #[test]
    fn select_then_reselect_then_clear() {
        let mut view = GraphView::new(Catalog::aegis()).expect("view");

        assert!(view.handle(&select("Semantic Memory")));
        assert!(view.panel().contains("Long-term storage for project knowledge"));

        assert!(view.handle(&select("decisions/TEMPLATE.md")));
        assert!(view.panel().contains("Decision Template"));
        assert!(view.panel().contains(
            "<span class=\"memory-type\" style=\"background-color: #97C2FC\">Semantic Memory</span>"
        ));

        assert!(view.handle(&SelectionEvent::Cleared));
        assert_eq!(view.panel(), panel::empty());
    }

    #[test]
    fn unknown_id_leaves_the_panel_alone() {
        let mut view = GraphView::new(Catalog::aegis()).expect("view");
        view.handle(&select("Working Memory"));
        let shown = view.panel().to_string();

        assert!(!view.handle(&select("bogus/NODE.md")));
        assert_eq!(view.panel(), shown, "tolerated ignore must not touch the panel");
    }

    #[test]
    fn reselecting_the_same_node_reports_no_change() {
        let mut view = GraphView::new(Catalog::aegis()).expect("view");
        assert!(view.handle(&select("Episodic Memory")));
        assert!(!view.handle(&select("Episodic Memory")));
        assert!(view.panel().contains("Episodic Memory"));
    }

    #[test]
    fn multi_selection_counts_as_deselection() {
        let mut view = GraphView::new(Catalog::aegis()).expect("view");
        view.handle(&select("Working Memory"));

        let multi = SelectionEvent::Selected(vec![
            "Working Memory".to_string(),
            "Semantic Memory".to_string(),
        ]);
        assert!(view.handle(&multi));
        assert_eq!(view.panel(), panel::empty());

        // Clearing an already-empty panel is a no-op.
        assert!(!view.handle(&SelectionEvent::Cleared));
    }
}
