//! Graph construction — catalog entries to renderable node/edge records.
//!
//! `build` is the one place node and edge records are created. It validates
//! the catalog first (the data is load-time fixed, so a bad catalog aborts
//! initialization) and then emits:
//!
//! - one circular node per memory type, in the type's declared color;
//! - one box node per template file, in a uniform color;
//! - one solid directed edge per (file, memory type) membership;
//! - the fixed dashed edges of the memory hierarchy, which are expressed in
//!   [`MemoryKind`] constants rather than re-typed id strings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{AtlasError, Result};
use crate::types::{MemoryKind, NodeShape};

// ---------------------------------------------------------------------------
// Styling constants
// ---------------------------------------------------------------------------

/// Uniform fill color for template-file nodes, regardless of membership.
pub const TEMPLATE_NODE_COLOR: &str = "#C2FABC";

/// Stroke color for file→type membership edges.
pub const MEMBERSHIP_EDGE_COLOR: &str = "#848484";

const MEMORY_NODE_SIZE: u32 = 30;
const MEMORY_FONT_SIZE: u32 = 20;
const TEMPLATE_FONT_SIZE: u32 = 14;

/// The conceptual memory hierarchy: working memory feeds the three
/// long-lived memory types. Hardcoded, not derived from catalog data.
pub const MEMORY_HIERARCHY: [(MemoryKind, MemoryKind); 3] = [
    (MemoryKind::Working, MemoryKind::Procedural),
    (MemoryKind::Working, MemoryKind::Semantic),
    (MemoryKind::Working, MemoryKind::Episodic),
];

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Font settings attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    /// Label font size in points.
    pub size: u32,
}

/// A renderable graph node, derived 1:1 from a catalog entry.
///
/// Created once at initialization and never mutated afterwards. The field
/// layout matches what network rendering engines consume directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique node id, shared with the catalog namespace.
    pub id: String,
    /// Label drawn inside/next to the node.
    pub label: String,
    /// Hover title.
    pub title: String,
    /// Fill color.
    pub color: String,
    /// Circle for memory types, box for template files.
    pub shape: NodeShape,
    /// Explicit node size; only memory-type nodes set one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<u32>,
    /// Label font settings.
    pub font: Font,
}

/// Stroke color wrapper for an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeColor {
    /// Stroke color.
    pub color: String,
}

/// A directed graph edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Arrow placement; always `"to"` in this graph.
    pub arrows: String,
    /// Dashed stroke (hierarchy edges only).
    #[serde(skip_serializing_if = "is_false", default)]
    pub dashes: bool,
    /// Explicit stroke color (membership edges only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<EdgeColor>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The complete node and edge sets for one catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// All nodes, memory types first, each in catalog order.
    pub nodes: Vec<GraphNode>,
    /// All edges: membership edges first, then the hierarchy.
    pub edges: Vec<GraphEdge>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build the node and edge sets for `catalog`.
///
/// Validation runs before any node is emitted:
///
/// # Errors
///
/// - [`AtlasError::DuplicateNodeId`] if a template file id collides with a
///   registered memory-type id; the two namespaces share one node id space.
/// - [`AtlasError::MissingHierarchyKind`] if the catalog lacks a memory
///   type referenced by [`MEMORY_HIERARCHY`]; the fixed edges may never
///   dangle.
///
/// Because the hierarchy spans all four kinds, a catalog that builds at all
/// contains every memory type, so membership edges cannot dangle either.
pub fn build(catalog: &Catalog) -> Result<Graph> {
    for (id, _) in catalog.template_files() {
        if MemoryKind::from_id(id).is_some_and(|kind| catalog.memory_type(kind).is_some()) {
            return Err(AtlasError::DuplicateNodeId { id: id.to_string() });
        }
    }
    for (from, to) in MEMORY_HIERARCHY {
        for kind in [from, to] {
            if catalog.memory_type(kind).is_none() {
                return Err(AtlasError::MissingHierarchyKind { kind });
            }
        }
    }

    let mut nodes =
        Vec::with_capacity(catalog.memory_type_count() + catalog.template_file_count());
    for (kind, info) in catalog.memory_types() {
        nodes.push(GraphNode {
            id: kind.id().to_string(),
            label: info.title.clone(),
            title: info.title.clone(),
            color: info.color.clone(),
            shape: NodeShape::Dot,
            size: Some(MEMORY_NODE_SIZE),
            font: Font {
                size: MEMORY_FONT_SIZE,
            },
        });
    }
    for (id, info) in catalog.template_files() {
        nodes.push(GraphNode {
            id: id.to_string(),
            label: info.title.clone(),
            title: info.title.clone(),
            color: TEMPLATE_NODE_COLOR.to_string(),
            shape: NodeShape::Box,
            size: None,
            font: Font {
                size: TEMPLATE_FONT_SIZE,
            },
        });
    }

    // Membership edges can never dangle here: the hierarchy check above
    // already guarantees every memory kind has a node.
    let mut edges = Vec::new();
    for (id, info) in catalog.template_files() {
        for kind in &info.memory_types {
            edges.push(GraphEdge {
                from: id.to_string(),
                to: kind.id().to_string(),
                arrows: "to".to_string(),
                dashes: false,
                color: Some(EdgeColor {
                    color: MEMBERSHIP_EDGE_COLOR.to_string(),
                }),
            });
        }
    }
    for (from, to) in MEMORY_HIERARCHY {
        edges.push(GraphEdge {
            from: from.id().to_string(),
            to: to.id().to_string(),
            arrows: "to".to_string(),
            dashes: true,
            color: None,
        });
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "memory graph constructed"
    );
    Ok(Graph { nodes, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryType, TemplateFile};

    fn node<'a>(graph: &'a Graph, id: &str) -> &'a GraphNode {
        graph
            .nodes
            .iter()
            .find(|n| n.id == id)
            .unwrap_or_else(|| panic!("missing node {id}"))
    }

    #[test]
    fn one_circular_node_per_memory_type() {
        let catalog = Catalog::aegis();
        let graph = build(&catalog).expect("build");

        for (kind, info) in catalog.memory_types() {
            let matches: Vec<_> = graph.nodes.iter().filter(|n| n.id == kind.id()).collect();
            assert_eq!(matches.len(), 1, "expected exactly one node for {kind}");
            assert_eq!(matches[0].shape, NodeShape::Dot);
            assert_eq!(matches[0].color, info.color);
            assert_eq!(matches[0].size, Some(30));
            assert_eq!(matches[0].font.size, 20);
        }
    }

    #[test]
    fn one_box_node_and_membership_edges_per_file() {
        let catalog = Catalog::aegis();
        let graph = build(&catalog).expect("build");

        for (id, info) in catalog.template_files() {
            let matches: Vec<_> = graph.nodes.iter().filter(|n| n.id == id).collect();
            assert_eq!(matches.len(), 1, "expected exactly one node for {id}");
            assert_eq!(matches[0].shape, NodeShape::Box);
            assert_eq!(matches[0].color, TEMPLATE_NODE_COLOR);
            assert_eq!(matches[0].font.size, 14);

            for kind in &info.memory_types {
                assert!(
                    graph
                        .edges
                        .iter()
                        .any(|e| e.from == id && e.to == kind.id() && !e.dashes),
                    "missing membership edge {id} -> {kind}"
                );
            }
        }
    }

    #[test]
    fn hierarchy_edges_are_present_and_dashed() {
        let graph = build(&Catalog::aegis()).expect("build");

        for (from, to) in MEMORY_HIERARCHY {
            let edge = graph
                .edges
                .iter()
                .find(|e| e.from == from.id() && e.to == to.id())
                .unwrap_or_else(|| panic!("missing hierarchy edge {from} -> {to}"));
            assert!(edge.dashes);
            assert_eq!(edge.arrows, "to");
            assert!(node(&graph, from.id()).shape == NodeShape::Dot);
            assert!(node(&graph, to.id()).shape == NodeShape::Dot);
        }
    }

    #[test]
    fn no_dangling_edge_endpoints() {
        let graph = build(&Catalog::aegis()).expect("build");
        for edge in &graph.edges {
            assert!(graph.nodes.iter().any(|n| n.id == edge.from));
            assert!(graph.nodes.iter().any(|n| n.id == edge.to));
        }
    }

    #[test]
    fn id_collision_is_rejected_before_emission() {
        let mut catalog = Catalog::aegis();
        catalog.insert_template_file(
            "Semantic Memory",
            TemplateFile::new("Impostor", "Collides with a memory-type id.", vec![]),
        );

        match build(&catalog) {
            Err(AtlasError::DuplicateNodeId { id }) => assert_eq!(id, "Semantic Memory"),
            other => panic!("expected DuplicateNodeId, got {other:?}"),
        }
    }

    #[test]
    fn collision_check_only_fires_when_both_namespaces_define_the_id() {
        // A file id that *parses* as a memory kind is fine as long as the
        // kind itself is not registered; only genuine collisions abort.
        let mut catalog = Catalog::new();
        for kind in MemoryKind::ALL {
            if kind != MemoryKind::Episodic {
                catalog.insert_memory_type(kind, MemoryType::new(kind.id(), "d", "#FFFFFF"));
            }
        }
        catalog.insert_template_file(
            "Episodic Memory",
            TemplateFile::new("Sessions", "Not a collision: no such memory type.", vec![]),
        );

        // The hierarchy needs Episodic Memory, so this still fails, but as
        // a hierarchy error, not a collision.
        match build(&catalog) {
            Err(AtlasError::MissingHierarchyKind { kind }) => {
                assert_eq!(kind, MemoryKind::Episodic);
            }
            other => panic!("expected MissingHierarchyKind, got {other:?}"),
        }
    }

    #[test]
    fn missing_hierarchy_kind_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert_memory_type(
            MemoryKind::Working,
            MemoryType::new("Working Memory", "d", "#7BE141"),
        );

        assert!(matches!(
            build(&catalog),
            Err(AtlasError::MissingHierarchyKind { .. })
        ));
    }

    #[test]
    fn edge_count_matches_memberships() {
        let mut catalog = Catalog::aegis();
        catalog.insert_template_file(
            "notes/TEMPLATE.md",
            TemplateFile::new(
                "Notes Template",
                "Shared notes.",
                vec![MemoryKind::Semantic, MemoryKind::Episodic],
            ),
        );
        let graph = build(&catalog).expect("build");
        let memberships: usize = catalog
            .template_files()
            .map(|(_, info)| info.memory_types.len())
            .sum();
        assert_eq!(graph.edges.len(), memberships + MEMORY_HIERARCHY.len());
    }

    #[test]
    fn files_without_memberships_have_no_outgoing_edges() {
        let mut catalog = Catalog::aegis();
        catalog.insert_template_file(
            "scratch/TEMPLATE.md",
            TemplateFile::new("Scratch Template", "No memberships.", vec![]),
        );
        let graph = build(&catalog).expect("build");
        assert!(node(&graph, "scratch/TEMPLATE.md").shape == NodeShape::Box);
        assert!(!graph.edges.iter().any(|e| e.from == "scratch/TEMPLATE.md"));
    }

    #[test]
    fn edge_serialization_omits_default_fields() {
        let graph = build(&Catalog::aegis()).expect("build");
        let membership = serde_json::to_value(&graph.edges[0]).expect("serialize");
        assert_eq!(membership["arrows"], "to");
        assert_eq!(membership["color"]["color"], MEMBERSHIP_EDGE_COLOR);
        assert!(membership.get("dashes").is_none());

        let hierarchy = serde_json::to_value(graph.edges.last().expect("edges")).expect("serialize");
        assert_eq!(hierarchy["dashes"], true);
        assert!(hierarchy.get("color").is_none());
    }
}
