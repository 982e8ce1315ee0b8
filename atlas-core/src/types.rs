//! Identity types shared across the atlas.
//!
//! Memory types are an enumerated type rather than loose string keys, so
//! every place that names one (catalog tables, graph edges, the fixed
//! memory hierarchy) references the same constants and cannot drift.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Memory kinds
// ---------------------------------------------------------------------------

/// The four kinds of project memory in the Aegis framework.
///
/// The serialized form and the node id are both the display id returned by
/// [`MemoryKind::id`], e.g. `"Semantic Memory"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryKind {
    /// Long-term project knowledge and architectural decisions.
    #[serde(rename = "Semantic Memory")]
    Semantic,
    /// Task-based knowledge: what needs to be done and how.
    #[serde(rename = "Procedural Memory")]
    Procedural,
    /// Current project state and focus.
    #[serde(rename = "Working Memory")]
    Working,
    /// Historical record of sessions and decisions.
    #[serde(rename = "Episodic Memory")]
    Episodic,
}

impl MemoryKind {
    /// All kinds, in catalog display order.
    pub const ALL: [Self; 4] = [
        Self::Semantic,
        Self::Procedural,
        Self::Working,
        Self::Episodic,
    ];

    /// The stable id used as both map key and graph node id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Semantic => "Semantic Memory",
            Self::Procedural => "Procedural Memory",
            Self::Working => "Working Memory",
            Self::Episodic => "Episodic Memory",
        }
    }

    /// Inverse of [`MemoryKind::id`]. Returns `None` for unknown ids.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Node shapes
// ---------------------------------------------------------------------------

/// Visual shape of a graph node.
///
/// Memory types render as circles, template files as boxes. This is a
/// display distinction only; it carries no data semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    /// Circular node (memory types).
    Dot,
    /// Rectangular node (template files).
    Box,
}

impl NodeShape {
    /// The shape name as the rendering engine expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Box => "box",
        }
    }
}
