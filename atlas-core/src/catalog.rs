//! The data catalog — memory types and the template files that
//! instantiate them.
//!
//! The catalog is pure data with absent-not-error lookups. Both tables keep
//! insertion order, which is the order nodes are later emitted in; the
//! physics layout of the rendering engine does not otherwise depend on it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::MemoryKind;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One kind of project memory: display name, prose, and display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryType {
    /// Display name.
    pub title: String,
    /// Prose description shown in the detail panel.
    pub description: String,
    /// Display color token (hex).
    pub color: String,
}

impl MemoryType {
    /// Create a new memory-type record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: color.into(),
        }
    }
}

/// A template file that instantiates one or more memory types.
///
/// The id under which a `TemplateFile` is registered is conventionally a
/// repository-relative path such as `decisions/TEMPLATE.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Display name.
    pub title: String,
    /// Prose description shown in the detail panel.
    pub description: String,
    /// The memory types this file belongs to, in display order.
    /// May be empty; the file then simply has no outgoing edges.
    #[serde(default)]
    pub memory_types: Vec<MemoryKind>,
}

impl TemplateFile {
    /// Create a new template-file record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        memory_types: Vec<MemoryKind>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            memory_types,
        }
    }
}

/// A borrowed catalog entry, as resolved from a graph node id.
#[derive(Debug, Clone, Copy)]
pub enum CatalogEntry<'a> {
    /// The id named a memory type.
    MemoryType(&'a MemoryType),
    /// The id named a template file.
    TemplateFile(&'a TemplateFile),
}

impl CatalogEntry<'_> {
    /// Display title of the underlying record.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::MemoryType(info) => &info.title,
            Self::TemplateFile(info) => &info.title,
        }
    }

    /// Prose description of the underlying record.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::MemoryType(info) => &info.description,
            Self::TemplateFile(info) => &info.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The two fixed tables the atlas is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    memory_types: IndexMap<MemoryKind, MemoryType>,
    #[serde(default)]
    template_files: IndexMap<String, TemplateFile>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Aegis framework catalog: the four memory types and the
    /// three templates that seed them.
    #[must_use]
    pub fn aegis() -> Self {
        let mut catalog = Self::new();

        catalog.insert_memory_type(
            MemoryKind::Semantic,
            MemoryType::new(
                "Semantic Memory",
                "Long-term storage for project knowledge and architectural decisions. \
                 In the Aegis framework, this memory type is primarily managed through \
                 the decisions/ directory, storing permanent, structural knowledge \
                 about the project.",
                "#97C2FC",
            ),
        );
        catalog.insert_memory_type(
            MemoryKind::Procedural,
            MemoryType::new(
                "Procedural Memory",
                "Task-based knowledge representing what needs to be done and how to do \
                 it. Managed through the tasks/ directory with different states \
                 (active, planned, hold, completed).",
                "#FB7E81",
            ),
        );
        catalog.insert_memory_type(
            MemoryKind::Working,
            MemoryType::new(
                "Working Memory",
                "Current project state and focus. Managed through current_state.md, \
                 representing the active context and immediate goals.",
                "#7BE141",
            ),
        );
        catalog.insert_memory_type(
            MemoryKind::Episodic,
            MemoryType::new(
                "Episodic Memory",
                "Historical record of project sessions and decisions. Stored in the \
                 sessions/ directory, capturing the timeline of project development.",
                "#FFA807",
            ),
        );

        catalog.insert_template_file(
            "decisions/TEMPLATE.md",
            TemplateFile::new(
                "Decision Template",
                "Template for recording architectural and project decisions. Part of \
                 semantic memory, providing structure for documenting important choices.",
                vec![MemoryKind::Semantic],
            ),
        );
        catalog.insert_template_file(
            "tasks/TEMPLATE.md",
            TemplateFile::new(
                "Task Template",
                "Template for creating new tasks. Part of procedural memory, defining \
                 the structure for task documentation.",
                vec![MemoryKind::Procedural],
            ),
        );
        catalog.insert_template_file(
            "sessions/TEMPLATE.md",
            TemplateFile::new(
                "Session Template",
                "Template for recording development sessions. Part of episodic memory, \
                 providing a consistent format for session logs.",
                vec![MemoryKind::Episodic],
            ),
        );

        catalog
    }

    /// Register a memory type. Re-registering a kind replaces its record.
    pub fn insert_memory_type(&mut self, kind: MemoryKind, info: MemoryType) {
        self.memory_types.insert(kind, info);
    }

    /// Register a template file under `id`. Re-registering replaces the record.
    pub fn insert_template_file(&mut self, id: impl Into<String>, info: TemplateFile) {
        self.template_files.insert(id.into(), info);
    }

    /// Look up a memory type. Absent kinds return `None`, never an error.
    #[must_use]
    pub fn memory_type(&self, kind: MemoryKind) -> Option<&MemoryType> {
        self.memory_types.get(&kind)
    }

    /// Look up a template file by id. Absent ids return `None`, never an error.
    #[must_use]
    pub fn template_file(&self, id: &str) -> Option<&TemplateFile> {
        self.template_files.get(id)
    }

    /// Resolve a graph node id to its backing entry: memory types take
    /// precedence over template files.
    #[must_use]
    pub fn resolve(&self, node_id: &str) -> Option<CatalogEntry<'_>> {
        if let Some(info) = MemoryKind::from_id(node_id).and_then(|kind| self.memory_type(kind)) {
            return Some(CatalogEntry::MemoryType(info));
        }
        self.template_file(node_id).map(CatalogEntry::TemplateFile)
    }

    /// Enumerate memory types in insertion order.
    pub fn memory_types(&self) -> impl Iterator<Item = (MemoryKind, &MemoryType)> {
        self.memory_types.iter().map(|(kind, info)| (*kind, info))
    }

    /// Enumerate template files in insertion order.
    pub fn template_files(&self) -> impl Iterator<Item = (&str, &TemplateFile)> {
        self.template_files.iter().map(|(id, info)| (id.as_str(), info))
    }

    /// Number of registered memory types.
    #[must_use]
    pub fn memory_type_count(&self) -> usize {
        self.memory_types.len()
    }

    /// Number of registered template files.
    #[must_use]
    pub fn template_file_count(&self) -> usize {
        self.template_files.len()
    }
}
