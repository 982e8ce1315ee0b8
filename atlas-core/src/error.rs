//! Error types for the atlas core library.

use thiserror::Error;

use crate::types::MemoryKind;

/// Top-level error type for atlas operations.
///
/// The first two variants are configuration errors: the catalog data is
/// fixed at load time, so they abort initialization and have no recovery
/// path. Unresolvable references at runtime (an unknown selected node id, a
/// tag whose memory type is missing) are deliberately not errors; they
/// degrade silently per the view contract.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// A template file id collides with a memory-type id, so the two
    /// catalog namespaces would produce the same graph node id.
    #[error("Duplicate node id: {id:?} names both a memory type and a template file")]
    DuplicateNodeId {
        /// The colliding id.
        id: String,
    },

    /// The fixed memory hierarchy references a memory type the catalog
    /// does not define, which would leave a dangling edge endpoint.
    #[error("Memory hierarchy references a memory type absent from the catalog: {kind}")]
    MissingHierarchyKind {
        /// The missing memory type.
        kind: MemoryKind,
    },

    /// Configuration parse error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, AtlasError>;
