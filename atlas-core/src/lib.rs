//! # Aegis Atlas Core
//!
//! Engine-agnostic core of the Aegis memory atlas — the interactive
//! node-link diagram of the memory system behind the Aegis documentation
//! framework.
//!
//! The atlas is a presentation layer over two fixed tables: the framework's
//! memory types and the template files that instantiate them. The four
//! memory types, grounded in cognitive science:
//!
//! - **Semantic** — "What the project knows" (`decisions/`)
//! - **Procedural** — "What needs to be done" (`tasks/`)
//! - **Working** — "What is in focus right now" (`current_state.md`)
//! - **Episodic** — "What happened" (`sessions/`)
//!
//! ## Pipeline
//!
//! [`Catalog`] supplies the data, [`graph::build`] turns it into renderable
//! node/edge records, and [`GraphView`] drives the detail panel from
//! selection events. Rendering engines stay outside this crate: a binding
//! translates its native select/deselect callbacks into
//! [`SelectionEvent`]s (the `atlas-vis` crate does this for vis-network)
//! and displays the markup the view hands back.
//!
//! Everything here is synchronous and allocation-light: catalog lookups and
//! markup assembly, no I/O beyond optional config-file loading.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod panel;
pub mod types;
pub mod view;

pub use catalog::{Catalog, CatalogEntry, MemoryType, TemplateFile};
pub use config::AtlasConfig;
pub use error::{AtlasError, Result};
pub use graph::{Graph, GraphEdge, GraphNode};
pub use types::{MemoryKind, NodeShape};
pub use view::{GraphView, SelectionEvent};
