//! # atlas-vis — vis-network binding for the Aegis memory atlas
//!
//! This crate binds the engine-agnostic `atlas-core` to the vis-network
//! rendering engine. The engine runs in the host browser; everything it
//! needs (node and edge datasets, display options, and the detail markup
//! for every node) is computed here and shipped inside one self-contained
//! HTML page.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │              Host browser               │
//! │  ┌──────────────────────────────────┐  │
//! │  │     vis-network (black box)      │  │
//! │  │   selectNode / deselectNode      │  │
//! │  └───────────────┬──────────────────┘  │
//! │                  │ embedded wiring      │
//! └──────────────────┼──────────────────────┘
//!                    ▼  generated by
//!            ┌──────────────┐
//!            │  atlas-vis   │  datasets, options, page
//!            └──────┬───────┘
//!                   ▼
//!            ┌──────────────┐
//!            │  atlas-core  │  catalog, graph, panel
//!            └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - `dataset` — core graph/config records to vis-network wire JSON
//! - `page` — the standalone HTML page and its select/deselect wiring
//! - `error` — this crate's error type

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod error;
pub mod page;

pub use error::{Result, VisError};
pub use page::AtlasPage;
