//! Wire-format conversion: core records to vis-network JSON.
//!
//! Node and edge records serialize directly; their field layout already
//! matches vis-network's `DataSet` items. Display options need a mapping:
//! the snake_case [`AtlasConfig`] becomes vis-network's camelCase options
//! object here, so the core config stays ordinary TOML.

use atlas_core::{AtlasConfig, Graph};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisOptions {
    nodes: VisNodeDefaults,
    edges: VisEdgeDefaults,
    physics: VisPhysics,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisNodeDefaults {
    border_width: u32,
    shadow: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisEdgeDefaults {
    width: u32,
    shadow: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisPhysics {
    stabilization: bool,
    barnes_hut: VisBarnesHut,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisBarnesHut {
    gravitational_constant: f64,
    spring_constant: f64,
}

impl From<&AtlasConfig> for VisOptions {
    fn from(config: &AtlasConfig) -> Self {
        Self {
            nodes: VisNodeDefaults {
                border_width: config.nodes.border_width,
                shadow: config.nodes.shadow,
            },
            edges: VisEdgeDefaults {
                width: config.edges.width,
                shadow: config.edges.shadow,
            },
            physics: VisPhysics {
                stabilization: config.physics.stabilization,
                barnes_hut: VisBarnesHut {
                    gravitational_constant: config.physics.gravitational_constant,
                    spring_constant: config.physics.spring_constant,
                },
            },
        }
    }
}

/// The node dataset as a JSON array of vis-network node records.
///
/// # Errors
/// Returns [`crate::VisError::Json`] if encoding fails.
pub fn nodes_json(graph: &Graph) -> Result<String> {
    Ok(serde_json::to_string(&graph.nodes)?)
}

/// The edge dataset as a JSON array of vis-network edge records.
///
/// # Errors
/// Returns [`crate::VisError::Json`] if encoding fails.
pub fn edges_json(graph: &Graph) -> Result<String> {
    Ok(serde_json::to_string(&graph.edges)?)
}

/// The options object vis-network is mounted with.
///
/// # Errors
/// Returns [`crate::VisError::Json`] if encoding fails.
pub fn options_json(config: &AtlasConfig) -> Result<String> {
    Ok(serde_json::to_string(&VisOptions::from(config))?)
}
