//! Cosmetic style configuration for the rendered atlas.
//!
//! Maps directly to `atlas.toml`. Everything here is opaque display tuning
//! (border widths, shadows, physics constants for node spacing), with
//! defaults that reproduce the stock Aegis page. None of it affects which
//! nodes and edges exist.

use serde::{Deserialize, Serialize};

/// Top-level atlas style configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[derive(Default)]
pub struct AtlasConfig {
    /// Node drawing settings.
    #[serde(default)]
    pub nodes: NodeStyleConfig,
    /// Edge drawing settings.
    #[serde(default)]
    pub edges: EdgeStyleConfig,
    /// Physics simulation settings.
    #[serde(default)]
    pub physics: PhysicsConfig,
}

impl AtlasConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `AtlasError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::AtlasError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Node drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyleConfig {
    /// Border width in pixels.
    #[serde(default = "default_stroke_width")]
    pub border_width: u32,
    /// Whether nodes cast a shadow.
    #[serde(default = "default_true")]
    pub shadow: bool,
}

impl Default for NodeStyleConfig {
    fn default() -> Self {
        Self {
            border_width: 2,
            shadow: true,
        }
    }
}

/// Edge drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyleConfig {
    /// Stroke width in pixels.
    #[serde(default = "default_stroke_width")]
    pub width: u32,
    /// Whether edges cast a shadow.
    #[serde(default = "default_true")]
    pub shadow: bool,
}

impl Default for EdgeStyleConfig {
    fn default() -> Self {
        Self {
            width: 2,
            shadow: true,
        }
    }
}

/// Physics simulation settings for node spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Run the stabilization pass before first paint.
    #[serde(default = "default_true")]
    pub stabilization: bool,
    /// Barnes-Hut gravitational constant (more negative = more repulsion).
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    /// Barnes-Hut spring constant.
    #[serde(default = "default_spring_constant")]
    pub spring_constant: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            stabilization: true,
            gravitational_constant: -10_000.0,
            spring_constant: 0.002,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_stroke_width() -> u32 {
    2
}

fn default_gravitational_constant() -> f64 {
    -10_000.0
}

fn default_spring_constant() -> f64 {
    0.002
}
