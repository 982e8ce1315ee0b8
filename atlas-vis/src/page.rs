//! The standalone atlas page.
//!
//! One HTML document carries everything: the vis-network bundle reference,
//! the render surface and detail region, the encoded datasets and options,
//! and a small wiring script. The script only moves precomputed markup;
//! selection handling semantics live in `atlas-core` and are baked into the
//! per-node detail map at export time.

use std::collections::BTreeMap;
use std::path::Path;

use atlas_core::{AtlasConfig, Catalog, Graph, graph, panel};
use tracing::info;

use crate::dataset;
use crate::error::Result;

/// Published standalone bundle of the rendering engine.
const VIS_NETWORK_BUNDLE: &str =
    "https://unpkg.com/vis-network/standalone/umd/vis-network.min.js";

/// Id of the render surface the network is mounted on.
const NETWORK_CONTAINER_ID: &str = "mynetwork";

/// Id of the detail region the selection handlers write to.
const DETAIL_CONTAINER_ID: &str = "nodeInfo";

/// A fully prepared atlas page, ready to render or write to disk.
#[derive(Debug, Clone)]
pub struct AtlasPage {
    title: String,
    graph: Graph,
    config: AtlasConfig,
    details: BTreeMap<String, String>,
    empty_detail: String,
}

impl AtlasPage {
    /// Prepare a page for `catalog`: build the graph and precompute the
    /// detail markup for every node.
    ///
    /// # Errors
    ///
    /// Fails with the core's configuration errors if the catalog cannot
    /// produce a consistent graph.
    pub fn new(catalog: &Catalog, config: AtlasConfig) -> Result<Self> {
        let graph = graph::build(catalog)?;
        let details = graph
            .nodes
            .iter()
            .filter_map(|node| {
                catalog
                    .resolve(&node.id)
                    .map(|entry| (node.id.clone(), panel::detail(&entry, catalog)))
            })
            .collect();

        Ok(Self {
            title: "Aegis Memory System".to_string(),
            graph,
            config,
            details,
            empty_detail: panel::empty(),
        })
    }

    /// Override the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the complete HTML document.
    ///
    /// # Errors
    /// Returns [`crate::VisError::Json`] if a dataset cannot be encoded.
    pub fn render(&self) -> Result<String> {
        let nodes = dataset::nodes_json(&self.graph)?;
        let edges = dataset::edges_json(&self.graph)?;
        let options = dataset::options_json(&self.config)?;
        let details = serde_json::to_string(&self.details)?;
        let empty_detail = serde_json::to_string(&self.empty_detail)?;

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", self.title));
        html.push_str(&format!(
            "  <script src=\"{VIS_NETWORK_BUNDLE}\"></script>\n"
        ));
        html.push_str("  <style>\n");
        html.push_str(include_str!("page_style.css"));
        html.push_str("  </style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        html.push_str(&format!("<header><h1>{}</h1></header>\n", self.title));
        html.push_str("<main>\n");
        html.push_str(&format!("  <div id=\"{NETWORK_CONTAINER_ID}\"></div>\n"));
        html.push_str(&format!(
            "  <aside id=\"{DETAIL_CONTAINER_ID}\">\n{}</aside>\n",
            indent(&self.empty_detail, 4)
        ));
        html.push_str("</main>\n");
        html.push_str("<script>\n");
        html.push_str(&format!("const nodes = new vis.DataSet({nodes});\n"));
        html.push_str(&format!("const edges = new vis.DataSet({edges});\n"));
        html.push_str(&format!("const options = {options};\n"));
        html.push_str(&format!("const details = {details};\n"));
        html.push_str(&format!("const emptyDetail = {empty_detail};\n"));
        html.push_str(&format!(
            r"window.addEventListener('load', () => {{
    const container = document.getElementById('{NETWORK_CONTAINER_ID}');
    const nodeInfo = document.getElementById('{DETAIL_CONTAINER_ID}');
    const network = new vis.Network(container, {{ nodes, edges }}, options);

    network.on('selectNode', (params) => {{
        if (params.nodes.length === 1) {{
            const markup = details[params.nodes[0]];
            if (markup !== undefined) {{
                nodeInfo.innerHTML = markup;
            }}
        }}
    }});

    network.on('deselectNode', () => {{
        nodeInfo.innerHTML = emptyDetail;
    }});
}});
"
        ));
        html.push_str("</script>\n");
        html.push_str("</body>\n");
        html.push_str("</html>\n");
        Ok(html)
    }

    /// Render the page and write it to `path`.
    ///
    /// # Errors
    /// Returns an error if rendering or the write fails.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let html = self.render()?;
        std::fs::write(path, &html)?;
        info!(
            path = %path.display(),
            bytes = html.len(),
            nodes = self.graph.nodes.len(),
            "atlas page written"
        );
        Ok(())
    }
}

fn indent(markup: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    markup
        .lines()
        .map(|line| format!("{pad}{line}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> AtlasPage {
        AtlasPage::new(&Catalog::aegis(), AtlasConfig::default()).expect("page")
    }

    #[test]
    fn page_embeds_surface_engine_and_detail_region() {
        let html = page().render().expect("render");

        assert!(html.contains("id=\"mynetwork\""));
        assert!(html.contains("id=\"nodeInfo\""));
        assert!(html.contains(VIS_NETWORK_BUNDLE));
        assert!(html.contains("new vis.Network"));
        // The detail region starts out showing the placeholder.
        assert!(html.contains("Select a node to view details"));
    }

    #[test]
    fn page_embeds_details_for_every_node() {
        let atlas = page();
        let html = atlas.render().expect("render");
        assert_eq!(atlas.details.len(), 7);
        for id in atlas.details.keys() {
            assert!(
                html.contains(&format!("\"{id}\"")),
                "page must embed detail markup for {id}"
            );
        }
        // Spot-check one precomputed panel inside the embedded map.
        assert!(html.contains("background-color: #97C2FC"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let atlas = page();
        assert_eq!(atlas.render().expect("render"), atlas.render().expect("render"));
    }

    #[test]
    fn title_is_overridable() {
        let html = page()
            .with_title("Team Atlas")
            .render()
            .expect("render");
        assert!(html.contains("<title>Team Atlas</title>"));
    }

    #[test]
    fn page_writes_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("atlas.html");
        page().write_to(&path).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("deselectNode"));
    }
}
