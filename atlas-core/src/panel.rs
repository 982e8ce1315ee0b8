//! Detail-panel markup for the currently selected entry.
//!
//! The panel is a title block plus a description block; template files also
//! get one colored tag per memory type they belong to, in membership order.
//! Markup is plain string assembly over trusted, load-time catalog prose.

use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};

const PLACEHOLDER_TITLE: &str = "Aegis Memory System";
const PLACEHOLDER_PROMPT: &str =
    "Select a node to view details about that component of the memory system.";

/// Render the detail panel for a resolved catalog entry.
///
/// Tag rendering does a second catalog lookup per membership; a membership
/// whose memory type is absent from `catalog` contributes no tag and the
/// rest of the panel still renders.
#[must_use]
pub fn detail(entry: &CatalogEntry<'_>, catalog: &Catalog) -> String {
    let mut tags = String::new();
    if let CatalogEntry::TemplateFile(file) = entry {
        for kind in &file.memory_types {
            match catalog.memory_type(*kind) {
                Some(info) => {
                    tags.push_str(&format!(
                        "<span class=\"memory-type\" style=\"background-color: {}\">{}</span>",
                        info.color, kind
                    ));
                }
                None => {
                    debug!(%kind, "tag omitted: memory type not in catalog");
                }
            }
        }
    }
    render(entry.title(), entry.description(), &tags)
}

/// Render the fixed placeholder panel shown before any selection and after
/// deselection. Byte-identical on every call.
#[must_use]
pub fn empty() -> String {
    render(PLACEHOLDER_TITLE, PLACEHOLDER_PROMPT, "")
}

fn render(title: &str, description: &str, tags: &str) -> String {
    let mut markup = String::new();
    markup.push_str(&format!("<div class=\"info-title\">{title}</div>\n"));
    markup.push_str("<div class=\"info-section\">\n");
    markup.push_str(&format!(
        "  <div class=\"info-content\">{description}</div>\n"
    ));
    if !tags.is_empty() {
        markup.push_str(&format!("  {tags}\n"));
    }
    markup.push_str("</div>\n");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateFile;
    use crate::types::MemoryKind;

    #[test]
    fn memory_type_panel_has_title_and_description() {
        let catalog = Catalog::aegis();
        let entry = catalog.resolve("Semantic Memory").expect("resolvable");
        let markup = detail(&entry, &catalog);

        assert!(markup.contains("<div class=\"info-title\">Semantic Memory</div>"));
        assert!(markup.contains("Long-term storage for project knowledge"));
        // Memory types never carry tags.
        assert!(!markup.contains("memory-type\""));
    }

    #[test]
    fn template_panel_has_one_tag_per_membership_in_order() {
        let mut catalog = Catalog::aegis();
        catalog.insert_template_file(
            "notes/TEMPLATE.md",
            TemplateFile::new(
                "Notes Template",
                "Shared notes.",
                vec![MemoryKind::Episodic, MemoryKind::Semantic],
            ),
        );
        let entry = catalog.resolve("notes/TEMPLATE.md").expect("resolvable");
        let markup = detail(&entry, &catalog);

        let episodic = markup.find("Episodic Memory</span>").expect("episodic tag");
        let semantic = markup.find("Semantic Memory</span>").expect("semantic tag");
        assert!(episodic < semantic, "tags must follow membership order");
        assert!(markup.contains("background-color: #FFA807"));
        assert!(markup.contains("background-color: #97C2FC"));
    }

    #[test]
    fn decision_template_tag_uses_semantic_color() {
        let catalog = Catalog::aegis();
        let entry = catalog.resolve("decisions/TEMPLATE.md").expect("resolvable");
        let markup = detail(&entry, &catalog);

        assert!(markup.contains(
            "<span class=\"memory-type\" style=\"background-color: #97C2FC\">Semantic Memory</span>"
        ));
    }

    #[test]
    fn unresolvable_tag_is_omitted_silently() {
        // A catalog missing the Episodic record: the membership still names
        // it, but no tag may be produced and rendering must not fail.
        let mut catalog = Catalog::new();
        catalog.insert_template_file(
            "sessions/TEMPLATE.md",
            TemplateFile::new(
                "Session Template",
                "Session logs.",
                vec![MemoryKind::Episodic],
            ),
        );
        let entry = catalog.resolve("sessions/TEMPLATE.md").expect("resolvable");
        let markup = detail(&entry, &catalog);

        assert!(markup.contains("Session Template"));
        assert!(!markup.contains("memory-type\""));
    }

    #[test]
    fn empty_panel_is_idempotent() {
        let first = empty();
        let second = empty();
        assert_eq!(first, second);
        assert!(first.contains("Aegis Memory System"));
        assert!(first.contains("Select a node to view details"));
    }
}
