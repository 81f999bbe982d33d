//! TOML page loader
//!
//! Page files describe sections and blocks; row geometry is computed here
//! at load time so the rest of the system only ever sees fixed offsets.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::{Error, Result};

use super::model::{Block, BlockRole, ClassSet, HoursPanel, Page, Section};

/// Padding rows added around a block's text
const BLOCK_PADDING: f64 = 2.0;
/// Gap rows between consecutive blocks
const BLOCK_GAP: f64 = 2.0;
/// Gap rows between consecutive sections
const SECTION_GAP: f64 = 8.0;
/// Height of a rendered section title block
const TITLE_HEIGHT: f64 = 5.0;

#[derive(Debug, Deserialize)]
struct PageFile {
    title: String,
    #[serde(default, rename = "section")]
    sections: Vec<SectionFile>,
    #[serde(default)]
    controls: ControlsFile,
    #[serde(default)]
    hours: Option<HoursFile>,
}

#[derive(Debug, Deserialize)]
struct SectionFile {
    anchor: String,
    title: String,
    /// Hero sections keep their heading always visible instead of
    /// revealing it on scroll
    #[serde(default)]
    hero: bool,
    #[serde(default, rename = "block")]
    blocks: Vec<BlockFile>,
}

#[derive(Debug, Deserialize)]
struct BlockFile {
    #[serde(default = "default_role")]
    role: BlockRole,
    #[serde(default)]
    text: String,
    /// Optional minimum height in rows
    #[serde(default)]
    height: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct ControlsFile {
    #[serde(default)]
    menu_button: bool,
    #[serde(default)]
    menu_overlay: bool,
}

#[derive(Debug, Deserialize)]
struct HoursFile {
    #[serde(default = "default_true")]
    toggle: bool,
    #[serde(default)]
    lines: Vec<String>,
}

fn default_role() -> BlockRole {
    BlockRole::Plain
}

fn default_true() -> bool {
    true
}

impl Page {
    /// Load a page from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a page from TOML text and compute its layout
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: PageFile = toml::from_str(text).map_err(|e| Error::PageParse(e.to_string()))?;
        Ok(layout(file))
    }
}

/// Assign document rows to every section and block
fn layout(file: PageFile) -> Page {
    let mut sections = Vec::with_capacity(file.sections.len());
    let mut blocks = Vec::new();
    let mut seen_anchors: HashSet<String> = HashSet::new();
    let mut cursor = 0.0;

    for (idx, sec) in file.sections.into_iter().enumerate() {
        if !seen_anchors.insert(sec.anchor.clone()) {
            // First occurrence wins for anchor resolution
            warn!(anchor = %sec.anchor, "duplicate section anchor in page file");
        }

        sections.push(Section {
            anchor: sec.anchor,
            title: sec.title.clone(),
            top: cursor,
        });

        if !sec.title.is_empty() {
            blocks.push(Block {
                section: idx,
                role: if sec.hero {
                    BlockRole::Hero
                } else {
                    BlockRole::SectionTitle
                },
                lines: vec![sec.title],
                top: cursor,
                height: TITLE_HEIGHT,
                classes: ClassSet::new(),
            });
            cursor += TITLE_HEIGHT + BLOCK_GAP;
        }

        for blk in sec.blocks {
            let lines: Vec<String> = blk.text.lines().map(str::to_string).collect();
            let natural = lines.len() as f64 + BLOCK_PADDING * 2.0;
            let height = blk.height.map_or(natural, |h| h.max(natural));
            blocks.push(Block {
                section: idx,
                role: blk.role,
                lines,
                top: cursor,
                height,
                classes: ClassSet::new(),
            });
            cursor += height + BLOCK_GAP;
        }

        cursor += SECTION_GAP;
    }

    Page {
        title: file.title,
        sections,
        blocks,
        total_height: cursor,
        menu_button: file.controls.menu_button,
        menu_overlay: file.controls.menu_overlay,
        hours_toggle: file.hours.as_ref().map_or(false, |h| h.toggle),
        hours_panel: file.hours.map(|h| HoursPanel { lines: h.lines }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_PAGE: &str = r#"
title = "Test Page"

[controls]
menu_button = true
menu_overlay = true

[hours]
lines = ["Mon-Fri 8:00-18:00", "Sat-Sun 9:00-17:00"]

[[section]]
anchor = "home"
title = "Welcome"

[[section.block]]
role = "plain"
text = "A quiet corner."

[[section.block]]
role = "tea-card"
text = "Silver Needle"
height = 20
"#;

    #[test]
    fn test_load_and_layout() {
        let page = Page::from_toml_str(SIMPLE_PAGE).unwrap();
        assert_eq!(page.title, "Test Page");
        assert_eq!(page.sections.len(), 1);
        // Title block plus two content blocks
        assert_eq!(page.blocks.len(), 3);
        assert_eq!(page.blocks[0].role, BlockRole::SectionTitle);
        assert_eq!(page.blocks[2].role, BlockRole::TeaCard);
        // Declared height wins over natural height
        assert_eq!(page.blocks[2].height, 20.0);
        // Blocks are laid out strictly downward
        assert!(page.blocks[1].top > page.blocks[0].top);
        assert!(page.blocks[2].top >= page.blocks[1].bottom());
        assert!(page.total_height > page.blocks[2].bottom());
    }

    #[test]
    fn test_controls_and_hours_carried() {
        let page = Page::from_toml_str(SIMPLE_PAGE).unwrap();
        assert!(page.menu_button);
        assert!(page.menu_overlay);
        assert!(page.hours_toggle);
        assert_eq!(page.hours_panel.as_ref().unwrap().lines.len(), 2);
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let err = Page::from_toml_str("not toml at all [").unwrap_err();
        assert!(matches!(err, Error::PageParse(_)));
    }

    #[test]
    fn test_duplicate_anchor_resolves_to_first() {
        let text = r#"
title = "Dup"

[[section]]
anchor = "a"
title = "First"

[[section]]
anchor = "a"
title = "Second"
"#;
        let page = Page::from_toml_str(text).unwrap();
        assert_eq!(page.resolve_anchor("a"), Some(page.sections[0].top));
    }
}
