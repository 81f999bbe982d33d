use serde::{Deserialize, Serialize};

/// Ordered set of class names on a page element.
///
/// Classes are the contract between behavior and presentation: the engine
/// flips them (`reveal`, `active`, `visible`, `expanded`) and widgets style
/// from them. Insertion order is preserved so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class; adding a class twice has no additional effect
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class if present
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add the class if absent, remove it if present
    pub fn toggle(&mut self, class: &str) {
        if self.contains(class) {
            self.remove(class);
        } else {
            self.add(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

/// Visual role of a block; determines which reveal watcher observes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockRole {
    /// Section heading, revealed by the title watcher
    SectionTitle,
    /// Hero heading at the top of the page; styled like a title but
    /// always visible, never observed
    Hero,
    /// Tea card, revealed by the content watcher with a pop transition
    TeaCard,
    /// Menu card, revealed by the content watcher with a fade
    MenuCard,
    /// About/narrative paragraph, revealed by the content watcher
    AboutText,
    /// Collage or media block, revealed by the story watcher
    StoryImage,
    /// Narrative text block, revealed by the story watcher
    StoryText,
    /// Always-visible block, never observed
    Plain,
}

/// One renderable unit of the page with fixed row geometry
#[derive(Debug, Clone)]
pub struct Block {
    /// Index of the owning section
    pub section: usize,
    pub role: BlockRole,
    pub lines: Vec<String>,
    /// Document row of the block's first line
    pub top: f64,
    /// Height in rows, content plus padding
    pub height: f64,
    pub classes: ClassSet,
}

impl Block {
    /// Document row just past the block's last line
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A section of the page, addressable by fragment anchor
#[derive(Debug, Clone)]
pub struct Section {
    /// Fragment identifier, e.g. "menu" for links written as "#menu"
    pub anchor: String,
    pub title: String,
    /// Document row where the section starts
    pub top: f64,
}

/// Collapsible opening-hours panel, toggled by the hours accordion
#[derive(Debug, Clone)]
pub struct HoursPanel {
    pub lines: Vec<String>,
}

/// A loaded single-page document
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub sections: Vec<Section>,
    pub blocks: Vec<Block>,
    pub total_height: f64,
    /// Page declares a menu trigger in its header
    pub menu_button: bool,
    /// Page declares a menu overlay panel
    pub menu_overlay: bool,
    /// Page declares an hours accordion trigger
    pub hours_toggle: bool,
    pub hours_panel: Option<HoursPanel>,
}

impl Page {
    /// Resolve a fragment identifier to the owning section's document row.
    ///
    /// Accepts "menu" or "#menu". The empty/self fragment and unknown
    /// anchors resolve to `None`; callers treat that as a silent no-op
    /// since a dangling anchor is a content problem, not a runtime fault.
    pub fn resolve_anchor(&self, fragment: &str) -> Option<f64> {
        let name = fragment.strip_prefix('#').unwrap_or(fragment);
        if name.is_empty() {
            return None;
        }
        self.sections.iter().find(|s| s.anchor == name).map(|s| s.top)
    }

    /// Greatest valid scroll offset for a given viewport height
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.total_height - viewport_height).max(0.0)
    }

    /// Indices of blocks intersecting the viewport rows `[scroll, scroll + height)`
    pub fn blocks_in_view(&self, scroll: f64, viewport_height: f64) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.bottom() > scroll && b.top < scroll + viewport_height)
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the section containing the given scroll offset
    pub fn section_at(&self, scroll: f64) -> Option<usize> {
        self.sections.iter().rposition(|s| s.top <= scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_section_page() -> Page {
        Page {
            title: "Test".to_string(),
            sections: vec![
                Section { anchor: "home".to_string(), title: "Home".to_string(), top: 0.0 },
                Section { anchor: "menu".to_string(), title: "Menu".to_string(), top: 800.0 },
            ],
            blocks: vec![
                Block {
                    section: 0,
                    role: BlockRole::Plain,
                    lines: vec!["hello".to_string()],
                    top: 0.0,
                    height: 10.0,
                    classes: ClassSet::new(),
                },
                Block {
                    section: 1,
                    role: BlockRole::TeaCard,
                    lines: vec!["card".to_string()],
                    top: 810.0,
                    height: 20.0,
                    classes: ClassSet::new(),
                },
            ],
            total_height: 1200.0,
            menu_button: false,
            menu_overlay: false,
            hours_toggle: false,
            hours_panel: None,
        }
    }

    #[test]
    fn test_class_set_add_is_idempotent() {
        let mut classes = ClassSet::new();
        classes.add("reveal");
        classes.add("reveal");
        assert_eq!(classes.iter().count(), 1);
        assert!(classes.contains("reveal"));
    }

    #[test]
    fn test_class_set_toggle() {
        let mut classes = ClassSet::new();
        classes.toggle("expanded");
        assert!(classes.contains("expanded"));
        classes.toggle("expanded");
        assert!(!classes.contains("expanded"));
    }

    #[test]
    fn test_resolve_anchor() {
        let page = two_section_page();
        assert_eq!(page.resolve_anchor("#menu"), Some(800.0));
        assert_eq!(page.resolve_anchor("menu"), Some(800.0));
        assert_eq!(page.resolve_anchor("#"), None);
        assert_eq!(page.resolve_anchor(""), None);
        assert_eq!(page.resolve_anchor("#nowhere"), None);
    }

    #[test]
    fn test_blocks_in_view() {
        let page = two_section_page();
        assert_eq!(page.blocks_in_view(0.0, 50.0), vec![0]);
        assert_eq!(page.blocks_in_view(800.0, 50.0), vec![1]);
        assert!(page.blocks_in_view(100.0, 50.0).is_empty());
    }

    #[test]
    fn test_section_at() {
        let page = two_section_page();
        assert_eq!(page.section_at(0.0), Some(0));
        assert_eq!(page.section_at(799.0), Some(0));
        assert_eq!(page.section_at(800.0), Some(1));
        assert_eq!(page.section_at(-1.0), None);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        let page = two_section_page();
        assert_eq!(page.max_scroll(2000.0), 0.0);
        assert_eq!(page.max_scroll(200.0), 1000.0);
    }
}
