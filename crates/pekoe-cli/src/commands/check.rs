use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{bail, Result};

use pekoe_core::{AppConfig, Page};

/// Validate a page file: anchors must be unique and non-empty, and
/// declared controls must come in working pairs. Problems are listed
/// on stdout and the command fails if any were found.
pub fn run(config: &AppConfig, page: Option<PathBuf>) -> Result<()> {
    let page = super::load_page(config, page)?;
    let problems = check_page(&page);

    if problems.is_empty() {
        println!(
            "ok: {} sections, {} blocks, {} rows",
            page.sections.len(),
            page.blocks.len(),
            page.total_height
        );
        return Ok(());
    }

    for problem in &problems {
        println!("problem: {}", problem);
    }
    bail!("{} problem(s) found", problems.len());
}

fn check_page(page: &Page) -> Vec<String> {
    let mut problems = Vec::new();

    if page.sections.is_empty() {
        problems.push("page has no sections".to_string());
    }

    let mut seen = HashSet::new();
    for section in &page.sections {
        if section.anchor.is_empty() {
            problems.push(format!("section '{}' has an empty anchor", section.title));
        } else if !seen.insert(section.anchor.as_str()) {
            // Later duplicates are unreachable from navigation
            problems.push(format!("duplicate anchor '{}'", section.anchor));
        }
    }

    // A menu button with no overlay (or the reverse) can never work
    if page.menu_button && !page.menu_overlay {
        problems.push("menu button declared without a menu overlay".to_string());
    }
    if page.menu_overlay && !page.menu_button {
        problems.push("menu overlay declared without a menu button".to_string());
    }

    // Same for the hours accordion pair
    if page.hours_toggle && page.hours_panel.is_none() {
        problems.push("hours toggle declared without an hours panel".to_string());
    }
    if page.hours_panel.is_some() && !page.hours_toggle {
        problems.push("hours panel declared without an hours toggle".to_string());
    }

    for (i, block) in page.blocks.iter().enumerate() {
        if block.section >= page.sections.len() {
            problems.push(format!("block {} references a missing section", i));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page_is_clean() {
        assert!(check_page(&Page::sample()).is_empty());
    }

    #[test]
    fn test_half_declared_controls_are_flagged() {
        let mut page = Page::sample();
        page.menu_overlay = false;
        page.hours_panel = None;

        let problems = check_page(&page);
        assert!(problems.iter().any(|p| p.contains("menu button")));
        assert!(problems.iter().any(|p| p.contains("hours toggle")));
    }

    #[test]
    fn test_duplicate_anchor_is_flagged() {
        let mut page = Page::sample();
        page.sections[1].anchor = page.sections[0].anchor.clone();
        let problems = check_page(&page);
        assert!(problems.iter().any(|p| p.contains("duplicate anchor")));
    }
}
