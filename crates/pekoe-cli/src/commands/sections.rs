use std::path::PathBuf;

use anyhow::Result;

use pekoe_core::AppConfig;

/// Print the sections of a page with their anchors and row positions
pub fn run(config: &AppConfig, page: Option<PathBuf>) -> Result<()> {
    let page = super::load_page(config, page)?;

    println!("{} ({} rows)", page.title, page.total_height);
    for (i, section) in page.sections.iter().enumerate() {
        println!(
            "  {}  #{:<12} row {:>5}  {}",
            i + 1,
            section.anchor,
            section.top,
            section.title
        );
    }

    Ok(())
}
