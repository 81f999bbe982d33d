use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use pekoe_core::{AppConfig, Page};

pub mod check;
pub mod run;
pub mod sections;

/// Resolve and load the page to show: the CLI flag wins, then the
/// config file, then the built-in sample page.
pub fn load_page(config: &AppConfig, page: Option<PathBuf>) -> Result<Page> {
    let path = page.or_else(|| config.page_file());

    match path {
        Some(path) => {
            info!(path = %path.display(), "loading page");
            Page::load(&path)
                .with_context(|| format!("failed to load page {}", path.display()))
        }
        None => {
            info!("no page configured, using the built-in sample");
            Ok(Page::sample())
        }
    }
}
