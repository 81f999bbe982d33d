pub mod config;
pub mod controls;
pub mod error;
pub mod page;
pub mod reveal;

pub use config::{AppConfig, EasingType, RevealConfig, ScrollConfig};
pub use error::{Error, Result};
pub use page::{Block, BlockRole, ClassSet, Page, Section};
pub use reveal::{RevealEngine, RevealState, RevealWatcher, RootMargin};
