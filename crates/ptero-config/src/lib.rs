//! Configuration for the ptero documentation pipeline.
//!
//! Loaded once from `ptero.toml` or `ptero.json`, validated, and then passed
//! by reference to every pipeline stage.

pub mod config;
pub mod content;
pub mod error;
pub mod search;
pub mod sidebar;
pub mod site;
pub mod versions;

pub use config::Config;
pub use content::{ContentConfig, HighlightConfig};
pub use error::ConfigError;
pub use search::{SEARCH_FIELDS, SearchConfig, SearchKey};
pub use sidebar::SidebarConfig;
pub use site::SiteConfig;
pub use versions::{LATEST, Version, VersionConfig, VersionStatus};
