use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
  content::{ContentConfig, HighlightConfig},
  error::ConfigError,
  search::SearchConfig,
  sidebar::SidebarConfig,
  site::SiteConfig,
  versions::VersionConfig,
};

/// File names probed, in order, when no config file is given.
const CONFIG_FILENAMES: &[&str] = &[
  "ptero.toml",
  "ptero.json",
  ".ptero.toml",
  ".ptero.json",
  ".config/ptero.toml",
  ".config/ptero.json",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub site:      SiteConfig,
  pub versions:  VersionConfig,
  pub sidebar:   SidebarConfig,
  pub search:    SearchConfig,
  pub content:   ContentConfig,
  pub highlight: HighlightConfig,
}

impl Config {
  /// Parse a config file, choosing the format by extension (`toml` or
  /// `json`). The result is not validated.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unsupported
  /// extension or does not parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) => {
        match ext.to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse JSON config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          "toml" => {
            toml::from_str(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse TOML config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          _ => {
            Err(ConfigError::Config(format!(
              "Unsupported config file format: {}",
              path.display()
            )))
          },
        }
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load and validate the configuration for a project.
  ///
  /// An explicit `config_file` wins; otherwise the first of the usual file
  /// names found under `root` is used, falling back to defaults.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be loaded or fails validation.
  pub fn load(config_file: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
    let path = config_file
      .map(Path::to_path_buf)
      .or_else(|| Self::find_config_file(root));

    let mut config = match path {
      Some(path) => {
        log::debug!("Loading configuration from {}", path.display());
        Self::from_file(&path)?
      },
      None => {
        log::debug!("No configuration file found, using defaults");
        Self::default()
      },
    };

    config.validate()?;
    Ok(config)
  }

  /// Search `root` for a config file.
  #[must_use]
  pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
      .iter()
      .map(|name| root.join(name))
      .find(|path| path.is_file())
  }

  /// Check the configuration and normalize it in place.
  ///
  /// Every problem is reported at once. Recoverable oddities (such as a
  /// `current` version missing from `available`) are logged as warnings.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Invalid`] listing every problem found.
  pub fn validate(&mut self) -> Result<(), ConfigError> {
    self.site.normalize_base_url();
    self.sidebar.normalize();

    let mut errors = Vec::new();
    self.versions.validate(&mut errors);
    self.search.validate(&mut errors);

    if self.content.extensions.is_empty() {
      errors.push("content.extensions must list at least one extension".to_string());
    }
    for ext in &mut self.content.extensions {
      *ext = ext.trim_start_matches('.').to_string();
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ConfigError::Invalid(errors.join("\n")))
    }
  }
}
