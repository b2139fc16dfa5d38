//! Version configuration and the lookups routes use to resolve a version
//! segment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Version id used for unversioned documents.
pub const LATEST: &str = "latest";

/// Lifecycle of a documented version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
  Latest,
  Next,
  Legacy,
}

/// A documented version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Version {
  pub id:     String,
  pub label:  String,
  pub status: VersionStatus,

  /// Civil date (`YYYY-MM-DD`).
  #[serde(
    default,
    alias = "releaseDate",
    skip_serializing_if = "Option::is_none"
  )]
  pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VersionConfig {
  /// Version served under the `latest` URL segment.
  pub current: String,

  pub available: Vec<Version>,

  /// URL segment → version id.
  pub aliases: BTreeMap<String, String>,
}

impl Default for VersionConfig {
  fn default() -> Self {
    Self {
      current:   LATEST.to_string(),
      available: vec![Version {
        id:           LATEST.to_string(),
        label:        "Latest".to_string(),
        status:       VersionStatus::Latest,
        release_date: None,
      }],
      aliases:   BTreeMap::from([(LATEST.to_string(), LATEST.to_string())]),
    }
  }
}

impl VersionConfig {
  /// The alias target for `param`, or `param` itself.
  #[must_use]
  pub fn resolve_alias<'a>(&'a self, param: &'a str) -> &'a str {
    self.aliases.get(param).map_or(param, String::as_str)
  }

  /// Look up a version by id.
  #[must_use]
  pub fn get(&self, id: &str) -> Option<&Version> {
    self.available.iter().find(|v| v.id == id)
  }

  /// Resolve a route parameter to a version. No parameter means `current`.
  #[must_use]
  pub fn for_path(&self, param: Option<&str>) -> Option<&Version> {
    match param {
      None => self.get(&self.current),
      Some(param) => self.get(self.resolve_alias(param)),
    }
  }

  /// Whether `id` is an alias or an available version.
  #[must_use]
  pub fn is_valid(&self, id: &str) -> bool {
    self.aliases.contains_key(id) || self.get(id).is_some()
  }

  /// First version marked `latest`, else the first version.
  #[must_use]
  pub fn latest(&self) -> Option<&Version> {
    self
      .available
      .iter()
      .find(|v| v.status == VersionStatus::Latest)
      .or_else(|| self.available.first())
  }

  /// First version marked `next`.
  #[must_use]
  pub fn next(&self) -> Option<&Version> {
    self
      .available
      .iter()
      .find(|v| v.status == VersionStatus::Next)
  }

  /// URL segment a document of `version` is published under.
  #[must_use]
  pub fn canonical_param<'a>(&self, version: &'a str) -> &'a str {
    if version == LATEST || version == self.current {
      LATEST
    } else {
      version
    }
  }

  pub(crate) fn validate(&self, errors: &mut Vec<String>) {
    if self.available.is_empty() {
      errors.push("versions.available must list at least one version".to_string());
    }

    if self.get(&self.current).is_none() {
      log::warn!(
        "versions.current '{}' is not listed in versions.available",
        self.current
      );
    }

    for (index, version) in self.available.iter().enumerate() {
      if self.available[..index].iter().any(|v| v.id == version.id) {
        errors.push(format!("Duplicate version id '{}'", version.id));
      }
      if let Some(date) = &version.release_date
        && let Err(e) = date.parse::<jiff::civil::Date>()
      {
        errors.push(format!(
          "Version '{}' has an invalid release date '{date}': {e}",
          version.id
        ));
      }
    }

    for (alias, target) in &self.aliases {
      if self.get(target).is_none() {
        log::warn!("Version alias '{alias}' points at unknown version '{target}'");
      }
    }
  }
}
