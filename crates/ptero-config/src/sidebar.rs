use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sidebar ordering overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarConfig {
  /// Section titles in display order. Unset uses the built-in order.
  #[serde(alias = "sectionOrder")]
  pub section_order: Option<Vec<String>>,

  /// Lower-cased section title → subsection ids in display order.
  #[serde(alias = "subsectionOrder")]
  pub subsection_order: BTreeMap<String, Vec<String>>,
}

impl SidebarConfig {
  /// Custom subsection order for a section, matched case-insensitively.
  #[must_use]
  pub fn subsection_order_for(&self, section_title: &str) -> Option<&[String]> {
    self
      .subsection_order
      .get(&section_title.to_lowercase())
      .map(Vec::as_slice)
  }

  /// Lower-case the subsection order keys so lookups by section title work
  /// however the config spelled them.
  pub(crate) fn normalize(&mut self) {
    let entries = std::mem::take(&mut self.subsection_order);
    for (key, order) in entries {
      let key = key.to_lowercase();
      if self.subsection_order.contains_key(&key) {
        log::warn!("Duplicate sidebar.subsection_order entry for '{key}'");
        continue;
      }
      self.subsection_order.insert(key, order);
    }
  }
}
