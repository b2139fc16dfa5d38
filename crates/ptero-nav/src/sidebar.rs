//! Sidebar tree construction.
//!
//! Documents are grouped into sections by their `section` key and, within a
//! section, into subsections by their `subsection` key. Every level is sorted
//! deterministically so the same documents always produce the same tree.

use std::cmp::Ordering;

use ptero_config::SidebarConfig;
use ptero_content::DocMetadata;

use crate::{
  text::capitalize_key,
  types::{DEFAULT_ORDER, Page, Section, Subsection},
};

/// Section key of documents that declare none.
pub const DEFAULT_SECTION: &str = "guides";

/// Position of sections missing from the ordering list.
const UNLISTED_POSITION: usize = 999;

const DEFAULT_SECTION_TITLES: &[(&str, &str)] = &[
  ("getting-started", "Getting Started"),
  ("concepts", "Core Concepts"),
  ("guides", "Guides"),
  ("components", "Components"),
  ("api", "API Reference"),
  ("examples", "Examples"),
  ("recipes", "Recipes"),
  ("comparison", "Comparisons"),
  ("migration", "Migration"),
  ("contributing", "Contributing"),
  ("changelog", "Changelog"),
];

const DEFAULT_SECTION_ORDER: &[&str] = &[
  "Getting Started",
  "Core Concepts",
  "Guides",
  "Components",
  "Examples",
  "Recipes",
  "API Reference",
  "Comparisons",
  "Migration",
  "Contributing",
  "Changelog",
];

/// Display title for a section key.
#[must_use]
pub fn section_title(key: &str) -> String {
  DEFAULT_SECTION_TITLES
    .iter()
    .find(|(k, _)| *k == key)
    .map_or_else(|| capitalize_key(key), |(_, title)| (*title).to_string())
}

fn section_position(title: &str, custom: Option<&[String]>) -> usize {
  let position = match custom {
    Some(order) => order.iter().position(|t| t == title),
    None => DEFAULT_SECTION_ORDER.iter().position(|t| *t == title),
  };
  position.unwrap_or(UNLISTED_POSITION)
}

/// Sort key for a page. Zero and NaN count as unset, like a missing order.
fn page_order(order: Option<f64>) -> f64 {
  order
    .filter(|order| order.abs() > 0.0)
    .unwrap_or(DEFAULT_ORDER)
}

/// Build the sidebar for one version's documents.
///
/// Sections are keyed by title, so two keys mapping to the same title merge.
/// Sections sort by their position in `config.section_order` (or the
/// built-in order); unlisted sections keep first-appearance order after the
/// listed ones. Pages sort by `order`, ties keeping input order.
#[must_use]
pub fn build_sidebar(docs: &[DocMetadata], config: &SidebarConfig) -> Vec<Section> {
  let mut sections: Vec<Section> = Vec::new();

  for doc in docs {
    let title = section_title(doc.section.as_deref().unwrap_or(DEFAULT_SECTION));
    let index = match sections.iter().position(|s| s.title == title) {
      Some(index) => index,
      None => {
        sections.push(Section {
          title,
          items: Vec::new(),
          subsections: Vec::new(),
        });
        sections.len() - 1
      },
    };
    let section = &mut sections[index];

    let page = Page {
      title: doc.title.clone(),
      href:  doc.href.clone(),
      sdks:  doc.sdks.clone(),
      scope: doc.scope.clone(),
      order: page_order(doc.order),
    };

    match doc.subsection.as_deref() {
      Some(key) => {
        let index = match section.subsections.iter().position(|s| s.id == key) {
          Some(index) => index,
          None => {
            section.subsections.push(Subsection {
              title: capitalize_key(key),
              id:    key.to_string(),
              items: Vec::new(),
            });
            section.subsections.len() - 1
          },
        };
        section.subsections[index].items.push(page);
      },
      None => section.items.push(page),
    }
  }

  let custom_order = config.section_order.as_deref();
  sections.sort_by_key(|section| section_position(&section.title, custom_order));

  for section in &mut sections {
    sort_pages(&mut section.items);

    let subsection_order = config.subsection_order_for(&section.title);
    insertion_sort_by(&mut section.subsections, |a, b| {
      compare_subsections(a, b, subsection_order)
    });

    for subsection in &mut section.subsections {
      sort_pages(&mut subsection.items);
    }
  }

  log::debug!(
    "Built sidebar with {} sections from {} documents",
    sections.len(),
    docs.len()
  );
  sections
}

fn sort_pages(pages: &mut [Page]) {
  pages.sort_by(|a, b| a.order.total_cmp(&b.order));
}

/// Subsections listed in the custom order compare by position when both are
/// listed; any other pair compares by title. The result is not a total order
/// when the list is partial.
fn compare_subsections(
  a: &Subsection,
  b: &Subsection,
  order: Option<&[String]>,
) -> Ordering {
  if let Some(order) = order
    && let Some(pos_a) = order.iter().position(|id| *id == a.id)
    && let Some(pos_b) = order.iter().position(|id| *id == b.id)
  {
    return pos_a.cmp(&pos_b);
  }
  compare_titles(&a.title, &b.title)
}

/// Case-insensitive first; on a tie lower case sorts before upper case.
fn compare_titles(a: &str, b: &str) -> Ordering {
  a.to_lowercase()
    .cmp(&b.to_lowercase())
    .then_with(|| b.cmp(a))
}

/// Stable insertion sort.
///
/// Used where the comparator may be inconsistent, which `slice::sort_by` is
/// allowed to reject by panicking. The result depends only on the input order.
fn insertion_sort_by<T>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
  for i in 1..items.len() {
    let mut j = i;
    while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
      items.swap(j - 1, j);
      j -= 1;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_section_title() {
    assert_eq!(section_title("api"), "API Reference");
    assert_eq!(section_title("getting-started"), "Getting Started");
    assert_eq!(section_title("advanced-topics"), "Advanced topics");
  }

  #[test]
  fn test_section_position() {
    assert_eq!(section_position("Getting Started", None), 0);
    assert_eq!(section_position("API Reference", None), 6);
    assert_eq!(section_position("Unknown", None), UNLISTED_POSITION);

    let custom = ["Guides".to_string(), "Reference".to_string()];
    assert_eq!(section_position("Reference", Some(&custom)), 1);
    assert_eq!(section_position("Getting Started", Some(&custom)), UNLISTED_POSITION);
  }

  #[test]
  fn test_compare_titles() {
    assert_eq!(compare_titles("alpha", "Beta"), Ordering::Less);
    assert_eq!(compare_titles("Beta", "alpha"), Ordering::Greater);
    assert_eq!(compare_titles("a", "A"), Ordering::Less);
    assert_eq!(compare_titles("same", "same"), Ordering::Equal);
  }

  #[test]
  fn test_insertion_sort_is_stable() {
    let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    insertion_sort_by(&mut items, |x, y| x.0.cmp(&y.0));
    assert_eq!(items, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
  }
}
