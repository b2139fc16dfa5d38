#![allow(clippy::expect_used, reason = "Fine in tests")]

use std::collections::BTreeMap;

use ptero_config::SidebarConfig;
use ptero_content::DocMetadata;
use ptero_nav::{PrevNextResolver, Section, breadcrumbs, build_sidebar, flatten};

fn doc(title: &str, slug: &str) -> DocMetadata {
  DocMetadata {
    title: title.to_string(),
    href: format!("/docs/latest/{slug}"),
    ..DocMetadata::default()
  }
}

fn in_section(mut meta: DocMetadata, section: &str) -> DocMetadata {
  meta.section = Some(section.to_string());
  meta
}

fn in_subsection(mut meta: DocMetadata, subsection: &str) -> DocMetadata {
  meta.subsection = Some(subsection.to_string());
  meta
}

fn ordered(mut meta: DocMetadata, order: f64) -> DocMetadata {
  meta.order = Some(order);
  meta
}

fn titles(sections: &[Section]) -> Vec<&str> {
  sections.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn test_items_sort_by_order_with_default_last() {
  let docs = [
    doc("Unordered", "c"),
    ordered(doc("Second", "b"), 2.0),
    ordered(doc("First", "a"), 1.0),
  ];
  let sidebar = build_sidebar(&docs, &SidebarConfig::default());

  assert_eq!(sidebar.len(), 1);
  assert_eq!(sidebar[0].title, "Guides");
  let orders: Vec<f64> = sidebar[0].items.iter().map(|p| p.order).collect();
  assert_eq!(orders, [1.0, 2.0, 999.0]);
}

#[test]
fn test_zero_order_sorts_as_unordered() {
  let docs = [
    ordered(doc("Zero", "z"), 0.0),
    ordered(doc("Five", "f"), 5.0),
    doc("Unordered", "u"),
  ];
  let sidebar = build_sidebar(&docs, &SidebarConfig::default());
  let items: Vec<(&str, f64)> = sidebar[0]
    .items
    .iter()
    .map(|p| (p.title.as_str(), p.order))
    .collect();
  assert_eq!(items, [("Five", 5.0), ("Zero", 999.0), ("Unordered", 999.0)]);
}

#[test]
fn test_equal_orders_keep_input_order() {
  let docs = [doc("B", "b"), doc("A", "a"), doc("C", "c")];
  let sidebar = build_sidebar(&docs, &SidebarConfig::default());
  let items: Vec<&str> = sidebar[0].items.iter().map(|p| p.title.as_str()).collect();
  assert_eq!(items, ["B", "A", "C"]);
}

#[test]
fn test_default_section_order() {
  let docs = [
    in_section(doc("Ref", "ref"), "api"),
    in_section(doc("Custom", "custom"), "advanced-topics"),
    in_section(doc("Intro", "intro"), "getting-started"),
    doc("Loose", "loose"),
  ];
  let sidebar = build_sidebar(&docs, &SidebarConfig::default());
  assert_eq!(
    titles(&sidebar),
    ["Getting Started", "Guides", "API Reference", "Advanced topics"]
  );
}

#[test]
fn test_custom_section_order() {
  let config = SidebarConfig {
    section_order: Some(vec!["Reference".to_string(), "Guides".to_string()]),
    ..SidebarConfig::default()
  };
  let docs = [
    doc("Loose", "loose"),
    in_section(doc("Intro", "intro"), "getting-started"),
    in_section(doc("Cli", "cli"), "reference"),
  ];
  let sidebar = build_sidebar(&docs, &config);
  assert_eq!(titles(&sidebar), ["Reference", "Guides", "Getting Started"]);
}

#[test]
fn test_subsections_use_custom_order_then_titles() {
  let config = SidebarConfig {
    section_order:    None,
    subsection_order: BTreeMap::from([(
      "guides".to_string(),
      vec!["styling".to_string(), "configuration".to_string()],
    )]),
  };
  let docs = [
    in_subsection(doc("A", "a"), "configuration"),
    in_subsection(doc("C", "c"), "styling"),
    in_subsection(doc("D", "d"), "authoring"),
  ];
  let sidebar = build_sidebar(&docs, &config);
  let ids: Vec<&str> = sidebar[0]
    .subsections
    .iter()
    .map(|s| s.id.as_str())
    .collect();

  // Listed pairs compare by position, all other pairs by title.
  assert_eq!(ids, ["authoring", "styling", "configuration"]);
  assert_eq!(sidebar[0].subsections[0].title, "Authoring");
  assert!(sidebar[0].items.is_empty());
}

#[test]
fn test_subsections_without_config_sort_by_title() {
  let docs = [
    in_subsection(doc("A", "a"), "zeta"),
    in_subsection(doc("B", "b"), "Alpha"),
    in_subsection(doc("C", "c"), "beta"),
  ];
  let sidebar = build_sidebar(&docs, &SidebarConfig::default());
  let ids: Vec<&str> = sidebar[0]
    .subsections
    .iter()
    .map(|s| s.id.as_str())
    .collect();
  assert_eq!(ids, ["Alpha", "beta", "zeta"]);
}

#[test]
fn test_sidebar_is_deterministic() {
  let config = SidebarConfig {
    section_order:    None,
    subsection_order: BTreeMap::from([("guides".to_string(), vec!["b".to_string()])]),
  };
  let docs: Vec<DocMetadata> = (0..20)
    .map(|i| {
      let meta = doc(&format!("Page {i}"), &format!("p{i}"));
      let meta = in_subsection(meta, ["a", "b", "c"][i % 3]);
      if i % 2 == 0 {
        ordered(meta, [3.0, 1.0, 2.0, 1.0, 0.5][i % 5])
      } else {
        meta
      }
    })
    .collect();

  let first = serde_json::to_string(&build_sidebar(&docs, &config)).expect("serialize");
  for _ in 0..5 {
    let again = serde_json::to_string(&build_sidebar(&docs, &config)).expect("serialize");
    assert_eq!(first, again);
  }
}

#[test]
fn test_empty_input() {
  assert!(build_sidebar(&[], &SidebarConfig::default()).is_empty());
}

#[test]
fn test_flatten_order() {
  let docs = [
    in_subsection(doc("Sub", "sub"), "extra"),
    doc("Top", "top"),
    in_section(doc("Intro", "intro"), "getting-started"),
  ];
  let sidebar = build_sidebar(&docs, &SidebarConfig::default());
  let order: Vec<&str> = flatten(&sidebar).iter().map(|p| p.title.as_str()).collect();
  assert_eq!(order, ["Intro", "Top", "Sub"]);
}

fn three_pages() -> Vec<Section> {
  let docs = [
    ordered(doc("One", "one"), 1.0),
    ordered(doc("Two", "two"), 2.0),
    ordered(doc("Three", "three"), 3.0),
  ];
  build_sidebar(&docs, &SidebarConfig::default())
}

#[test]
fn test_prev_next_middle_page() {
  let resolver = PrevNextResolver::new("/docs").expect("resolver");
  let nav = resolver.prev_next(&three_pages(), "/docs/latest/two");

  assert_eq!(nav.prev.map(|p| p.title), Some("One".to_string()));
  assert_eq!(nav.next.map(|p| p.title), Some("Three".to_string()));
}

#[test]
fn test_prev_next_boundaries() {
  let resolver = PrevNextResolver::new("/docs").expect("resolver");
  let sidebar = three_pages();

  let first = resolver.prev_next(&sidebar, "/docs/latest/one");
  assert!(first.prev.is_none());
  assert_eq!(first.next.map(|p| p.title), Some("Two".to_string()));

  let last = resolver.prev_next(&sidebar, "/docs/latest/three");
  assert_eq!(last.prev.map(|p| p.title), Some("Two".to_string()));
  assert!(last.next.is_none());
}

#[test]
fn test_prev_next_unknown_path() {
  let resolver = PrevNextResolver::new("/docs").expect("resolver");
  let nav = resolver.prev_next(&three_pages(), "/docs/latest/missing");
  assert!(nav.prev.is_none());
  assert!(nav.next.is_none());
}

#[test]
fn test_prev_next_relinks_to_request_version() {
  let resolver = PrevNextResolver::new("/docs").expect("resolver");
  let nav = resolver.prev_next(&three_pages(), "/docs/v1.0/two");

  assert_eq!(nav.prev.map(|p| p.href), Some("/docs/v1.0/one".to_string()));
  assert_eq!(nav.next.map(|p| p.href), Some("/docs/v1.0/three".to_string()));
}

#[test]
fn test_breadcrumbs_example() {
  let crumbs = breadcrumbs("/docs/guides/getting-started", "/docs");
  let pairs: Vec<(&str, Option<&str>)> = crumbs
    .iter()
    .map(|c| (c.label.as_str(), c.href.as_deref()))
    .collect();

  assert_eq!(
    pairs,
    [
      ("Docs", Some("/docs")),
      ("Guides", Some("/docs/guides")),
      ("Getting Started", None),
    ]
  );
}

#[test]
fn test_breadcrumbs_for_base_only() {
  let crumbs = breadcrumbs("/docs", "/docs");
  assert_eq!(crumbs.len(), 1);
  assert_eq!(crumbs[0].href.as_deref(), Some("/docs"));
}
