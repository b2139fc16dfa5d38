#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]

use std::{fs, path::PathBuf};

use ptero_config::{ContentConfig, Version, VersionConfig, VersionStatus};
use ptero_content::{ContentError, DocumentStore, FrontmatterError, PathResolver};

fn write(root: &std::path::Path, relative: &str, contents: &str) {
  let path = root.join(relative);
  fs::create_dir_all(path.parent().expect("file has a parent")).expect("mkdir");
  fs::write(path, contents).expect("write document");
}

fn page(title: &str, extra: &str) -> String {
  format!("---\ntitle: {title}\n{extra}---\n\nBody of {title}.\n")
}

#[test]
fn test_scan_reads_both_roots() {
  let dir = tempfile::tempdir().expect("tempdir");
  let root = dir.path();
  write(root, "src/content/docs/index.md", &page("Home", ""));
  write(root, "src/content/docs/guides/setup.md", &page("Setup", "order: 1\n"));
  write(root, "src/content/docs/guides/notes.txt", "not a document");
  write(root, "src/content/versioned_docs/v1.0/guides/setup.mdx", &page("Old setup", ""));

  let store = DocumentStore::scan(root, &ContentConfig::default()).expect("scan");

  assert_eq!(store.len(), 3);
  let setup = store.get("latest", "guides/setup").expect("latest setup");
  assert_eq!(setup.frontmatter.title, "Setup");
  assert_eq!(setup.content, "\nBody of Setup.\n");
  assert!(store.get("latest", "index").is_some());
  assert_eq!(
    store.get("v1.0", "guides/setup").map(|d| d.frontmatter.title.as_str()),
    Some("Old setup")
  );
  assert_eq!(store.versions(), ["latest", "v1.0"]);
}

#[test]
fn test_scan_without_roots_is_empty() {
  let dir = tempfile::tempdir().expect("tempdir");
  let store = DocumentStore::scan(dir.path(), &ContentConfig::default()).expect("scan");
  assert!(store.is_empty());
}

#[test]
fn test_scan_fails_on_invalid_document_with_path() {
  let dir = tempfile::tempdir().expect("tempdir");
  let root = dir.path();
  write(root, "src/content/docs/a.md", &page("A", ""));
  write(root, "src/content/docs/b.md", "---\ndescription: no title\n---\n");

  let err = DocumentStore::scan(root, &ContentConfig::default()).expect_err("b is invalid");
  match err {
    ContentError::Frontmatter { path, source } => {
      assert!(path.ends_with("src/content/docs/b.md"), "{}", path.display());
      assert!(matches!(source, FrontmatterError::Schema(_)));
    },
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_first_error_in_input_order_wins() {
  let resolver = PathResolver::new(&ContentConfig::default()).expect("resolver");
  let sources = vec![
    (PathBuf::from("/p/src/content/docs/ok.md"), page("Ok", "")),
    (PathBuf::from("/p/src/content/docs/first.md"), "---\ntitle: x\n".to_string()),
    (PathBuf::from("/p/src/content/docs/second.md"), "no frontmatter".to_string()),
  ];

  let err = DocumentStore::from_sources(&resolver, &sources).expect_err("invalid");
  assert!(err.to_string().contains("first.md"), "{err}");
}

#[test]
fn test_duplicate_slug_keeps_first() {
  let resolver = PathResolver::new(&ContentConfig::default()).expect("resolver");
  let sources = vec![
    (PathBuf::from("/p/src/content/docs/guides/index.md"), page("First", "")),
    (PathBuf::from("/p/src/content/docs/guides.md"), page("Second", "")),
  ];

  let store = DocumentStore::from_sources(&resolver, &sources).expect("store");
  assert_eq!(store.len(), 1);
  assert_eq!(
    store.get("latest", "guides").map(|d| d.frontmatter.title.as_str()),
    Some("First")
  );
}

#[test]
fn test_hidden_and_draft_are_not_listed() {
  let resolver = PathResolver::new(&ContentConfig::default()).expect("resolver");
  let sources: Vec<(PathBuf, String)> = [
    ("a", ""),
    ("b", "hidden: true\n"),
    ("c", ""),
    ("d", "draft: true\n"),
    ("e", ""),
  ]
  .iter()
  .map(|(slug, extra)| {
    (
      PathBuf::from(format!("/p/src/content/docs/{slug}.md")),
      page(slug, extra),
    )
  })
  .collect();

  let store = DocumentStore::from_sources(&resolver, &sources).expect("store");
  assert_eq!(store.len(), 5);
  let listed: Vec<&str> = store.listed("latest").map(|d| d.slug.as_str()).collect();
  assert_eq!(listed, ["a", "c", "e"]);
  assert!(store.get("latest", "b").is_some(), "hidden documents stay in the store");
}

#[test]
fn test_docs_for_version_falls_back_to_latest() {
  let resolver = PathResolver::new(&ContentConfig::default()).expect("resolver");
  let sources = vec![
    (PathBuf::from("/p/src/content/docs/a.md"), page("A", "")),
    (PathBuf::from("/p/src/content/versioned_docs/v1/b.md"), page("B", "")),
  ];
  let store = DocumentStore::from_sources(&resolver, &sources).expect("store");

  let slugs = |version: &str| -> Vec<String> {
    store
      .docs_for_version(version)
      .iter()
      .map(|d| d.slug.clone())
      .collect()
  };
  assert_eq!(slugs("v1"), ["b"]);
  assert_eq!(slugs("v2"), ["a"]);
  assert_eq!(slugs("latest"), ["a"]);

  let metadata = store.metadata("v1", "/docs");
  assert_eq!(metadata[0].href, "/docs/v1/b");
}

#[test]
fn test_prerender_entries() {
  let resolver = PathResolver::new(&ContentConfig::default()).expect("resolver");
  let sources = vec![
    (PathBuf::from("/p/src/content/docs/index.md"), page("Home", "")),
    (PathBuf::from("/p/src/content/docs/secret.md"), page("Secret", "hidden: true\n")),
    (PathBuf::from("/p/src/content/versioned_docs/v2/a.md"), page("A2", "")),
    (PathBuf::from("/p/src/content/versioned_docs/v1/a.md"), page("A1", "")),
  ];
  let store = DocumentStore::from_sources(&resolver, &sources).expect("store");

  let versions = VersionConfig {
    current: "v2".to_string(),
    available: vec![
      Version {
        id:           "v2".to_string(),
        label:        "v2".to_string(),
        status:       VersionStatus::Latest,
        release_date: None,
      },
      Version {
        id:           "v1".to_string(),
        label:        "v1".to_string(),
        status:       VersionStatus::Legacy,
        release_date: None,
      },
    ],
    ..VersionConfig::default()
  };

  let entries: Vec<(String, String)> = store
    .prerender_entries(&versions)
    .into_iter()
    .map(|e| (e.version, e.slug))
    .collect();
  assert_eq!(
    entries,
    [
      ("latest".to_string(), "index".to_string()),
      ("latest".to_string(), "a".to_string()),
      ("v1".to_string(), "a".to_string()),
    ]
  );
}

#[test]
fn test_parsed_document_serializes() {
  let resolver = PathResolver::new(&ContentConfig::default()).expect("resolver");
  let sources = vec![(
    PathBuf::from("/p/src/content/docs/a.md"),
    page("A", "editUrl: https://example.com/a\n"),
  )];
  let store = DocumentStore::from_sources(&resolver, &sources).expect("store");
  let json = serde_json::to_value(&store.documents()[0]).expect("serialize");
  assert_eq!(json["frontmatter"]["editUrl"], "https://example.com/a");
  assert_eq!(json["slug"], "a");
}
