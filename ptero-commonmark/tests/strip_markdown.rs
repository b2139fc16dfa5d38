use ptero_commonmark::strip_markdown;

#[test]
fn test_strip_markdown_removes_fenced_code() {
  let md = "Before\n\n```rust\nfn secret() {}\n```\n\nAfter";
  let result = strip_markdown(md);
  assert_eq!(result, "Before After");
}

#[test]
fn test_strip_markdown_removes_inline_code() {
  let result = strip_markdown("Use `grep` to search");
  assert!(!result.contains("grep"), "got: {result}");
  assert_eq!(result, "Use to search");
}

#[test]
fn test_strip_markdown_heading_markers() {
  let result = strip_markdown("# Title\n\n## Sub heading\n\nBody text.");
  assert_eq!(result, "Title Sub heading Body text.");
}

#[test]
fn test_strip_markdown_keeps_emphasis_and_link_text() {
  let result =
    strip_markdown("This is **bold**, _italic_ and a [link](https://example.com).");
  assert_eq!(result, "This is bold, italic and a link.");
}

#[test]
fn test_strip_markdown_drops_images() {
  let result = strip_markdown("See ![diagram](./arch.png) here");
  assert!(!result.contains("diagram"), "got: {result}");
  assert!(!result.contains("arch.png"), "got: {result}");
}

#[test]
fn test_strip_markdown_drops_html_tags() {
  let result = strip_markdown("Press <kbd>Ctrl</kbd> now");
  assert_eq!(result, "Press Ctrl now");

  let result = strip_markdown("<div class=\"note\">\nheads up\n</div>\n\nend");
  assert_eq!(result, "heads up end");
}

#[test]
fn test_strip_markdown_collapses_whitespace() {
  let result = strip_markdown("  one\n two\n\n\n   three  ");
  assert_eq!(result, "one two three");
}

#[test]
fn test_strip_markdown_empty() {
  assert_eq!(strip_markdown(""), "");
}
