//! Plain-text extraction for the search indexer.
use std::sync::LazyLock;

use comrak::{
  Arena,
  nodes::{AstNode, NodeValue},
  options::Options,
  parse_document,
};
use regex::Regex;

static HTML_TAG_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
  Regex::new(r"<[^>]*>")
    .inspect_err(|e| log::error!("Failed to compile HTML tag regex: {e}"))
    .ok()
});

/// Reduce a Markdown body to plain searchable text.
///
/// Drops code blocks, inline code, images (alt text included) and HTML tags.
/// Link and emphasis text is kept. Whitespace runs collapse to a single space
/// and the result is trimmed.
#[must_use]
pub fn strip_markdown(content: &str) -> String {
  let arena = Arena::new();
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.footnotes = true;
  options.extension.strikethrough = true;
  options.extension.tasklist = true;
  options.render.r#unsafe = true;

  let root = parse_document(&arena, content, &options);

  let mut text = String::new();
  collect_text(root, &mut text);
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
  match &node.data.borrow().value {
    NodeValue::Text(t) => {
      out.push_str(t);
      return;
    },
    NodeValue::HtmlBlock(block) => {
      out.push(' ');
      out.push_str(&strip_tags(&block.literal));
      out.push(' ');
      return;
    },
    NodeValue::CodeBlock(_)
    | NodeValue::Code(_)
    | NodeValue::HtmlInline(_)
    | NodeValue::Image(_) => return,
    NodeValue::SoftBreak | NodeValue::LineBreak => {
      out.push(' ');
      return;
    },
    _ => {},
  }

  for child in node.children() {
    collect_text(child, out);
  }

  // Keep adjacent blocks from gluing words together.
  if node.data.borrow().value.block() {
    out.push(' ');
  }
}

fn strip_tags(html: &str) -> String {
  HTML_TAG_RE.as_ref().map_or_else(
    || html.to_string(),
    |re| re.replace_all(html, " ").into_owned(),
  )
}
