//! HTML markup for code components.
//!
//! The markup is what a page-level component layer hydrates: every block
//! carries its raw source in `data-source` so copy buttons do not have to
//! scrape highlighted spans.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::types::{CodeBlock, CodeTabs};

/// Render a standalone code block.
#[must_use]
pub fn render_code_block(block: &CodeBlock) -> String {
  let mut html = String::with_capacity(block.html.len() + 128);

  let _ = write!(
    html,
    "<div class=\"code-block\" data-lang=\"{}\"",
    encode_double_quoted_attribute(&block.lang)
  );
  if let Some(title) = &block.title {
    let _ = write!(
      html,
      " data-title=\"{}\"",
      encode_double_quoted_attribute(title)
    );
  }
  let _ = write!(
    html,
    " data-source=\"{}\">",
    encode_double_quoted_attribute(&block.source)
  );

  if let Some(title) = &block.title {
    let _ = write!(
      html,
      "<div class=\"code-block-title\">{}</div>",
      encode_text(title)
    );
  }
  html.push_str(&block.html);
  html.push_str("</div>");
  html
}

/// Render a tab set. The first tab is selected.
#[must_use]
pub fn render_code_tabs(tabs: &CodeTabs) -> String {
  let mut html = String::new();

  let _ = write!(
    html,
    "<div class=\"code-tabs\" data-group=\"{}\">",
    encode_double_quoted_attribute(&tabs.group)
  );

  html.push_str("<div class=\"code-tabs-list\" role=\"tablist\">");
  for (index, tab) in tabs.tabs.iter().enumerate() {
    let _ = write!(
      html,
      "<button class=\"code-tab\" role=\"tab\" data-index=\"{index}\" \
       aria-selected=\"{}\">{}</button>",
      index == 0,
      encode_text(&tab.label)
    );
  }
  html.push_str("</div>");

  for (index, tab) in tabs.tabs.iter().enumerate() {
    let _ = write!(
      html,
      "<div class=\"code-tab-panel\" role=\"tabpanel\" data-index=\"{index}\" \
       data-lang=\"{}\" data-source=\"{}\"{}>",
      encode_double_quoted_attribute(&tab.lang),
      encode_double_quoted_attribute(&tab.source),
      if index == 0 { "" } else { " hidden" }
    );
    html.push_str(&tab.html);
    html.push_str("</div>");
  }

  html.push_str("</div>");
  html
}
