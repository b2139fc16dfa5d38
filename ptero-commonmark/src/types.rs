//! Types for ptero-commonmark public API.
use serde::{Deserialize, Serialize};

/// A standalone highlighted code block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
  /// Raw code as written in the fence.
  pub source: String,

  /// Highlighted markup produced by the syntax engine.
  pub html: String,

  /// Language declared on the fence (`text` when none was given).
  pub lang: String,

  /// Optional `title=` from the fence metadata.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
}

/// One tab of a grouped code block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeTab {
  /// Tab label: the fence title, or its language when untitled.
  pub label:  String,
  pub source: String,
  pub html:   String,
  pub lang:   String,
}

/// Code blocks that share a `group=` key, collapsed into a single tab set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeTabs {
  /// The group key shared by every member.
  pub group: String,

  /// Members in source order.
  pub tabs: Vec<CodeTab>,
}

/// A code component emitted in place of a fenced code node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CodeNode {
  Block(CodeBlock),
  Tabs(CodeTabs),
}

/// Result of compiling one document body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedDocument {
  /// Rendered HTML with code fences replaced by component markup.
  pub html: String,

  /// The code components, in document order.
  pub code_nodes: Vec<CodeNode>,
}
