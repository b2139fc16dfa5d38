//! Code fence to code component transformation.
//!
//! Runs in two passes over the parsed document. The first pass highlights
//! every code node, replaces ungrouped ones with code block markup and parks
//! grouped ones as placeholders while collecting their members in a side
//! table keyed by group. The second pass walks the placeholders in document
//! order: the first placeholder of each group becomes the tab set, the others
//! are removed from the tree.

use std::collections::HashSet;

use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use indexmap::IndexMap;

use super::{
  markup::{render_code_block, render_code_tabs},
  meta::parse_fence_info,
};
use crate::{
  syntax::{SyntaxManager, SyntaxResult},
  types::{CodeBlock, CodeNode, CodeTab, CodeTabs},
};

/// What a visited code node turned into during the first pass.
enum Slot<'a> {
  Block(CodeBlock),
  Group {
    node: &'a AstNode<'a>,
    key:  String,
  },
}

/// Replaces code nodes with highlighted code components.
///
/// Borrows the [`SyntaxManager`] so a transformer cannot exist without a
/// ready highlighter.
#[derive(Debug, Clone, Copy)]
pub struct CodeBlockTransformer<'s> {
  syntax: &'s SyntaxManager,
  theme:  Option<&'s str>,
}

impl<'s> CodeBlockTransformer<'s> {
  #[must_use]
  pub const fn new(syntax: &'s SyntaxManager) -> Self {
    Self {
      syntax,
      theme: None,
    }
  }

  /// Highlight with `theme` instead of the manager's default.
  #[must_use]
  pub const fn with_theme(mut self, theme: Option<&'s str>) -> Self {
    self.theme = theme;
    self
  }

  /// Transform every code node below `root`, returning the produced
  /// components in document order.
  ///
  /// Each group yields exactly one [`CodeNode::Tabs`], positioned where its
  /// first member appeared, whether or not the members were adjacent.
  ///
  /// # Errors
  ///
  /// Returns the highlighter error for the first block that fails.
  pub fn transform<'a>(
    &self,
    root: &'a AstNode<'a>,
  ) -> SyntaxResult<Vec<CodeNode>> {
    let code_nodes: Vec<&'a AstNode<'a>> = root
      .descendants()
      .filter(|node| matches!(node.data.borrow().value, NodeValue::CodeBlock(_)))
      .collect();

    let mut slots = Vec::with_capacity(code_nodes.len());
    let mut groups: IndexMap<String, Vec<CodeTab>> = IndexMap::new();

    for node in code_nodes {
      let (info, source) = {
        let data = node.data.borrow();
        let NodeValue::CodeBlock(ref block) = data.value else {
          continue;
        };
        (block.info.clone(), block.literal.clone())
      };

      let (lang, meta) = parse_fence_info(&info);
      let html = self.syntax.highlight_code(&source, &lang, self.theme)?;

      if let Some(key) = meta.group {
        groups.entry(key.clone()).or_default().push(CodeTab {
          label: meta.title.unwrap_or_else(|| lang.clone()),
          source,
          html,
          lang,
        });
        set_html(node, format!("<!-- code-tabs:{key} -->"));
        slots.push(Slot::Group { node, key });
      } else {
        let block = CodeBlock {
          source,
          html,
          lang,
          title: meta.title,
        };
        set_html(node, render_code_block(&block));
        slots.push(Slot::Block(block));
      }
    }

    let mut emitted: HashSet<String> = HashSet::new();
    let mut output = Vec::with_capacity(slots.len());

    for slot in slots {
      match slot {
        Slot::Block(block) => output.push(CodeNode::Block(block)),
        Slot::Group { node, key } => {
          if emitted.contains(&key) {
            node.detach();
            continue;
          }
          let tabs = CodeTabs {
            tabs:  groups.shift_remove(&key).unwrap_or_default(),
            group: key.clone(),
          };
          log::trace!("Collapsed {} blocks into tab group '{key}'", tabs.tabs.len());
          set_html(node, render_code_tabs(&tabs));
          output.push(CodeNode::Tabs(tabs));
          emitted.insert(key);
        },
      }
    }

    Ok(output)
  }
}

fn set_html<'a>(node: &'a AstNode<'a>, literal: String) {
  node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
    block_type: 0,
    literal,
  });
}
