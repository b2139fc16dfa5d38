//! # ptero-commonmark
//!
//! Markdown compilation for ptero documentation pages. Bodies are parsed with
//! `comrak`, code fences are highlighted with `syntect` and replaced by code
//! components, and fences sharing a `group=` key collapse into one tab set.
//!
//! ```rust
//! use ptero_commonmark::{MarkdownOptions, MarkdownProcessor, create_default_manager};
//!
//! let syntax = create_default_manager(None);
//! let options = MarkdownOptions::default();
//! let processor = MarkdownProcessor::new(&options, &syntax);
//!
//! let doc = processor.render("```rust title=main.rs\nfn main() {}\n```\n")?;
//! assert_eq!(doc.code_nodes.len(), 1);
//! # Ok::<(), ptero_commonmark::ProcessorError>(())
//! ```

pub mod codeblock;
pub mod processor;
pub mod syntax;
mod types;
pub mod utils;

pub use crate::{
  codeblock::CodeBlockTransformer,
  processor::{MarkdownOptions, MarkdownProcessor, ProcessorError},
  syntax::{SyntaxError, SyntaxManager, create_default_manager},
  types::{CodeBlock, CodeNode, CodeTab, CodeTabs, RenderedDocument},
  utils::strip_markdown,
};
