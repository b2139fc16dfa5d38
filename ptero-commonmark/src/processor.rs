//! Markdown body compilation.
use comrak::{Arena, options::Options, parse_document};

use crate::{
  codeblock::CodeBlockTransformer,
  syntax::{SyntaxError, SyntaxManager},
  types::RenderedDocument,
};

/// Errors produced while compiling a document body.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
  #[error(transparent)]
  Syntax(#[from] SyntaxError),

  #[error("Failed to format HTML: {0}")]
  Format(String),
}

/// Options for configuring the Markdown processor.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown extensions.
  pub gfm: bool,

  /// Replace code fences with code components. When disabled, fences are
  /// left to comrak's default `<pre><code>` rendering.
  pub code_components: bool,

  /// Highlight theme overriding the syntax manager's default.
  pub highlight_theme: Option<String>,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm:             true,
      code_components: true,
      highlight_theme: None,
    }
  }
}

/// Compiles Markdown bodies to HTML, turning code fences into components.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownProcessor<'s> {
  options: &'s MarkdownOptions,
  syntax:  &'s SyntaxManager,
}

impl<'s> MarkdownProcessor<'s> {
  #[must_use]
  pub const fn new(options: &'s MarkdownOptions, syntax: &'s SyntaxManager) -> Self {
    Self { options, syntax }
  }

  /// Render a Markdown body (frontmatter already removed).
  ///
  /// # Errors
  ///
  /// Returns an error if highlighting or HTML formatting fails.
  pub fn render(&self, markdown: &str) -> Result<RenderedDocument, ProcessorError> {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let code_nodes = if self.options.code_components {
      CodeBlockTransformer::new(self.syntax)
        .with_theme(self.options.highlight_theme.as_deref())
        .transform(root)?
    } else {
      Vec::new()
    };

    let mut html = String::new();
    comrak::format_html(root, &options, &mut html)
      .map_err(|e| ProcessorError::Format(e.to_string()))?;

    Ok(RenderedDocument { html, code_nodes })
  }

  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    options.render.r#unsafe = true;
    options
  }
}
