//! Trait-based syntax highlighting.
//!
//! The [`SyntaxHighlighter`] trait is the seam between the code block
//! transformer and a concrete engine. The only backend shipped is
//! **Syntect**, with two-face added for extended syntax definitions and
//! themes.

pub mod error;
mod syntect;
pub mod types;

pub use error::{SyntaxError, SyntaxResult};
pub use self::syntect::{DEFAULT_THEME, SyntectHighlighter, create_syntect_manager};
pub use types::{PLAIN_TEXT, SyntaxConfig, SyntaxHighlighter, SyntaxManager};

/// Create the default syntax manager.
///
/// Loading grammars is the expensive step; build the manager once and pass
/// it by reference to every [`crate::MarkdownProcessor`].
#[must_use]
pub fn create_default_manager(theme: Option<String>) -> SyntaxManager {
  create_syntect_manager(theme)
}
