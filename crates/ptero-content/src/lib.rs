//! Document loading: frontmatter validation, slug and version resolution, and
//! the [`DocumentStore`] every other stage reads from.

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod path;
pub mod store;

pub use document::{DocMetadata, ParsedDocument, PrerenderEntry};
pub use error::{ContentError, ContentResult, FrontmatterError};
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use path::{DocPath, PathResolver};
pub use store::{DocumentStore, parse_document};
