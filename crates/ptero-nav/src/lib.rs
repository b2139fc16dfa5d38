//! Navigation derived from document metadata: the sidebar tree,
//! previous/next links and breadcrumbs.

pub mod breadcrumbs;
pub mod error;
pub mod prev_next;
pub mod sidebar;
pub mod text;
mod types;

pub use breadcrumbs::breadcrumbs;
pub use error::NavError;
pub use prev_next::{PrevNextResolver, flatten};
pub use sidebar::{DEFAULT_SECTION, build_sidebar, section_title};
pub use types::{Breadcrumb, DEFAULT_ORDER, Page, PrevNext, Section, Subsection};
