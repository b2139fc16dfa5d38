//! Code fence handling: info string metadata, the AST transform and the
//! component markup it emits.

mod markup;
mod meta;
mod transform;

pub use markup::{render_code_block, render_code_tabs};
pub use meta::{FenceMeta, parse_fence_info, parse_meta};
pub use transform::CodeBlockTransformer;
