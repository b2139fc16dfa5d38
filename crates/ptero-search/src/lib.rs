//! Fuzzy search over ptero documentation.
//!
//! [`build_index`] turns listed documents into [`SearchEntry`] records and a
//! weighted index. The index serializes to `{ entries, fuseIndex }` JSON and
//! can be searched again after [`SearchIndex::from_json`] without the source
//! documents.

pub mod bitap;
mod entry;
mod error;
mod index;

pub use entry::{FieldValue, SearchEntry, build_entry};
pub use error::{SearchError, SearchResult};
pub use index::{
  FieldRecord,
  FuseIndex,
  IndexKey,
  IndexRecord,
  KeySource,
  ListItemRecord,
  RecordValue,
  SearchHit,
  SearchIndex,
  SearchMatch,
  build_index,
  field_norm,
};
