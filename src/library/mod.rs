//! Video catalog.
//!
//! The catalog is supplied once at startup, either the built-in default set
//! or a catalog file:
//!
//! ```text
//! videos.txt    # Title | video_id | #tag1 , #tag2
//! videos.yaml   # - {id, title, tags}
//! videos.json   # [{id, title, tags}]
//! ```

pub mod catalog;
pub mod loader;

pub use catalog::{CatalogError, VideoCatalog};
pub use loader::CatalogFormat;
