//! Data models
//!
//! Records supplied by the table directory source. The store treats every
//! attribute other than the table name as opaque.

pub mod table;

// Re-exports
pub use table::*;
