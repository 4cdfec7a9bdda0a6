//! Reading ORT output folders.
//!
//! - [`source`] — per-ecosystem file layout and scan/analyzer selection.
//! - [`document`] — serde model of the parts of the result JSON we read.
//! - [`loader`] — reads and parses a results document plus its notice file.

pub mod document;
pub mod loader;
pub mod source;
