//! License extraction and policy classification.
//!
//! - [`declared`] — normalizes the string/list/map shapes of declared license values.
//! - [`extractor`] — walks a results document and produces [`Extracted`](crate::models::Extracted) records.
//! - [`classifier`] — applies the [`Policy`](crate::config::Policy) and partitions records.

pub mod classifier;
pub mod declared;
pub mod extractor;
