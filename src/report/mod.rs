//! Report sinks for a finished run.
//!
//! - [`files`] — the final / skipped / unapproved package lists consumed by policy gates.
//! - [`terminal`] — per-language summary table, found licenses and unapproved records.

pub mod files;
pub mod terminal;
