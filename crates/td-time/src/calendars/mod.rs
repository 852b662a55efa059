//! Concrete holiday calendar sources.

/// Holiday calendars held in memory, keyed by calendar id.
pub mod in_memory;

/// Several holiday sources combined into one.
pub mod joint;
