//! # td-core
//!
//! Core types, traits, and error definitions for taskdates.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: the error hierarchy, the evaluation fact
//! model produced by decision-table evaluation, the date-type identities and
//! their field names, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Date types, date-type instances, and derived field names.
pub mod date_type;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Evaluation facts and the ordered fact list.
pub mod fact;

/// Global library settings (default date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use date_type::{DateType, DateTypeObject, FieldSuffix, CALCULATED_DATES};
pub use errors::{Error, Result};
pub use fact::{AttributeMap, Fact, FactList, FactView};
pub use settings::{ScopedDefaultDate, Settings};
