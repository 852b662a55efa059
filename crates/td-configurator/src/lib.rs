//! # td-configurator
//!
//! Resolves the dates of one batch of evaluation facts: the mandatory
//! `nextHearingDate`, `dueDate` and `priorityDate`, plus any intermediate
//! dates, in a validated order.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DateTypeConfigurator` and its outcome.
pub mod configurator;

/// Resolution-order determination and validation.
pub mod order;

/// Calculator sets per date type and pass.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use configurator::{ConfigurationOutcome, DateTypeConfigurator};
pub use order::ResolutionOrder;
pub use registry::CalculatorRegistry;
