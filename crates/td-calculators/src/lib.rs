//! # td-calculators
//!
//! The family of date calculation strategies. For every date type exactly
//! one strategy applies to a given fact list; which one is decided by the
//! [`Strategy`] tag parsed once into [`DateInputs`], and each
//! [`DateCalculator`] variant supports exactly one tag in one pass.
//!
//! Precedence, most specific first: origin-earliest, origin-latest,
//! origin-ref, origin, direct value, time only.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DateCalculator` trait, calculation context, and resolved-dates view.
pub mod calculator;

/// Concrete calculator variants.
pub mod calculators;

/// Per-configurator defaults.
pub mod defaults;

/// Parsed, tagged inputs of one date type.
pub mod inputs;

/// Interval and working-day adjustment applied to origin dates.
pub mod interval;

/// Ordered calculator sets.
pub mod set;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{CalculationContext, DateCalculator, Pass, ResolvedDates};
pub use calculators::{
    DirectValueCalculator, OriginCalculator, OriginEarliestCalculator, OriginLatestCalculator,
    OriginRefCalculator, TimeOnlyCalculator,
};
pub use defaults::CalculationDefaults;
pub use inputs::{DateInputs, Strategy, StrategyKind};
pub use interval::IntervalSettings;
pub use set::CalculatorSet;
