//! Concrete calculator variants.
//!
//! Each variant exists once per [`Pass`](crate::Pass): the standard
//! calculator and its reconfiguration counterpart (`*ReCalculator` in
//! [`name`](crate::DateCalculator::name)).

/// Implements the `standard()` / `reconfiguration()` constructors and the
/// pass-dependent name of a calculator holding a `pass` field.
macro_rules! pass_variants {
    ($ty:ident, $standard:literal, $reconfiguration:literal) => {
        impl $ty {
            /// The calculator used in a standard pass.
            pub fn standard() -> Self {
                Self {
                    pass: $crate::Pass::Standard,
                }
            }

            /// The calculator used in a reconfiguration pass.
            pub fn reconfiguration() -> Self {
                Self {
                    pass: $crate::Pass::Reconfiguration,
                }
            }

            /// The pass this calculator belongs to.
            pub fn pass(&self) -> $crate::Pass {
                self.pass
            }

            fn variant_name(&self) -> &'static str {
                match self.pass {
                    $crate::Pass::Standard => $standard,
                    $crate::Pass::Reconfiguration => $reconfiguration,
                }
            }
        }
    };
}

/// Date given directly by `<prefix>`.
pub mod direct_value;

/// Literal `<prefix>Origin`.
pub mod origin;

/// `<prefix>OriginRef`, `<prefix>OriginEarliest`, `<prefix>OriginLatest`.
pub mod origin_reference;

/// Default date with an optional `<prefix>Time`.
pub mod time_only;

pub use direct_value::DirectValueCalculator;
pub use origin::OriginCalculator;
pub use origin_reference::{OriginEarliestCalculator, OriginLatestCalculator, OriginRefCalculator};
pub use time_only::TimeOnlyCalculator;
