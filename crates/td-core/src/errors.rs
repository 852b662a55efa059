//! Error types for taskdates.
//!
//! Every failure in the workspace is a variant of one `thiserror`-derived
//! enum. The two order-validation failures share the
//! [`Error::DateCalculation`] kind and carry their message text verbatim.

use thiserror::Error;

/// Raised when the mandatory date types appear in an explicit order but not
/// as `nextHearingDate`, `dueDate`, `priorityDate`.
pub const MANDATORY_DATES_NOT_IN_REQUIRED_ORDER_IN_CALCULATED_DATES: &str =
    "MANDATORY_DATES_NOT_IN_REQUIRED_ORDER_IN_CALCULATED_DATES";

/// Raised when an explicit order omits one or more mandatory date types.
pub const MANDATORY_DATES_NOT_PROVIDED_IN_CALCULATED_DATES: &str =
    "MANDATORY_DATES_NOT_PROVIDED_IN_CALCULATED_DATES";

/// The top-level error type used throughout taskdates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Resolution-order validation failure. The message is part of the
    /// public contract and is displayed unchanged.
    #[error("{0}")]
    DateCalculation(String),

    /// A fact value could not be parsed.
    #[error("cannot parse {field} value {value:?}: {reason}")]
    Parse {
        /// Name of the fact being parsed.
        field: String,
        /// The offending value.
        value: String,
        /// What was expected.
        reason: String,
    },

    /// No calculator in the injected set supports the facts for a date type.
    #[error("no calculator supports the facts for {date_type}")]
    NoApplicableCalculator {
        /// Prefix of the date type that could not be resolved.
        date_type: String,
    },

    /// An origin field references dates of which none has a value.
    #[error("none of the dates referenced by {field} ({references}) has a value")]
    UnresolvedReference {
        /// Name of the origin field.
        field: String,
        /// The referenced names, comma separated.
        references: String,
    },

    /// Failure reported by, or while stepping through, a holiday calendar.
    #[error("calendar error: {0}")]
    Calendar(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Internal invariant broken at run time.
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl Error {
    /// Build a [`Error::Parse`].
    pub fn parse(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Return `true` for the order-validation error kind.
    pub fn is_date_calculation(&self) -> bool {
        matches!(self, Error::DateCalculation(_))
    }
}

/// Shorthand `Result` type used throughout taskdates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use td_core::{ensure, errors::Error};
/// fn positive(x: i64) -> td_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use td_core::{fail, errors::Error};
/// fn always() -> td_core::errors::Result<()> {
///     fail!("no calculator for {}", "dueDate");
/// }
/// assert!(matches!(always(), Err(Error::Runtime(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_calculation_message_is_verbatim() {
        let err = Error::DateCalculation(MANDATORY_DATES_NOT_PROVIDED_IN_CALCULATED_DATES.into());
        assert_eq!(err.to_string(), "MANDATORY_DATES_NOT_PROVIDED_IN_CALCULATED_DATES");
        assert!(err.is_date_calculation());

        let err = Error::DateCalculation(
            MANDATORY_DATES_NOT_IN_REQUIRED_ORDER_IN_CALCULATED_DATES.into(),
        );
        assert_eq!(
            err.to_string(),
            "MANDATORY_DATES_NOT_IN_REQUIRED_ORDER_IN_CALCULATED_DATES"
        );
    }

    #[test]
    fn other_kinds_are_not_date_calculation() {
        let err = Error::parse("dueDateIntervalDays", "five", "expected an integer");
        assert!(!err.is_date_calculation());
        assert_eq!(
            err.to_string(),
            "cannot parse dueDateIntervalDays value \"five\": expected an integer"
        );
    }
}
