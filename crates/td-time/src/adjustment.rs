//! Working-day adjustment directive, read from `<prefix>MustBeWorkingDay`.

use td_core::errors::{Error, Result};

/// How to adjust a date that falls on a non-working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkingDayAdjustment {
    /// Choose the first working day after the given date.
    Next,
    /// Choose the first working day before the given date.
    Previous,
    /// Do not adjust (keep the date even if it is not a working day).
    #[default]
    Unadjusted,
}

impl std::str::FromStr for WorkingDayAdjustment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(WorkingDayAdjustment::Next),
            "previous" => Ok(WorkingDayAdjustment::Previous),
            "no" | "none" | "false" | "" => Ok(WorkingDayAdjustment::Unadjusted),
            _ => Err(Error::parse(
                "mustBeWorkingDay",
                s,
                "expected Next, Previous, or No",
            )),
        }
    }
}

impl std::fmt::Display for WorkingDayAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkingDayAdjustment::Next => "Next",
            WorkingDayAdjustment::Previous => "Previous",
            WorkingDayAdjustment::Unadjusted => "No",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directive_values() {
        assert_eq!("Next".parse::<WorkingDayAdjustment>().unwrap(), WorkingDayAdjustment::Next);
        assert_eq!("PREVIOUS".parse::<WorkingDayAdjustment>().unwrap(), WorkingDayAdjustment::Previous);
        assert_eq!("No".parse::<WorkingDayAdjustment>().unwrap(), WorkingDayAdjustment::Unadjusted);
        assert!("Sometimes".parse::<WorkingDayAdjustment>().is_err());
        assert_eq!(WorkingDayAdjustment::default(), WorkingDayAdjustment::Unadjusted);
    }
}
