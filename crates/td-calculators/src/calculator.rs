//! `DateCalculator`: the capability every strategy variant implements.

use chrono::NaiveDateTime;
use td_core::errors::{Error, Result};
use td_core::{AttributeMap, Fact, FactList};
use td_time::{format_date_time, merge_time, WorkingDayIndicator};

use crate::defaults::CalculationDefaults;
use crate::inputs::DateInputs;

/// Which pass a calculator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Initial configuration: every fact is visible.
    Standard,
    /// Reconfiguration: only reconfigurable facts are visible.
    Reconfiguration,
}

impl Pass {
    /// The pass for a reconfiguration flag.
    pub fn of(reconfiguration: bool) -> Self {
        if reconfiguration {
            Pass::Reconfiguration
        } else {
            Pass::Standard
        }
    }

    /// Return `true` for [`Pass::Reconfiguration`].
    pub fn is_reconfiguration(&self) -> bool {
        matches!(self, Pass::Reconfiguration)
    }

    /// Whether inputs read for a pass belong to this one.
    pub fn accepts(&self, inputs: &DateInputs) -> bool {
        self.is_reconfiguration() == inputs.is_reconfiguration()
    }
}

/// One strategy for computing a date.
///
/// Calculators are registered in precedence order and the first whose
/// [`supports`](DateCalculator::supports) returns `true` is used. For any
/// inputs, exactly one calculator of a complete set supports them.
pub trait DateCalculator: std::fmt::Debug + Send + Sync {
    /// Stable name used in logs and tests.
    fn name(&self) -> &'static str;

    /// Whether this calculator is the one to run for `inputs`. Has no side
    /// effects.
    fn supports(&self, inputs: &DateInputs) -> bool;

    /// Compute the date. The returned fact is named after the date type's
    /// prefix and carries a `yyyy-MM-ddTHH:mm` value.
    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact>;
}

/// Read-only view of the dates already resolved, keyed by prefix.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDates<'a> {
    attributes: &'a AttributeMap,
}

impl<'a> ResolvedDates<'a> {
    /// Wrap an attribute map.
    pub fn new(attributes: &'a AttributeMap) -> Self {
        Self { attributes }
    }

    /// Non-blank resolved value of `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.attributes
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Everything a calculator may read besides its own inputs.
#[derive(Debug, Clone, Copy)]
pub struct CalculationContext<'a> {
    resolved: ResolvedDates<'a>,
    facts: &'a FactList,
    indicator: &'a WorkingDayIndicator<'a>,
    defaults: &'a CalculationDefaults,
}

impl<'a> CalculationContext<'a> {
    /// Bundle the context of one calculation.
    pub fn new(
        resolved: ResolvedDates<'a>,
        facts: &'a FactList,
        indicator: &'a WorkingDayIndicator<'a>,
        defaults: &'a CalculationDefaults,
    ) -> Self {
        Self {
            resolved,
            facts,
            indicator,
            defaults,
        }
    }

    /// Dates resolved earlier in this pass, plus the incoming attributes.
    pub fn resolved(&self) -> ResolvedDates<'a> {
        self.resolved
    }

    /// The full fact list.
    pub fn facts(&self) -> &'a FactList {
        self.facts
    }

    /// Working-day arithmetic for this pass.
    pub fn indicator(&self) -> &'a WorkingDayIndicator<'a> {
        self.indicator
    }

    /// Configured defaults.
    pub fn defaults(&self) -> &'a CalculationDefaults {
        self.defaults
    }
}

/// Apply `<prefix>Time` to `base` and wrap the result as the date type's
/// fact.
pub(crate) fn finish(inputs: &DateInputs, base: NaiveDateTime) -> Result<Fact> {
    let date_time = merge_time(base, inputs.time_of_day()?);
    Ok(Fact::new(inputs.object().prefix(), format_date_time(date_time))
        .with_reconfigurable(inputs.source_reconfigurable()))
}

/// Error for a calculator invoked on inputs it does not support.
pub(crate) fn unsupported(inputs: &DateInputs) -> Error {
    Error::NoApplicableCalculator {
        date_type: inputs.object().prefix().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_dates_skip_blank_values() {
        let mut map = AttributeMap::new();
        map.insert("dueDate".into(), "2022-10-13T16:00".into());
        map.insert("priorityDate".into(), "".into());
        let view = ResolvedDates::new(&map);
        assert_eq!(view.get("dueDate"), Some("2022-10-13T16:00"));
        assert_eq!(view.get("priorityDate"), None);
        assert_eq!(view.get("nextHearingDate"), None);
    }

    #[test]
    fn pass_of_flag() {
        assert_eq!(Pass::of(true), Pass::Reconfiguration);
        assert!(!Pass::of(false).is_reconfiguration());
    }
}
