use td_core::errors::Result;
use td_core::Fact;

use crate::calculator::{finish, unsupported, CalculationContext, DateCalculator, Pass};
use crate::inputs::{DateInputs, Strategy};

/// Uses the default date, taking only the time of day from `<prefix>Time`.
///
/// In a standard pass this is the fallback that applies when nothing else
/// does, including when the date type has no facts at all. In a
/// reconfiguration pass it needs a reconfigurable `<prefix>Time`; without one
/// there is nothing to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOnlyCalculator {
    pass: Pass,
}

pass_variants!(TimeOnlyCalculator, "TimeOnlyCalculator", "TimeOnlyReCalculator");

impl DateCalculator for TimeOnlyCalculator {
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn supports(&self, inputs: &DateInputs) -> bool {
        if !self.pass.accepts(inputs) || inputs.strategy() != &Strategy::TimeOnly {
            return false;
        }
        match self.pass {
            Pass::Standard => true,
            Pass::Reconfiguration => inputs.setting(td_core::FieldSuffix::Time).is_some(),
        }
    }

    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact> {
        if inputs.strategy() != &Strategy::TimeOnly {
            return Err(unsupported(inputs));
        }
        let defaults = ctx.defaults();
        let base = defaults.default_date().and_time(defaults.default_time());
        finish(inputs, base)
    }
}
