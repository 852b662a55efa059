use chrono::NaiveDateTime;
use td_core::errors::Result;
use td_core::{Fact, FieldSuffix};
use td_time::parse_date_time;

use crate::calculator::{finish, unsupported, CalculationContext, DateCalculator, Pass};
use crate::inputs::{DateInputs, Strategy};
use crate::interval::IntervalSettings;

/// Uses the literal `<prefix>Origin` value as the origin, then applies the
/// interval and working-day adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginCalculator {
    pass: Pass,
}

pass_variants!(OriginCalculator, "OriginCalculator", "OriginReCalculator");

impl DateCalculator for OriginCalculator {
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn supports(&self, inputs: &DateInputs) -> bool {
        self.pass.accepts(inputs) && matches!(inputs.strategy(), Strategy::Origin(_))
    }

    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact> {
        let Strategy::Origin(value) = inputs.strategy() else {
            return Err(unsupported(inputs));
        };
        let field = inputs.object().field(FieldSuffix::Origin);
        let origin = parse_date_time(&field, value, ctx.defaults().default_time())?;
        from_origin(inputs, ctx, origin)
    }
}

/// Shift `origin` by the date type's interval settings and finish with its
/// time of day. The origin's own time is kept unless `<prefix>Time` is set.
pub(crate) fn from_origin(
    inputs: &DateInputs,
    ctx: &CalculationContext<'_>,
    origin: NaiveDateTime,
) -> Result<Fact> {
    let settings = IntervalSettings::from_inputs(inputs, ctx.defaults())?;
    let date = settings.apply(origin.date(), ctx.indicator())?;
    finish(inputs, date.and_time(origin.time()))
}
