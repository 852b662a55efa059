use td_core::errors::Result;
use td_core::{Fact, FieldSuffix};
use td_time::parse_date_time;

use crate::calculator::{finish, unsupported, CalculationContext, DateCalculator, Pass};
use crate::inputs::{DateInputs, Strategy};

/// Takes the date from the last `<prefix>` fact.
///
/// Applies only when no origin field is present. A date-only value gets the
/// default time of day; `<prefix>Time` overrides the time either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectValueCalculator {
    pass: Pass,
}

pass_variants!(DirectValueCalculator, "DirectValueCalculator", "DirectValueReCalculator");

impl DateCalculator for DirectValueCalculator {
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn supports(&self, inputs: &DateInputs) -> bool {
        self.pass.accepts(inputs) && matches!(inputs.strategy(), Strategy::DirectValue(_))
    }

    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact> {
        let Strategy::DirectValue(value) = inputs.strategy() else {
            return Err(unsupported(inputs));
        };
        let field = inputs.object().field(FieldSuffix::Value);
        let base = parse_date_time(&field, value, ctx.defaults().default_time())?;
        finish(inputs, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::CalculationDefaults;
    use crate::calculator::ResolvedDates;
    use td_core::{AttributeMap, DateType, DateTypeObject, FactList};
    use td_time::{NoHolidays, WorkingDayIndicator};

    fn calculate(facts: Vec<Fact>, reconfiguration: bool) -> Option<String> {
        let facts = FactList::from(facts);
        let object = DateTypeObject::mandatory(DateType::DueDate).unwrap();
        let inputs = DateInputs::parse(&facts, &object, reconfiguration);
        let calc = if reconfiguration {
            DirectValueCalculator::reconfiguration()
        } else {
            DirectValueCalculator::standard()
        };
        if !calc.supports(&inputs) {
            return None;
        }
        let attributes = AttributeMap::new();
        let indicator = WorkingDayIndicator::new(&NoHolidays);
        let defaults = CalculationDefaults::default();
        let ctx = CalculationContext::new(ResolvedDates::new(&attributes), &facts, &indicator, &defaults);
        Some(calc.calculate_date(&inputs, &ctx).unwrap().value)
    }

    #[test]
    fn last_value_wins() {
        let value = calculate(
            vec![
                Fact::new("dueDate", "2022-10-13T16:00"),
                Fact::new("dueDate", "2022-10-15T19:00"),
            ],
            false,
        );
        assert_eq!(value.as_deref(), Some("2022-10-15T19:00"));
    }

    #[test]
    fn time_field_overrides_embedded_time() {
        let value = calculate(
            vec![
                Fact::new("dueDate", "2022-10-13T16:00"),
                Fact::new("dueDateTime", "20:00"),
            ],
            false,
        );
        assert_eq!(value.as_deref(), Some("2022-10-13T20:00"));
    }

    #[test]
    fn date_only_value_gets_default_time() {
        let value = calculate(vec![Fact::new("dueDate", "2022-10-13")], false);
        assert_eq!(value.as_deref(), Some("2022-10-13T16:00"));
    }

    #[test]
    fn later_fixed_value_hides_earlier_reconfigurable_one() {
        let value = calculate(
            vec![
                Fact::reconfigurable("dueDate", "2022-10-13T16:00"),
                Fact::new("dueDate", "2022-10-20T16:00"),
            ],
            true,
        );
        assert_eq!(value, None);
    }

    #[test]
    fn reconfiguration_needs_a_reconfigurable_value() {
        assert_eq!(calculate(vec![Fact::new("dueDate", "2022-10-13T16:00")], true), None);
        let value = calculate(
            vec![
                Fact::new("dueDate", "2022-10-20T16:00"),
                Fact::reconfigurable("dueDate", "2022-10-13T16:00"),
            ],
            true,
        );
        assert_eq!(value.as_deref(), Some("2022-10-13T16:00"));
        assert_eq!(DirectValueCalculator::reconfiguration().name(), "DirectValueReCalculator");
    }
}
