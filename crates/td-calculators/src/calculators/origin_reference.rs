//! Calculators whose origin is another date, looked up by name.
//!
//! A referenced name is read from the dates already resolved in this pass
//! first, then from the raw facts (last occurrence wins). Names with no value
//! are skipped; if none of them has a value the calculation fails.

use chrono::NaiveDateTime;
use td_core::errors::{Error, Result};
use td_core::{Fact, FieldSuffix};
use td_time::parse_date_time;
use tracing::debug;

use super::origin::from_origin;
use crate::calculator::{unsupported, CalculationContext, DateCalculator, Pass};
use crate::inputs::{DateInputs, Strategy, StrategyKind};

/// Origin is the last date named in `<prefix>OriginRef` that has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginRefCalculator {
    pass: Pass,
}

/// Origin is the earliest of the dates named in `<prefix>OriginEarliest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginEarliestCalculator {
    pass: Pass,
}

/// Origin is the latest of the dates named in `<prefix>OriginLatest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginLatestCalculator {
    pass: Pass,
}

pass_variants!(OriginRefCalculator, "OriginRefCalculator", "OriginRefReCalculator");
pass_variants!(
    OriginEarliestCalculator,
    "OriginEarliestCalculator",
    "OriginEarliestReCalculator"
);
pass_variants!(
    OriginLatestCalculator,
    "OriginLatestCalculator",
    "OriginLatestReCalculator"
);

impl DateCalculator for OriginRefCalculator {
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn supports(&self, inputs: &DateInputs) -> bool {
        self.pass.accepts(inputs) && inputs.strategy().kind() == StrategyKind::OriginRef
    }

    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact> {
        let Strategy::OriginRef(references) = inputs.strategy() else {
            return Err(unsupported(inputs));
        };
        let origin = referenced_dates(inputs, ctx, references)?.pop();
        from_origin(inputs, ctx, required(inputs, FieldSuffix::OriginRef, references, origin)?)
    }
}

impl DateCalculator for OriginEarliestCalculator {
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn supports(&self, inputs: &DateInputs) -> bool {
        self.pass.accepts(inputs) && inputs.strategy().kind() == StrategyKind::OriginEarliest
    }

    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact> {
        let Strategy::OriginEarliest(references) = inputs.strategy() else {
            return Err(unsupported(inputs));
        };
        let origin = referenced_dates(inputs, ctx, references)?.into_iter().min();
        let origin = required(inputs, FieldSuffix::OriginEarliest, references, origin)?;
        from_origin(inputs, ctx, origin)
    }
}

impl DateCalculator for OriginLatestCalculator {
    fn name(&self) -> &'static str {
        self.variant_name()
    }

    fn supports(&self, inputs: &DateInputs) -> bool {
        self.pass.accepts(inputs) && inputs.strategy().kind() == StrategyKind::OriginLatest
    }

    fn calculate_date(&self, inputs: &DateInputs, ctx: &CalculationContext<'_>) -> Result<Fact> {
        let Strategy::OriginLatest(references) = inputs.strategy() else {
            return Err(unsupported(inputs));
        };
        let origin = referenced_dates(inputs, ctx, references)?.into_iter().max();
        let origin = required(inputs, FieldSuffix::OriginLatest, references, origin)?;
        from_origin(inputs, ctx, origin)
    }
}

/// Parsed values of the referenced dates that have one, in reference order.
fn referenced_dates(
    inputs: &DateInputs,
    ctx: &CalculationContext<'_>,
    references: &[String],
) -> Result<Vec<NaiveDateTime>> {
    let default_time = ctx.defaults().default_time();
    let mut dates = Vec::with_capacity(references.len());
    for name in references {
        let value = ctx.resolved().get(name).or_else(|| ctx.facts().value(name));
        match value {
            Some(value) => dates.push(parse_date_time(name, value, default_time)?),
            None => debug!(
                date_type = inputs.object().prefix(),
                reference = name.as_str(),
                "referenced date has no value"
            ),
        }
    }
    Ok(dates)
}

fn required(
    inputs: &DateInputs,
    suffix: FieldSuffix,
    references: &[String],
    origin: Option<NaiveDateTime>,
) -> Result<NaiveDateTime> {
    origin.ok_or_else(|| Error::UnresolvedReference {
        field: inputs.object().field(suffix),
        references: references.join(","),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ResolvedDates;
    use crate::defaults::CalculationDefaults;
    use td_core::{AttributeMap, DateType, DateTypeObject, FactList};
    use td_time::{NoHolidays, WorkingDayIndicator};

    fn calculate(
        calc: &dyn DateCalculator,
        facts: Vec<Fact>,
        attributes: &AttributeMap,
    ) -> Result<Fact> {
        let facts = FactList::from(facts);
        let object = DateTypeObject::mandatory(DateType::DueDate).unwrap();
        let inputs = DateInputs::parse(&facts, &object, false);
        assert!(calc.supports(&inputs), "{} should apply", calc.name());
        let indicator = WorkingDayIndicator::new(&NoHolidays);
        let defaults = CalculationDefaults::default();
        let ctx = CalculationContext::new(ResolvedDates::new(attributes), &facts, &indicator, &defaults);
        calc.calculate_date(&inputs, &ctx)
    }

    fn hearing_and_priority() -> Vec<Fact> {
        vec![
            Fact::new("nextHearingDate", "2022-10-15T10:00"),
            Fact::new("priorityDate", "2022-10-13T09:00"),
        ]
    }

    #[test]
    fn reference_resolves_from_facts() {
        let mut facts = hearing_and_priority();
        facts.push(Fact::new("dueDateOriginRef", "nextHearingDate"));
        facts.push(Fact::new("dueDateIntervalDays", "3"));
        let fact = calculate(&OriginRefCalculator::standard(), facts, &AttributeMap::new()).unwrap();
        assert_eq!(fact.value, "2022-10-18T10:00");
    }

    #[test]
    fn resolved_dates_take_precedence_over_facts() {
        let mut facts = hearing_and_priority();
        facts.push(Fact::new("dueDateOriginRef", "nextHearingDate"));
        let mut attributes = AttributeMap::new();
        attributes.insert("nextHearingDate".into(), "2022-11-01T12:00".into());
        let fact = calculate(&OriginRefCalculator::standard(), facts, &attributes).unwrap();
        assert_eq!(fact.value, "2022-11-01T12:00");
    }

    #[test]
    fn last_reference_with_a_value_is_used() {
        let mut facts = hearing_and_priority();
        facts.push(Fact::new("dueDateOriginRef", "priorityDate,missingDate"));
        let fact = calculate(&OriginRefCalculator::standard(), facts, &AttributeMap::new()).unwrap();
        assert_eq!(fact.value, "2022-10-13T09:00");
    }

    #[test]
    fn earliest_and_latest() {
        let mut facts = hearing_and_priority();
        facts.push(Fact::new("dueDateOriginEarliest", "nextHearingDate,priorityDate"));
        let fact = calculate(&OriginEarliestCalculator::standard(), facts, &AttributeMap::new()).unwrap();
        assert_eq!(fact.value, "2022-10-13T09:00");

        let mut facts = hearing_and_priority();
        facts.push(Fact::new("dueDateOriginLatest", "nextHearingDate,priorityDate"));
        facts.push(Fact::new("dueDateTime", "17:00"));
        let fact = calculate(&OriginLatestCalculator::standard(), facts, &AttributeMap::new()).unwrap();
        assert_eq!(fact.value, "2022-10-15T17:00");
    }

    #[test]
    fn no_referenced_value_is_an_error() {
        let facts = vec![Fact::new("dueDateOriginLatest", "nextHearingDate,priorityDate")];
        let err = calculate(&OriginLatestCalculator::standard(), facts, &AttributeMap::new()).unwrap_err();
        assert_eq!(
            err,
            Error::UnresolvedReference {
                field: "dueDateOriginLatest".into(),
                references: "nextHearingDate,priorityDate".into(),
            }
        );
    }

    #[test]
    fn malformed_referenced_value_is_a_parse_error() {
        let facts = vec![
            Fact::new("nextHearingDate", "soon"),
            Fact::new("dueDateOriginRef", "nextHearingDate"),
        ];
        let err = calculate(&OriginRefCalculator::standard(), facts, &AttributeMap::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
