//! `DateTypeConfigurator`: resolves every date type of one batch.
//!
//! Determine the order, validate it, then resolve each date type in turn.
//! Later date types read earlier ones through the resolved-dates view, so
//! the order is also the dependency order. Any failure aborts the batch and
//! leaves the caller's attribute map untouched.

use std::sync::Arc;

use td_calculators::{
    CalculationContext, CalculationDefaults, DateInputs, Pass, ResolvedDates,
};
use td_core::errors::{Error, Result};
use td_core::{fail, AttributeMap, DateType, DateTypeObject, Fact, FactList};
use td_time::working_day::DEFAULT_MAX_STEPS;
use td_time::{
    format_date_time, parse_date_time, HolidayCalendar, JointCalendar, JointCalendarRule,
    NoHolidays, WorkingDayIndicator,
};
use tracing::{debug, warn};

use crate::order::ResolutionOrder;
use crate::registry::CalculatorRegistry;

/// Result of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationOutcome {
    attributes: AttributeMap,
    facts: Vec<Fact>,
    order: Vec<String>,
    skipped: Vec<String>,
}

impl ConfigurationOutcome {
    /// The incoming attributes with every resolved date written in.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// The resolved facts, in resolution order.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// The prefixes in the order they were visited.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Date types a reconfiguration pass left untouched.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Split into the attribute map and the resolved facts.
    pub fn into_parts(self) -> (AttributeMap, Vec<Fact>) {
        (self.attributes, self.facts)
    }
}

/// Resolves the date types of a fact list.
///
/// # Example
/// ```
/// use td_configurator::DateTypeConfigurator;
/// use td_core::{AttributeMap, Fact, FactList};
///
/// let facts = FactList::from(vec![
///     Fact::new("nextHearingDate", "2022-10-13T16:00"),
///     Fact::new("dueDate", "2022-10-14"),
///     Fact::new("priorityDateOriginRef", "dueDate"),
/// ]);
/// let mut attributes = AttributeMap::new();
/// let resolved = DateTypeConfigurator::default()
///     .configure_dates(&facts, false, false, &mut attributes)
///     .unwrap();
/// assert_eq!(resolved.len(), 3);
/// assert_eq!(attributes["priorityDate"], "2022-10-14T16:00");
/// ```
#[derive(Debug, Clone)]
pub struct DateTypeConfigurator {
    calendar: Arc<dyn HolidayCalendar>,
    defaults: CalculationDefaults,
    registry: CalculatorRegistry,
    max_steps: u32,
}

impl Default for DateTypeConfigurator {
    fn default() -> Self {
        Self::new(Arc::new(NoHolidays))
    }
}

impl DateTypeConfigurator {
    /// A configurator over `calendar` with default settings and the full
    /// calculator registry.
    pub fn new(calendar: Arc<dyn HolidayCalendar>) -> Self {
        Self {
            calendar,
            defaults: CalculationDefaults::default(),
            registry: CalculatorRegistry::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// A configurator over several holiday sources. A day is a holiday for a
    /// calendar id if any source lists it; an error from any source aborts
    /// the lookup. Fails with `Precondition` when `sources` is empty.
    pub fn from_sources(sources: Vec<Arc<dyn HolidayCalendar>>) -> Result<Self> {
        let joint = JointCalendar::new(sources, JointCalendarRule::JoinHolidays)?;
        debug!(sources = joint.len(), "joining holiday sources");
        Ok(Self::new(Arc::new(joint)))
    }

    /// Replace the calculation defaults.
    pub fn with_defaults(mut self, defaults: CalculationDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the calculator registry.
    pub fn with_registry(mut self, registry: CalculatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Bound on single-day steps when looking for a working day.
    pub fn with_max_working_day_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// The calculation defaults.
    pub fn defaults(&self) -> &CalculationDefaults {
        &self.defaults
    }

    /// The calculator registry.
    pub fn registry(&self) -> &CalculatorRegistry {
        &self.registry
    }

    /// Resolve every date type and write the results into `attributes`.
    ///
    /// With `due_date_supplied` set and a `dueDate` already in `attributes`,
    /// that value is kept instead of recomputed. `reconfiguration` selects
    /// the reconfiguration pass. On error `attributes` is unchanged.
    pub fn configure_dates(
        &self,
        facts: &FactList,
        due_date_supplied: bool,
        reconfiguration: bool,
        attributes: &mut AttributeMap,
    ) -> Result<Vec<Fact>> {
        let outcome = self.resolve(facts, due_date_supplied, reconfiguration, attributes)?;
        let (resolved, out) = outcome.into_parts();
        *attributes = resolved;
        Ok(out)
    }

    /// Like [`configure_dates`](Self::configure_dates), returning the full
    /// outcome without touching the caller's map.
    pub fn resolve(
        &self,
        facts: &FactList,
        due_date_supplied: bool,
        reconfiguration: bool,
        attributes: &AttributeMap,
    ) -> Result<ConfigurationOutcome> {
        let order = ResolutionOrder::determine(facts);
        order.validate()?;
        debug!(
            order = ?order.prefixes(),
            explicit = order.is_explicit(),
            reconfiguration,
            "resolving dates"
        );

        let indicator = WorkingDayIndicator::new(&*self.calendar).with_max_steps(self.max_steps);
        let requested = Pass::of(reconfiguration);
        let mut resolved = attributes.clone();
        let mut out = Vec::with_capacity(order.entries().len());
        let mut skipped = Vec::new();

        for object in order.entries() {
            if due_date_supplied && object.date_type() == DateType::DueDate {
                if let Some(fact) = self.supplied(object, &resolved)? {
                    debug!(date_type = object.prefix(), value = %fact.value, "keeping supplied date");
                    resolved.insert(fact.name.clone(), fact.value.clone());
                    out.push(fact);
                    continue;
                }
            }

            let pass = self.registry.effective_pass(object.date_type(), requested);
            let inputs = DateInputs::parse(facts, object, pass.is_reconfiguration());
            let calculator = self
                .registry
                .set(object.date_type(), pass)
                .and_then(|set| set.select(&inputs));
            let Some(calculator) = calculator else {
                if pass.is_reconfiguration() {
                    warn!(date_type = object.prefix(), "no reconfigurable rule applies; keeping existing value");
                    skipped.push(object.prefix().to_string());
                    continue;
                }
                return Err(Error::NoApplicableCalculator {
                    date_type: object.prefix().to_string(),
                });
            };

            let fact = {
                let ctx = CalculationContext::new(
                    ResolvedDates::new(&resolved),
                    facts,
                    &indicator,
                    &self.defaults,
                );
                calculator.calculate_date(&inputs, &ctx)?
            };
            if fact.name != object.prefix() {
                fail!(
                    "{} produced {} while resolving {}",
                    calculator.name(),
                    fact.name,
                    object.prefix()
                );
            }
            debug!(
                date_type = object.prefix(),
                calculator = calculator.name(),
                value = %fact.value,
                "resolved date"
            );
            resolved.insert(fact.name.clone(), fact.value.clone());
            out.push(fact);
        }

        Ok(ConfigurationOutcome {
            attributes: resolved,
            facts: out,
            order: order.prefixes().into_iter().map(str::to_string).collect(),
            skipped,
        })
    }

    /// The supplied due date, normalised, if the map has one.
    fn supplied(&self, object: &DateTypeObject, resolved: &AttributeMap) -> Result<Option<Fact>> {
        let Some(value) = ResolvedDates::new(resolved).get(object.prefix()) else {
            return Ok(None);
        };
        let date_time = parse_date_time(object.prefix(), value, self.defaults.default_time())?;
        Ok(Some(Fact::new(object.prefix(), format_date_time(date_time))))
    }
}
