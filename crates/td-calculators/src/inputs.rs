//! Inputs of one date type, read once from the fact list.
//!
//! The presence of `<prefix>OriginEarliest`, `<prefix>OriginLatest`,
//! `<prefix>OriginRef`, `<prefix>Origin`, or `<prefix>` decides how the date
//! is computed. That decision is made here, once, and carried as a
//! [`Strategy`] tag that calculators dispatch on.

use std::collections::HashMap;

use chrono::NaiveTime;
use td_core::errors::Result;
use td_core::{DateTypeObject, FactList, FieldSuffix};
use td_time::parse_time;

/// How a date type is computed, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Earliest of the referenced dates, then interval adjustment.
    OriginEarliest(Vec<String>),
    /// Latest of the referenced dates, then interval adjustment.
    OriginLatest(Vec<String>),
    /// Last referenced date that has a value, then interval adjustment.
    OriginRef(Vec<String>),
    /// A literal origin date, then interval adjustment.
    Origin(String),
    /// The date is given directly.
    DirectValue(String),
    /// Nothing but (possibly) a time of day; the date is the default date.
    TimeOnly,
}

impl Strategy {
    /// The tag without its payload.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::OriginEarliest(_) => StrategyKind::OriginEarliest,
            Strategy::OriginLatest(_) => StrategyKind::OriginLatest,
            Strategy::OriginRef(_) => StrategyKind::OriginRef,
            Strategy::Origin(_) => StrategyKind::Origin,
            Strategy::DirectValue(_) => StrategyKind::DirectValue,
            Strategy::TimeOnly => StrategyKind::TimeOnly,
        }
    }
}

/// Payload-free [`Strategy`] tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// See [`Strategy::OriginEarliest`].
    OriginEarliest,
    /// See [`Strategy::OriginLatest`].
    OriginLatest,
    /// See [`Strategy::OriginRef`].
    OriginRef,
    /// See [`Strategy::Origin`].
    Origin,
    /// See [`Strategy::DirectValue`].
    DirectValue,
    /// See [`Strategy::TimeOnly`].
    TimeOnly,
}

const SETTINGS: [FieldSuffix; 6] = [
    FieldSuffix::Time,
    FieldSuffix::IntervalDays,
    FieldSuffix::NonWorkingCalendar,
    FieldSuffix::NonWorkingDaysOfWeek,
    FieldSuffix::SkipNonWorkingDays,
    FieldSuffix::MustBeWorkingDay,
];

/// The facts of one date type, reduced to what the calculators need.
///
/// In a reconfiguration pass only reconfigurable facts are read, so a field
/// that may not change never decides the strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputs {
    object: DateTypeObject,
    reconfiguration: bool,
    strategy: Strategy,
    source_reconfigurable: bool,
    settings: HashMap<FieldSuffix, String>,
}

impl DateInputs {
    /// Read the inputs of `object` from `facts`.
    pub fn parse(facts: &FactList, object: &DateTypeObject, reconfiguration: bool) -> Self {
        let view = facts.view(reconfiguration);
        let present = |suffix: FieldSuffix| {
            view.fact(&object.field(suffix))
                .and_then(|f| f.non_blank_value().map(|v| (v, f.reconfigurable)))
        };

        let origin = FieldSuffix::ORIGINS
            .into_iter()
            .find_map(|suffix| present(suffix).map(|found| (suffix, found)));
        let (strategy, source_reconfigurable) = match origin {
            Some((suffix, (value, flag))) => {
                let refs = || split_references(value);
                let strategy = match suffix {
                    FieldSuffix::OriginEarliest => Strategy::OriginEarliest(refs()),
                    FieldSuffix::OriginLatest => Strategy::OriginLatest(refs()),
                    FieldSuffix::OriginRef => Strategy::OriginRef(refs()),
                    _ => Strategy::Origin(value.to_string()),
                };
                (strategy, flag)
            }
            None => match present(FieldSuffix::Value) {
                Some((value, flag)) => (Strategy::DirectValue(value.to_string()), flag),
                None => (
                    Strategy::TimeOnly,
                    present(FieldSuffix::Time).is_some_and(|(_, flag)| flag),
                ),
            },
        };

        let settings = SETTINGS
            .into_iter()
            .filter_map(|suffix| present(suffix).map(|(v, _)| (suffix, v.to_string())))
            .collect();

        Self {
            object: object.clone(),
            reconfiguration,
            strategy,
            source_reconfigurable,
            settings,
        }
    }

    /// The date type being computed.
    pub fn object(&self) -> &DateTypeObject {
        &self.object
    }

    /// Whether these inputs were read for a reconfiguration pass.
    pub fn is_reconfiguration(&self) -> bool {
        self.reconfiguration
    }

    /// The strategy tag.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Whether the fact that decided the strategy is reconfigurable.
    pub fn source_reconfigurable(&self) -> bool {
        self.source_reconfigurable
    }

    /// Raw value of a setting field (`Time`, `IntervalDays`, ...), if present.
    pub fn setting(&self, suffix: FieldSuffix) -> Option<&str> {
        self.settings.get(&suffix).map(String::as_str)
    }

    /// Parsed `<prefix>Time`, if present.
    pub fn time_of_day(&self) -> Result<Option<NaiveTime>> {
        self.setting(FieldSuffix::Time)
            .map(|v| parse_time(&self.object.field(FieldSuffix::Time), v))
            .transpose()
    }
}

fn split_references(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
