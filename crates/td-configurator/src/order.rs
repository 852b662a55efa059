//! The order in which date types are resolved.
//!
//! An explicit order comes from the last `calculatedDates` fact. Without one
//! the mandatory date types are resolved in their canonical order, followed
//! by any intermediate dates that have an origin field among the facts.

use std::collections::HashSet;

use td_core::errors::{
    Error, Result, MANDATORY_DATES_NOT_IN_REQUIRED_ORDER_IN_CALCULATED_DATES,
    MANDATORY_DATES_NOT_PROVIDED_IN_CALCULATED_DATES,
};
use td_core::{DateType, DateTypeObject, FactList, FieldSuffix, CALCULATED_DATES};

/// A resolution order: date-type instances, each prefix at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOrder {
    entries: Vec<DateTypeObject>,
    explicit: bool,
}

impl ResolutionOrder {
    /// The order for `facts`: explicit if a non-blank `calculatedDates` fact
    /// is last among its name, canonical otherwise.
    pub fn determine(facts: &FactList) -> Self {
        match facts.value(CALCULATED_DATES) {
            Some(value) => Self::from_calculated_dates(value),
            None => Self::canonical(facts),
        }
    }

    /// Parse a comma-separated `calculatedDates` value.
    ///
    /// Entries are trimmed and blanks dropped; a repeated prefix keeps its
    /// first position.
    pub fn from_calculated_dates(value: &str) -> Self {
        let mut seen = HashSet::new();
        let entries = value
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty() && seen.insert(*p))
            .map(DateTypeObject::from_prefix)
            .collect();
        Self {
            entries,
            explicit: true,
        }
    }

    /// The mandatory date types in canonical order, then the intermediate
    /// dates discovered in `facts` in order of first appearance.
    pub fn canonical(facts: &FactList) -> Self {
        let mut entries: Vec<DateTypeObject> = DateType::MANDATORY
            .into_iter()
            .filter_map(DateTypeObject::mandatory)
            .collect();
        let mut seen: HashSet<String> = HashSet::new();
        for fact in facts {
            if fact.non_blank_value().is_none() {
                continue;
            }
            if let Some(prefix) = intermediate_prefix(&fact.name) {
                if seen.insert(prefix.to_string()) {
                    entries.push(DateTypeObject::new(DateType::IntermediateDate, prefix));
                }
            }
        }
        Self {
            entries,
            explicit: false,
        }
    }

    /// Check the mandatory date types: all three present, in canonical
    /// relative order. Missing types are reported before misordering.
    pub fn validate(&self) -> Result<()> {
        let mandatory: Vec<DateType> = self
            .entries
            .iter()
            .map(DateTypeObject::date_type)
            .filter(DateType::is_mandatory)
            .collect();
        if DateType::MANDATORY.iter().any(|t| !mandatory.contains(t)) {
            return Err(Error::DateCalculation(
                MANDATORY_DATES_NOT_PROVIDED_IN_CALCULATED_DATES.to_string(),
            ));
        }
        if mandatory != DateType::MANDATORY {
            return Err(Error::DateCalculation(
                MANDATORY_DATES_NOT_IN_REQUIRED_ORDER_IN_CALCULATED_DATES.to_string(),
            ));
        }
        Ok(())
    }

    /// The date-type instances in resolution order.
    pub fn entries(&self) -> &[DateTypeObject] {
        &self.entries
    }

    /// The prefixes in resolution order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.entries.iter().map(DateTypeObject::prefix).collect()
    }

    /// Whether the order came from a `calculatedDates` fact.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

/// `<p>` for a fact named `<p>Origin*` where `<p>` is not a mandatory prefix.
fn intermediate_prefix(name: &str) -> Option<&str> {
    FieldSuffix::ORIGINS
        .into_iter()
        .find_map(|suffix| name.strip_suffix(suffix.as_str()))
        .filter(|p| !p.is_empty() && !DateType::from_prefix(p).is_mandatory())
}
