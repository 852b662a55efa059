//! Calculator sets injected per date type and pass.

use std::collections::HashMap;
use std::sync::Arc;

use td_calculators::{CalculatorSet, Pass};
use td_core::DateType;

/// The calculator sets a configurator dispatches to.
///
/// Mandatory date types have a standard and a reconfiguration set.
/// Intermediate dates have no reconfiguration variants and use their
/// standard set in every pass.
#[derive(Debug, Clone)]
pub struct CalculatorRegistry {
    sets: HashMap<(DateType, Pass), Arc<CalculatorSet>>,
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        let standard = Arc::new(CalculatorSet::standard());
        let reconfiguration = Arc::new(CalculatorSet::reconfiguration());
        let mut sets = HashMap::new();
        for date_type in DateType::MANDATORY {
            sets.insert((date_type, Pass::Standard), Arc::clone(&standard));
            sets.insert((date_type, Pass::Reconfiguration), Arc::clone(&reconfiguration));
        }
        sets.insert((DateType::IntermediateDate, Pass::Standard), standard);
        Self { sets }
    }
}

impl CalculatorRegistry {
    /// A registry with no sets at all.
    pub fn empty() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Install `set` for `date_type` in the set's pass, replacing any
    /// previous one. A reconfiguration set for intermediate dates is never
    /// consulted.
    pub fn with_set(mut self, date_type: DateType, set: CalculatorSet) -> Self {
        self.sets.insert((date_type, set.pass()), Arc::new(set));
        self
    }

    /// The pass a date type is actually resolved in when `requested` is
    /// asked for.
    pub fn effective_pass(&self, date_type: DateType, requested: Pass) -> Pass {
        if date_type.is_mandatory() {
            requested
        } else {
            Pass::Standard
        }
    }

    /// The set for `date_type` in `pass`, if one is installed.
    pub fn set(&self, date_type: DateType, pass: Pass) -> Option<&CalculatorSet> {
        self.sets.get(&(date_type, pass)).map(Arc::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_calculators::DirectValueCalculator;

    #[test]
    fn default_registry_covers_every_date_type() {
        let registry = CalculatorRegistry::default();
        for date_type in DateType::MANDATORY {
            assert_eq!(registry.set(date_type, Pass::Standard).unwrap().len(), 6);
            assert_eq!(
                registry.set(date_type, Pass::Reconfiguration).unwrap().pass(),
                Pass::Reconfiguration
            );
        }
        assert!(registry
            .set(DateType::IntermediateDate, Pass::Reconfiguration)
            .is_none());
        assert_eq!(
            registry.effective_pass(DateType::IntermediateDate, Pass::Reconfiguration),
            Pass::Standard
        );
    }

    #[test]
    fn sets_can_be_replaced() {
        let registry = CalculatorRegistry::default().with_set(
            DateType::DueDate,
            CalculatorSet::new(Pass::Standard).with(DirectValueCalculator::standard()),
        );
        assert_eq!(registry.set(DateType::DueDate, Pass::Standard).unwrap().len(), 1);
        assert_eq!(registry.set(DateType::PriorityDate, Pass::Standard).unwrap().len(), 6);
    }
}
