//! Ordered collections of calculators for one pass.

use std::fmt;

use crate::calculator::{DateCalculator, Pass};
use crate::calculators::{
    DirectValueCalculator, OriginCalculator, OriginEarliestCalculator, OriginLatestCalculator,
    OriginRefCalculator, TimeOnlyCalculator,
};
use crate::inputs::DateInputs;

/// Calculators in precedence order. The first that supports the inputs is
/// selected.
pub struct CalculatorSet {
    pass: Pass,
    calculators: Vec<Box<dyn DateCalculator>>,
}

impl CalculatorSet {
    /// An empty set for `pass`.
    pub fn new(pass: Pass) -> Self {
        Self {
            pass,
            calculators: Vec::new(),
        }
    }

    /// Append a calculator with the lowest precedence so far.
    pub fn with(mut self, calculator: impl DateCalculator + 'static) -> Self {
        self.calculators.push(Box::new(calculator));
        self
    }

    /// Every standard calculator, most specific first.
    pub fn standard() -> Self {
        Self::new(Pass::Standard)
            .with(OriginEarliestCalculator::standard())
            .with(OriginLatestCalculator::standard())
            .with(OriginRefCalculator::standard())
            .with(OriginCalculator::standard())
            .with(DirectValueCalculator::standard())
            .with(TimeOnlyCalculator::standard())
    }

    /// Every reconfiguration calculator, most specific first.
    pub fn reconfiguration() -> Self {
        Self::new(Pass::Reconfiguration)
            .with(OriginEarliestCalculator::reconfiguration())
            .with(OriginLatestCalculator::reconfiguration())
            .with(OriginRefCalculator::reconfiguration())
            .with(OriginCalculator::reconfiguration())
            .with(DirectValueCalculator::reconfiguration())
            .with(TimeOnlyCalculator::reconfiguration())
    }

    /// The complete set for `pass`.
    pub fn for_pass(pass: Pass) -> Self {
        match pass {
            Pass::Standard => Self::standard(),
            Pass::Reconfiguration => Self::reconfiguration(),
        }
    }

    /// The pass this set was built for.
    pub fn pass(&self) -> Pass {
        self.pass
    }

    /// Number of calculators.
    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    /// Return `true` if the set holds no calculators.
    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// Calculators in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn DateCalculator> {
        self.calculators.iter().map(|c| c.as_ref())
    }

    /// The first calculator that supports `inputs`.
    pub fn select(&self, inputs: &DateInputs) -> Option<&dyn DateCalculator> {
        self.iter().find(|c| c.supports(inputs))
    }

    /// Names of every calculator that supports `inputs`.
    pub fn supporting(&self, inputs: &DateInputs) -> Vec<&'static str> {
        self.iter()
            .filter(|c| c.supports(inputs))
            .map(|c| c.name())
            .collect()
    }
}

impl fmt::Debug for CalculatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorSet")
            .field("pass", &self.pass)
            .field("calculators", &self.iter().map(|c| c.name()).collect::<Vec<_>>())
            .finish()
    }
}
