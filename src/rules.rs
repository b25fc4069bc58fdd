use crate::dsl::FuzzyPredicate;
use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::ops::{AndOp, OrOp};

/// `IF premise THEN output = consequent` with a crisp consequent.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    premise: FuzzyPredicate,
    consequent: f64,
    cf: f64,
}

impl Rule {
    pub fn new(premise: FuzzyPredicate, consequent: f64) -> Result<Self> {
        if !consequent.is_finite() {
            return Err(FuzzyError::InvalidConsequent(consequent));
        }

        Ok(Self {
            premise,
            consequent,
            cf: 1.0,
        })
    }

    /// Scales the firing strength by a certainty factor in [0, 1]
    pub fn with_cf(mut self, cf: f64) -> Result<Self> {
        if !(0. ..=1.).contains(&cf) {
            return Err(FuzzyError::InvalidCertaintyFactor(cf));
        }

        self.cf = cf;

        Ok(self)
    }

    pub fn premise(&self) -> &FuzzyPredicate {
        &self.premise
    }

    pub fn consequent(&self) -> f64 {
        self.consequent
    }

    pub fn cf(&self) -> f64 {
        self.cf
    }

    /// Firing strength under the default operators
    pub fn strength(&self, inputs: &Inputs) -> Result<f64> {
        self.strength_with(inputs, AndOp::Min, OrOp::Max)
    }

    pub(crate) fn strength_with(&self, inputs: &Inputs, and_op: AndOp, or_op: OrOp) -> Result<f64> {
        Ok(self.premise.evaluate_with(inputs, and_op, or_op)? * self.cf)
    }
}
