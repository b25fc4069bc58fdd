use std::collections::BTreeSet;

use tracing::{debug, trace, trace_span};

use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::ops::{AndOp, OrOp};
use crate::outputs::Outputs;
use crate::rules::Rule;

/// What to return when every rule strength is zero and the weighted
/// average would be 0/0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NoFirePolicy {
    /// Fail with [`FuzzyError::NoRuleFired`]
    #[default]
    Error,
    /// Return a fixed value
    Fallback(f64),
    /// Return the unweighted mean of every rule consequent
    MeanConsequent,
}

/// Zero-order Takagi-Sugeno system: crisp rule consequents combined by a
/// firing-strength weighted average.
///
/// Immutable once built, so a single system can be shared between threads
/// and evaluated concurrently.
#[derive(Clone, Debug)]
pub struct FuzzySystem {
    rules: Vec<Rule>,
    and_op: AndOp,
    or_op: OrOp,
    no_fire: NoFirePolicy,
}

impl FuzzySystem {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            and_op: AndOp::default(),
            or_op: OrOp::default(),
            no_fire: NoFirePolicy::default(),
        }
    }

    pub fn with_and_op(mut self, and_op: AndOp) -> Self {
        self.and_op = and_op;
        self
    }

    pub fn with_or_op(mut self, or_op: OrOp) -> Self {
        self.or_op = or_op;
        self
    }

    pub fn with_no_fire_policy(mut self, no_fire: NoFirePolicy) -> Self {
        self.no_fire = no_fire;
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn no_fire_policy(&self) -> NoFirePolicy {
        self.no_fire
    }

    /// Names of every variable the rule base reads, i.e. the inputs `compute` needs
    pub fn variables(&self) -> BTreeSet<&str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.premise().propositions())
            .map(|term| term.variable())
            .collect()
    }

    /// Crisp output for the given inputs
    pub fn compute(&self, inputs: &Inputs) -> Result<f64> {
        self.eval(inputs).map(|outputs| outputs.value())
    }

    pub fn eval(&self, inputs: &Inputs) -> Result<Outputs> {
        let _span = trace_span!("sugeno_eval", rules = self.rules.len()).entered();
        let mut firing_strengths = Vec::with_capacity(self.rules.len());
        let mut denominator = 0.;

        // Fuzzificate and evaluate every premise
        for (i, rule) in self.rules.iter().enumerate() {
            let strength = rule.strength_with(inputs, self.and_op, self.or_op)?;

            trace!(rule = i, strength, consequent = rule.consequent(), "rule evaluated");

            denominator += strength;
            firing_strengths.push(strength);
        }

        // Defuzzificate
        if denominator == 0. {
            let value = self.no_fire_value()?;

            debug!(policy = ?self.no_fire, value, "no rule fired");

            return Ok(Outputs::new(value, firing_strengths, denominator, true));
        }

        // Weights are normalised before scaling the consequents, so finite
        // consequents never overflow the sum
        let mut value = 0.;
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;

        for (rule, strength) in self.rules.iter().zip(&firing_strengths) {
            if *strength > 0. {
                value += strength / denominator * rule.consequent();
                lo = lo.min(rule.consequent());
                hi = hi.max(rule.consequent());
            }
        }

        // Keeps rounding from pushing the average past its extremes
        let value = value.max(lo).min(hi);

        debug!(value, total_strength = denominator, "weighted average computed");

        Ok(Outputs::new(value, firing_strengths, denominator, false))
    }

    fn no_fire_value(&self) -> Result<f64> {
        match self.no_fire {
            NoFirePolicy::Error => Err(FuzzyError::NoRuleFired),
            NoFirePolicy::Fallback(value) => Ok(value),
            NoFirePolicy::MeanConsequent if self.rules.is_empty() => Err(FuzzyError::NoRuleFired),
            NoFirePolicy::MeanConsequent => {
                let n = self.rules.len() as f64;

                Ok(self.rules.iter().map(|rule| rule.consequent() / n).sum())
            },
        }
    }
}
