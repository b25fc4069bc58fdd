use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::dsl::FuzzyPredicate;
use crate::error::{FuzzyError, Result};
use crate::linspace::Linspace;
use crate::membership::MembershipFunction;
use crate::terms::LinguisticTerm;

/// A named crisp input together with the linguistic terms that describe it.
///
/// The universe range is informational. Inputs outside of it are still
/// evaluated and simply tend to land outside every term's support.
#[derive(Clone, Debug)]
pub struct InputVariable {
    name: String,
    universe: RangeInclusive<f64>,
    terms: HashMap<String, LinguisticTerm>,
}

impl InputVariable {
    pub fn new(name: impl Into<String>, universe: RangeInclusive<f64>) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> &RangeInclusive<f64> {
        &self.universe
    }

    /// Assigns `function` to the term `name`. Assigning an existing name
    /// replaces the previous term.
    pub fn set_term(&mut self, name: impl Into<String>, function: MembershipFunction) -> &mut Self {
        let name = name.into();
        let term = LinguisticTerm::new(self.name.clone(), name.clone(), function);

        if let Some(previous) = self.terms.insert(name, term) {
            debug!(variable = %self.name, term = %previous.name(), "replaced existing term");
        }

        self
    }

    pub fn term(&self, name: &str) -> Result<&LinguisticTerm> {
        self.terms.get(name).ok_or_else(|| FuzzyError::UnknownTerm {
            variable: self.name.clone(),
            term: name.to_owned(),
        })
    }

    /// Builds the proposition "this variable is `term`"
    pub fn is(&self, term: &str) -> Result<FuzzyPredicate> {
        self.term(term).cloned().map(FuzzyPredicate::Is)
    }

    pub fn terms(&self) -> impl Iterator<Item = &LinguisticTerm> {
        self.terms.values()
    }

    /// Degree of `x` in every term, sorted by term name
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        let mut degrees: Vec<_> = self.terms.values().map(|t| (t.name(), t.degree(x))).collect();

        degrees.sort_unstable_by(|a, b| a.0.cmp(b.0));
        degrees
    }

    /// `n` evenly spaced samples over the declared range
    pub fn universe(&self, n: usize) -> Linspace {
        Linspace::new(*self.universe.start(), *self.universe.end(), n)
    }
}
