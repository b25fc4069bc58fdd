use crate::membership::MembershipFunction;

/// A named membership function bound to the variable it was declared on.
#[derive(Clone, Debug, PartialEq)]
pub struct LinguisticTerm {
    variable: String,
    name: String,
    function: MembershipFunction,
}

impl LinguisticTerm {
    pub(crate) fn new(variable: String, name: String, function: MembershipFunction) -> Self {
        Self {
            variable,
            name,
            function,
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &MembershipFunction {
        &self.function
    }

    /// Fuzzificates a crisp value against this term
    pub fn degree(&self, x: f64) -> f64 {
        self.function.evaluate(x)
    }
}
