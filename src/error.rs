use thiserror::Error;

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FuzzyError {
    /// The term was never assigned on the variable
    #[error("unknown term `{term}` on variable `{variable}`")]
    UnknownTerm { variable: String, term: String },

    /// A predicate references a variable that has no value in the inputs
    #[error("no input value bound for variable `{variable}`")]
    UnboundVariable { variable: String },

    #[error("input `{variable}` is not a finite number: {value}")]
    NonFiniteInput { variable: String, value: f64 },

    /// Every rule strength was zero, so the weighted average is 0/0
    #[error("no rule fired for the given inputs")]
    NoRuleFired,

    #[error("invalid {shape} membership function: {reason}")]
    InvalidMembership { shape: &'static str, reason: String },

    #[error("rule consequent must be a finite number, got {0}")]
    InvalidConsequent(f64),

    #[error("certainty factor must lie in [0, 1], got {0}")]
    InvalidCertaintyFactor(f64),
}

impl FuzzyError {
    pub(crate) fn invalid_membership(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidMembership {
            shape,
            reason: reason.into(),
        }
    }
}
