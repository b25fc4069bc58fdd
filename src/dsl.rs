use std::ops::{BitAnd, BitOr};

use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::ops::{AndOp, OrOp};
use crate::terms::LinguisticTerm;

/// Antecedent of a rule: propositions about input variables joined by
/// conjunction or disjunction.
///
/// Nested conjunctions are flattened into a single n-ary node as they are
/// built. Every supported operator is associative and commutative, so this
/// doesn't change the strength.
#[derive(Clone, Debug, PartialEq)]
pub enum FuzzyPredicate {
    Is(LinguisticTerm),
    And(Vec<FuzzyPredicate>),
    Or(Vec<FuzzyPredicate>),
}

impl FuzzyPredicate {
    pub fn and(self, rhs: FuzzyPredicate) -> Self {
        match self {
            Self::And(mut exprs) => {
                match rhs {
                    Self::And(rhs_exprs) => exprs.extend(rhs_exprs),
                    rhs => exprs.push(rhs),
                }
                Self::And(exprs)
            },
            lhs => match rhs {
                Self::And(mut exprs) => {
                    exprs.insert(0, lhs);
                    Self::And(exprs)
                },
                rhs => Self::And(vec![lhs, rhs]),
            },
        }
    }

    pub fn or(self, rhs: FuzzyPredicate) -> Self {
        match self {
            Self::Or(mut exprs) => {
                match rhs {
                    Self::Or(rhs_exprs) => exprs.extend(rhs_exprs),
                    rhs => exprs.push(rhs),
                }
                Self::Or(exprs)
            },
            lhs => match rhs {
                Self::Or(mut exprs) => {
                    exprs.insert(0, lhs);
                    Self::Or(exprs)
                },
                rhs => Self::Or(vec![lhs, rhs]),
            },
        }
    }

    /// Strength under the default operators: min for `and`, max for `or`
    pub fn evaluate(&self, inputs: &Inputs) -> Result<f64> {
        self.evaluate_with(inputs, AndOp::Min, OrOp::Max)
    }

    pub fn evaluate_with(&self, inputs: &Inputs, and_op: AndOp, or_op: OrOp) -> Result<f64> {
        match self {
            Self::Is(term) => {
                let x = inputs.get(term.variable()).ok_or_else(|| FuzzyError::UnboundVariable {
                    variable: term.variable().to_owned(),
                })?;

                if !x.is_finite() {
                    return Err(FuzzyError::NonFiniteInput {
                        variable: term.variable().to_owned(),
                        value: x,
                    });
                }

                Ok(term.degree(x))
            },
            Self::And(exprs) => {
                let strengths = exprs
                    .iter()
                    .map(|expr| expr.evaluate_with(inputs, and_op, or_op))
                    .collect::<Result<Vec<_>>>()?;

                Ok(and_op.fold(strengths))
            },
            Self::Or(exprs) => {
                let strengths = exprs
                    .iter()
                    .map(|expr| expr.evaluate_with(inputs, and_op, or_op))
                    .collect::<Result<Vec<_>>>()?;

                Ok(or_op.fold(strengths))
            },
        }
    }

    /// Every term referenced by the predicate, in left to right order
    pub fn propositions(&self) -> Vec<&LinguisticTerm> {
        let mut props = Vec::new();

        fn parse<'p>(expr: &'p FuzzyPredicate, out: &mut Vec<&'p LinguisticTerm>) {
            match expr {
                FuzzyPredicate::Is(term) => out.push(term),
                FuzzyPredicate::And(exprs) | FuzzyPredicate::Or(exprs) => {
                    for expr in exprs {
                        parse(expr, out);
                    }
                },
            }
        }

        parse(self, &mut props);

        props
    }
}

/// Conjunction of two predicates, same as [`FuzzyPredicate::and`]
pub fn and_(lhs: FuzzyPredicate, rhs: FuzzyPredicate) -> FuzzyPredicate {
    lhs.and(rhs)
}

impl BitAnd for FuzzyPredicate {
    type Output = FuzzyPredicate;

    fn bitand(self, rhs: FuzzyPredicate) -> FuzzyPredicate {
        self.and(rhs)
    }
}

impl BitOr for FuzzyPredicate {
    type Output = FuzzyPredicate;

    fn bitor(self, rhs: FuzzyPredicate) -> FuzzyPredicate {
        self.or(rhs)
    }
}
