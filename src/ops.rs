use num::Float;

/// And operator method (t-norm) for combining the propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AndOp {
    /// Zadeh t-norm: a conjunction is as strong as its weakest conjunct
    #[default]
    Min,
    Prod,
    /// Lukasiewicz t-norm
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if v == F::one() {
                    u
                } else if u == F::one() {
                    v
                } else {
                    F::zero()
                }
            },
        }
    }

    /// Folds any number of degrees. One is the identity of every t-norm.
    pub fn fold<F: Float>(self, degrees: impl IntoIterator<Item = F>) -> F {
        degrees.into_iter().fold(F::one(), |acc, d| self.call(acc, d))
    }
}

/// Or operator method (t-conorm) for combining the propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if v == F::zero() {
                    u
                } else if u == F::zero() {
                    v
                } else {
                    F::one()
                }
            },
        }
    }

    /// Folds any number of degrees. Zero is the identity of every t-conorm.
    pub fn fold<F: Float>(self, degrees: impl IntoIterator<Item = F>) -> F {
        degrees.into_iter().fold(F::zero(), |acc, d| self.call(acc, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEGREES: [f64; 5] = [0., 0.25, 0.5, 0.75, 1.];

    #[test]
    fn test_and_ops() {
        assert_eq!(AndOp::Min.call(0.3, 0.8), 0.3);
        assert_eq!(AndOp::Prod.call(0.5, 0.5), 0.25);
        assert_eq!(AndOp::BoundedProd.call(0.25, 0.5), 0.);
        assert_eq!(AndOp::BoundedProd.call(0.75, 0.5), 0.25);
        assert_eq!(AndOp::DrasticProd.call(0.4, 1.), 0.4);
        assert_eq!(AndOp::DrasticProd.call(1., 0.4), 0.4);
        assert_eq!(AndOp::DrasticProd.call(0.9, 0.9), 0.);
    }

    #[test]
    fn test_or_ops() {
        assert_eq!(OrOp::Max.call(0.3, 0.8), 0.8);
        assert_eq!(OrOp::ProbOr.call(0.5, 0.5), 0.75);
        assert_eq!(OrOp::BoundedSum.call(0.75, 0.5), 1.);
        assert_eq!(OrOp::DrasticSum.call(0.4, 0.), 0.4);
        assert_eq!(OrOp::DrasticSum.call(0.1, 0.1), 1.);
    }

    #[test]
    fn test_identities() {
        for op in [AndOp::Min, AndOp::Prod, AndOp::BoundedProd, AndOp::DrasticProd] {
            for d in DEGREES {
                assert_eq!(op.call(d, 1.), d, "{op:?}");
                assert_eq!(op.call(1., d), d, "{op:?}");
            }
        }

        for op in [OrOp::Max, OrOp::ProbOr, OrOp::BoundedSum, OrOp::DrasticSum] {
            for d in DEGREES {
                assert_eq!(op.call(d, 0.), d, "{op:?}");
                assert_eq!(op.call(0., d), d, "{op:?}");
            }
        }
    }

    #[test]
    fn test_fold() {
        assert_eq!(AndOp::Min.fold([0.9, 0.2, 0.6]), 0.2);
        assert_eq!(AndOp::Min.fold(std::iter::empty::<f64>()), 1.);
        assert_eq!(OrOp::Max.fold([0.1, 0.7, 0.3]), 0.7);
        assert_eq!(OrOp::Max.fold(std::iter::empty::<f64>()), 0.);
    }
}
