use crate::error::{FuzzyError, Result};
use crate::math::{clamp_unit, interp};

/// Shape of a linguistic term. Every variant maps a crisp value onto a
/// membership degree in [0, 1].
///
/// Prefer the validating constructors ([`MembershipFunction::triangular`] and
/// friends) over building variants directly. `evaluate` clamps its result
/// either way, but nonsensical parameters produce nonsensical shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum MembershipFunction {
    /// Peaks at `b`, zero outside `(a, c)`. `a == b` or `b == c` gives a shoulder.
    Triangular { a: f64, b: f64, c: f64 },
    /// Plateau of one across `[b, c]`, zero outside `(a, d)`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, sigma: f64 },
    /// Logistic curve rising through 0.5 at `center`. Negative slopes fall instead.
    Sigmoid { center: f64, slope: f64 },
    /// Linear interpolation over `(x, degree)` points sorted by x
    PiecewiseLinear(Vec<(f64, f64)>),
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        check_finite("triangular", &[a, b, c])?;

        if !(a <= b && b <= c) {
            return Err(FuzzyError::invalid_membership(
                "triangular",
                format!("breakpoints must satisfy a <= b <= c, got ({a}, {b}, {c})"),
            ));
        }

        Ok(Self::Triangular { a, b, c })
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        check_finite("trapezoidal", &[a, b, c, d])?;

        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::invalid_membership(
                "trapezoidal",
                format!("breakpoints must satisfy a <= b <= c <= d, got ({a}, {b}, {c}, {d})"),
            ));
        }

        Ok(Self::Trapezoidal { a, b, c, d })
    }

    pub fn gaussian(mean: f64, sigma: f64) -> Result<Self> {
        check_finite("gaussian", &[mean, sigma])?;

        if sigma <= 0. {
            return Err(FuzzyError::invalid_membership(
                "gaussian",
                format!("sigma must be positive, got {sigma}"),
            ));
        }

        Ok(Self::Gaussian { mean, sigma })
    }

    pub fn sigmoid(center: f64, slope: f64) -> Result<Self> {
        check_finite("sigmoid", &[center, slope])?;

        Ok(Self::Sigmoid { center, slope })
    }

    pub fn piecewise_linear(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let points: Vec<_> = points.into_iter().collect();

        if points.is_empty() {
            return Err(FuzzyError::invalid_membership("piecewise linear", "no points given"));
        }

        for &(x, degree) in &points {
            check_finite("piecewise linear", &[x, degree])?;

            if !(0. ..=1.).contains(&degree) {
                return Err(FuzzyError::invalid_membership(
                    "piecewise linear",
                    format!("degree {degree} at x = {x} is outside [0, 1]"),
                ));
            }
        }

        if let Some(window) = points.windows(2).find(|w| w[0].0 >= w[1].0) {
            return Err(FuzzyError::invalid_membership(
                "piecewise linear",
                format!("x coordinates must strictly increase, {} is followed by {}", window[0].0, window[1].0),
            ));
        }

        Ok(Self::PiecewiseLinear(points))
    }

    /// Membership degree of `x`. NaN propagates; every other input lands in [0, 1].
    pub fn evaluate(&self, x: f64) -> f64 {
        let degree = match *self {
            Self::Triangular { a, b, c } => {
                // Checked first so shoulders (a == b or b == c) never divide by zero
                if x == b {
                    1.
                } else if x <= a || x >= c {
                    0.
                } else if x < b {
                    ramp(x, a, b)
                } else {
                    ramp(x, c, b)
                }
            },
            Self::Trapezoidal { a, b, c, d } => {
                if b <= x && x <= c {
                    1.
                } else if x <= a || x >= d {
                    0.
                } else if x < b {
                    ramp(x, a, b)
                } else {
                    ramp(x, d, c)
                }
            },
            // Dividing before squaring, a tiny sigma can't underflow to 0/0
            Self::Gaussian { mean, sigma } => (-0.5 * ((x - mean) / sigma).powi(2)).exp(),
            // A flat curve, even where x - center overflows to infinity
            Self::Sigmoid { slope, .. } if slope == 0. => 0.5,
            Self::Sigmoid { center, slope } => 1. / (1. + (-slope * (x - center)).exp()),
            Self::PiecewiseLinear(ref points) => interp(x, points),
        };

        clamp_unit(degree)
    }
}

/// How far `x` has travelled from `zero` towards `one`. Spans wider than
/// `f64::MAX` are measured on halved operands.
fn ramp(x: f64, zero: f64, one: f64) -> f64 {
    let span = one - zero;

    if span.is_finite() {
        (x - zero) / span
    } else {
        (x / 2. - zero / 2.) / (one / 2. - zero / 2.)
    }
}

fn check_finite(shape: &'static str, params: &[f64]) -> Result<()> {
    match params.iter().find(|p| !p.is_finite()) {
        Some(p) => Err(FuzzyError::invalid_membership(
            shape,
            format!("parameters must be finite, got {p}"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_breakpoints() {
        let regular = MembershipFunction::triangular(0., 5., 10.).unwrap();

        assert_eq!(regular.evaluate(0.), 0.);
        assert_eq!(regular.evaluate(5.), 1.);
        assert_eq!(regular.evaluate(10.), 0.);
        assert_eq!(regular.evaluate(2.5), 0.5);
        assert_eq!(regular.evaluate(8.), 0.4);
        assert_eq!(regular.evaluate(-3.), 0.);
        assert_eq!(regular.evaluate(42.), 0.);
    }

    #[test]
    fn test_triangular_shoulders() {
        let baja = MembershipFunction::triangular(0., 0., 5.).unwrap();
        let excelente = MembershipFunction::triangular(5., 10., 10.).unwrap();

        assert_eq!(baja.evaluate(0.), 1.);
        assert_eq!(baja.evaluate(1.), 0.8);
        assert_eq!(baja.evaluate(5.), 0.);
        assert_eq!(baja.evaluate(-0.5), 0.);

        assert_eq!(excelente.evaluate(10.), 1.);
        assert_eq!(excelente.evaluate(9.), 0.8);
        assert_eq!(excelente.evaluate(5.), 0.);
        assert_eq!(excelente.evaluate(10.5), 0.);
    }

    #[test]
    fn test_triangular_singleton() {
        let spike = MembershipFunction::triangular(3., 3., 3.).unwrap();

        assert_eq!(spike.evaluate(3.), 1.);
        assert_eq!(spike.evaluate(2.999), 0.);
        assert_eq!(spike.evaluate(3.001), 0.);
    }

    #[test]
    fn test_triangular_rejects_unordered() {
        assert!(matches!(
            MembershipFunction::triangular(5., 0., 10.),
            Err(FuzzyError::InvalidMembership { shape: "triangular", .. })
        ));
        assert!(MembershipFunction::triangular(0., f64::NAN, 1.).is_err());
    }

    #[test]
    fn test_trapezoidal() {
        let mf = MembershipFunction::trapezoidal(0., 2., 4., 8.).unwrap();

        assert_eq!(mf.evaluate(0.), 0.);
        assert_eq!(mf.evaluate(1.), 0.5);
        assert_eq!(mf.evaluate(2.), 1.);
        assert_eq!(mf.evaluate(3.), 1.);
        assert_eq!(mf.evaluate(6.), 0.5);
        assert_eq!(mf.evaluate(8.), 0.);

        let shoulder = MembershipFunction::trapezoidal(0., 0., 4., 8.).unwrap();

        assert_eq!(shoulder.evaluate(0.), 1.);
        assert!(MembershipFunction::trapezoidal(0., 5., 4., 8.).is_err());
    }

    #[test]
    fn test_gaussian() {
        let mf = MembershipFunction::gaussian(5., 2.).unwrap();

        assert_eq!(mf.evaluate(5.), 1.);
        assert!((mf.evaluate(7.) - (-0.5f64).exp()).abs() < 1e-12);
        assert_eq!(mf.evaluate(3.), mf.evaluate(7.));
        assert!(MembershipFunction::gaussian(5., 0.).is_err());
    }

    #[test]
    fn test_gaussian_tiny_sigma() {
        let mf = MembershipFunction::gaussian(0., 1e-200).unwrap();

        assert_eq!(mf.evaluate(0.), 1.);
        assert_eq!(mf.evaluate(1e-150), 0.);
        // x - mean overflows to infinity
        assert_eq!(MembershipFunction::gaussian(-f64::MAX, 1.).unwrap().evaluate(f64::MAX), 0.);
    }

    #[test]
    fn test_flat_sigmoid() {
        let mf = MembershipFunction::sigmoid(-1e308, 0.).unwrap();

        assert_eq!(mf.evaluate(1e308), 0.5);
        assert_eq!(mf.evaluate(0.), 0.5);
    }

    #[test]
    fn test_extreme_breakpoints() {
        let wide = MembershipFunction::triangular(-f64::MAX, 0., f64::MAX).unwrap();

        assert_eq!(wide.evaluate(0.), 1.);
        assert_eq!(wide.evaluate(f64::MAX / 2.), 0.5);
        assert_eq!(wide.evaluate(-f64::MAX / 2.), 0.5);

        let wide = MembershipFunction::trapezoidal(-f64::MAX, -1., 1., f64::MAX).unwrap();

        assert_eq!(wide.evaluate(f64::MAX), 0.);
        assert!(!wide.evaluate(f64::MAX / 3.).is_nan());
    }

    #[test]
    fn test_sigmoid() {
        let rising = MembershipFunction::sigmoid(5., 2.).unwrap();
        let falling = MembershipFunction::sigmoid(5., -2.).unwrap();

        assert_eq!(rising.evaluate(5.), 0.5);
        assert!(rising.evaluate(8.) > 0.99);
        assert!(falling.evaluate(8.) < 0.01);
    }

    #[test]
    fn test_piecewise_linear() {
        // Credit score "high" from a points table
        let mf = MembershipFunction::piecewise_linear([(175., 0.), (180., 0.2), (185., 0.7), (190., 1.)]).unwrap();

        assert_eq!(mf.evaluate(150.), 0.);
        assert!((mf.evaluate(182.5) - 0.45).abs() < 1e-12);
        assert_eq!(mf.evaluate(200.), 1.);

        assert!(MembershipFunction::piecewise_linear([]).is_err());
        assert!(MembershipFunction::piecewise_linear([(1., 0.), (1., 1.)]).is_err());
        assert!(MembershipFunction::piecewise_linear([(1., 1.5)]).is_err());
    }
}
