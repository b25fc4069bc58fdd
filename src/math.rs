use num::Float;

/// Similar to numpy.interp for a single sample: linear interpolation between
/// the surrounding points, constant extrapolation past either end.
///
/// `coords` must be sorted by x. An empty slice yields zero.
pub(crate) fn interp<F: Float>(x: F, coords: &[(F, F)]) -> F {
    let (Some(&(x_first, y_first)), Some(&(x_last, y_last))) = (coords.first(), coords.last()) else {
        return F::zero();
    };

    // Base cases
    if x <= x_first {
        return y_first;
    }
    if x >= x_last {
        return y_last;
    }

    for window in coords.windows(2) {
        let (x1, y1) = window[0];
        let (x2, y2) = window[1];

        if x1 <= x && x <= x2 {
            if x2 == x1 {
                return y2;
            }

            if (x2 - x1).is_finite() {
                return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
            }

            // Span wider than F::max_value(), measure it on halved operands
            let two = F::one() + F::one();

            return y1 + (x / two - x1 / two) * (y2 - y1) / (x2 / two - x1 / two);
        }
    }

    y_last
}

/// Clamps into [0, 1], leaving NaN untouched so callers can detect it.
pub(crate) fn clamp_unit<F: Float>(value: F) -> F {
    if value.is_nan() {
        value
    } else {
        value.max(F::zero()).min(F::one())
    }
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];

    assert_eq!(
        x.iter().map(|x| interp(*x, &coords)).collect::<Vec<_>>(),
        vec![3., 3., 2.5, 0.5599999999999996, 0.]
    );

    let x = [2.5, -1., 7.5];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];

    assert_eq!(
        x.iter().map(|x| interp(*x, &coords)).collect::<Vec<_>>(),
        vec![4., 0., 2.]
    );
}

#[test]
fn test_interp_wide_span() {
    let coords = [(-f64::MAX, 0.), (f64::MAX, 1.)];

    assert_eq!(interp(0., &coords), 0.5);
}

#[test]
fn test_interp_empty() {
    assert_eq!(interp(1.0f64, &[]), 0.);
}

#[test]
fn test_clamp_unit() {
    assert_eq!(clamp_unit(1.5f64), 1.);
    assert_eq!(clamp_unit(-0.25f64), 0.);
    assert_eq!(clamp_unit(0.25f64), 0.25);
    assert!(clamp_unit(f64::NAN).is_nan());
}
