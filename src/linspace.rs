/// `len` evenly spaced samples over `[min, max]`, both ends included,
/// like numpy.linspace. Handy for tabulating a system over a variable's range.
#[derive(Clone, Debug)]
pub struct Linspace {
    min: f64,
    max: f64,
    step: f64,
    next: usize,
    len: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, len: usize) -> Self {
        let step = match len {
            0 | 1 => 0.,
            n => (max - min) / (n - 1) as f64,
        };

        Self {
            min,
            max,
            step,
            next: 0,
            len,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.next == self.len {
            return None;
        }

        // Computed from the index, never accumulated. The last sample is
        // pinned to max so it can't overshoot by rounding.
        let sample = if self.len > 1 && self.next == self.len - 1 {
            self.max
        } else {
            self.min + self.step * self.next as f64
        };
        self.next += 1;

        Some(sample)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    assert_eq!(Linspace::new(0., 10., 5).collect::<Vec<_>>(), vec![0., 2.5, 5., 7.5, 10.]);
    assert_eq!(Linspace::new(3., 7., 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(Linspace::new(0., 1., 0).count(), 0);
    assert_eq!(Linspace::new(0., 10., 20).len(), 20);
}

#[test]
fn test_linspace_ends_exactly_at_max() {
    // 0 + (1 / 49) * 49 rounds to 0.9999999999999999
    let samples: Vec<_> = Linspace::new(0., 1., 50).collect();

    assert_eq!(samples.first(), Some(&0.));
    assert_eq!(samples.last(), Some(&1.));
    assert!(samples.iter().all(|s| (0. ..=1.).contains(s)));
    assert!(samples.windows(2).all(|w| w[0] < w[1]));
}
