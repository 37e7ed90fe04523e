//! Sample vector generation and display-range derivation.

use std::fmt;

/// The display window substituted when a curve has no finite values at all.
pub const DEFAULT_WINDOW: (f64, f64) = (-10.0, 10.0);

/// An invalid sampling request. Rejected before any sampling happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// `x_min` was not strictly less than `x_max`.
    EmptyRange {
        /// The requested lower bound.
        x_min: f64,

        /// The requested upper bound.
        x_max: f64,
    },

    /// Fewer than two sample points were requested.
    TooFewPoints {
        /// The requested number of points.
        points: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::EmptyRange { x_min, x_max } => {
                write!(f, "x_min ({}) must be less than x_max ({})", x_min, x_max)
            },
            RangeError::TooFewPoints { points } => {
                write!(f, "at least 2 sample points are required, got {}", points)
            },
        }
    }
}

impl std::error::Error for RangeError {}

/// Produces `points` evenly spaced values over `[x_min, x_max]`, inclusive of both endpoints.
///
/// Requires `x_min < x_max` and `points >= 2`. Both endpoints are pinned exactly; the
/// closed-form step can drift in the last place.
pub fn sample(x_min: f64, x_max: f64, points: usize) -> Result<Vec<f64>, RangeError> {
    if !(x_min < x_max) {
        return Err(RangeError::EmptyRange { x_min, x_max });
    }
    if points < 2 {
        return Err(RangeError::TooFewPoints { points });
    }

    let step = (x_max - x_min) / (points - 1) as f64;
    let mut samples = (0..points)
        .map(|i| x_min + i as f64 * step)
        .collect::<Vec<_>>();
    samples[points - 1] = x_max;
    Ok(samples)
}

/// Derives a display range from the finite subset of the given results, with a margin.
///
/// Returns [`None`] when no result is finite; callers fall back to [`DEFAULT_WINDOW`] and still
/// render. The margin is 10% of the value span, or `1.0` when the curve is flat.
pub fn autorange(values: &[f64]) -> Option<(f64, f64)> {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());

    let first = finite.next()?;
    let (y_min, y_max) = finite.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    let margin = if y_min == y_max {
        1.0
    } else {
        0.1 * (y_max - y_min)
    };
    Some((y_min - margin, y_max + margin))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn evenly_spaced_inclusive() {
        let samples = sample(-2.0, 2.0, 5).unwrap();
        assert_eq!(samples, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn default_grid() {
        let samples = sample(-10.0, 10.0, 500).unwrap();
        assert_eq!(samples.len(), 500);
        assert_eq!(samples[0], -10.0);
        assert_eq!(samples[499], 10.0);
        assert!(samples.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            sample(10.0, -10.0, 500).unwrap_err(),
            RangeError::EmptyRange { x_min: 10.0, x_max: -10.0 },
        );
        assert!(sample(1.0, 1.0, 500).is_err());
    }

    #[test]
    fn rejects_nan_bounds() {
        assert!(sample(f64::NAN, 1.0, 500).is_err());
    }

    #[test]
    fn rejects_too_few_points() {
        assert_eq!(
            sample(-1.0, 1.0, 1).unwrap_err(),
            RangeError::TooFewPoints { points: 1 },
        );
    }

    #[test]
    fn autorange_with_margin() {
        let (lo, hi) = autorange(&[1.0, 2.0, 3.0]).unwrap();
        assert_float_absolute_eq!(lo, 0.8);
        assert_float_absolute_eq!(hi, 3.2);
    }

    #[test]
    fn autorange_flat_curve() {
        assert_eq!(autorange(&[5.0, 5.0, 5.0]), Some((4.0, 6.0)));
    }

    #[test]
    fn autorange_ignores_non_finite() {
        let (lo, hi) = autorange(&[f64::NAN, 1.0, f64::INFINITY, 3.0]).unwrap();
        assert_float_absolute_eq!(lo, 0.8);
        assert_float_absolute_eq!(hi, 3.2);
    }

    #[test]
    fn autorange_all_non_finite() {
        assert_eq!(autorange(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]), None);
        assert_eq!(autorange(&[]), None);
    }
}
