//! Closed-form simple linear regression (first-degree OLS)

use crate::errors::{StatsError, StatsResult};

/// Line `y = slope * x + offset` fitted by ordinary least squares.
///
/// Built once from a series and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    slope: f64,
    offset: f64,
    size: usize,
}

impl LinearRegression {
    /// Fit `y` against the implicit axis `x = 0, 1, ..., n-1`
    pub fn new(y: &[f64]) -> StatsResult<Self> {
        let x = axis(y.len());
        Self::with_x(&x, y)
    }

    /// Fit `y` against an explicit `x` of the same length
    ///
    /// # Arguments
    /// * `x` - Explanatory values (n observations)
    /// * `y` - Response values (n observations)
    ///
    /// # Returns
    /// * `LinearRegression` with slope 0 when `x` is constant
    /// * `LengthMismatch` if the lengths differ
    /// * `EmptyInput` if both are empty
    pub fn with_x(x: &[f64], y: &[f64]) -> StatsResult<Self> {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if y.is_empty() {
            return Err(StatsError::EmptyInput {
                operation: "linear regression",
            });
        }

        let size = y.len();
        let n = size as f64;

        let (mut sxy, mut sxx, mut sx, mut sy) = (0.0, 0.0, 0.0, 0.0);
        for (&xi, &yi) in x.iter().zip(y) {
            sxy += xi * yi;
            sxx += xi * xi;
            sx += xi;
            sy += yi;
        }

        // Constant x has no defined slope; treat it as flat. Rounding can leave
        // a tiny nonzero denominator for x values floats cannot store exactly.
        let denominator = n * sxx - sx * sx;
        let constant_x = x.iter().all(|&xi| xi == x[0]);
        let slope = if constant_x || denominator.abs() <= f64::EPSILON * n * sxx {
            0.0
        } else {
            // Normalise -0.0
            (n * sxy - sx * sy) / denominator + 0.0
        };
        let offset = (sy - slope * sx) / n;

        Ok(Self {
            slope,
            offset,
            size,
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Number of observations the line was fitted on (always at least 1)
    pub fn n_observations(&self) -> usize {
        self.size
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.offset
    }

    /// Fitted value at every index of the implicit axis
    pub fn fit(&self) -> Vec<f64> {
        self.axis().into_iter().map(|x| self.predict(x)).collect()
    }

    pub fn axis(&self) -> Vec<f64> {
        axis(self.size)
    }
}

fn axis(size: usize) -> Vec<f64> {
    (0..size).map(|i| i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_explicit_axis() {
        let model = LinearRegression::with_x(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();

        assert_eq!(model.slope(), 2.0);
        assert_eq!(model.offset(), 0.0);
        assert_eq!(model.fit(), vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(model.n_observations(), 4);
    }

    #[test]
    fn test_implicit_axis() {
        // y = 3x + 1
        let model = LinearRegression::new(&[1.0, 4.0, 7.0, 10.0, 13.0]).unwrap();

        assert_relative_eq!(model.slope(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(model.offset(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(model.predict(10.0), 31.0, epsilon = 1e-12);
        assert_eq!(model.axis(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_noisy_fit() {
        let y = vec![2.1, 4.0, 5.9, 8.1, 10.0, 11.9, 14.1, 16.0, 17.9, 20.1];
        let model = LinearRegression::new(&y).unwrap();

        assert!((model.slope() - 2.0).abs() < 0.05);
        assert!((model.offset() - 2.0).abs() < 0.1);
        let fitted = model.fit();
        assert_eq!(fitted.len(), y.len());
        // Residuals of an OLS fit with intercept sum to zero
        let residual_sum: f64 = y.iter().zip(&fitted).map(|(a, b)| a - b).sum();
        assert!(residual_sum.abs() < 1e-9);
    }

    #[test]
    fn test_fit_uses_index_axis_with_explicit_x() {
        // y = 2x + 1 on x = 10, 20, 30; fit() still evaluates at 0, 1, 2
        let model = LinearRegression::with_x(&[10.0, 20.0, 30.0], &[21.0, 41.0, 61.0]).unwrap();
        assert_relative_eq!(model.slope(), 2.0, epsilon = 1e-12);
        let fitted = model.fit();
        assert_relative_eq!(fitted[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(fitted[2], 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_x_falls_back_to_flat_slope() {
        let model = LinearRegression::with_x(&[2.0, 2.0, 2.0], &[1.0, 5.0, 9.0]).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert_eq!(model.offset(), 5.0);
    }

    #[test]
    fn test_inexact_constant_x_falls_back_to_flat_slope() {
        let y = [1.0, 5.0, 9.0, 2.0, 3.0, 4.0, 8.0];
        for c in [0.1, 0.3, 1.1, 3.7] {
            let model = LinearRegression::with_x(&[c; 7], &y).unwrap();
            assert_eq!(model.slope(), 0.0);
            assert!(model.slope().is_sign_positive());
            assert_relative_eq!(model.offset(), 32.0 / 7.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_y_has_positive_zero_slope() {
        // Numerator cancels to zero; the slope must not come out as -0.0
        let model = LinearRegression::with_x(&[0.0, 1.0, 2.0], &[-1.0, -1.0, -1.0]).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert!(model.slope().is_sign_positive());
    }

    #[test]
    fn test_single_point() {
        let model = LinearRegression::new(&[7.0]).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert_eq!(model.offset(), 7.0);
        assert_eq!(model.fit(), vec![7.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let result = LinearRegression::with_x(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(StatsError::LengthMismatch { x_len: 3, y_len: 2 })
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = LinearRegression::new(&[]);
        assert!(matches!(result, Err(StatsError::EmptyInput { .. })));
    }
}
