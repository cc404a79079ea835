//! Linear interpolation.

use crate::error::{MathError, MathResult};

/// Linear interpolation between data points, held flat beyond the ends.
///
/// Consecutive points are connected with straight lines. Below the first x
/// the first y is returned, above the last x the last y. A single point is
/// accepted and yields a constant function.
///
/// # Example
///
/// ```rust
/// use bondrisk_math::interpolation::LinearInterpolator;
///
/// let xs = vec![2.0, 5.0, 10.0];
/// let ys = vec![0.03, 0.04, 0.045];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// assert!((interp.evaluate(3.5) - 0.035).abs() < 1e-12);
/// assert_eq!(interp.evaluate(30.0), 0.045);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing, finite)
    /// * `ys` - Y coordinates (finite)
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, if lengths differ, or if the
    /// x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if let Some(bad) = xs.iter().chain(ys.iter()).find(|v| !v.is_finite()) {
            return Err(MathError::invalid_input(format!(
                "non-finite value {bad} in interpolation data"
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(format!(
                    "x values must be strictly increasing: {} >= {} at index {}",
                    xs[i - 1],
                    xs[i],
                    i
                )));
            }
        }

        Ok(Self { xs, ys })
    }

    /// Returns the x coordinates.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y coordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: construction rejects empty data.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Evaluates the function at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let w = (x - x0) / (x1 - x0);
        y0 + w * (y1 - y0)
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1], for x strictly
    /// inside the data range.
    fn find_segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|xi| xi.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i,
            Err(i) => i - 1,
        }
    }
}
