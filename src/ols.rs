use log::debug;

use crate::dataset::{Dataset, Line};
use crate::error::{PlaygroundError, Result};
use crate::metrics;

/// Closed-form simple linear regression on a fixed dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OlsResult {
    pub intercept: f64,
    pub slope: f64,
    /// SSE of the fitted line, the minimum over all lines.
    pub sse_min: f64,
    pub n: usize,
    /// All x are equal, so the slope was set to zero.
    pub is_degenerate: bool,
}

impl OlsResult {
    /// Fits `y = a + b x` by the normal equations.
    ///
    /// When every x is identical the slope is undefined and reported as 0,
    /// giving the horizontal line through the mean of y. That includes the
    /// single sample case. This is intended, not a failure.
    pub fn fit(data: &Dataset) -> Result<Self> {
        let x_mean = data.x.mean().ok_or(PlaygroundError::UndefinedEstimate)?;
        let y_mean = data.y.mean().ok_or(PlaygroundError::UndefinedEstimate)?;

        let x_centered = &data.x - x_mean;
        let y_centered = &data.y - y_mean;

        let sxx = x_centered.dot(&x_centered);
        let sxy = x_centered.dot(&y_centered);

        // Decided on the raw x: a rounded mean leaves a tiny nonzero Sxx.
        let is_degenerate = matches!(data.x_bounds(), Some((lo, hi)) if lo == hi);
        let slope = if is_degenerate { 0.0 } else { sxy / sxx };
        let intercept = y_mean - slope * x_mean;
        if is_degenerate {
            debug!("constant x over {} samples, slope set to 0", data.len());
        }

        let sse_min = metrics::sse(data, intercept, slope);

        Ok(Self {
            intercept,
            slope,
            sse_min,
            n: data.len(),
            is_degenerate,
        })
    }

    pub fn line(&self) -> Line {
        Line::new(self.intercept, self.slope)
    }

    /// Never fails: a fit always holds at least one sample.
    pub fn mse_min(&self) -> f64 {
        self.sse_min / self.n as f64
    }
}
