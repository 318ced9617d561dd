use crate::dataset::{Dataset, TrueLine};
use crate::error::{PlaygroundError, Result};
use crate::random::RandomSource;
use crate::Vector;

/// Output of [`DatasetGenerator::generate`].
#[derive(Clone, Debug)]
pub struct Generated {
    pub true_line: TrueLine,
    pub dataset: Dataset,
}

/// Draws samples `y = a0 + b0 * x + noise` around a true line.
#[derive(Clone, Debug)]
pub struct DatasetGenerator {
    x_range: (f64, f64),
    intercept_range: (f64, f64),
    slope_range: (f64, f64),
}

impl DatasetGenerator {
    pub fn new() -> Self {
        Self {
            x_range: (-5.0, 5.0),
            intercept_range: (-5.0, 5.0),
            slope_range: (-4.0, 4.0),
        }
    }

    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = checked_range("x_range", min, max);
        self
    }

    pub fn intercept_range(mut self, min: f64, max: f64) -> Self {
        self.intercept_range = checked_range("intercept_range", min, max);
        self
    }

    pub fn slope_range(mut self, min: f64, max: f64) -> Self {
        self.slope_range = checked_range("slope_range", min, max);
        self
    }

    /// Draws a true line from the configured intercept and slope ranges.
    pub fn draw_true_line<R: RandomSource>(&self, rng: &mut R) -> TrueLine {
        let intercept = rng.uniform(self.intercept_range.0, self.intercept_range.1);
        let slope = rng.uniform(self.slope_range.0, self.slope_range.1);
        TrueLine::new(intercept, slope)
    }

    /// Generates `n` samples sorted by x.
    ///
    /// A supplied `true_line` is kept as is, including a zero intercept or
    /// slope; `None` draws a fresh one. With `noise_std == 0.0` every sample
    /// lies exactly on the true line.
    pub fn generate<R: RandomSource>(
        &self,
        n: usize,
        noise_std: f64,
        true_line: Option<TrueLine>,
        rng: &mut R,
    ) -> Result<Generated> {
        if n < 1 {
            return Err(PlaygroundError::InvalidSampleCount { requested: n });
        }
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(PlaygroundError::InvalidNoiseLevel { noise_std });
        }

        let true_line = match true_line {
            Some(line) => line,
            None => self.draw_true_line(rng),
        };

        let mut xs: Vec<f64> = (0..n)
            .map(|_| rng.uniform(self.x_range.0, self.x_range.1))
            .collect();
        xs.sort_by(f64::total_cmp);

        let ys: Vec<f64> = if noise_std == 0.0 {
            xs.iter().map(|&x| true_line.predict(x)).collect()
        } else {
            xs.iter()
                .map(|&x| true_line.predict(x) + noise_std * rng.standard_normal())
                .collect()
        };

        let dataset = Dataset::new(Vector::from(xs), Vector::from(ys))?;
        Ok(Generated { true_line, dataset })
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_range(name: &str, min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() || min > max {
        panic!("{} must be a finite range with min <= max, got [{}, {}]", name, min, max);
    }
    (min, max)
}
