//! Numerical core of an interactive least squares playground.
//!
//! The crate generates noisy samples around a hidden line, fits the
//! closed-form OLS line, scores any candidate line by its sum of squared
//! errors and maps the excess error onto a green to red hue.
//!
//! # Examples
//!
//! ```rust
//! use ols_playground::{ColorScale, Dataset, OlsResult, metrics};
//!
//! let data = Dataset::from_points(&[(0.0, 0.0), (2.0, 4.0)]);
//! let fit = OlsResult::fit(&data).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-10);
//!
//! let sse = metrics::sse(&data, 1.0, 1.0);
//! let hue = ColorScale::new().hue_for(sse, fit.sse_min);
//! assert!(hue < 120.0);
//! ```

pub use ndarray::{Array1, ArrayView1};

pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod ols;
pub mod random;
pub mod session;
pub mod view;

pub use color::{ColorScale, Hsl};
pub use config::{Interval, PlaygroundConfig};
pub use dataset::{CandidateLine, Dataset, Line, Sample, TrueLine};
pub use error::{ConfigError, PlaygroundError, Result};
pub use generator::{DatasetGenerator, Generated};
pub use ols::OlsResult;
pub use random::{FixedSequence, RandomSource, RngSource};
pub use session::{InitMode, Session, SessionMetrics};
pub use view::PlotBounds;

pub type Vector = Array1<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        assert_eq!(vec.len(), 5);
        let line = Line::new(1.0, 2.0);
        assert_eq!(line.predict(3.0), 7.0);
    }
}
