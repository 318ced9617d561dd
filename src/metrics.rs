use crate::dataset::{Dataset, Line, Sample};
use crate::error::{PlaygroundError, Result};
use crate::Vector;

/// Residuals `y_i - (a + b x_i)` of `line` on `data`.
pub fn residuals(data: &Dataset, line: &Line) -> Vector {
    &data.y - &line.predict_all(&data.x)
}

/// Sum of squared errors of the line `a + b x`.
///
/// Infinite parameters give an infinite SSE rather than an error.
pub fn sse(data: &Dataset, a: f64, b: f64) -> f64 {
    residuals(data, &Line::new(a, b)).mapv(|r| r * r).sum()
}

/// Mean squared error, undefined on an empty dataset.
pub fn mse(data: &Dataset, a: f64, b: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(PlaygroundError::UndefinedEstimate);
    }
    Ok(sse(data, a, b) / data.len() as f64)
}

/// Vertical segments from each sample to its prediction on `line`.
pub fn residual_segments(data: &Dataset, line: &Line) -> Vec<(Sample, Sample)> {
    data.samples()
        .map(|s| (s, Sample { x: s.x, y: line.predict(s.x) }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn small() -> Dataset {
        Dataset::from_points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 7.0)])
    }

    #[test]
    fn test_sse() {
        // residuals 1, 1, 5
        assert!((sse(&small(), 0.0, 1.0) - 27.0).abs() < 1e-10);
    }

    #[test]
    fn test_mse_is_sse_over_n() {
        let data = small();
        for &(a, b) in &[(0.0, 0.0), (1.0, 2.0), (-3.5, 0.25)] {
            let expected = sse(&data, a, b) / 3.0;
            assert_eq!(mse(&data, a, b).unwrap(), expected);
        }
    }

    #[test]
    fn test_mse_empty_is_undefined() {
        assert!(matches!(
            mse(&Dataset::default(), 1.0, 1.0),
            Err(PlaygroundError::UndefinedEstimate)
        ));
        assert_eq!(sse(&Dataset::default(), 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_infinite_parameter_gives_infinite_sse() {
        let value = sse(&small(), f64::INFINITY, 0.0);
        assert!(value.is_infinite() && value > 0.0);
    }

    #[test]
    fn test_residuals() {
        let r = residuals(&small(), &Line::new(1.0, 1.0));
        assert_eq!(r, array![0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_residual_segments() {
        let segments = residual_segments(&small(), &Line::new(0.0, 2.0));
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].0, Sample { x: 2.0, y: 7.0 });
        assert_eq!(segments[2].1, Sample { x: 2.0, y: 4.0 });
    }
}
