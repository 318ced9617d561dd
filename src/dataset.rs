use crate::error::{PlaygroundError, Result};
use crate::Vector;

/// A single observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// A line `y = intercept + slope * x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub intercept: f64,
    pub slope: f64,
}

/// Hidden line the samples are generated from.
pub type TrueLine = Line;

/// Line currently chosen by the user.
pub type CandidateLine = Line;

impl Line {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn predict_all(&self, x: &Vector) -> Vector {
        x.mapv(|xi| self.predict(xi))
    }
}

/// Samples kept as two columns, sorted by x when produced by the generator.
///
/// The order is for display only; nothing computed from a dataset depends
/// on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub x: Vector,
    pub y: Vector,
}

impl Dataset {
    pub fn new(x: Vector, y: Vector) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PlaygroundError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        Ok(Self { x, y })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let x = points.iter().map(|&(x, _)| x).collect();
        let y = points.iter().map(|&(_, y)| y).collect();
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Sample { x, y })
    }

    /// Smallest and largest x, `None` when empty.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.x)
    }

    /// Smallest and largest y, `None` when empty.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.y)
    }
}

fn bounds(values: &Vector) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let lo = values.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let hi = values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    Some((lo, hi))
}
