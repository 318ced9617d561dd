use crate::dataset::{Dataset, Line, Sample};

const PAD_X: f64 = 1.0;
const PAD_Y: f64 = 2.0;

/// Axis extents a chart should use for a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    /// Fixed axes, `x` in [-6, 6] and `y` in [-30, 30].
    pub fn fixed() -> Self {
        Self {
            x_min: -6.0,
            x_max: 6.0,
            y_min: -30.0,
            y_max: 30.0,
        }
    }

    /// Integer-rounded data extent, always covering [-1, 1], then padded.
    pub fn fitted(data: &Dataset) -> Self {
        let (x_lo, x_hi) = data.x_bounds().unwrap_or((0.0, 0.0));
        let (y_lo, y_hi) = data.y_bounds().unwrap_or((0.0, 0.0));
        Self {
            x_min: x_lo.min(-1.0).floor() - PAD_X,
            x_max: x_hi.max(1.0).ceil() + PAD_X,
            y_min: y_lo.min(-1.0).floor() - PAD_Y,
            y_max: y_hi.max(1.0).ceil() + PAD_Y,
        }
    }

    pub fn for_data(data: &Dataset, fixed: bool) -> Self {
        if fixed { Self::fixed() } else { Self::fitted(data) }
    }

    /// End points of `line` across the x extent.
    pub fn line_segment(&self, line: &Line) -> (Sample, Sample) {
        (
            Sample { x: self.x_min, y: line.predict(self.x_min) },
            Sample { x: self.x_max, y: line.predict(self.x_max) },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_bounds() {
        let data = Dataset::from_points(&[(-3.2, 4.5), (0.4, -7.1), (2.6, 0.2)]);
        let bounds = PlotBounds::fitted(&data);
        assert_eq!(
            bounds,
            PlotBounds { x_min: -5.0, x_max: 4.0, y_min: -10.0, y_max: 7.0 }
        );
    }

    #[test]
    fn test_fitted_bounds_cover_unit_box() {
        let data = Dataset::from_points(&[(0.1, 0.2), (0.3, 0.4)]);
        let bounds = PlotBounds::fitted(&data);
        assert_eq!(
            bounds,
            PlotBounds { x_min: -2.0, x_max: 2.0, y_min: -3.0, y_max: 3.0 }
        );
    }

    #[test]
    fn test_fixed_ignores_data() {
        let data = Dataset::from_points(&[(100.0, 100.0)]);
        assert_eq!(PlotBounds::for_data(&data, true), PlotBounds::fixed());
    }

    #[test]
    fn test_line_segment() {
        let (start, end) = PlotBounds::fixed().line_segment(&Line::new(1.0, 2.0));
        assert_eq!(start, Sample { x: -6.0, y: -11.0 });
        assert_eq!(end, Sample { x: 6.0, y: 13.0 });
    }
}
