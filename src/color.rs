//! Maps the excess error of a candidate line onto a green to red hue.
//!
//! The excess ratio `(sse - sse_min) / max(sse_min, epsilon)` is eased with
//! `atan(k * ratio) / (pi / 2)` into `[0, 1)` and turned into a hue of
//! `120 * (1 - t)` degrees: 120 is the optimal fit, 0 is only approached
//! as the ratio grows without bound.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

pub const GREEN_HUE: f64 = 120.0;
pub const SATURATION: f64 = 80.0;
pub const LIGHTNESS: f64 = 45.0;

/// HSL color, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    sensitivity: f64,
    epsilon: f64,
}

impl ColorScale {
    pub fn new() -> Self {
        Self {
            sensitivity: 0.5,
            epsilon: 1e-9,
        }
    }

    /// Larger values turn red sooner.
    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        if !(sensitivity > 0.0 && sensitivity.is_finite()) {
            panic!("sensitivity must be positive and finite, got {}", sensitivity);
        }
        self.sensitivity = sensitivity;
        self
    }

    /// Floor applied to `sse_min` in the ratio denominator.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            panic!("epsilon must be positive and finite, got {}", epsilon);
        }
        self.epsilon = epsilon;
        self
    }

    /// Relative excess of `sse` over `sse_min`, never negative.
    pub fn excess_ratio(&self, sse: f64, sse_min: f64) -> f64 {
        ((sse - sse_min) / sse_min.max(self.epsilon)).max(0.0)
    }

    /// Eased position in `[0, 1]`, 1 only for an infinite ratio.
    pub fn position(&self, sse: f64, sse_min: f64) -> f64 {
        let ratio = self.excess_ratio(sse, sse_min);
        (self.sensitivity * ratio).atan() / FRAC_PI_2
    }

    /// Hue in degrees within `[0, 120]`.
    pub fn hue_for(&self, sse: f64, sse_min: f64) -> f64 {
        let t = self.position(sse, sse_min).min(1.0);
        GREEN_HUE * (1.0 - t)
    }

    pub fn color_for(&self, sse: f64, sse_min: f64) -> Hsl {
        Hsl {
            hue: self.hue_for(sse, sse_min),
            saturation: SATURATION,
            lightness: LIGHTNESS,
        }
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new()
    }
}
