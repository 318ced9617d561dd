//! Uniform and standard normal deviates behind an injectable source.

use std::f64::consts::PI;

use rand::distributions::Standard;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of random deviates used by the dataset generator.
///
/// Implementors only provide uniform draws in `[0, 1)`; the other
/// distributions are derived from them.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// Standard normal draw via the Box-Muller transform.
    fn standard_normal(&mut self) -> f64 {
        let u = self.nonzero_unit();
        let v = self.nonzero_unit();
        (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
    }

    /// Uniform draw in `(0, 1)`; zero is redrawn so it never reaches `ln`.
    fn nonzero_unit(&mut self) -> f64 {
        loop {
            let u = self.next_unit();
            if u != 0.0 {
                return u;
            }
        }
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter turning any `rand` generator into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source, same seed gives the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.sample(Standard)
    }
}

/// Replays a fixed list of unit values in a loop.
#[derive(Clone, Debug)]
pub struct FixedSequence {
    values: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        if values.is_empty() {
            panic!("FixedSequence needs at least one value");
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            panic!("FixedSequence values must lie in [0, 1), got {}", bad);
        }
        if values.iter().all(|&v| v == 0.0) {
            panic!("FixedSequence needs a nonzero value for normal draws");
        }

        Self { values, position: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
