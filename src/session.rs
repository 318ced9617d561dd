//! Session state driving the playground.
//!
//! A session owns the optional true line, the current dataset, its OLS fit
//! and the candidate line. Changing the sample count or the noise level
//! resamples around the same true line; [`Session::reset`] also discards
//! the true line so the next dataset comes from a freshly drawn one.

use log::{debug, trace};
use serde::Deserialize;

use crate::color::{ColorScale, Hsl};
use crate::config::PlaygroundConfig;
use crate::dataset::{CandidateLine, Dataset, TrueLine};
use crate::error::{PlaygroundError, Result};
use crate::generator::DatasetGenerator;
use crate::metrics;
use crate::ols::OlsResult;
use crate::random::RandomSource;
use crate::view::PlotBounds;

/// Where the candidate line is placed after each regeneration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    #[default]
    Zero,
    Ols,
}

/// Scalar feedback for the current candidate line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionMetrics {
    pub sse: f64,
    pub mse: f64,
    pub sse_min: f64,
    pub mse_min: f64,
    pub color: Hsl,
}

pub struct Session<R: RandomSource> {
    config: PlaygroundConfig,
    generator: DatasetGenerator,
    scale: ColorScale,
    rng: R,
    sample_count: usize,
    noise_std: f64,
    init_mode: InitMode,
    true_line: Option<TrueLine>,
    dataset: Dataset,
    fit: OlsResult,
    candidate: CandidateLine,
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: PlaygroundConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let generator = config.generator();
        let scale = config.color_scale();
        let sample_count = config.default_sample_count;
        let noise_std = config.default_noise_std;

        let generated = generator.generate(sample_count, noise_std, None, &mut rng)?;
        let fit = OlsResult::fit(&generated.dataset)?;
        debug!(
            "session started: n={}, noise_std={}, true line ({}, {})",
            sample_count, noise_std, generated.true_line.intercept, generated.true_line.slope
        );

        let mut session = Self {
            init_mode: config.init_mode,
            config,
            generator,
            scale,
            rng,
            sample_count,
            noise_std,
            true_line: Some(generated.true_line),
            dataset: generated.dataset,
            fit,
            candidate: CandidateLine::zero(),
        };
        session.init_candidate();
        Ok(session)
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    pub fn init_mode(&self) -> InitMode {
        self.init_mode
    }

    /// `None` only between a reset and the regeneration that follows it.
    pub fn true_line(&self) -> Option<TrueLine> {
        self.true_line
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn fit(&self) -> &OlsResult {
        &self.fit
    }

    pub fn candidate(&self) -> CandidateLine {
        self.candidate
    }

    /// Resamples `n` points around the current true line.
    pub fn set_sample_count(&mut self, n: usize) -> Result<()> {
        if !self.config.sample_count.contains(n) {
            return Err(PlaygroundError::InvalidSampleCount { requested: n });
        }
        if n == self.sample_count {
            return Ok(());
        }
        self.sample_count = n;
        self.regenerate()
    }

    /// Resamples with a new noise level around the current true line.
    pub fn set_noise_std(&mut self, noise_std: f64) -> Result<()> {
        if !self.config.noise_std.contains(noise_std) {
            return Err(PlaygroundError::InvalidNoiseLevel { noise_std });
        }
        if noise_std == self.noise_std {
            return Ok(());
        }
        self.noise_std = noise_std;
        self.regenerate()
    }

    /// Discards the true line and draws a new one with a new dataset.
    pub fn reset(&mut self) -> Result<()> {
        debug!("reset: discarding true line");
        self.true_line = None;
        self.regenerate()
    }

    pub fn set_init_mode(&mut self, mode: InitMode) {
        if mode != self.init_mode {
            self.init_mode = mode;
            self.init_candidate();
        }
    }

    /// Moves the candidate line. Non-finite values are refused and leave
    /// the candidate unchanged.
    pub fn set_candidate(&mut self, intercept: f64, slope: f64) -> Result<()> {
        if !intercept.is_finite() {
            return Err(PlaygroundError::NonFiniteParameter { name: "intercept" });
        }
        if !slope.is_finite() {
            return Err(PlaygroundError::NonFiniteParameter { name: "slope" });
        }
        trace!("candidate moved to ({}, {})", intercept, slope);
        self.candidate = CandidateLine::new(intercept, slope);
        Ok(())
    }

    pub fn snap_to_ols(&mut self) {
        self.candidate = self.fit.line();
    }

    pub fn zero_candidate(&mut self) {
        self.candidate = CandidateLine::zero();
    }

    pub fn sse(&self) -> f64 {
        metrics::sse(&self.dataset, self.candidate.intercept, self.candidate.slope)
    }

    pub fn color(&self) -> Hsl {
        self.scale.color_for(self.sse(), self.fit.sse_min)
    }

    pub fn metrics(&self) -> Result<SessionMetrics> {
        let sse = self.sse();
        let mse = metrics::mse(&self.dataset, self.candidate.intercept, self.candidate.slope)?;
        Ok(SessionMetrics {
            sse,
            mse,
            sse_min: self.fit.sse_min,
            mse_min: self.fit.mse_min(),
            color: self.scale.color_for(sse, self.fit.sse_min),
        })
    }

    pub fn plot_bounds(&self, fixed: bool) -> PlotBounds {
        PlotBounds::for_data(&self.dataset, fixed)
    }

    fn regenerate(&mut self) -> Result<()> {
        let generated = self.generator.generate(
            self.sample_count,
            self.noise_std,
            self.true_line,
            &mut self.rng,
        )?;
        let fit = OlsResult::fit(&generated.dataset)?;
        if self.true_line.is_none() {
            debug!(
                "new true line ({}, {})",
                generated.true_line.intercept, generated.true_line.slope
            );
        }
        debug!(
            "regenerated {} samples, noise_std={}, ols=({}, {}), sse_min={}",
            self.sample_count, self.noise_std, fit.intercept, fit.slope, fit.sse_min
        );

        self.true_line = Some(generated.true_line);
        self.dataset = generated.dataset;
        self.fit = fit;
        self.init_candidate();
        Ok(())
    }

    fn init_candidate(&mut self) {
        self.candidate = match self.init_mode {
            InitMode::Zero => CandidateLine::zero(),
            InitMode::Ols => self.fit.line(),
        };
    }
}
