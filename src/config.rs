use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::Deserialize;

use crate::color::ColorScale;
use crate::error::ConfigError;
use crate::generator::DatasetGenerator;
use crate::session::InitMode;

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Tunables of a playground session.
///
/// Every field may be omitted from the TOML source and falls back to
/// [`PlaygroundConfig::default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub x_range: Interval<f64>,
    pub intercept_range: Interval<f64>,
    pub slope_range: Interval<f64>,
    pub sample_count: Interval<usize>,
    pub noise_std: Interval<f64>,
    pub default_sample_count: usize,
    pub default_noise_std: f64,
    pub init_mode: InitMode,
    pub sensitivity: f64,
    pub epsilon: f64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            x_range: Interval::new(-5.0, 5.0),
            intercept_range: Interval::new(-5.0, 5.0),
            slope_range: Interval::new(-4.0, 4.0),
            sample_count: Interval::new(5, 200),
            noise_std: Interval::new(0.01, 4.0),
            default_sample_count: 20,
            default_noise_std: 1.2,
            init_mode: InitMode::Zero,
            sensitivity: 0.5,
            epsilon: 1e-9,
        }
    }
}

impl PlaygroundConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut s = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut s)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, range) in [
            ("x_range", self.x_range),
            ("intercept_range", self.intercept_range),
            ("slope_range", self.slope_range),
            ("noise_std", self.noise_std),
        ] {
            if !range.min.is_finite() || !range.max.is_finite() || !range.is_ordered() {
                return Err(invalid(format!(
                    "{} must be a finite range with min <= max, got [{}, {}]",
                    name, range.min, range.max
                )));
            }
        }
        if self.noise_std.min < 0.0 {
            return Err(invalid(format!(
                "noise_std must not be negative, got {}",
                self.noise_std.min
            )));
        }
        if self.sample_count.min < 1 || !self.sample_count.is_ordered() {
            return Err(invalid(format!(
                "sample_count must satisfy 1 <= min <= max, got [{}, {}]",
                self.sample_count.min, self.sample_count.max
            )));
        }
        if !self.sample_count.contains(self.default_sample_count) {
            return Err(invalid(format!(
                "default_sample_count {} is outside [{}, {}]",
                self.default_sample_count, self.sample_count.min, self.sample_count.max
            )));
        }
        if !self.noise_std.contains(self.default_noise_std) {
            return Err(invalid(format!(
                "default_noise_std {} is outside [{}, {}]",
                self.default_noise_std, self.noise_std.min, self.noise_std.max
            )));
        }
        if !(self.sensitivity > 0.0 && self.sensitivity.is_finite()) {
            return Err(invalid(format!("sensitivity must be positive, got {}", self.sensitivity)));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(invalid(format!("epsilon must be positive, got {}", self.epsilon)));
        }
        Ok(())
    }

    /// Generator drawing from the configured ranges. Call [`Self::validate`] first.
    pub fn generator(&self) -> DatasetGenerator {
        DatasetGenerator::new()
            .x_range(self.x_range.min, self.x_range.max)
            .intercept_range(self.intercept_range.min, self.intercept_range.max)
            .slope_range(self.slope_range.min, self.slope_range.max)
    }

    pub fn color_scale(&self) -> ColorScale {
        ColorScale::new()
            .sensitivity(self.sensitivity)
            .epsilon(self.epsilon)
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlaygroundConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_sample_count, 20);
        assert_eq!(config.sample_count, Interval::new(5, 200));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = PlaygroundConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlaygroundConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = PlaygroundConfig::from_toml_str(
            r#"
            default_sample_count = 30
            init_mode = "ols"
            sensitivity = 1.0

            [sample_count]
            min = 5
            max = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.default_sample_count, 30);
        assert_eq!(config.sample_count, Interval::new(5, 50));
        assert_eq!(config.init_mode, InitMode::Ols);
        assert_eq!(config.sensitivity, 1.0);
        assert_eq!(config.noise_std, Interval::new(0.01, 4.0));
    }

    #[test]
    fn test_default_outside_range_is_rejected() {
        let result = PlaygroundConfig::from_toml_str(
            r#"
            default_sample_count = 100

            [sample_count]
            min = 5
            max = 50
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = PlaygroundConfig::from_toml_str(
            r#"
            [x_range]
            min = 5.0
            max = -5.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = PlaygroundConfig::from_toml_str("sensitivity = \"high\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PlaygroundConfig::load("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
