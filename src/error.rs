//! Error types shared by the generator, the estimator and the session.

use thiserror::Error;

/// Errors signalled by the playground core.
///
/// A constant-x dataset is not an error: the estimator reports a zero slope
/// for it, see [`crate::OlsResult::is_degenerate`].
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// The generator was asked for fewer samples than it can produce, or a
    /// session was given a sample count outside its configured range.
    #[error("Invalid sample count: {requested}")]
    InvalidSampleCount {
        /// Requested number of samples
        requested: usize,
    },

    /// Noise level was negative, non-finite or outside the configured range.
    #[error("Invalid noise level: {noise_std}")]
    InvalidNoiseLevel {
        /// Requested noise standard deviation
        noise_std: f64,
    },

    /// Estimate or mean requested on an empty dataset.
    #[error("Estimate is undefined for an empty dataset")]
    UndefinedEstimate,

    /// x and y columns differ in length.
    #[error("Numbers of x values ({x}) and y values ({y}) must match")]
    LengthMismatch {
        /// Number of x values
        x: usize,
        /// Number of y values
        y: usize,
    },

    /// A line parameter coming from the presentation layer was NaN or infinite.
    #[error("Parameter `{name}` must be finite")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("Error while loading config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config entry: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
