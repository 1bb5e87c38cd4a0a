use crate::core::bounds::Bounds;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_DESIGN_SIZE: usize = 100;
pub const DEFAULT_ITERATIONS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid configuration in '{path}': {source}")]
    Invalid { path: String, source: ConfigError },
}

/// Controls a single rejection-sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplingConfig {
    /// Upper limit on candidate draws per design. `None` samples until the
    /// design is full, however long that takes.
    pub max_attempts: Option<u64>,
}

impl SamplingConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct OptimizationConfig {
    pub size: usize,
    pub iterations: usize,
    pub seed: Option<u64>,
    pub max_attempts: Option<u64>,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_DESIGN_SIZE,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            max_attempts: None,
        }
    }
}

impl OptimizationConfig {
    pub fn builder() -> OptimizationConfigBuilder {
        OptimizationConfigBuilder::new()
    }

    pub fn sampling(&self) -> SamplingConfig {
        SamplingConfig {
            max_attempts: self.max_attempts,
        }
    }

    /// Checks values that can never produce a design.
    ///
    /// `iterations == 0` is left to the optimizer, which reports it as an
    /// empty optimization rather than a malformed configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)?;
        if let Some(max_attempts) = self.max_attempts {
            if max_attempts < self.size as u64 {
                return Err(ConfigError::InvalidParameter {
                    name: "max_attempts",
                    reason: format!(
                        "{} attempts can never fill a design of {} points",
                        max_attempts, self.size
                    ),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "size",
            reason: "a design must contain at least one point".to_string(),
        });
    }
    Ok(())
}

#[derive(Default)]
pub struct OptimizationConfigBuilder {
    size: Option<usize>,
    iterations: Option<usize>,
    seed: Option<u64>,
    max_attempts: Option<u64>,
}

impl OptimizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn build(self) -> Result<OptimizationConfig, ConfigError> {
        let config = OptimizationConfig {
            size: self.size.unwrap_or(DEFAULT_DESIGN_SIZE),
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            seed: self.seed,
            max_attempts: self.max_attempts,
        };
        config.validate()?;
        Ok(config)
    }
}

/// A complete design problem as written in a TOML file.
///
/// ```toml
/// [bounds]
/// lower = [0.20, 0.20, 0.00, 0.00]
/// upper = [1.38, 1.00, 0.10, 1.38]
///
/// [optimization]
/// size = 100
/// iterations = 1000
/// seed = 42
/// max-attempts = 1000000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemDefinition {
    pub bounds: Bounds,
    #[serde(default)]
    pub optimization: OptimizationConfig,
}

impl ProblemDefinition {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let display_path = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: display_path.clone(),
            source: e,
        })?;
        let problem: Self = toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: display_path.clone(),
            source: e,
        })?;
        problem
            .optimization
            .validate()
            .map_err(|e| ConfigLoadError::Invalid {
                path: display_path,
                source: e,
            })?;
        Ok(problem)
    }
}
