use thiserror::Error;

use super::config::ConfigError;
use crate::core::bounds::BoundsError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid bounds: {0}")]
    Bounds(#[from] BoundsError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Point type expects {expected} parameters but the bounds span {found} dimensions")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(
        "Rejection sampling exhausted after {attempts} attempts with {accepted} of {requested} points accepted"
    )]
    ExhaustedSampling {
        accepted: usize,
        requested: usize,
        attempts: u64,
    },

    #[error("Design optimization requires at least one iteration")]
    EmptyOptimization,

    #[error("None of the {iterations} candidate designs produced a comparable score")]
    NoScorableDesign { iterations: usize },

    #[error("Point construction or compliance check failed: {source}")]
    Point {
        #[source]
        source: BoxError,
    },

    #[error("Score function failed: {source}")]
    Score {
        #[source]
        source: BoxError,
    },
}

impl EngineError {
    pub(crate) fn point(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Point {
            source: Box::new(source),
        }
    }

    pub(crate) fn score(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Score {
            source: Box::new(source),
        }
    }
}
