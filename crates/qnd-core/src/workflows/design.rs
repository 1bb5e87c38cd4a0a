use crate::core::bounds::Bounds;
use crate::core::design::Design;
use crate::core::point::Point;
use crate::engine::config::SamplingConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks;
use rand::Rng;
use tracing::{info, instrument};

/// Builds a single design of `size` compliant points drawn uniformly from
/// `bounds`, rejecting candidates whose `is_compliant` is false.
///
/// The caller owns the random source, so a seeded generator reproduces the
/// same design bit for bit.
#[instrument(skip_all, name = "random_design_workflow")]
pub fn random_design<P, R>(
    bounds: &Bounds,
    size: usize,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> Result<Design<P>, EngineError>
where
    P: Point,
    R: Rng + ?Sized,
{
    info!(
        size,
        dimensions = bounds.dimensions(),
        max_attempts = ?sampling.max_attempts,
        "Building random design."
    );
    let design = tasks::random_design::run(bounds, size, sampling, rng)?;
    info!(
        attempts = design.attempts(),
        acceptance_rate = design.acceptance_rate(),
        "Random design complete."
    );
    Ok(design)
}
