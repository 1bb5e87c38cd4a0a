use crate::core::bounds::Bounds;
use crate::core::design::Design;
use crate::core::point::Point;
use crate::core::scoring::ScoreFunction;
use crate::engine::config::OptimizationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{Candidate, ScoreWatermark, SearchState};
use crate::engine::tasks;
use crate::engine::utils::sampling;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct OptimizationResult<P> {
    pub design: Design<P>,
    pub score: f64,
    /// Zero-based index of the trial that produced `design`.
    pub trial: usize,
    pub iterations: usize,
    /// Candidate draws summed over every trial.
    pub attempts: u64,
}

/// Monte-Carlo design search: builds `config.iterations` independent random
/// designs and keeps the one with the highest score.
///
/// Every trial samples from its own stream, seeded in trial order from
/// `config.seed`. A later design replaces the incumbent only on a strictly
/// higher score, so ties keep the earlier trial and the outcome is the same
/// whether trials run sequentially or in parallel.
#[instrument(skip_all, name = "design_optimization_workflow")]
pub fn optimize<P, S>(
    bounds: &Bounds,
    score_func: &S,
    config: &OptimizationConfig,
    reporter: &ProgressReporter,
) -> Result<OptimizationResult<P>, EngineError>
where
    P: Point + Send,
    S: ScoreFunction<P> + Sync,
{
    if config.iterations == 0 {
        return Err(EngineError::EmptyOptimization);
    }
    config.validate()?;
    tasks::random_design::check_dimensions::<P>(bounds)?;

    reporter.report(Progress::PhaseStart {
        name: "Monte-Carlo Design Search",
    });
    info!(
        iterations = config.iterations,
        size = config.size,
        dimensions = bounds.dimensions(),
        seed = ?config.seed,
        "Starting Monte-Carlo design search."
    );

    let seeds = sampling::trial_seeds(config.seed, config.iterations);
    let sampling_config = config.sampling();
    let watermark = ScoreWatermark::new();

    let run_trial = |trial: usize, seed: u64| -> Result<SearchState<P>, EngineError> {
        let mut rng = sampling::trial_rng(seed);
        let design: Design<P> =
            tasks::random_design::run(bounds, config.size, &sampling_config, &mut rng)?;
        let score = score_func.score(&design).map_err(EngineError::score)?;

        reporter.report(Progress::TaskIncrement);
        watermark.raise(score, |score| {
            reporter.report(Progress::NewBest { trial, score })
        });

        let attempts = design.attempts();
        Ok(SearchState::from_trial(
            attempts,
            Candidate::comparable(trial, score, design),
        ))
    };

    reporter.report(Progress::TaskStart {
        total_steps: config.iterations as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let state = {
        let mut state = SearchState::default();
        for (trial, &seed) in seeds.iter().enumerate() {
            state = state.merge(run_trial(trial, seed)?);
        }
        state
    };

    #[cfg(feature = "parallel")]
    let state = seeds
        .par_iter()
        .enumerate()
        .map(|(trial, &seed)| run_trial(trial, seed))
        .try_reduce(SearchState::default, |a, b| Ok(a.merge(b)))?;

    reporter.report(Progress::TaskFinish);

    let attempts = state.attempts;
    let best = state.best.ok_or(EngineError::NoScorableDesign {
        iterations: config.iterations,
    })?;

    info!(
        best_score = best.score,
        trial = best.trial,
        attempts,
        "Design search complete."
    );
    reporter.report(Progress::Message(format!(
        "Best score {:.6} from trial {}/{}.",
        best.score,
        best.trial + 1,
        config.iterations
    )));
    reporter.report(Progress::PhaseFinish);

    Ok(OptimizationResult {
        design: best.design,
        score: best.score,
        trial: best.trial,
        iterations: config.iterations,
        attempts,
    })
}

/// Returns only the highest-scoring design of a Monte-Carlo search.
pub fn designopt_mc<P, S>(
    bounds: &Bounds,
    score_func: &S,
    config: &OptimizationConfig,
    reporter: &ProgressReporter,
) -> Result<Design<P>, EngineError>
where
    P: Point + Send,
    S: ScoreFunction<P> + Sync,
{
    optimize(bounds, score_func, config, reporter).map(|result| result.design)
}
