use crate::core::design::Design;
use std::cmp::Ordering;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// A scored design together with the trial that produced it.
#[derive(Debug, Clone)]
pub struct Candidate<P> {
    pub trial: usize,
    pub score: f64,
    pub design: Design<P>,
}

impl<P> Candidate<P> {
    /// Wraps a scored design, discarding scores that can never beat the
    /// `-inf` starting sentinel.
    pub(crate) fn comparable(trial: usize, score: f64, design: Design<P>) -> Option<Self> {
        if score.is_nan() {
            warn!(trial, "Score function returned NaN; design discarded.");
            return None;
        }
        if score == f64::NEG_INFINITY {
            debug!(trial, "Design scored -inf; discarded.");
            return None;
        }
        Some(Self {
            trial,
            score,
            design,
        })
    }

    /// Higher score wins; equal scores go to the earlier trial.
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.trial.cmp(&self.trial))
    }
}

/// Outcome of one or more trials, mergeable in any grouping.
///
/// Merging keeps the best candidate under [`Candidate::rank`], a total order
/// over comparable scores, so the result does not depend on how trials were
/// partitioned between workers.
#[derive(Debug)]
pub struct SearchState<P> {
    pub best: Option<Candidate<P>>,
    pub attempts: u64,
    pub trials: usize,
}

impl<P> Default for SearchState<P> {
    fn default() -> Self {
        Self {
            best: None,
            attempts: 0,
            trials: 0,
        }
    }
}

impl<P> SearchState<P> {
    pub(crate) fn from_trial(attempts: u64, candidate: Option<Candidate<P>>) -> Self {
        Self {
            best: candidate,
            attempts,
            trials: 1,
        }
    }

    pub(crate) fn merge(self, other: Self) -> Self {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => {
                if b.rank(&a) == Ordering::Greater {
                    Some(b)
                } else {
                    Some(a)
                }
            }
            (a, b) => a.or(b),
        };
        Self {
            best,
            attempts: self.attempts + other.attempts,
            trials: self.trials + other.trials,
        }
    }

    pub fn best_score(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::NEG_INFINITY, |candidate| candidate.score)
    }
}

/// Highest score observed so far, for progress reporting while trials run.
#[derive(Debug)]
pub(crate) struct ScoreWatermark {
    best: Mutex<f64>,
}

impl ScoreWatermark {
    pub(crate) fn new() -> Self {
        Self {
            best: Mutex::new(f64::NEG_INFINITY),
        }
    }

    /// Raises the watermark when `score` is strictly higher, calling
    /// `on_raise` while still holding the lock so notifications arrive in
    /// increasing order.
    pub(crate) fn raise(&self, score: f64, on_raise: impl FnOnce(f64)) -> bool {
        let mut best = self.best.lock().unwrap_or_else(PoisonError::into_inner);
        if score > *best {
            *best = score;
            on_raise(score);
            true
        } else {
            false
        }
    }
}
