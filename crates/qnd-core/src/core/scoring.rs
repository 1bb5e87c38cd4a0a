use super::design::{Design, DesignPoint};
use itertools::Itertools;
use std::convert::Infallible;
use std::sync::{Mutex, PoisonError};

/// Maps a finished design to a scalar fitness; larger is better.
pub trait ScoreFunction<P> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn score(&self, design: &Design<P>) -> Result<f64, Self::Error>;
}

impl<P, F> ScoreFunction<P> for F
where
    F: Fn(&Design<P>) -> f64,
{
    type Error = Infallible;

    #[inline]
    fn score(&self, design: &Design<P>) -> Result<f64, Self::Error> {
        Ok(self(design))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Coordinates {
    #[default]
    Normalized,
    Physical,
}

/// Space-filling criterion: the smallest pairwise Euclidean distance between
/// any two points of the design.
///
/// A design with fewer than two points has no pairs and scores `+inf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximin {
    coordinates: Coordinates,
}

impl Maximin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures distances between physical rather than normalized coordinates.
    pub fn physical() -> Self {
        Self {
            coordinates: Coordinates::Physical,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    fn coordinates_of<'a, P>(&self, point: &'a DesignPoint<P>) -> &'a [f64] {
        match self.coordinates {
            Coordinates::Normalized => point.normalized(),
            Coordinates::Physical => point.unscaled(),
        }
    }
}

impl<P> ScoreFunction<P> for Maximin {
    type Error = Infallible;

    fn score(&self, design: &Design<P>) -> Result<f64, Self::Error> {
        Ok(design
            .iter()
            .tuple_combinations()
            .map(|(a, b)| euclidean_distance(self.coordinates_of(a), self.coordinates_of(b)))
            .fold(f64::INFINITY, f64::min))
    }
}

#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Wraps a score function and keeps every score it hands out.
///
/// Safe to share between worker threads; the recorded order follows the
/// order in which scores were produced.
#[derive(Debug, Default)]
pub struct Recorded<S> {
    inner: S,
    scores: Mutex<Vec<f64>>,
}

impl<S> Recorded<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            scores: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn scores(&self) -> Vec<f64> {
        self.scores
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_scores(self) -> Vec<f64> {
        self.scores
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P, S> ScoreFunction<P> for Recorded<S>
where
    S: ScoreFunction<P>,
{
    type Error = S::Error;

    fn score(&self, design: &Design<P>) -> Result<f64, Self::Error> {
        let score = self.inner.score(design)?;
        self.scores
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(score);
        Ok(score)
    }
}
