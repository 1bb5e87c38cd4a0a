use crate::core::design::Design;
use crate::core::point::{Derived, Point};
use crate::core::scoring::ScoreFunction;
use std::convert::Infallible;
use thiserror::Error;

/// Two-parameter point valid only inside the simplex `x0 + x1 <= 1`.
#[derive(Debug, Clone)]
pub struct SimplexPoint {
    params: [f64; 2],
    sum: Derived<f64>,
}

impl SimplexPoint {
    pub fn sum(&self) -> f64 {
        *self.sum.get_or_compute(|| self.params[0] + self.params[1])
    }
}

impl Point for SimplexPoint {
    type Error = Infallible;

    fn dimensions() -> Option<usize> {
        Some(2)
    }

    fn from_params(params: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self {
            params: [params[0], params[1]],
            sum: Derived::new(),
        })
    }

    fn is_compliant(&self) -> Result<bool, Self::Error> {
        Ok(self.sum() <= 1.0)
    }
}

/// Accepts any number of parameters and is never compliant.
#[derive(Debug)]
pub struct RejectingPoint;

impl Point for RejectingPoint {
    type Error = Infallible;

    fn from_params(_params: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self)
    }

    fn is_compliant(&self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

/// Accepts any number of parameters and is always compliant.
#[derive(Debug, Clone)]
pub struct OpenPoint(pub Vec<f64>);

impl Point for OpenPoint {
    type Error = Infallible;

    fn from_params(params: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self(params.to_vec()))
    }

    fn is_compliant(&self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("parameter {0} is outside the tabulated range")]
pub struct OutOfTableError(pub f64);

/// Fails its compliance check whenever the first parameter exceeds `0.5`.
#[derive(Debug)]
pub struct TabulatedPoint(f64);

impl Point for TabulatedPoint {
    type Error = OutOfTableError;

    fn from_params(params: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self(params[0]))
    }

    fn is_compliant(&self) -> Result<bool, Self::Error> {
        if self.0 > 0.5 {
            return Err(OutOfTableError(self.0));
        }
        Ok(true)
    }
}

#[derive(Debug, Error)]
#[error("score backend unavailable")]
pub struct ScoreBackendError;

/// Score function that always fails.
pub struct FailingScore;

impl<P> ScoreFunction<P> for FailingScore {
    type Error = ScoreBackendError;

    fn score(&self, _design: &Design<P>) -> Result<f64, Self::Error> {
        Err(ScoreBackendError)
    }
}
