use super::bounds::Bounds;

/// One accepted point together with the coordinates it was built from.
#[derive(Debug, Clone)]
pub struct DesignPoint<P> {
    normalized: Vec<f64>,
    unscaled: Vec<f64>,
    point: P,
}

impl<P> DesignPoint<P> {
    pub(crate) fn new(normalized: Vec<f64>, unscaled: Vec<f64>, point: P) -> Self {
        Self {
            normalized,
            unscaled,
            point,
        }
    }

    /// Position in the unit hypercube before rescaling.
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    /// Physical parameters the point was constructed from.
    pub fn unscaled(&self) -> &[f64] {
        &self.unscaled
    }

    pub fn point(&self) -> &P {
        &self.point
    }

    pub fn into_point(self) -> P {
        self.point
    }
}

/// A fixed-size set of compliant points drawn from one `Bounds`.
///
/// Designs are only produced by the builder and are immutable afterwards.
#[derive(Debug, Clone)]
pub struct Design<P> {
    bounds: Bounds,
    points: Vec<DesignPoint<P>>,
    attempts: u64,
}

impl<P> Design<P> {
    pub(crate) fn new(bounds: Bounds, points: Vec<DesignPoint<P>>, attempts: u64) -> Self {
        Self {
            bounds,
            points,
            attempts,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn points(&self) -> &[DesignPoint<P>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DesignPoint<P>> {
        self.points.iter()
    }

    /// Number of candidates drawn to fill the design, accepted or not.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.points.len() as f64 / self.attempts as f64
    }

    /// Row-per-point matrix of normalized coordinates.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.normalized.clone()).collect()
    }

    /// Row-per-point matrix of physical coordinates.
    pub fn unscaled(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.unscaled.clone()).collect()
    }

    pub fn into_points(self) -> Vec<DesignPoint<P>> {
        self.points
    }
}

impl<'a, P> IntoIterator for &'a Design<P> {
    type Item = &'a DesignPoint<P>;
    type IntoIter = std::slice::Iter<'a, DesignPoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
