use std::fmt;
use std::sync::OnceLock;

/// A candidate location in parameter space that knows whether it is valid.
///
/// Implementations own the domain model: how physical parameters are
/// interpreted and which combinations are acceptable. The compliance check
/// must be a pure function of the parameters the point was built from.
pub trait Point: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of physical parameters the point is built from, when fixed.
    fn dimensions() -> Option<usize> {
        None
    }

    fn from_params(params: &[f64]) -> Result<Self, Self::Error>;

    fn is_compliant(&self) -> Result<bool, Self::Error>;
}

/// Write-once slot for a quantity derived from a point's parameters.
///
/// The value is computed on first access and never changes afterwards.
pub struct Derived<T> {
    slot: OnceLock<T>,
}

impl<T> Derived<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    #[inline]
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        self.slot.get_or_init(compute)
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for Derived<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => f.debug_tuple("Derived").field(value).finish(),
            None => f.write_str("Derived(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct MassBudgetPoint {
        masses: Vec<f64>,
        total: Derived<f64>,
        evaluations: AtomicUsize,
    }

    impl MassBudgetPoint {
        fn total(&self) -> f64 {
            *self.total.get_or_compute(|| {
                self.evaluations.fetch_add(1, Ordering::SeqCst);
                self.masses.iter().sum()
            })
        }
    }

    impl Point for MassBudgetPoint {
        type Error = Infallible;

        fn dimensions() -> Option<usize> {
            Some(3)
        }

        fn from_params(params: &[f64]) -> Result<Self, Self::Error> {
            Ok(Self {
                masses: params.to_vec(),
                total: Derived::new(),
                evaluations: AtomicUsize::new(0),
            })
        }

        fn is_compliant(&self) -> Result<bool, Self::Error> {
            Ok((0.6..=1.38).contains(&self.total()))
        }
    }

    #[test]
    fn derived_value_is_computed_once_and_never_changes() {
        let point = MassBudgetPoint::from_params(&[0.5, 0.3, 0.1]).unwrap();
        assert!(!point.total.is_computed());

        assert!(point.is_compliant().unwrap());
        assert!(point.is_compliant().unwrap());
        let first = point.total();
        let second = point.total();

        assert_eq!(point.evaluations.load(Ordering::SeqCst), 1);
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(point.total.get().copied(), Some(first));
    }

    #[test]
    fn derived_ignores_later_compute_closures() {
        let slot = Derived::new();
        assert_eq!(*slot.get_or_compute(|| 1.5), 1.5);
        assert_eq!(*slot.get_or_compute(|| 99.0), 1.5);
    }

    #[test]
    fn derived_debug_shows_pending_until_computed() {
        let slot: Derived<u32> = Derived::default();
        assert_eq!(format!("{slot:?}"), "Derived(<pending>)");
        slot.get_or_compute(|| 7);
        assert_eq!(format!("{slot:?}"), "Derived(7)");
    }

    #[test]
    fn point_declares_dimensions_and_rejects_out_of_budget_mass() {
        assert_eq!(MassBudgetPoint::dimensions(), Some(3));
        let light = MassBudgetPoint::from_params(&[0.1, 0.1, 0.1]).unwrap();
        assert!(!light.is_compliant().unwrap());
    }
}
