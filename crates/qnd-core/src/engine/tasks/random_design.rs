use crate::core::bounds::Bounds;
use crate::core::design::{Design, DesignPoint};
use crate::core::point::Point;
use crate::engine::config::{SamplingConfig, validate_size};
use crate::engine::error::EngineError;
use crate::engine::utils::sampling;
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Fills a design of `size` compliant points by rejection sampling.
///
/// Candidates are drawn uniformly from `bounds` until `size` of them pass
/// `P::is_compliant`. Without `sampling.max_attempts` the loop only ends once
/// the design is full.
#[instrument(level = "debug", skip_all, name = "random_design_task", fields(size = size, dimensions = bounds.dimensions()))]
pub fn run<P, R>(
    bounds: &Bounds,
    size: usize,
    sampling: &SamplingConfig,
    rng: &mut R,
) -> Result<Design<P>, EngineError>
where
    P: Point,
    R: Rng + ?Sized,
{
    validate_size(size)?;
    check_dimensions::<P>(bounds)?;

    let dimensions = bounds.dimensions();
    let mut points = Vec::with_capacity(size);
    let mut attempts: u64 = 0;

    while points.len() < size {
        if let Some(max_attempts) = sampling.max_attempts {
            if attempts >= max_attempts {
                debug!(
                    accepted = points.len(),
                    attempts, "Attempt limit reached before the design was filled."
                );
                return Err(EngineError::ExhaustedSampling {
                    accepted: points.len(),
                    requested: size,
                    attempts,
                });
            }
        }
        attempts += 1;

        let normalized = sampling::unit_vector(rng, dimensions);
        let unscaled = bounds.scale(&normalized);
        let point = P::from_params(&unscaled).map_err(EngineError::point)?;

        if point.is_compliant().map_err(EngineError::point)? {
            points.push(DesignPoint::new(normalized, unscaled, point));
        } else {
            trace!(attempt = attempts, "Rejected non-compliant candidate.");
        }
    }

    debug!(
        attempts,
        acceptance_rate = size as f64 / attempts as f64,
        "Design filled."
    );
    Ok(Design::new(bounds.clone(), points, attempts))
}

pub(crate) fn check_dimensions<P: Point>(bounds: &Bounds) -> Result<(), EngineError> {
    match P::dimensions() {
        Some(expected) if expected != bounds.dimensions() => Err(EngineError::DimensionMismatch {
            expected,
            found: bounds.dimensions(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ConfigError;
    use crate::test_utils::{
        OpenPoint, OutOfTableError, RejectingPoint, SimplexPoint, TabulatedPoint,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_square() -> Bounds {
        Bounds::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap()
    }

    #[test]
    fn fills_design_with_exactly_size_compliant_points() {
        let mut rng = StdRng::seed_from_u64(1);
        for size in [1, 10, 64] {
            let design: Design<SimplexPoint> =
                run(&unit_square(), size, &SamplingConfig::unbounded(), &mut rng).unwrap();
            assert_eq!(design.len(), size);
            for p in &design {
                assert!(p.point().is_compliant().unwrap());
                assert!(p.unscaled().iter().sum::<f64>() <= 1.0);
            }
        }
    }

    #[test]
    fn physical_coordinates_stay_within_bounds() {
        let bounds = Bounds::new(vec![0.2, 0.2, 0.0, 0.0], vec![1.38, 1.0, 0.1, 1.38]).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let design: Design<OpenPoint> =
            run(&bounds, 200, &SamplingConfig::unbounded(), &mut rng).unwrap();
        assert!(design.iter().all(|p| bounds.contains(p.unscaled())));
        assert!(design
            .iter()
            .all(|p| p.normalized().iter().all(|z| (0.0..1.0).contains(z))));
    }

    #[test]
    fn stored_normalized_coordinates_reproduce_physical_ones() {
        let bounds = Bounds::new(vec![-3.0, 100.0], vec![7.0, 250.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let design: Design<OpenPoint> =
            run(&bounds, 50, &SamplingConfig::unbounded(), &mut rng).unwrap();
        for p in &design {
            let rescaled = bounds.scale(p.normalized());
            for (a, b) in rescaled.iter().zip(p.unscaled()) {
                assert!((a - b).abs() <= 1e-12);
            }
            assert_eq!(p.point().0, p.unscaled());
        }
    }

    #[test]
    fn rejection_is_reflected_in_attempt_count() {
        let mut rng = StdRng::seed_from_u64(4);
        let design: Design<SimplexPoint> =
            run(&unit_square(), 200, &SamplingConfig::unbounded(), &mut rng).unwrap();
        assert!(design.attempts() > 200);
        let rate = design.acceptance_rate();
        assert!(rate > 0.3 && rate < 0.7, "acceptance rate {rate}");
    }

    #[test]
    fn same_seed_yields_bit_identical_designs() {
        let build = || -> Design<SimplexPoint> {
            let mut rng = StdRng::seed_from_u64(99);
            run(&unit_square(), 10, &SamplingConfig::unbounded(), &mut rng).unwrap()
        };
        let a = build();
        let b = build();
        assert_eq!(a.attempts(), b.attempts());
        for (pa, pb) in a.iter().zip(&b) {
            let bits_a: Vec<u64> = pa.unscaled().iter().map(|v| v.to_bits()).collect();
            let bits_b: Vec<u64> = pb.unscaled().iter().map(|v| v.to_bits()).collect();
            assert_eq!(bits_a, bits_b);
            assert_eq!(pa.normalized(), pb.normalized());
        }
    }

    #[test]
    fn attempt_limit_reports_exhausted_sampling() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = run::<RejectingPoint, _>(
            &unit_square(),
            3,
            &SamplingConfig::with_max_attempts(500),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(EngineError::ExhaustedSampling {
                accepted: 0,
                requested: 3,
                attempts: 500
            })
        ));
    }

    #[test]
    fn attempt_limit_counts_partial_progress() {
        let mut rng = StdRng::seed_from_u64(6);
        let result = run::<SimplexPoint, _>(
            &unit_square(),
            1000,
            &SamplingConfig::with_max_attempts(1000),
            &mut rng,
        );
        match result {
            Err(EngineError::ExhaustedSampling {
                accepted,
                requested,
                attempts,
            }) => {
                assert!(accepted > 0 && accepted < 1000);
                assert_eq!(requested, 1000);
                assert_eq!(attempts, 1000);
            }
            other => panic!("expected exhausted sampling, got {other:?}"),
        }
    }

    #[test]
    fn generous_attempt_limit_does_not_change_result() {
        let capped: Design<SimplexPoint> = run(
            &unit_square(),
            10,
            &SamplingConfig::with_max_attempts(1_000_000),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();
        let uncapped: Design<SimplexPoint> = run(
            &unit_square(),
            10,
            &SamplingConfig::unbounded(),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();
        assert_eq!(capped.unscaled(), uncapped.unscaled());
    }

    #[test]
    fn zero_size_is_a_configuration_error() {
        let mut rng = StdRng::seed_from_u64(8);
        let result = run::<SimplexPoint, _>(&unit_square(), 0, &SamplingConfig::unbounded(), &mut rng);
        assert!(matches!(
            result,
            Err(EngineError::Config(ConfigError::InvalidParameter { name: "size", .. }))
        ));
    }

    #[test]
    fn declared_dimensions_must_match_bounds() {
        let bounds = Bounds::new(vec![0.0; 3], vec![1.0; 3]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let result = run::<SimplexPoint, _>(&bounds, 4, &SamplingConfig::unbounded(), &mut rng);
        assert!(matches!(
            result,
            Err(EngineError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn compliance_errors_propagate_with_source_intact() {
        let bounds = Bounds::new(vec![0.9], vec![1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        let err = run::<TabulatedPoint, _>(&bounds, 1, &SamplingConfig::unbounded(), &mut rng)
            .unwrap_err();
        match err {
            EngineError::Point { source } => {
                let inner = source.downcast_ref::<OutOfTableError>().unwrap();
                assert!(inner.0 >= 0.9);
            }
            other => panic!("expected point error, got {other:?}"),
        }
    }
}
