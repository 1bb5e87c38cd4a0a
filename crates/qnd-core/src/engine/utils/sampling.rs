use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

/// Draws a point uniformly from the half-open unit hypercube `[0, 1)^n`.
pub fn unit_vector<R: Rng + ?Sized>(rng: &mut R, dimensions: usize) -> Vec<f64> {
    (0..dimensions).map(|_| rng.r#gen::<f64>()).collect()
}

/// Derives one independent seed per trial from a master stream.
///
/// Seeds are drawn in trial order, so trial `i` always receives the same seed
/// for a given master seed no matter how trials are later scheduled.
pub fn trial_seeds(master_seed: Option<u64>, count: usize) -> Vec<u64> {
    let mut master = match master_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            debug!("No seed configured; seeding trial streams from OS entropy.");
            StdRng::from_entropy()
        }
    };
    (0..count).map(|_| master.next_u64()).collect()
}

#[inline]
pub fn trial_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
