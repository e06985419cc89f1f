use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use crate::config::SeedPolicy;

/// The single random source shared by both draw modes.
///
/// Created once per session and passed by `&mut` into every draw, so
/// the sequence of draws is fully determined by the seed.
#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// Seeds from the current wall-clock time. Not reproducible across
    /// runs and not suitable for anything security related.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp()) as u64;
        log::debug!("Seeding roller from clock: {seed}");
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Roller { rng }
    }

    pub fn from_policy(policy: SeedPolicy) -> Self {
        match policy {
            SeedPolicy::Clock => Self::from_clock(),
            SeedPolicy::Fixed(seed) => Self::from_seed(seed),
        }
    }

    /// Creates a new `Roller` seeded from this one.
    /// The two generators advance independently afterwards.
    pub fn fork(&mut self) -> Self {
        let mut seed = [0u8; 32];
        self.rng.fill(&mut seed);
        let rng = StdRng::from_seed(seed);
        Roller { rng }
    }

    /// Uniform index in `0..len`, or `None` if `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        let dist = Uniform::new(0, len).ok()?;
        Some(dist.sample(&mut self.rng))
    }

    /// Uniform value in `low..=high`.
    pub fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    #[cfg(test)]
    pub fn test_rng() -> Self {
        Self::from_seed(42)
    }
}
