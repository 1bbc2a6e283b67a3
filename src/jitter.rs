//! Randomized pacing and random-choice utility.
//!
//! All randomness in the scraper (inter-item pauses, user-agent choice)
//! goes through [`Jitter`], which can be seeded for deterministic tests.

use std::time::Duration;

use rand::prelude::*;
use rand::rngs::StdRng;

pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A pause drawn uniformly from `[min_ms, max_ms)`.
    pub fn pause(&mut self, min_ms: u64, max_ms: u64) -> Duration {
        if max_ms <= min_ms {
            return Duration::from_millis(min_ms);
        }
        Duration::from_millis(self.rng.random_range(min_ms..max_ms))
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pauses_stay_in_range() {
        let mut jitter = Jitter::new();
        for _ in 0..200 {
            let pause = jitter.pause(1000, 4000);
            assert!(pause >= Duration::from_millis(1000));
            assert!(pause < Duration::from_millis(4000));
        }
    }

    #[test]
    fn seeded_jitter_is_deterministic() {
        let mut a = Jitter::seeded(42);
        let mut b = Jitter::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.pause(1000, 4000), b.pause(1000, 4000));
        }
    }

    #[test]
    fn degenerate_range_returns_the_minimum() {
        let mut jitter = Jitter::seeded(7);
        assert_eq!(jitter.pause(500, 500), Duration::from_millis(500));
        assert_eq!(jitter.pause(500, 100), Duration::from_millis(500));
    }

    #[test]
    fn choose_picks_from_the_pool() {
        let pool = ["a", "b", "c"];
        let mut jitter = Jitter::seeded(1);
        for _ in 0..20 {
            let picked = jitter.choose(&pool).unwrap();
            assert!(pool.contains(picked));
        }
        assert!(jitter.choose::<&str>(&[]).is_none());
    }
}
