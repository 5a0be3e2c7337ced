//! Production randomness source.

use combat_core::RngSource;
use rand::Rng;
use rand::rngs::ThreadRng;

/// OS-seeded source backed by [`rand::rngs::ThreadRng`].
///
/// Production rolls need no determinism; replayability comes from tests
/// injecting scripted sources instead.
#[derive(Clone, Debug, Default)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RngSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
