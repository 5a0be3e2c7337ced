//! Randomness seam for the resolver.
//!
//! The resolver never touches an ambient RNG: every roll (damage variance,
//! hit checks, flee) is drawn through [`RngSource`]. Production injects an
//! OS-seeded source from the runtime; tests inject fixed sequences so a turn
//! replays identically.

/// Injected random-number source.
///
/// One method is enough: every formula in the resolver is expressed over a
/// uniform `[0, 1)` draw.
pub trait RngSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform percent roll in `[0, 100)`.
    fn roll_percent(&mut self) -> f64 {
        self.next_f64() * 100.0
    }

    /// Damage variance factor, uniform in `[0.9, 1.1)`.
    fn variance(&mut self) -> f64 {
        0.9 + self.next_f64() * 0.2
    }
}

/// PCG-XSH-RR random number generator.
///
/// Small (64-bit state), fast, and fully deterministic from its seed, which
/// makes it the replay source of choice: record the seed with a session and
/// every turn re-resolves to the same outcome.
#[derive(Clone, Copy, Debug)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        // One warm-up step decorrelates small seeds.
        Self {
            state: Self::step(seed ^ Self::INCREMENT),
        }
    }

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.state = Self::step(state);
        Self::output(state)
    }
}

impl RngSource for Pcg32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * (1.0 - f64::EPSILON)
    }
}

/// Scripted source replaying a fixed sequence of draws.
///
/// Draws past the end of the sequence return `0.0`; tests should script
/// exactly as many values as the turn consumes.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Source that returns `value` on every draw.
    pub fn fixed(value: f64) -> Self {
        Self {
            values: vec![value],
            cursor: usize::MAX, // sentinel: always replay values[0]
        }
    }
}

impl RngSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.cursor == usize::MAX {
            return self.values.first().copied().unwrap_or(0.0);
        }
        let value = self.values.get(self.cursor).copied().unwrap_or(0.0);
        self.cursor += 1;
        value
    }
}
