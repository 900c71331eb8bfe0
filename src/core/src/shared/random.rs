use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Source of uniform randomness injected into every engine call that rolls dice.
///
/// Seed a `StdRng` for reproducible negotiations, use `ThreadRng` in a live game,
/// or `NeutralRandom` to switch all noise off.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[min, max)`
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Always yields the midpoint: every `range` call returns its centre and
/// `chance` only passes for probabilities above one half.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralRandom;

impl RandomSource for NeutralRandom {
    fn next_unit(&mut self) -> f64 {
        0.5
    }
}
