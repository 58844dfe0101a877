use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random numbers for food placement.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct PlatformRandom {
    rng: StdRng,
}

impl PlatformRandom {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible source for tests and replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PlatformRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// An empty script yields `0.0` forever.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{PlatformRandom, RandomSource, ScriptedRandom};

    #[test]
    fn platform_values_stay_in_unit_interval() {
        let mut source = PlatformRandom::seeded(11);

        for _ in 0..1_000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = PlatformRandom::seeded(5);
        let mut b = PlatformRandom::seeded(5);

        for _ in 0..16 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn script_wraps_around() {
        let mut source = ScriptedRandom::new(vec![0.1, 0.7]);

        let drawn: Vec<f64> = (0..5).map(|_| source.next_unit()).collect();

        assert_eq!(drawn, vec![0.1, 0.7, 0.1, 0.7, 0.1]);
        assert_eq!(source.draws(), 5);
    }
}
