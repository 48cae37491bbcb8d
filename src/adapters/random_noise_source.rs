use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::interfaces::ports::NoiseSource;
use crate::global_constants::NOISE_AMPLITUDE;

pub struct RandomNoiseSource {
    rng: StdRng,
    amplitude: f32,
}

impl RandomNoiseSource {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    #[allow(dead_code)]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            amplitude: NOISE_AMPLITUDE,
        }
    }
}

impl NoiseSource for RandomNoiseSource {
    fn next_offset(&mut self) -> f32 {
        self.rng.random_range(-self.amplitude..self.amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_stay_within_half_open_amplitude() {
        let mut source = RandomNoiseSource::from_entropy();

        for _ in 0..100_000 {
            let offset = source.next_offset();
            assert!((-25.0..25.0).contains(&offset), "offset {} out of range", offset);
        }
    }

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut first = RandomNoiseSource::seeded(42);
        let mut second = RandomNoiseSource::seeded(42);

        let a: Vec<f32> = (0..16).map(|_| first.next_offset()).collect();
        let b: Vec<f32> = (0..16).map(|_| second.next_offset()).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_offsets_cover_both_signs() {
        let mut source = RandomNoiseSource::seeded(7);

        let offsets: Vec<f32> = (0..1_000).map(|_| source.next_offset()).collect();

        assert!(offsets.iter().any(|o| *o < 0.0));
        assert!(offsets.iter().any(|o| *o > 0.0));
    }
}
