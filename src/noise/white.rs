//! White noise generator implementation.

use crate::Signal;
use rand::Rng;

/// A white noise generator.
///
/// White noise has equal power across all frequencies. Each sample is
/// a random value uniformly distributed between -1.0 and 1.0, independent
/// of every other sample. There is no seeding contract: the default
/// generator draws from the thread-local RNG.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::WhiteNoise;
    ///
    /// let mut noise = WhiteNoise::new();
    /// let signal = noise.render(64);
    /// assert_eq!(signal.len(), 64);
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for WhiteNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::WhiteNoise;
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one sample in [-1.0, 1.0].
    pub fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }

    /// Fills a buffer with fresh samples.
    pub fn fill(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Renders `len` fresh samples.
    pub fn render(&mut self, len: usize) -> Signal {
        let mut buffer = vec![0.0; len];
        self.fill(&mut buffer);
        Signal::from_samples(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_range() {
        let mut noise = WhiteNoise::new();
        // Generate many samples and verify all are in [-1.0, 1.0]
        for _ in 0..10000 {
            let sample = noise.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let mut noise = WhiteNoise::new();
        let samples = noise.render(100);
        let first = samples[0];
        let all_same = samples.iter().all(|&s| s == first);
        assert!(!all_same, "White noise should produce varying samples");
    }

    #[test]
    fn test_fill_buffer() {
        let mut noise = WhiteNoise::new();
        let mut buffer = vec![2.0; 128];
        noise.fill(&mut buffer);

        for sample in buffer {
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let a = WhiteNoise::with_rng(StdRng::seed_from_u64(42)).render(32);
        let b = WhiteNoise::with_rng(StdRng::seed_from_u64(42)).render(32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_empty() {
        assert!(WhiteNoise::new().render(0).is_empty());
    }
}
