//! Waveform generation.
//!
//! This module turns a shape, frequency and duration into a rendered `Signal`.
//! Periodic shapes are evaluated analytically at each sample time; noise is
//! drawn from a random number generator.

mod sawtooth;
mod sine;
mod square;
mod traits;
mod triangle;

pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use square::Square;
pub use traits::Waveform;
pub use triangle::Triangle;

use crate::noise::WhiteNoise;
use crate::{Result, Signal, SynthError, sample_count};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The waveform shapes the generator can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Noise,
}

impl Shape {
    /// Every shape, in selector order.
    pub const ALL: [Shape; 5] = [
        Shape::Sine,
        Shape::Square,
        Shape::Sawtooth,
        Shape::Triangle,
        Shape::Noise,
    ];

    /// Display label, also accepted by `FromStr`.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Sine => "Sine",
            Shape::Square => "Square",
            Shape::Sawtooth => "Sawtooth",
            Shape::Triangle => "Triangle",
            Shape::Noise => "Noise",
        }
    }

    /// The following shape in selector order, wrapping around.
    pub fn next(self) -> Shape {
        let index = Shape::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Shape::ALL[(index + 1) % Shape::ALL.len()]
    }

    /// Whether this shape repeats with a fixed period.
    pub fn is_periodic(self) -> bool {
        !matches!(self, Shape::Noise)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shape {
    type Err = SynthError;

    /// Parses a shape label, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::Shape;
    ///
    /// let shape: Shape = "sawtooth".parse().unwrap();
    /// assert_eq!(shape, Shape::Sawtooth);
    /// assert!("Pulse".parse::<Shape>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SynthError::UnsupportedShape {
                name: s.to_string(),
            })
    }
}

/// Renders `floor(sample_rate × duration)` samples of the given shape.
///
/// Sample `i` is taken at time `i / sample_rate`. Noise uses the thread-local
/// RNG, so two calls with identical arguments produce different buffers.
///
/// # Errors
///
/// Returns `SynthError::InvalidParameter` for a zero sample rate, a negative or
/// non-finite duration, or a non-positive or non-finite frequency.
///
/// # Examples
///
/// ```
/// use keysynth::{generate, Shape};
///
/// let signal = generate(Shape::Sine, 440.0, 0.5, 44100).unwrap();
/// assert_eq!(signal.len(), 22050);
/// ```
pub fn generate(shape: Shape, frequency: f64, duration: f64, sample_rate: u32) -> Result<Signal> {
    generate_with_rng(
        shape,
        frequency,
        duration,
        sample_rate,
        &mut rand::thread_rng(),
    )
}

/// Like [`generate`], but draws noise from the supplied RNG.
///
/// Periodic shapes ignore the RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(
    shape: Shape,
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Signal> {
    check_request(frequency, duration, sample_rate)?;
    let len = sample_count(sample_rate, duration);

    let signal = match shape {
        Shape::Sine => Sine.render(frequency, len, sample_rate),
        Shape::Square => Square.render(frequency, len, sample_rate),
        Shape::Sawtooth => Sawtooth.render(frequency, len, sample_rate),
        Shape::Triangle => Triangle.render(frequency, len, sample_rate),
        Shape::Noise => WhiteNoise::with_rng(rng).render(len),
    };
    Ok(signal)
}

/// Parses `shape` and renders it; see [`generate`].
///
/// # Errors
///
/// Returns `SynthError::UnsupportedShape` before any rendering when the label
/// is not recognized.
pub fn generate_named(
    shape: &str,
    frequency: f64,
    duration: f64,
    sample_rate: u32,
) -> Result<Signal> {
    generate(shape.parse()?, frequency, duration, sample_rate)
}

fn check_request(frequency: f64, duration: f64, sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(SynthError::invalid_param("sample_rate", "must be positive"));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(SynthError::invalid_param(
            "duration",
            format!("must be a non-negative number of seconds, got {duration}"),
        ));
    }
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(SynthError::invalid_param(
            "frequency",
            format!("must be a positive number of Hz, got {frequency}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // 8 Hz at 1024 Hz keeps every sample time and phase exactly representable.
    const RATE: u32 = 1024;
    const FREQ: f64 = 8.0;
    const PERIOD: usize = 128;

    #[test]
    fn test_sample_count_for_every_shape() {
        for shape in Shape::ALL {
            let signal = generate(shape, 440.0, 0.5, 44100).unwrap();
            assert_eq!(signal.len(), 22050, "{shape}");
        }
    }

    #[test]
    fn test_sample_count_truncates() {
        let signal = generate(Shape::Sine, 440.0, 0.15, 10).unwrap();
        assert_eq!(signal.len(), 1);
    }

    #[test]
    fn test_zero_duration_is_empty() {
        for shape in Shape::ALL {
            let signal = generate(shape, 440.0, 0.0, 44100).unwrap();
            assert!(signal.is_empty());
        }
    }

    #[test]
    fn test_periodic_shapes_repeat_exactly() {
        // Sine and square go through sin() and are checked separately below.
        let exact = Shape::ALL
            .into_iter()
            .filter(|shape| shape.is_periodic() && !matches!(shape, Shape::Sine | Shape::Square));
        for shape in exact {
            let signal = generate(shape, FREQ, 1.0, RATE).unwrap();
            for i in 0..signal.len() - PERIOD {
                assert_eq!(signal[i], signal[i + PERIOD], "{shape} at {i}");
            }
        }
    }

    #[test]
    fn test_square_repeats_away_from_crossings() {
        // sin(2πk) rounds to ±tiny for k > 0, so whole-period samples may differ in sign
        let signal = generate(Shape::Square, FREQ, 1.0, RATE).unwrap();
        for i in (0..signal.len() - PERIOD).filter(|i| i % (PERIOD / 2) != 0) {
            assert_eq!(signal[i], signal[i + PERIOD], "square at {i}");
        }
    }

    #[test]
    fn test_sine_repeats_within_tolerance() {
        let signal = generate(Shape::Sine, FREQ, 1.0, RATE).unwrap();
        for i in 0..signal.len() - PERIOD {
            assert!((signal[i] - signal[i + PERIOD]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_square_first_sample_is_zero() {
        let signal = generate(Shape::Square, 440.0, 0.01, 44100).unwrap();
        assert_eq!(signal[0], 0.0);
        assert!(signal[1..].iter().all(|&s| s == 1.0 || s == -1.0));
    }

    #[test]
    fn test_noise_with_seeded_rng_is_reproducible() {
        let a = generate_with_rng(Shape::Noise, 440.0, 0.01, 44100, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = generate_with_rng(Shape::Noise, 440.0, 0.01, 44100, &mut StdRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_noise_differs_between_calls() {
        let a = generate(Shape::Noise, 440.0, 0.01, 44100).unwrap();
        let b = generate(Shape::Noise, 440.0, 0.01, 44100).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_requests() {
        assert!(matches!(
            generate(Shape::Sine, 440.0, 0.5, 0),
            Err(SynthError::InvalidParameter { ref name, .. }) if name == "sample_rate"
        ));
        assert!(matches!(
            generate(Shape::Sine, 440.0, -0.5, 44100),
            Err(SynthError::InvalidParameter { ref name, .. }) if name == "duration"
        ));
        assert!(matches!(
            generate(Shape::Sine, 0.0, 0.5, 44100),
            Err(SynthError::InvalidParameter { ref name, .. }) if name == "frequency"
        ));
        assert!(generate(Shape::Sine, f64::NAN, 0.5, 44100).is_err());
    }

    #[test]
    fn test_parse_labels() {
        for shape in Shape::ALL {
            assert_eq!(shape.label().parse::<Shape>().unwrap(), shape);
            assert_eq!(shape.to_string().to_uppercase().parse::<Shape>().unwrap(), shape);
        }
    }

    #[test]
    fn test_generate_named_rejects_unknown_shape() {
        let err = generate_named("Pulse", 440.0, 0.5, 44100).unwrap_err();
        assert!(matches!(err, SynthError::UnsupportedShape { ref name } if name == "Pulse"));
    }

    #[test]
    fn test_only_noise_is_aperiodic() {
        let aperiodic: Vec<Shape> = Shape::ALL.into_iter().filter(|s| !s.is_periodic()).collect();
        assert_eq!(aperiodic, vec![Shape::Noise]);
    }

    #[test]
    fn test_next_cycles_through_all_shapes() {
        let mut shape = Shape::Sine;
        for expected in [
            Shape::Square,
            Shape::Sawtooth,
            Shape::Triangle,
            Shape::Noise,
            Shape::Sine,
        ] {
            shape = shape.next();
            assert_eq!(shape, expected);
        }
    }
}
