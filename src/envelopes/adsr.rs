//! ADSR (Attack, Decay, Sustain, Release) envelope shaper.

use super::Ramp;
use crate::{Result, Signal, SynthError, sample_count};

/// ADSR envelope parameters.
///
/// Attack, decay and release are durations in seconds. Sustain is a level in
/// [0, 1], not a duration: the sustain segment simply fills whatever time the
/// other three stages leave over.
///
/// # Examples
///
/// ```
/// use keysynth::EnvelopeParams;
///
/// // 10ms attack, 50ms decay, 70% sustain, 100ms release
/// let params = EnvelopeParams::new(0.01, 0.05, 0.7, 0.1);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.1,
            sustain: 0.7,
            release: 0.2,
        }
    }
}

/// Sample counts for each envelope stage over a particular buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageLengths {
    pub attack: usize,
    pub decay: usize,
    /// Whatever the other stages leave of the buffer; negative when they overrun it.
    pub sustain: isize,
    pub release: usize,
}

impl EnvelopeParams {
    /// Creates envelope parameters. Values are stored as given; see [`validate`](Self::validate).
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Sets the attack time.
    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = attack;
        self
    }

    /// Sets the decay time.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the sustain level.
    pub fn with_sustain(mut self, sustain: f64) -> Self {
        self.sustain = sustain;
        self
    }

    /// Sets the release time.
    pub fn with_release(mut self, release: f64) -> Self {
        self.release = release;
        self
    }

    /// Checks that times are finite and non-negative and sustain is in [0, 1].
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        for (name, seconds) in [
            ("attack", self.attack),
            ("decay", self.decay),
            ("release", self.release),
        ] {
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(SynthError::invalid_param(
                    name,
                    format!("must be a non-negative number of seconds, got {seconds}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.sustain) {
            return Err(SynthError::invalid_param(
                "sustain",
                format!("must be between 0 and 1, got {}", self.sustain),
            ));
        }
        Ok(())
    }

    /// Splits a buffer of `total` samples into stage lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::EnvelopeParams;
    ///
    /// let stages = EnvelopeParams::new(0.25, 0.25, 0.5, 0.5).stage_lengths(8, 8);
    /// assert_eq!((stages.attack, stages.decay, stages.release), (2, 2, 4));
    /// assert_eq!(stages.sustain, 0);
    /// ```
    pub fn stage_lengths(&self, total: usize, sample_rate: u32) -> StageLengths {
        let attack = sample_count(sample_rate, self.attack);
        let decay = sample_count(sample_rate, self.decay);
        let release = sample_count(sample_rate, self.release);
        let sustain = to_isize(total)
            .saturating_sub(to_isize(attack))
            .saturating_sub(to_isize(decay))
            .saturating_sub(to_isize(release));
        StageLengths {
            attack,
            decay,
            sustain,
            release,
        }
    }
}

fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Writes the points of `ramp` starting at buffer index `start`.
///
/// Points that would land before index 0 or past the end are dropped.
fn write_segment(envelope: &mut [f64], start: isize, ramp: Ramp) {
    let (begin, skip) = if start < 0 {
        (0, start.unsigned_abs())
    } else {
        (start as usize, 0)
    };
    for (index, k) in (begin..envelope.len()).zip(skip..ramp.len()) {
        envelope[index] = ramp.value(k);
    }
}

/// Builds the envelope curve for a buffer of `total` samples.
///
/// The curve starts zero-filled. Attack (0 → 1), decay (1 → sustain) and the
/// sustain hold are written in index order from the start of the buffer.
/// The release ramp (sustain → 0) always occupies the last `release` samples,
/// counted from the end of the buffer, and overwrites whatever the earlier
/// stages put there when they overrun. Any stage that extends past either end
/// of the buffer keeps only its in-bounds points.
///
/// # Examples
///
/// ```
/// use keysynth::{EnvelopeParams, envelope_curve};
///
/// let params = EnvelopeParams::new(0.1, 0.1, 0.5, 0.1);
/// assert_eq!(envelope_curve(5, 10, &params), vec![0.0, 1.0, 0.5, 0.5, 0.5]);
/// ```
pub fn envelope_curve(total: usize, sample_rate: u32, params: &EnvelopeParams) -> Vec<f64> {
    let stages = params.stage_lengths(total, sample_rate);
    let mut envelope = vec![0.0; total];

    write_segment(&mut envelope, 0, Ramp::new(0.0, 1.0, stages.attack));
    write_segment(
        &mut envelope,
        to_isize(stages.attack),
        Ramp::new(1.0, params.sustain, stages.decay),
    );

    let sustain_start = stages.attack.saturating_add(stages.decay);
    if stages.sustain > 0 && sustain_start < total {
        let sustain_end = sustain_start
            .saturating_add(stages.sustain as usize)
            .min(total);
        envelope[sustain_start..sustain_end].fill(params.sustain);
    }

    if stages.release > 0 {
        write_segment(
            &mut envelope,
            to_isize(total).saturating_sub(to_isize(stages.release)),
            Ramp::new(params.sustain, 0.0, stages.release),
        );
    }

    envelope
}

/// Multiplies `signal` by its ADSR envelope, returning a new signal of the same length.
///
/// # Errors
///
/// Returns `SynthError::InvalidParameter` for a zero sample rate or parameters
/// that fail [`EnvelopeParams::validate`]. Stage overruns are not errors.
pub fn apply_envelope(signal: &Signal, sample_rate: u32, params: &EnvelopeParams) -> Result<Signal> {
    if sample_rate == 0 {
        return Err(SynthError::invalid_param("sample_rate", "must be positive"));
    }
    params.validate()?;

    let envelope = envelope_curve(signal.len(), sample_rate, params);
    Ok(signal
        .iter()
        .zip(envelope)
        .map(|(&sample, level)| sample * level)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(len: usize) -> Signal {
        Signal::from_samples(vec![1.0; len])
    }

    #[test]
    fn test_stage_lengths() {
        let stages = EnvelopeParams::new(0.1, 0.1, 0.5, 0.1).stage_lengths(5, 10);
        assert_eq!(
            stages,
            StageLengths {
                attack: 1,
                decay: 1,
                sustain: 2,
                release: 1,
            }
        );
    }

    #[test]
    fn test_one_sample_stages() {
        let params = EnvelopeParams::new(0.1, 0.1, 0.5, 0.1);
        let shaped = apply_envelope(&ones(5), 10, &params).unwrap();
        assert_eq!(shaped.samples(), &[0.0, 1.0, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_full_shape() {
        // 8 Hz: attack 2, decay 2, release 2, sustain 4
        let params = EnvelopeParams::new(0.25, 0.25, 0.5, 0.25);
        let curve = envelope_curve(10, 8, &params);
        assert_eq!(
            curve,
            vec![0.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0]
        );
    }

    #[test]
    fn test_release_overwrites_decay() {
        // attack 2, decay 1, release 2 over 4 samples: sustain is -1
        let params = EnvelopeParams::new(0.2, 0.1, 0.5, 0.2);
        assert_eq!(params.stage_lengths(4, 10).sustain, -1);
        assert_eq!(envelope_curve(4, 10, &params), vec![0.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_release_longer_than_buffer_keeps_tail() {
        // release 5 over 3 samples: only the last three ramp points fit
        let params = EnvelopeParams::new(0.0, 0.0, 0.5, 0.5);
        assert_eq!(envelope_curve(3, 10, &params), vec![0.25, 0.125, 0.0]);
    }

    #[test]
    fn test_attack_longer_than_buffer_keeps_head() {
        let params = EnvelopeParams::new(0.4, 0.0, 0.5, 0.0);
        let curve = envelope_curve(2, 10, &params);
        assert_eq!(curve[0], 0.0);
        assert!((curve[1] - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_huge_release_only_touches_buffer() {
        let params = EnvelopeParams::new(0.0, 0.0, 0.5, 1.0e6);
        let curve = envelope_curve(4, 44100, &params);
        assert_eq!(curve.len(), 4);
        assert_eq!(curve[3], 0.0);
        assert!(curve[0] > 0.0 && curve[0] < 1e-9);
    }

    #[test]
    fn test_zero_release_leaves_tail_at_sustain() {
        let params = EnvelopeParams::new(0.0, 0.0, 0.7, 0.0);
        assert_eq!(envelope_curve(4, 10, &params), vec![0.7; 4]);
    }

    #[test]
    fn test_empty_signal() {
        let shaped = apply_envelope(&Signal::default(), 44100, &EnvelopeParams::default()).unwrap();
        assert!(shaped.is_empty());
    }

    #[test]
    fn test_length_preserved() {
        for len in [0, 1, 7, 100, 22050] {
            let shaped = apply_envelope(&ones(len), 44100, &EnvelopeParams::default()).unwrap();
            assert_eq!(shaped.len(), len);
        }
    }

    #[test]
    fn test_scales_input() {
        let signal = Signal::from_samples(vec![-2.0, 4.0, 4.0, 4.0, 4.0]);
        let params = EnvelopeParams::new(0.1, 0.1, 0.5, 0.1);
        let shaped = apply_envelope(&signal, 10, &params).unwrap();
        assert_eq!(shaped.samples(), &[-0.0, 4.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_validation() {
        let bad = [
            EnvelopeParams::default().with_attack(-0.1),
            EnvelopeParams::default().with_decay(f64::NAN),
            EnvelopeParams::default().with_release(f64::INFINITY),
            EnvelopeParams::default().with_sustain(1.5),
            EnvelopeParams::default().with_sustain(-0.1),
        ];
        for params in bad {
            assert!(matches!(
                apply_envelope(&ones(4), 10, &params),
                Err(SynthError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_zero_sample_rate() {
        assert!(apply_envelope(&ones(4), 0, &EnvelopeParams::default()).is_err());
    }

    #[test]
    fn test_sustain_is_not_clamped_silently() {
        let err = EnvelopeParams::default().with_sustain(2.0).validate().unwrap_err();
        assert!(err.to_string().contains("sustain"));
    }
}
