//! Peak normalization.

use crate::{Result, Signal, SynthError};

/// Absolute peak amplitude every rendered note is scaled to.
pub const PEAK_LEVEL: f64 = 0.5;

/// Scales `signal` so its largest absolute sample equals `target_peak`.
///
/// # Errors
///
/// Returns `SynthError::Normalization` when the signal's peak is zero (which
/// includes the empty signal) or not finite, since there is nothing meaningful
/// to scale. Returns `SynthError::InvalidParameter` when `target_peak` is not
/// a positive finite number.
///
/// # Examples
///
/// ```
/// use keysynth::{Signal, normalize};
///
/// let signal = Signal::from_samples(vec![0.2, -0.4, 0.1]);
/// let normalized = normalize(&signal, 0.5).unwrap();
/// assert_eq!(normalized.samples(), &[0.25, -0.5, 0.125]);
/// ```
pub fn normalize(signal: &Signal, target_peak: f64) -> Result<Signal> {
    if !target_peak.is_finite() || target_peak <= 0.0 {
        return Err(SynthError::invalid_param(
            "target_peak",
            format!("must be a positive amplitude, got {target_peak}"),
        ));
    }

    let peak = signal.peak();
    if !peak.is_finite() || peak == 0.0 {
        return Err(SynthError::Normalization { peak });
    }

    Ok(signal.iter().map(|&s| s / peak * target_peak).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_to_target() {
        let signal = Signal::from_samples(vec![0.0, 2.0, -1.0]);
        let normalized = normalize(&signal, PEAK_LEVEL).unwrap();
        assert_eq!(normalized.samples(), &[0.0, 0.5, -0.25]);
        assert_eq!(normalized.peak(), PEAK_LEVEL);
    }

    #[test]
    fn test_negative_peak() {
        let signal = Signal::from_samples(vec![0.1, -0.8]);
        let normalized = normalize(&signal, 1.0).unwrap();
        assert_eq!(normalized[1], -1.0);
    }

    #[test]
    fn test_all_zero_signal_fails() {
        let err = normalize(&Signal::silence(16), PEAK_LEVEL).unwrap_err();
        assert!(matches!(err, SynthError::Normalization { peak } if peak == 0.0));
    }

    #[test]
    fn test_empty_signal_fails() {
        assert!(matches!(
            normalize(&Signal::default(), PEAK_LEVEL),
            Err(SynthError::Normalization { .. })
        ));
    }

    #[test]
    fn test_non_finite_peak_fails() {
        let signal = Signal::from_samples(vec![0.5, f64::INFINITY]);
        assert!(matches!(
            normalize(&signal, PEAK_LEVEL),
            Err(SynthError::Normalization { .. })
        ));
        let signal = Signal::from_samples(vec![f64::NAN, 0.5]);
        assert!(normalize(&signal, PEAK_LEVEL).is_err());
    }

    #[test]
    fn test_invalid_target() {
        let signal = Signal::from_samples(vec![0.5]);
        assert!(matches!(
            normalize(&signal, 0.0),
            Err(SynthError::InvalidParameter { .. })
        ));
        assert!(normalize(&signal, f64::NAN).is_err());
    }
}
