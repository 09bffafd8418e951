//! Comb-filter reverb.
//!
//! Sums delayed, attenuated copies of the input at fixed millisecond
//! offsets. The offsets are mutually prime-ish so the taps never line up
//! into a periodic comb artifact. Cheap and deterministic; no allpass
//! diffusion stage.

use crate::error::{AudioError, AudioResult};

/// Tap delays in milliseconds.
const TAP_DELAYS_MS: [f64; 4] = [29.0, 37.0, 44.0, 53.0];

/// Applies comb-filter reverb and returns a new buffer.
///
/// Each tap `k` contributes the input delayed by `TAP_DELAYS_MS[k]` and
/// scaled by `decay^(k+1)`. If the wet sum exceeds unity the whole buffer
/// is peak-normalized back to 1.0; otherwise the amplitude is untouched.
pub fn comb_reverb(samples: &[f64], decay: f64, sample_rate: f64) -> AudioResult<Vec<f64>> {
    if !(0.0..1.0).contains(&decay) {
        return Err(AudioError::invalid_param(
            "reverb.decay",
            format!("must be 0.0-1.0, got {}", decay),
        ));
    }

    let mut out = samples.to_vec();

    for (k, &delay_ms) in TAP_DELAYS_MS.iter().enumerate() {
        let delay = ((delay_ms / 1000.0) * sample_rate).round() as usize;
        let gain = decay.powi(k as i32 + 1);
        for i in delay..out.len() {
            out[i] += samples[i - delay] * gain;
        }
    }

    let peak = out.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    if peak > 1.0 {
        for s in &mut out {
            *s /= peak;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator::sine;

    #[test]
    fn test_length_preserved() {
        let input = sine(440.0, 0.5, 22050.0);
        let out = comb_reverb(&input, 0.4, 22050.0).unwrap();
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(comb_reverb(&[], 0.5, 22050.0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_decay_is_identity() {
        let input = sine(220.0, 0.1, 22050.0);
        let out = comb_reverb(&input, 0.0, 22050.0).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_rejects_out_of_range_decay() {
        assert!(comb_reverb(&[0.0; 64], 1.0, 22050.0).is_err());
        assert!(comb_reverb(&[0.0; 64], -0.1, 22050.0).is_err());
    }

    #[test]
    fn test_impulse_produces_taps_at_expected_offsets() {
        let sr = 22050.0;
        let mut input = vec![0.0; 4096];
        input[0] = 1.0;
        let out = comb_reverb(&input, 0.5, sr).unwrap();

        // Dry impulse survives
        assert_eq!(out[0], 1.0);
        // First tap at 29 ms with gain decay^1
        let tap0 = ((29.0 / 1000.0) * sr).round() as usize;
        assert!((out[tap0] - 0.5).abs() < 1e-12);
        // Second tap at 37 ms with gain decay^2
        let tap1 = ((37.0 / 1000.0) * sr).round() as usize;
        assert!((out[tap1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_normalizes_only_when_sum_exceeds_unity() {
        let sr = 22050.0;

        // Quiet input: taps never push the peak over 1.0, output untouched
        // in the dry region before the first tap lands.
        let quiet = vec![0.2; 4096];
        let out = comb_reverb(&quiet, 0.5, sr).unwrap();
        assert_eq!(out[0], 0.2);

        // Full-scale input: the wet sum clips past 1.0 and gets pulled back.
        let loud = vec![1.0; 4096];
        let out = comb_reverb(&loud, 0.5, sr).unwrap();
        let peak = out.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        assert!((peak - 1.0).abs() < 1e-12);
    }
}
