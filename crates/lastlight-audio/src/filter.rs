//! One-pole IIR filters.
//!
//! Sample-recursive RC filters: each output depends on the previous output,
//! so the scan is inherently sequential. The first output sample is seeded
//! from the first input sample to avoid a startup transient. Buffer length
//! is always preserved.

use crate::oscillator::TWO_PI;

/// Applies a one-pole RC low-pass filter.
pub fn low_pass(samples: &[f64], cutoff: f64, sample_rate: f64) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let dt = 1.0 / sample_rate;
    let rc = 1.0 / (TWO_PI * cutoff);
    let alpha = dt / (rc + dt);

    let mut out = Vec::with_capacity(samples.len());
    out.push(samples[0]);
    for i in 1..samples.len() {
        let prev = out[i - 1];
        out.push(prev + alpha * (samples[i] - prev));
    }
    out
}

/// Applies a one-pole RC high-pass filter.
pub fn high_pass(samples: &[f64], cutoff: f64, sample_rate: f64) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }

    let dt = 1.0 / sample_rate;
    let rc = 1.0 / (TWO_PI * cutoff);
    let alpha = rc / (rc + dt);

    let mut out = Vec::with_capacity(samples.len());
    out.push(samples[0]);
    for i in 1..samples.len() {
        out.push(alpha * (out[i - 1] + samples[i] - samples[i - 1]));
    }
    out
}

/// Applies a band-pass as low-pass at the upper cutoff followed by
/// high-pass at the lower cutoff. Not a distinct algorithm.
pub fn band_pass(samples: &[f64], low_cutoff: f64, high_cutoff: f64, sample_rate: f64) -> Vec<f64> {
    high_pass(&low_pass(samples, high_cutoff, sample_rate), low_cutoff, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator::sine;

    fn rms(samples: &[f64]) -> f64 {
        (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
    }

    #[test]
    fn test_filters_preserve_length() {
        let input = sine(440.0, 0.1, 22050.0);
        assert_eq!(low_pass(&input, 1000.0, 22050.0).len(), input.len());
        assert_eq!(high_pass(&input, 1000.0, 22050.0).len(), input.len());
        assert_eq!(band_pass(&input, 200.0, 2000.0, 22050.0).len(), input.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(low_pass(&[], 1000.0, 22050.0).is_empty());
        assert!(high_pass(&[], 1000.0, 22050.0).is_empty());
    }

    #[test]
    fn test_first_sample_seeded_from_input() {
        let input = vec![0.7, 0.1, -0.2, 0.4];
        assert_eq!(low_pass(&input, 500.0, 22050.0)[0], 0.7);
        assert_eq!(high_pass(&input, 500.0, 22050.0)[0], 0.7);
    }

    #[test]
    fn test_lowpass_attenuates_high_frequencies() {
        // 5 kHz sine through a 5 Hz low-pass, twice: heavy attenuation.
        let input = sine(5000.0, 0.5, 44100.0);
        let once = low_pass(&input, 5.0, 44100.0);
        let twice = low_pass(&once, 5.0, 44100.0);

        let input_rms = rms(&input);
        let filtered_rms = rms(&twice);
        assert!(
            filtered_rms < input_rms * 0.05,
            "expected heavy attenuation, got {filtered_rms} vs {input_rms}"
        );
    }

    #[test]
    fn test_lowpass_passes_low_frequencies() {
        let input = sine(50.0, 0.5, 44100.0);
        let filtered = low_pass(&input, 5000.0, 44100.0);
        assert!(rms(&filtered) > rms(&input) * 0.9);
    }

    #[test]
    fn test_highpass_attenuates_low_frequencies() {
        let input = sine(20.0, 0.5, 44100.0);
        let filtered = high_pass(&input, 2000.0, 44100.0);
        assert!(rms(&filtered) < rms(&input) * 0.2);
    }

    #[test]
    fn test_highpass_removes_dc() {
        let input = vec![1.0; 4096];
        let filtered = high_pass(&input, 100.0, 44100.0);
        // After settling, a constant input decays toward zero.
        assert!(filtered[4095].abs() < 0.01);
    }

    #[test]
    fn test_bandpass_favors_center_band() {
        let low = sine(30.0, 0.5, 44100.0);
        let mid = sine(800.0, 0.5, 44100.0);
        let high = sine(15000.0, 0.5, 44100.0);

        let low_out = rms(&band_pass(&low, 200.0, 2000.0, 44100.0));
        let mid_out = rms(&band_pass(&mid, 200.0, 2000.0, 44100.0));
        let high_out = rms(&band_pass(&high, 200.0, 2000.0, 44100.0));

        assert!(mid_out > low_out);
        assert!(mid_out > high_out);
    }
}
