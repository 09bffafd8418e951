//! Haas-style stereo widening.
//!
//! Builds a stereo image from a mono buffer by giving the right channel a
//! sub-millisecond delay and a slight gain offset. The ear fuses the two
//! channels into one source with perceived width; no true spatial
//! synthesis happens here.

use crate::mixer::StereoOutput;

/// Widens a mono buffer into a stereo pair.
///
/// The left channel is the input unchanged. The right channel is the input
/// delayed by `delay_ms` (leading samples are silence) and scaled by
/// `right_gain`. Both channels keep the input length.
pub fn widen(mono: &[f64], delay_ms: f64, right_gain: f64, sample_rate: f64) -> StereoOutput {
    let delay = ((delay_ms / 1000.0) * sample_rate).round() as usize;

    let mut right = vec![0.0; mono.len()];
    for i in delay..mono.len() {
        right[i] = mono[i - delay] * right_gain;
    }

    StereoOutput {
        left: mono.to_vec(),
        right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator::sine;

    #[test]
    fn test_channels_keep_input_length() {
        let mono = sine(440.0, 0.25, 22050.0);
        let stereo = widen(&mono, 0.5, 0.9, 22050.0);
        assert_eq!(stereo.left.len(), mono.len());
        assert_eq!(stereo.right.len(), mono.len());
    }

    #[test]
    fn test_left_channel_is_unchanged() {
        let mono = sine(440.0, 0.1, 22050.0);
        let stereo = widen(&mono, 0.7, 0.85, 22050.0);
        assert_eq!(stereo.left, mono);
    }

    #[test]
    fn test_right_channel_is_delayed_and_scaled() {
        let sr = 22050.0;
        let mono = sine(440.0, 0.1, sr);
        let delay = ((0.7 / 1000.0) * sr).round() as usize;
        let stereo = widen(&mono, 0.7, 0.85, sr);

        for i in 0..delay {
            assert_eq!(stereo.right[i], 0.0);
        }
        for i in delay..mono.len() {
            assert!((stereo.right[i] - mono[i - delay] * 0.85).abs() < 1e-15);
        }
    }

    #[test]
    fn test_zero_delay_is_gain_only() {
        let mono = vec![0.5, -0.5, 0.25];
        let stereo = widen(&mono, 0.0, 0.8, 22050.0);
        assert_eq!(stereo.right, vec![0.4, -0.4, 0.2]);
    }

    #[test]
    fn test_empty_input() {
        let stereo = widen(&[], 0.5, 0.9, 22050.0);
        assert!(stereo.is_empty());
    }
}
