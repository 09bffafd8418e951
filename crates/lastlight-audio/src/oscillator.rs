//! Basic waveform and noise generators.
//!
//! Every generator produces a buffer of exactly `round(duration * sample_rate)`
//! samples in [-1.0, 1.0]. A zero or negative duration yields an empty buffer.
//! Frequencies at or above Nyquist alias rather than error; that is an
//! accepted limitation of these naive oscillators.

use rand::Rng;
use rand_pcg::Pcg32;

/// Two pi, the full phase circle.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Number of samples for a given duration at a given sample rate.
pub fn num_samples(duration: f64, sample_rate: f64) -> usize {
    if duration <= 0.0 {
        0
    } else {
        (duration * sample_rate).round() as usize
    }
}

/// Accumulates phase from a per-sample frequency.
///
/// Sweeps must integrate frequency into phase sample by sample; evaluating
/// `sin(2*pi*f(t)*t)` directly produces audible phase discontinuities.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    /// Creates an accumulator starting at phase zero.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Advances by one sample at `freq` Hz and returns the new phase.
    pub fn advance(&mut self, freq: f64) -> f64 {
        self.phase += TWO_PI * freq / self.sample_rate;
        if self.phase >= TWO_PI {
            self.phase -= TWO_PI * (self.phase / TWO_PI).floor();
        }
        self.phase
    }
}

/// Generates a sine wave.
pub fn sine(freq: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    (0..n)
        .map(|i| (TWO_PI * freq * i as f64 / sample_rate).sin())
        .collect()
}

/// Generates a square wave with the given duty cycle.
pub fn square(freq: f64, duration: f64, duty: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    let duty = duty.clamp(0.0, 1.0);
    (0..n)
        .map(|i| {
            let cycle = (freq * i as f64 / sample_rate).rem_euclid(1.0);
            if cycle < duty {
                1.0
            } else {
                -1.0
            }
        })
        .collect()
}

/// Generates a sawtooth wave rising from -1 to 1 each cycle.
pub fn sawtooth(freq: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    (0..n)
        .map(|i| {
            let cycle = (freq * i as f64 / sample_rate).rem_euclid(1.0);
            2.0 * cycle - 1.0
        })
        .collect()
}

/// Generates uniform white noise in [-1, 1].
pub fn white_noise(rng: &mut Pcg32, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(-1.0..=1.0)).collect()
}

/// Generates pink (1/f) noise, peak-normalized.
///
/// White noise shaped by Paul Kellett's fixed-coefficient IIR approximation.
/// The spectral slope is approximate, good to within about +/-0.5 dB over
/// the audio band, which is all these assets need.
pub fn pink_noise(rng: &mut Pcg32, count: usize) -> Vec<f64> {
    let mut b = [0.0f64; 7];
    let mut out = Vec::with_capacity(count);

    for _ in 0..count {
        let white: f64 = rng.gen_range(-1.0..=1.0);
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] - white * 0.0168980;
        let pink = b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + white * 0.5362;
        b[6] = white * 0.115926;
        out.push(pink);
    }

    let peak = out.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    if peak > 0.0 {
        for s in &mut out {
            *s /= peak;
        }
    }
    out
}

/// Generates a sine whose frequency moves linearly from `f_start` to `f_end`.
pub fn linear_sweep(f_start: f64, f_end: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    let mut acc = PhaseAccumulator::new(sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let freq = f_start + (f_end - f_start) * t;
            acc.advance(freq).sin()
        })
        .collect()
}

/// Generates a sine whose frequency moves exponentially from `f_start` to `f_end`.
///
/// Both endpoints are floored at a small positive value; an exponential
/// sweep through zero is undefined.
pub fn exponential_sweep(f_start: f64, f_end: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let n = num_samples(duration, sample_rate);
    let f_start = f_start.max(1e-3);
    let f_end = f_end.max(1e-3);
    let ratio = f_end / f_start;
    let mut acc = PhaseAccumulator::new(sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let freq = f_start * ratio.powf(t);
            acc.advance(freq).sin()
        })
        .collect()
}

/// Generates a sine following an arbitrary per-sample frequency curve.
///
/// Used by siren and warble composers whose frequency is itself modulated.
pub fn sine_from_curve(freqs: &[f64], sample_rate: f64) -> Vec<f64> {
    let mut acc = PhaseAccumulator::new(sample_rate);
    freqs.iter().map(|&f| acc.advance(f).sin()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_sample_count_is_rounded() {
        // 0.08s at 44100 Hz must be exactly 3528 samples
        assert_eq!(num_samples(0.08, 44100.0), 3528);
        assert_eq!(sine(800.0, 0.08, 44100.0).len(), 3528);
        assert_eq!(square(800.0, 0.08, 0.3, 44100.0).len(), 3528);
        assert_eq!(sawtooth(800.0, 0.08, 44100.0).len(), 3528);
    }

    #[test]
    fn test_zero_and_negative_duration_yield_empty() {
        assert!(sine(440.0, 0.0, 22050.0).is_empty());
        assert!(sine(440.0, -1.0, 22050.0).is_empty());
        assert!(square(440.0, -0.5, 0.5, 22050.0).is_empty());
    }

    #[test]
    fn test_sine_range() {
        for freq in [55.0, 440.0, 2000.0, 10000.0] {
            let samples = sine(freq, 0.1, 44100.0);
            for &s in &samples {
                assert!(s.abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_square_values_and_duty() {
        let samples = square(100.0, 0.1, 0.25, 44100.0);
        assert!(samples.iter().all(|&s| s == 1.0 || s == -1.0));

        let high = samples.iter().filter(|&&s| s == 1.0).count();
        let ratio = high as f64 / samples.len() as f64;
        assert!((ratio - 0.25).abs() < 0.02);
    }

    #[test]
    fn test_sawtooth_range() {
        let samples = sawtooth(220.0, 0.1, 22050.0);
        for &s in &samples {
            assert!((-1.0..=1.0).contains(&s));
        }
        // Starts at the bottom of the ramp
        assert!((samples[0] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_white_noise_range_and_determinism() {
        let mut rng1 = create_rng(7);
        let mut rng2 = create_rng(7);
        let a = white_noise(&mut rng1, 1000);
        let b = white_noise(&mut rng2, 1000);
        assert_eq!(a, b);
        assert!(a.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_pink_noise_is_normalized_and_bass_heavy() {
        let mut rng = create_rng(11);
        let samples = pink_noise(&mut rng, 8192);
        let peak = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        assert!((peak - 1.0).abs() < 1e-9);

        // Pink noise has more low-frequency energy than white: successive
        // samples should be correlated, unlike white noise.
        let corr: f64 = samples.windows(2).map(|w| w[0] * w[1]).sum::<f64>() / samples.len() as f64;
        assert!(corr > 0.0);
    }

    #[test]
    fn test_linear_sweep_is_phase_continuous() {
        let samples = linear_sweep(200.0, 800.0, 0.15, 22050.0);
        assert_eq!(samples.len(), num_samples(0.15, 22050.0));

        // Phase accumulation keeps sample-to-sample steps bounded by the
        // largest instantaneous frequency in the sweep.
        let max_step = TWO_PI * 800.0 / 22050.0;
        for w in samples.windows(2) {
            assert!((w[1] - w[0]).abs() <= max_step + 1e-9);
        }
    }

    #[test]
    fn test_exponential_sweep_length() {
        let samples = exponential_sweep(100.0, 1600.0, 0.2, 44100.0);
        assert_eq!(samples.len(), num_samples(0.2, 44100.0));
        for &s in &samples {
            assert!(s.abs() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_sine_from_curve_matches_constant_sweep() {
        let freqs = vec![440.0; 100];
        let curved = sine_from_curve(&freqs, 44100.0);
        let swept = linear_sweep(440.0, 440.0, 100.0 / 44100.0, 44100.0);
        assert_eq!(curved.len(), swept.len());
        for (a, b) in curved.iter().zip(swept.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}
