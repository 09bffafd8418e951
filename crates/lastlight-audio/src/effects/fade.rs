//! Linear fades for loop-seam treatment.
//!
//! Ambient music loops end-to-start, so the tail fade must be the exact
//! time-reverse of the head fade. Both use the ramp `i / n` with the zero
//! endpoint at the outer edge of the buffer: sample 0 of a fade-in and the
//! final sample of a fade-out are exactly 0.0.

/// Multiplies the first `fade_samples` samples by a rising linear ramp.
pub fn fade_in(samples: &mut [f64], fade_samples: usize) {
    let n = fade_samples.min(samples.len());
    if n == 0 {
        return;
    }
    for i in 0..n {
        samples[i] *= i as f64 / n as f64;
    }
}

/// Multiplies the last `fade_samples` samples by a falling linear ramp.
///
/// The amplitude profile is the time-reverse of [`fade_in`] with the same
/// `fade_samples`.
pub fn fade_out(samples: &mut [f64], fade_samples: usize) {
    let len = samples.len();
    let n = fade_samples.min(len);
    if n == 0 {
        return;
    }
    for j in 0..n {
        samples[len - 1 - j] *= j as f64 / n as f64;
    }
}

/// Applies the loop-seam treatment: fade-in at the head, matching
/// fade-out at the tail.
pub fn loop_seam(samples: &mut [f64], fade_samples: usize) {
    fade_in(samples, fade_samples);
    fade_out(samples, fade_samples);
}
