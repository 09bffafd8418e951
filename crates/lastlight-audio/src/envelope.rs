//! ADSR envelope applied over a buffer of known length.
//!
//! One-shot assets have a fixed duration, so the envelope is laid out over
//! the whole buffer up front rather than driven by note-on/note-off events.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.1,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters, clamping to valid ranges.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Creates a percussive envelope (no sustain plateau).
    pub fn percussive(attack: f64, decay: f64, release: f64) -> Self {
        Self::new(attack, decay, 0.0, release)
    }
}

/// Inclusive-endpoint linear ramp, numpy `linspace` style.
///
/// A single-sample ramp holds the start value; longer ramps hit `end`
/// exactly at the final sample.
fn ramp(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if count <= 1 {
            start
        } else {
            start + (end - start) * i as f64 / (count - 1) as f64
        }
    })
}

/// Release ramp: like [`ramp`] down to zero, but a single-sample release
/// emits 0.0 so the envelope still closes at silence.
fn release_ramp(start: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if count <= 1 {
            0.0
        } else {
            start * (1.0 - i as f64 / (count - 1) as f64)
        }
    })
}

/// Generates the envelope curve for a buffer of `total_samples`.
///
/// Segment durations are converted to sample counts. If attack + decay +
/// release exceed the buffer, segments shrink in priority order: the
/// sustain plateau goes first (to zero), then release, then decay, then
/// attack. A non-zero requested release keeps at least one sample so the
/// envelope always ends at amplitude 0. The degradation order shapes very
/// short effects and must stay stable.
pub fn generate(params: &AdsrParams, total_samples: usize, sample_rate: f64) -> Vec<f64> {
    let to_samples = |seconds: f64| (seconds.max(0.0) * sample_rate).round() as usize;

    let mut attack = to_samples(params.attack);
    let mut decay = to_samples(params.decay);
    let mut release = to_samples(params.release);
    let release_requested = release > 0;
    let sustain_level = params.sustain.clamp(0.0, 1.0);

    let sustain = if attack + decay + release <= total_samples {
        total_samples - attack - decay - release
    } else {
        release = total_samples.saturating_sub(attack + decay);
        if release == 0 && release_requested {
            release = total_samples.min(1);
        }
        if attack + decay + release > total_samples {
            decay = total_samples.saturating_sub(attack + release);
        }
        if attack + decay + release > total_samples {
            attack = total_samples.saturating_sub(release);
        }
        0
    };

    let mut envelope = Vec::with_capacity(total_samples);
    envelope.extend(ramp(0.0, 1.0, attack));
    envelope.extend(ramp(1.0, sustain_level, decay));
    envelope.extend(std::iter::repeat(sustain_level).take(sustain));
    envelope.extend(release_ramp(sustain_level, release));
    debug_assert_eq!(envelope.len(), total_samples);
    envelope
}

/// Multiplies the ADSR envelope into the buffer in place.
pub fn apply_adsr(samples: &mut [f64], params: &AdsrParams, sample_rate: f64) {
    let envelope = generate(params, samples.len(), sample_rate);
    for (s, e) in samples.iter_mut().zip(envelope.iter()) {
        *s *= e;
    }
}
