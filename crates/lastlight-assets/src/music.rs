//! Ambient music loops.
//!
//! Three seamless loops built from layered drones, pads, and rhythmic
//! pulses. Each loop gets the fade seam treatment and Haas widening into
//! stereo. Root notes: title D2, management A3, combat E2.

use lastlight_audio::effects::{fade, stereo};
use lastlight_audio::filter::{high_pass, low_pass};
use lastlight_audio::mixer::{self, MixerOutput};
use lastlight_audio::oscillator::{num_samples, sine, square, white_noise, TWO_PI};
use rand_pcg::Pcg32;

const SR: f64 = 22050.0;

/// Haas parameters shared by all three loops.
const WIDEN_DELAY_MS: f64 = 0.6;
const WIDEN_RIGHT_GAIN: f64 = 0.85;

fn add_scaled(out: &mut [f64], src: &[f64], gain: f64) {
    for (o, &s) in out.iter_mut().zip(src.iter()) {
        *o += s * gain;
    }
}

/// Sine LFO as a multiplier curve: `sin(2 pi f t) * depth + offset`.
fn lfo(freq: f64, depth: f64, offset: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| (TWO_PI * freq * i as f64 / SR).sin() * depth + offset)
        .collect()
}

fn finish(mut samples: Vec<f64>, fade_seconds: f64, headroom: f64) -> MixerOutput {
    fade::loop_seam(&mut samples, num_samples(fade_seconds, SR));
    mixer::normalize(&mut samples, headroom);
    mixer::clip(&mut samples);
    MixerOutput::Stereo(stereo::widen(&samples, WIDEN_DELAY_MS, WIDEN_RIGHT_GAIN, SR))
}

/// Title screen: 30 s slow dark drone on D.
pub fn title_ambient(rng: &mut Pcg32) -> MixerOutput {
    let duration = 30.0;
    let n = num_samples(duration, SR);
    let root = 73.42;
    let mut out = vec![0.0; n];

    // Deep bass drone: first four harmonics with slow vibrato
    for harmonic in 1..=4u32 {
        let wave = sine(root * harmonic as f64, duration, SR);
        let vibrato = lfo(0.15, 0.02, 1.0, n);
        let volume = 0.25 / harmonic as f64;
        for i in 0..n {
            out[i] += wave[i] * vibrato[i] * volume;
        }
    }

    // Mid pad: Dm chord tones with a slow phasing LFO on the phase itself
    for &note in &[root, root * 1.2, root * 1.5] {
        let pad: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 / SR;
                let phase_lfo = (TWO_PI * 0.08 * t).sin() * 0.1;
                (TWO_PI * note * t + phase_lfo).sin()
            })
            .collect();
        add_scaled(&mut out, &low_pass(&pad, 800.0, SR), 0.12);
    }

    // High shimmer: filtered noise plus fixed resonant partials
    for &freq in &[440.0, 880.0, 1320.0] {
        add_scaled(&mut out, &sine(freq, duration, SR), 0.03);
    }
    let shimmer = low_pass(&white_noise(rng, n), 1200.0, SR);
    add_scaled(&mut out, &shimmer, 0.08);

    // Slow amplitude pulse, one cycle every 8 seconds
    let pulse = lfo(0.125, 0.15, 0.85, n);
    for i in 0..n {
        out[i] *= pulse[i];
    }

    finish(out, 2.0, 0.7)
}

/// Management screen: 30 s warm pad on A with arpeggio.
pub fn management_ambient(_rng: &mut Pcg32) -> MixerOutput {
    let duration = 30.0;
    let n = num_samples(duration, SR);
    let root = 220.0;
    let mut out = vec![0.0; n];

    // Warm pad: A major chord tones with harmonics and gentle tremolo
    let chord = [root, root * 1.26, root * 1.5];
    for (i, &note) in chord.iter().enumerate() {
        let mut pad = sine(note, duration, SR);
        for harmonic in [2.0, 3.0] {
            add_scaled(&mut pad, &sine(note * harmonic, duration, SR), 0.15 / harmonic);
        }
        let tremolo = lfo(2.0, 0.1, 0.9, n);
        let volume = if i == 0 { 0.18 } else { 0.12 };
        for j in 0..n {
            out[j] += pad[j] * tremolo[j] * volume;
        }
    }

    // Arpeggio: A C# E A, one note per second, cycling every 4 seconds
    let arp_notes = [root, root * 1.26, root * 1.5, root * 2.0];
    let note_duration = 1.0;
    let note_samples = num_samples(note_duration, SR);
    let attack_samples = num_samples(0.1, SR);
    let cycles = (duration / 4.0) as usize;
    for cycle in 0..cycles {
        for (i, &note) in arp_notes.iter().enumerate() {
            let start = num_samples(cycle as f64 * 4.0 + i as f64 * note_duration, SR);
            if start + note_samples > n {
                continue;
            }
            let mut wave = sine(note, note_duration, SR);
            for (j, s) in wave.iter_mut().enumerate().take(attack_samples) {
                *s *= j as f64 / attack_samples as f64;
            }
            for (j, &s) in wave.iter().enumerate() {
                out[start + j] += s * 0.15;
            }
        }
    }

    // Bass pulse an octave below root, swelling every 2 seconds
    let bass = sine(root * 0.5, duration, SR);
    let pulse = lfo(0.5, 0.2, 0.8, n);
    for i in 0..n {
        out[i] += bass[i] * pulse[i] * 0.15;
    }

    finish(out, 2.0, 0.75)
}

/// Combat: 20 s tense loop on E at 120 BPM.
pub fn combat_ambient(rng: &mut Pcg32) -> MixerOutput {
    let duration = 20.0;
    let n = num_samples(duration, SR);
    let root = 82.41;
    let beat_freq = 2.0; // 120 BPM
    let mut out = vec![0.0; n];

    // Aggressive bass: odd harmonics plus slight detune, then darkened
    let mut bass = sine(root, duration, SR);
    for harmonic in [3.0, 5.0, 7.0] {
        add_scaled(&mut bass, &sine(root * harmonic, duration, SR), 0.2 / harmonic);
    }
    add_scaled(&mut bass, &sine(root * 1.01, duration, SR), 0.1);
    add_scaled(&mut out, &low_pass(&bass, 300.0, SR), 0.25);

    // Kick pattern: hard on beat 1, soft on beat 3
    let kick_samples = num_samples(0.1, SR);
    let total_beats = (duration * beat_freq) as usize;
    for beat in 0..total_beats {
        let volume = match beat % 4 {
            0 => 0.3,
            2 => 0.15,
            _ => 0.0,
        };
        if volume == 0.0 {
            continue;
        }
        let start = num_samples(beat as f64 / beat_freq, SR);
        for j in 0..kick_samples {
            let idx = start + j;
            if idx >= n {
                break;
            }
            let t = j as f64 / SR;
            out[idx] += (TWO_PI * 60.0 * t).sin() * (-t * 20.0).exp() * volume;
        }
    }

    // Tense pad: Em chord tones, rhythmically gated every 2 beats
    for &note in &[root, root * 1.2, root * 1.5] {
        let mut pad = sine(note, duration, SR);
        for harmonic in [2.0, 3.0] {
            add_scaled(&mut pad, &sine(note * harmonic, duration, SR), 0.1 / harmonic);
        }
        let gate = square(beat_freq / 2.0, duration, 0.6, SR);
        for i in 0..n {
            out[i] += pad[i] * gate[i] * 0.15;
        }
    }

    // High-band tension bursts twice per beat
    let tension = low_pass(&high_pass(&white_noise(rng, n), 2000.0, SR), 5000.0, SR);
    let bursts = square(beat_freq * 2.0, duration, 0.2, SR);
    for i in 0..n {
        out[i] += tension[i] * bursts[i] * 0.12;
    }

    // Accent an octave up, every 4 beats
    let accent = sine(root * 2.0, duration, SR);
    let accent_gate = square(beat_freq / 4.0, duration, 0.1, SR);
    for i in 0..n {
        out[i] += accent[i] * accent_gate[i] * 0.1;
    }

    finish(out, 1.0, 0.8)
}
