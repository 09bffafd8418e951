//! Combat sound effects.
//!
//! Weapon fire, impacts, and status cues. Mostly noise bursts and short
//! pitch sweeps with percussive envelopes.

use lastlight_audio::envelope::AdsrParams;
use lastlight_audio::filter::{high_pass, low_pass};
use lastlight_audio::mixer::{Layer, Mixer, MixerOutput};
use lastlight_audio::oscillator::{
    linear_sweep, num_samples, sine, sine_from_curve, square, white_noise,
};
use rand_pcg::Pcg32;

use crate::support::{finish_one_shot, GAME_SR as SR};

/// 0.15 s laser burst: bright noise over a falling sweep.
pub fn fire(rng: &mut Pcg32) -> MixerOutput {
    let n = num_samples(0.15, SR);
    let noise = high_pass(&white_noise(rng, n), 2000.0, SR);
    let sweep = linear_sweep(800.0, 400.0, 0.15, SR);

    let mut mix = Mixer::new(n);
    mix.add(Layer::new(noise, 0.3));
    mix.add(Layer::new(sweep, 0.5));
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.001, 0.05, 0.1))
}

/// 0.2 s impact: high noise plus a low thump.
pub fn hit(rng: &mut Pcg32) -> MixerOutput {
    let n = num_samples(0.2, SR);
    let noise = high_pass(&white_noise(rng, n), 1000.0, SR);
    let thump = low_pass(&sine(60.0, 0.2, SR), 200.0, SR);

    let mut mix = Mixer::new(n);
    mix.add(Layer::new(noise, 0.4));
    mix.add(Layer::new(thump, 0.6));
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.001, 0.05, 0.15))
}

/// 0.25 s ricochet: pitch rises through a gaussian bump and falls back.
pub fn miss(_rng: &mut Pcg32) -> MixerOutput {
    let duration = 0.25;
    let n = num_samples(duration, SR);
    let peak_time = duration * 0.3;
    let freqs: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / SR;
            let bump = (-((t - peak_time).powi(2)) / (2.0 * 0.05f64.powi(2))).exp();
            400.0 + 200.0 * bump
        })
        .collect();
    let tone = low_pass(&sine_from_curve(&freqs, SR), 1500.0, SR);
    let samples = tone.iter().map(|s| s * 0.5).collect();
    finish_one_shot(samples, &AdsrParams::percussive(0.01, 0.1, 0.14))
}

/// 0.2 s sharp snap: a 20 ms square click with a long silent tail.
pub fn overwatch(_rng: &mut Pcg32) -> MixerOutput {
    let snap = low_pass(&square(1200.0, 0.02, 0.1, SR), 3000.0, SR);
    let mut mix = Mixer::new(num_samples(0.2, SR));
    mix.add(Layer::new(snap, 1.0));
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.001, 0.05, 0.15))
}

/// 0.12 s rapid square burst.
pub fn turret_fire(_rng: &mut Pcg32) -> MixerOutput {
    let samples = low_pass(&square(800.0, 0.12, 0.2, SR), 2500.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.001, 0.03, 0.09))
}

/// 0.3 s rising chime arpeggio: C4 E4 G4.
pub fn heal(_rng: &mut Pcg32) -> MixerOutput {
    let note_duration = 0.1;
    let note_samples = num_samples(note_duration, SR);
    let mut mix = Mixer::new(num_samples(0.3, SR));
    for (i, &note) in [261.63, 329.63, 392.00].iter().enumerate() {
        let chime = low_pass(&sine(note, note_duration, SR), 4000.0, SR);
        mix.add(Layer::with_delay(chime, 1.0, i * note_samples));
    }
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.02, 0.08, 0.2))
}

/// 0.3 s rush rumble with rising intensity.
pub fn charge(rng: &mut Pcg32) -> MixerOutput {
    let duration = 0.3;
    let n = num_samples(duration, SR);
    let rumble = low_pass(&linear_sweep(80.0, 120.0, duration, SR), 300.0, SR);
    let noise = low_pass(&white_noise(rng, n), 500.0, SR);

    let samples: Vec<f64> = (0..n)
        .map(|i| {
            let intensity = i as f64 / n as f64;
            (rumble[i] * 0.6 + noise[i] * 0.2) * intensity
        })
        .collect();
    finish_one_shot(samples, &AdsrParams::percussive(0.05, 0.1, 0.15))
}

/// 0.25 s kill shot: deep bass with a sharp noise attack.
pub fn execute(rng: &mut Pcg32) -> MixerOutput {
    let n = num_samples(0.25, SR);
    let bass = low_pass(&sine(50.0, 0.25, SR), 150.0, SR);
    let attack = high_pass(&white_noise(rng, num_samples(0.05, SR)), 3000.0, SR);

    let mut mix = Mixer::new(n);
    mix.add(Layer::new(bass, 0.8));
    mix.add(Layer::new(attack, 0.5));
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.001, 0.1, 0.15))
}

/// 0.35 s sniper crack followed by a quieter echo at 150 ms.
///
/// The sustain plateau holds the envelope open through the echo; a
/// percussive envelope would close before it lands.
pub fn precision(rng: &mut Pcg32) -> MixerOutput {
    let crack = high_pass(&white_noise(rng, num_samples(0.1, SR)), 2000.0, SR);
    let mut mix = Mixer::new(num_samples(0.35, SR));
    mix.add(Layer::new(crack.clone(), 0.6));
    mix.add(Layer::with_delay(crack, 0.18, num_samples(0.15, SR)));
    finish_one_shot(mix.mix_mono(), &AdsrParams::new(0.001, 0.1, 0.3, 0.1))
}

/// 0.15 s dull thud.
pub fn damage(rng: &mut Pcg32) -> MixerOutput {
    let n = num_samples(0.15, SR);
    let noise = low_pass(&white_noise(rng, n), 800.0, SR);
    let thump = sine(80.0, 0.15, SR);

    let mut mix = Mixer::new(n);
    mix.add(Layer::new(noise, 0.4));
    mix.add(Layer::new(thump, 0.3));
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.001, 0.05, 0.1))
}

/// 0.5 s descending death tone.
pub fn death(_rng: &mut Pcg32) -> MixerOutput {
    let tone = low_pass(&linear_sweep(300.0, 50.0, 0.5, SR), 1000.0, SR);
    let samples = tone.iter().map(|s| s * 0.5).collect();
    finish_one_shot(samples, &AdsrParams::percussive(0.01, 0.2, 0.29))
}

/// 0.3 s double staccato alert beep.
pub fn enemy_alert(_rng: &mut Pcg32) -> MixerOutput {
    let mut mix = Mixer::new(num_samples(0.3, SR));
    mix.add(Layer::new(sine(1000.0, 0.08, SR), 1.0));
    mix.add(Layer::with_delay(sine(1200.0, 0.08, SR), 1.0, num_samples(0.13, SR)));
    let samples = low_pass(&mix.mix_mono(), 4000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.001, 0.02, 0.06))
}
