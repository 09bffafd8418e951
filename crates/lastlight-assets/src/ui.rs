//! UI sound effects: short blips, sweeps, and whooshes.

use lastlight_audio::envelope::AdsrParams;
use lastlight_audio::filter::low_pass;
use lastlight_audio::mixer::{Layer, Mixer, MixerOutput};
use lastlight_audio::oscillator::{linear_sweep, num_samples, sine, square, white_noise};
use rand_pcg::Pcg32;

use crate::support::{finish_one_shot, GAME_SR as SR};

/// 0.08 s square-wave blip.
pub fn click(_rng: &mut Pcg32) -> MixerOutput {
    let samples = low_pass(&square(800.0, 0.08, 0.3, SR), 2000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.001, 0.02, 0.06))
}

/// 0.05 s soft sine tick.
pub fn hover(_rng: &mut Pcg32) -> MixerOutput {
    let samples = low_pass(&sine(600.0, 0.05, SR), 3000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.001, 0.01, 0.04))
}

/// 0.15 s rising sweep, 200 to 800 Hz.
pub fn dialog_open(_rng: &mut Pcg32) -> MixerOutput {
    let samples = low_pass(&linear_sweep(200.0, 800.0, 0.15, SR), 2000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.02, 0.05, 0.08))
}

/// 0.12 s falling sweep, 800 to 200 Hz.
pub fn dialog_close(_rng: &mut Pcg32) -> MixerOutput {
    let samples = low_pass(&linear_sweep(800.0, 200.0, 0.12, SR), 2000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.01, 0.04, 0.07))
}

/// Two-tone confirmation: A4 then C#5 with a short gap.
pub fn end_turn(_rng: &mut Pcg32) -> MixerOutput {
    let mut mix = Mixer::new(num_samples(0.25, SR));
    mix.add(Layer::new(sine(440.0, 0.1, SR), 1.0));
    mix.add(Layer::with_delay(sine(554.0, 0.1, SR), 1.0, num_samples(0.15, SR)));
    let samples = low_pass(&mix.mix_mono(), 3000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.01, 0.05, 0.14))
}

/// 0.4 s filtered noise whoosh.
pub fn transition(rng: &mut Pcg32) -> MixerOutput {
    let mut samples = white_noise(rng, num_samples(0.4, SR));
    for _ in 0..3 {
        samples = low_pass(&samples, 5000.0, SR);
    }
    finish_one_shot(samples, &AdsrParams::percussive(0.05, 0.15, 0.2))
}
