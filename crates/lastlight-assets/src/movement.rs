//! Movement sound effects: footsteps, the extraction beam, and warp jumps.

use lastlight_audio::envelope::AdsrParams;
use lastlight_audio::filter::{band_pass, high_pass, low_pass};
use lastlight_audio::mixer::{Layer, Mixer, MixerOutput};
use lastlight_audio::oscillator::{linear_sweep, num_samples, white_noise};
use rand_pcg::Pcg32;

use crate::support::{finish_one_shot, GAME_SR as SR};

/// 0.08 s filtered noise tick.
pub fn footstep(rng: &mut Pcg32) -> MixerOutput {
    let n = num_samples(0.08, SR);
    let noise = band_pass(&white_noise(rng, n), 200.0, 1000.0, SR);
    let samples = noise.iter().map(|s| s * 0.5).collect();
    finish_one_shot(samples, &AdsrParams::percussive(0.001, 0.02, 0.06))
}

/// 1.0 s rising shimmer: three harmonically spaced upward sweeps with a
/// bright noise layer.
pub fn extraction_beam(rng: &mut Pcg32) -> MixerOutput {
    let duration = 1.0;
    let n = num_samples(duration, SR);
    let mut mix = Mixer::new(n);
    for (i, &base) in [200.0, 400.0, 600.0].iter().enumerate() {
        let sweep = linear_sweep(base, base * 1.5, duration, SR);
        mix.add(Layer::new(sweep, 0.2 / (i + 1) as f64));
    }
    mix.add(Layer::new(high_pass(&white_noise(rng, n), 2000.0, SR), 0.1));

    let samples = low_pass(&mix.mix_mono(), 4000.0, SR);
    finish_one_shot(samples, &AdsrParams::percussive(0.1, 0.3, 0.6))
}

/// 0.8 s warp jump: a low downward sweep under a mid-band whoosh.
pub fn jump_warp(rng: &mut Pcg32) -> MixerOutput {
    let duration = 0.8;
    let n = num_samples(duration, SR);
    let sweep = low_pass(&linear_sweep(100.0, 20.0, duration, SR), 500.0, SR);
    let whoosh = band_pass(&white_noise(rng, n), 300.0, 2000.0, SR);

    let mut mix = Mixer::new(n);
    mix.add(Layer::new(sweep, 0.4));
    mix.add(Layer::new(whoosh, 0.3));
    finish_one_shot(mix.mix_mono(), &AdsrParams::percussive(0.05, 0.2, 0.55))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastlight_audio::rng::create_asset_rng;

    #[test]
    fn test_durations_and_silence_at_edges() {
        let cases: [(fn(&mut Pcg32) -> MixerOutput, &str, f64); 3] = [
            (footstep, "footstep", 0.08),
            (extraction_beam, "extraction_beam", 1.0),
            (jump_warp, "jump_warp", 0.8),
        ];
        for (composer, name, seconds) in cases {
            let mut rng = create_asset_rng(42, name);
            let MixerOutput::Mono(samples) = composer(&mut rng) else {
                panic!("{name} must be mono");
            };
            assert_eq!(samples.len(), num_samples(seconds, SR), "{name}");
            assert_eq!(*samples.last().unwrap(), 0.0, "{name}");
        }
    }

    #[test]
    fn test_footstep_is_deterministic_per_name() {
        let run = || {
            let mut rng = create_asset_rng(42, "sfx/movement/footstep");
            let MixerOutput::Mono(samples) = footstep(&mut rng) else {
                panic!("expected mono");
            };
            samples
        };
        assert_eq!(run(), run());
    }
}
