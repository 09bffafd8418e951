//! Alarm and jingle sounds: the cryo siren plus the end-of-run stingers.

use lastlight_audio::effects::reverb::comb_reverb;
use lastlight_audio::envelope::AdsrParams;
use lastlight_audio::filter::low_pass;
use lastlight_audio::mixer::{Layer, Mixer, MixerOutput};
use lastlight_audio::oscillator::{num_samples, sine, sine_from_curve, TWO_PI};
use rand_pcg::Pcg32;

use crate::support::{finish_one_shot, GAME_SR as SR};

/// 0.6 s oscillating siren, 600 Hz center with a 200 Hz swing at 3 Hz.
pub fn cryo_alarm(_rng: &mut Pcg32) -> MixerOutput {
    let duration = 0.6;
    let n = num_samples(duration, SR);
    let freqs: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / SR;
            600.0 + 200.0 * (TWO_PI * 3.0 * t).sin()
        })
        .collect();
    let siren = low_pass(&sine_from_curve(&freqs, SR), 3000.0, SR);
    let samples = siren.iter().map(|s| s * 0.7).collect();
    finish_one_shot(samples, &AdsrParams::new(0.05, 0.2, 0.3, 0.05))
}

/// A chord stinger with a linear amplitude bend across its length and a
/// comb-reverb wash before the envelope closes it out.
fn chord_stinger(
    notes: &[f64],
    duration: f64,
    cutoff: f64,
    bend_start: f64,
    bend_end: f64,
    reverb_decay: f64,
    adsr: &AdsrParams,
) -> MixerOutput {
    let n = num_samples(duration, SR);
    let mut mix = Mixer::new(n);
    for &note in notes {
        mix.add(Layer::new(sine(note, duration, SR), 0.3));
    }
    let chord = low_pass(&mix.mix_mono(), cutoff, SR);

    let samples: Vec<f64> = chord
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let t = i as f64 / n as f64;
            s * (bend_start + (bend_end - bend_start) * t)
        })
        .collect();
    // Decay is a fixed in-range constant; the dry mix stands in if it
    // ever is not.
    let samples = comb_reverb(&samples, reverb_decay, SR).unwrap_or(samples);
    finish_one_shot(samples, adsr)
}

/// 1.5 s descending A minor chord.
pub fn game_over(_rng: &mut Pcg32) -> MixerOutput {
    chord_stinger(
        &[220.00, 261.63, 329.63],
        1.5,
        2000.0,
        1.0,
        0.7,
        0.4,
        &AdsrParams::percussive(0.1, 0.5, 0.9),
    )
}

/// 1.0 s ascending C major chord.
pub fn victory(_rng: &mut Pcg32) -> MixerOutput {
    chord_stinger(
        &[261.63, 329.63, 392.00],
        1.0,
        3000.0,
        1.0,
        1.2,
        0.3,
        &AdsrParams::percussive(0.05, 0.3, 0.65),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastlight_audio::rng::create_asset_rng;

    #[test]
    fn test_durations() {
        let mut rng = create_asset_rng(42, "alarms");
        assert_eq!(cryo_alarm(&mut rng).num_samples(), num_samples(0.6, SR));
        assert_eq!(game_over(&mut rng).num_samples(), num_samples(1.5, SR));
        assert_eq!(victory(&mut rng).num_samples(), num_samples(1.0, SR));
    }

    #[test]
    fn test_cryo_alarm_holds_a_sustain_plateau() {
        let mut rng = create_asset_rng(42, "alarms");
        let MixerOutput::Mono(samples) = cryo_alarm(&mut rng) else {
            panic!("expected mono");
        };
        // Siren keeps sounding mid-buffer at the 0.3 sustain level.
        let mid = &samples[num_samples(0.3, SR)..num_samples(0.5, SR)];
        let peak = mid.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        assert!(peak > 0.1);
        assert_eq!(*samples.last().unwrap(), 0.0);
    }

    #[test]
    fn test_stinger_reverb_reaches_the_output() {
        let adsr = AdsrParams::percussive(0.05, 0.3, 0.5);
        // Decay 0.0 is an identity reverb, so any difference comes from
        // the comb taps.
        let dry = chord_stinger(&[220.0], 1.0, 2000.0, 1.0, 1.0, 0.0, &adsr);
        let wet = chord_stinger(&[220.0], 1.0, 2000.0, 1.0, 1.0, 0.3, &adsr);
        let (MixerOutput::Mono(dry), MixerOutput::Mono(wet)) = (dry, wet) else {
            panic!("expected mono");
        };
        assert_eq!(dry.len(), wet.len());
        assert_ne!(dry, wet);
    }

    #[test]
    fn test_stingers_decay_to_silence() {
        let mut rng = create_asset_rng(42, "alarms");
        for output in [game_over(&mut rng), victory(&mut rng)] {
            let MixerOutput::Mono(samples) = output else {
                panic!("expected mono");
            };
            assert_eq!(*samples.last().unwrap(), 0.0);
            assert!(samples.iter().all(|s| s.abs() <= 1.0));
        }
    }
}
