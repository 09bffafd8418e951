//! End-to-end pipeline tests: layers through mixing, effects, and export.

use lastlight_audio::effects::{fade, reverb, stereo};
use lastlight_audio::envelope::{self, AdsrParams};
use lastlight_audio::mixer::{self, Layer, Mixer};
use lastlight_audio::oscillator::{self, num_samples};
use lastlight_audio::rng::create_asset_rng;
use lastlight_audio::wav::WavResult;

/// A 30-second ambient loop with a 2-second seam must start and end at
/// silence and rise monotonically in amplitude through the fade-in.
#[test]
fn test_ambient_loop_is_seamless() {
    let sr = 22050.0;
    let duration = 30.0;
    let n = num_samples(duration, sr);
    let fade_len = num_samples(2.0, sr);

    let mut rng = create_asset_rng(42, "title_ambient");
    let mut mix = Mixer::new(n);
    mix.add(Layer::new(oscillator::sine(55.0, duration, sr), 0.5));
    mix.add(Layer::new(oscillator::sine(110.0, duration, sr), 0.3));
    mix.add(Layer::new(oscillator::pink_noise(&mut rng, n), 0.1));

    let mut samples = mix.mix_mono();
    mixer::normalize(&mut samples, 0.8);
    fade::loop_seam(&mut samples, fade_len);
    mixer::clip(&mut samples);

    assert_eq!(samples.len(), n);
    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[n - 1], 0.0);

    // The fade-in envelope rises monotonically even though the waveform
    // oscillates: check a running peak over coarse windows.
    let window = fade_len / 20;
    let mut last_peak = 0.0f64;
    for chunk in samples[..fade_len].chunks(window) {
        let peak = chunk.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        assert!(peak >= last_peak * 0.99, "fade-in amplitude dipped");
        last_peak = peak;
    }

    let wav = WavResult::from_stereo(&stereo::widen(&samples, 0.5, 0.9, sr), sr as u32, 1.0);
    assert!(wav.is_stereo);
    assert_eq!(wav.num_samples, n);
    assert_eq!(wav.wav_data.len(), 44 + n * 4);
}

/// A UI click rendered end to end: 0.08 s at 44.1 kHz is exactly 3528
/// samples, enveloped to open and close at zero.
#[test]
fn test_click_one_shot() {
    let sr = 44100.0;
    let mut samples = oscillator::sine(800.0, 0.08, sr);
    assert_eq!(samples.len(), 3528);

    envelope::apply_adsr(
        &mut samples,
        &AdsrParams::new(0.001, 0.02, 0.0, 0.05),
        sr,
    );
    mixer::normalize(&mut samples, 0.8);
    mixer::clip(&mut samples);

    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[3527], 0.0);

    let wav = WavResult::from_mono(&samples, sr as u32, 1.0);
    assert!(!wav.is_stereo);
    assert_eq!(wav.num_samples, 3528);
}

/// Identical seeds render byte-identical files, independent seeds differ.
#[test]
fn test_rendering_is_deterministic() {
    let render = |name: &str| {
        let mut rng = create_asset_rng(42, name);
        let mut samples = oscillator::white_noise(&mut rng, 2048);
        let filtered = lastlight_audio::filter::low_pass(&samples, 1200.0, 22050.0);
        samples.copy_from_slice(&filtered);
        let wet = reverb::comb_reverb(&samples, 0.4, 22050.0).unwrap();
        WavResult::from_mono(&wet, 22050, 1.0)
    };

    assert_eq!(render("combat_hit").pcm_hash, render("combat_hit").pcm_hash);
    assert_ne!(render("combat_hit").pcm_hash, render("combat_miss").pcm_hash);
}
