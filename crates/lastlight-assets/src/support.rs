//! Shared finishing chain for one-shot SFX.

use lastlight_audio::envelope::{self, AdsrParams};
use lastlight_audio::mixer::{self, MixerOutput};

/// Sample rate of the game set.
pub(crate) const GAME_SR: f64 = 22050.0;

/// Peak headroom for one-shot SFX.
const ONE_SHOT_HEADROOM: f64 = 0.8;

/// Envelope, normalize, clip. Every mono one-shot ends here.
pub(crate) fn finish_one_shot(mut samples: Vec<f64>, adsr: &AdsrParams) -> MixerOutput {
    envelope::apply_adsr(&mut samples, adsr, GAME_SR);
    mixer::normalize(&mut samples, ONE_SHOT_HEADROOM);
    mixer::clip(&mut samples);
    MixerOutput::Mono(samples)
}
