//! Scene SFX: cinematic stingers for narrative moments.
//!
//! Unlike the buffer-based game set, scene sounds are authored as
//! per-sample generators `f(t, duration)` because most of them are driven
//! by time-gated events (pulsing alarms, heartbeat hits, probability-gated
//! geiger clicks) that read naturally at the sample level. The generator
//! output is clamped, enveloped with the family ADSR, and exported at
//! 44100 Hz with a hot quantization gain.

use lastlight_audio::envelope::{self, AdsrParams};
use lastlight_audio::mixer::MixerOutput;
use lastlight_audio::oscillator::{num_samples, TWO_PI};
use rand::Rng;
use rand_pcg::Pcg32;

const SR: f64 = 44100.0;

// Family envelopes: attack and release are tuned per family, decay and
// sustain keep the house defaults unless noted.
const ENV_COMMON: AdsrParams = AdsrParams { attack: 0.1, decay: 0.1, sustain: 0.7, release: 0.5 };
const ENV_EVENT: AdsrParams = AdsrParams { attack: 0.1, decay: 0.1, sustain: 0.7, release: 0.5 };
const ENV_LOSS: AdsrParams = AdsrParams { attack: 0.15, decay: 0.1, sustain: 0.7, release: 0.8 };
const ENV_MISSION: AdsrParams = AdsrParams { attack: 0.05, decay: 0.1, sustain: 0.7, release: 0.5 };
const ENV_OBJECTIVE: AdsrParams = AdsrParams { attack: 0.02, decay: 0.05, sustain: 0.8, release: 0.4 };
const ENV_ELIMINATION: AdsrParams = AdsrParams { attack: 0.05, decay: 0.1, sustain: 0.7, release: 0.5 };
const ENV_ARRIVAL: AdsrParams = AdsrParams { attack: 0.1, decay: 0.1, sustain: 0.7, release: 0.6 };
const ENV_GAME_OVER: AdsrParams = AdsrParams { attack: 0.05, decay: 0.1, sustain: 0.7, release: 1.0 };
const ENV_INTRO: AdsrParams = AdsrParams { attack: 0.2, decay: 0.2, sustain: 0.8, release: 0.8 };

/// Runs a per-sample generator over `duration` seconds and finishes it
/// with the family envelope.
fn render(
    duration: f64,
    adsr: &AdsrParams,
    rng: &mut Pcg32,
    mut gen: impl FnMut(f64, f64, &mut Pcg32) -> f64,
) -> MixerOutput {
    let n = num_samples(duration, SR);
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / SR;
        samples.push(gen(t, duration, rng).clamp(-1.0, 1.0));
    }
    envelope::apply_adsr(&mut samples, adsr, SR);
    MixerOutput::Mono(samples)
}

fn sin_at(t: f64, freq: f64) -> f64 {
    (TWO_PI * freq * t).sin()
}

fn saw_at(t: f64, freq: f64) -> f64 {
    2.0 * (t * freq).rem_euclid(1.0) - 1.0
}

fn square_at(t: f64, freq: f64) -> f64 {
    if (t * freq).rem_euclid(1.0) < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// 1.0 inside the first `duty` fraction of each cycle at `rate` Hz.
fn gate(t: f64, rate: f64, duty: f64) -> f64 {
    if (t * rate).rem_euclid(1.0) < duty {
        1.0
    } else {
        0.0
    }
}

/// Percussive hit envelope repeating at `rate` Hz; `sharp` sets how fast
/// each hit dies.
fn hits(t: f64, rate: f64, sharp: f64) -> f64 {
    (1.0 - (t * rate).rem_euclid(1.0) * sharp).max(0.0)
}

fn noise(rng: &mut Pcg32, amplitude: f64) -> f64 {
    rng.gen_range(-amplitude..=amplitude)
}

/// Equal-weight mix of components.
fn blend(parts: &[f64]) -> f64 {
    parts.iter().sum::<f64>() / parts.len() as f64
}

// ---------------------------------------------------------------------------
// Common scenes
// ---------------------------------------------------------------------------

/// Teleport beam: shimmer, carrier, mid-scene swoosh, bass hum.
pub fn beam(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_COMMON, rng, |t, dur, rng| {
        let shimmer = sin_at(t, 200.0 + 800.0 * sin_at(t, 10.0)) * 0.4;
        let carrier = sin_at(t, 2000.0 + 500.0 * sin_at(t, 20.0)) * 0.15;
        let progress = t / dur;
        let whoosh = noise(rng, 0.3)
            * (0.5 + 0.5 * sin_at(t, 2.0))
            * (1.0 - (progress - 0.5).abs() * 4.0).max(0.0);
        let hum = sin_at(t, 100.0) * 0.3;
        blend(&[shimmer, carrier, whoosh, hum])
    })
}

/// Mission success fanfare on a C major chord.
pub fn extraction_complete(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_COMMON, rng, |t, dur, _| {
        let progress = t / dur;
        let c = sin_at(t, 523.0) * 0.3;
        let e = sin_at(t, 659.0) * 0.25;
        let g = sin_at(t, 784.0) * 0.25;
        let c_high = sin_at(t, 1046.0) * 0.2;
        let sweep = sin_at(t, 400.0 + 400.0 * progress) * 0.15;
        let chime = if progress > 0.8 { sin_at(t, 1500.0) * 0.15 } else { 0.0 };
        blend(&[c, e, g, c_high, sweep, chime])
    })
}

/// Mission failed: dissonant fall, buzzer, static, low thud.
pub fn extraction_failed(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_COMMON, rng, |t, dur, rng| {
        let progress = t / dur;
        let fall = sin_at(t, 400.0 * (1.0 - progress * 0.5)) * 0.3;
        let buzz = square_at(t, 150.0) * 0.2 * gate(t, 4.0, 0.5);
        let static_ = noise(rng, 0.3) * progress * 0.3;
        let thud = sin_at(t, 60.0 * (1.0 - progress)) * 0.4;
        blend(&[fall, buzz, static_, thud])
    })
}

/// Docking with a trading outpost: latches, hum, comm bleeps, air hiss.
pub fn outpost_arrival(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_COMMON, rng, |t, dur, rng| {
        let latch = square_at(t, 60.0) * 0.2 * gate(t, 2.0, 0.1);
        let hum = sin_at(t, 120.0) * 0.25;
        let offset = [-1.0, 0.0, 1.0][rng.gen_range(0..3)];
        let bleep_on = if rng.gen::<f64>() < 0.1 { 1.0 } else { 0.0 };
        let bleep = sin_at(t, 1200.0 + 400.0 * offset) * 0.15 * bleep_on;
        let hiss = noise(rng, 0.2) * (1.0 - t / dur) * 0.3;
        blend(&[latch, hum, bleep, hiss])
    })
}

/// Final recap over the game-over screen: dying drone, vacuum wind, toll.
pub fn voyage_failure(rng: &mut Pcg32) -> MixerOutput {
    render(5.0, &ENV_COMMON, rng, |t, dur, rng| {
        let progress = t / dur;
        let drone = sin_at(t, 100.0 * (1.0 - progress * 0.2)) * 0.4;
        let wind = noise(rng, 0.2) * (0.3 + 0.3 * sin_at(t, 0.2)) * 0.3;
        let toll = sin_at(t, 220.0) * 0.3 * (1.0 - t.rem_euclid(2.0)).max(0.0);
        blend(&[drone, wind, toll])
    })
}

// ---------------------------------------------------------------------------
// Event scenes
// ---------------------------------------------------------------------------

/// Solar flare: rising energy, crackle, warning alarm, rumble.
pub fn solar_flare(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, dur, rng| {
        let energy = sin_at(t, 200.0 + 800.0 * (t / dur)) * 0.4;
        let crackle = noise(rng, 0.3) * (0.5 + 0.5 * sin_at(t, 3.0));
        let alarm_freq = if (t * 4.0).rem_euclid(1.0) < 0.5 { 880.0 } else { 660.0 };
        let alarm = sin_at(t, alarm_freq) * 0.2 * gate(t, 2.0, 0.7);
        let rumble = sin_at(t, 60.0 + 20.0 * sin_at(t, 0.5)) * 0.3;
        blend(&[energy, crackle, alarm, rumble])
    })
}

/// Meteor shower: impact thuds, debris rattle, hull stress, warning beep.
pub fn meteor_shower(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, _, rng| {
        let impact = sin_at(t, 80.0) * hits(t, 3.7, 8.0) * 0.5;
        let debris = noise(rng, 0.25) * (0.3 + 0.7 * sin_at(t, 5.5).abs());
        let stress = sin_at(t, 150.0 + 50.0 * sin_at(t, 1.3)) * 0.2;
        let beep = sin_at(t, 1200.0) * 0.15 * gate(t, 6.0, 0.1);
        blend(&[impact, debris, stress, beep])
    })
}

/// Disease outbreak: biohazard siren, heartbeat monitor, flatline hint.
pub fn disease_outbreak(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_EVENT, rng, |t, dur, _| {
        let siren = sin_at(t, 600.0 + 200.0 * sin_at(t, 1.5)) * 0.35;
        let heartbeat = sin_at(t, 1000.0) * hits(t, 1.2, 15.0) * 0.3;
        let flatline_mix = ((t / dur - 0.7) / 0.3).max(0.0);
        let flatline = sin_at(t, 1000.0) * 0.2 * flatline_mix;
        let tension = sin_at(t, 120.0) * 0.15;
        blend(&[siren, heartbeat, flatline, tension])
    })
}

/// System malfunction: sparks, descending error beeps, power sag, glitch.
pub fn system_malfunction(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, dur, rng| {
        let sparks = if sin_at(t, 7.3) > 0.7 { noise(rng, 0.5) * 0.4 } else { 0.0 };
        let error_beep =
            square_at(t, 800.0 - 200.0 * (t / dur)) * 0.15 * gate(t, 4.0, 0.15);
        let power = sin_at(t, 60.0) * 0.3 * (0.5 + 0.5 * sin_at(t, 0.8));
        let glitch_freq = if rng.gen::<f64>() < 0.05 {
            2000.0 + 1000.0 * rng.gen_range(-1.0..1.0)
        } else {
            440.0
        };
        let glitch = saw_at(t, glitch_freq) * 0.1;
        blend(&[sparks, error_beep, power, glitch])
    })
}

/// Pirate ambush: laser shots, explosion rumble, red alert, shield hits.
pub fn pirate_ambush(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, _, rng| {
        let laser_phase = (t * 5.0).rem_euclid(1.0);
        let laser =
            sin_at(t, 3000.0 - 2500.0 * laser_phase) * (1.0 - laser_phase * 5.0).max(0.0) * 0.3;
        let explosion = noise(rng, 0.4) * sin_at(t, 30.0) * 0.3;
        let alert_freq = if (t * 2.0).rem_euclid(1.0) < 0.5 { 440.0 } else { 550.0 };
        let alert = square_at(t, alert_freq) * 0.2;
        let shield = sin_at(t, 200.0 + 100.0 * sin_at(t, 8.0)) * 0.2;
        blend(&[laser, explosion, alert, shield])
    })
}

/// Space debris: metallic pings, hull groans, scraping, nav warning.
pub fn space_debris(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, _, rng| {
        let ping = sin_at(t, 2000.0 + 500.0 * sin_at(t, 0.7)) * hits(t, 4.3, 10.0) * 0.3;
        let groan = sin_at(t, 80.0 + 30.0 * sin_at(t, 0.3)) * 0.35;
        let scrape = noise(rng, 0.2) * sin_at(t, 2.5).abs() * 0.3;
        let nav = sin_at(t, 700.0) * 0.15 * gate(t, 3.0, 0.08);
        blend(&[ping, groan, scrape, nav])
    })
}

/// Sensor ghost: slow mysterious pings over an eerie bed.
pub fn sensor_ghost(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_EVENT, rng, |t, _, rng| {
        let ping = sin_at(t, 1500.0 + 500.0 * sin_at(t, 0.2)) * hits(t, 0.8, 6.0) * 0.25;
        let eerie1 = sin_at(t, 180.0 + 20.0 * sin_at(t, 0.15)) * 0.2;
        let eerie2 = sin_at(t, 270.0 + 15.0 * sin_at(t, 0.12)) * 0.15;
        let static_ = noise(rng, 0.08) * (0.3 + 0.7 * sin_at(t, 0.4).abs());
        let sweep = sin_at(t, 400.0 + 300.0 * sin_at(t, 0.5)) * 0.1;
        blend(&[ping, eerie1, eerie2, static_, sweep])
    })
}

/// Radiation storm: probability-gated geiger clicks over hum and static.
pub fn radiation_storm(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, dur, rng| {
        let click_rate = 10.0 + 20.0 * (t / dur);
        let click_on = rng.gen::<f64>() < click_rate / SR * 5.0;
        let geiger = if click_on { sin_at(t, 4000.0) * 0.3 } else { 0.0 };
        let rad_hum = sin_at(t, 100.0 + 50.0 * sin_at(t, 0.7)) * 0.3;
        let warn = sin_at(t, 950.0) * 0.2 * gate(t, 3.0, 0.5) * gate(t, 6.0, 0.3);
        let interference = noise(rng, 0.2) * (0.5 + 0.5 * sin_at(t, 1.5));
        blend(&[geiger, rad_hum, warn, interference])
    })
}

/// Cryo failure: pulsing alarm, freezing hiss, low whoosh, emergency beep.
pub fn cryo_failure(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, dur, rng| {
        let alarm = sin_at(t, 1100.0 + 100.0 * sin_at(t, 3.0)) * 0.25 * gate(t, 4.0, 0.6);
        let hiss = noise(rng, 0.3) * 0.3 * (0.5 + 0.5 * sin_at(t, 0.5));
        let whoosh = sin_at(t, 60.0 + 40.0 * (t / dur)) * 0.3;
        let emergency = sin_at(t, 800.0) * 0.2 * gate(t, 8.0, 0.05);
        blend(&[alarm, hiss, whoosh, emergency])
    })
}

/// All clear: peaceful hum with a gentle repeating chime.
pub fn clear_skies(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_EVENT, rng, |t, _, _| {
        let hum = sin_at(t, 120.0) * 0.2;
        let hum2 = sin_at(t, 180.0) * 0.1;
        let chime = sin_at(t, 800.0) * hits(t, 0.5, 4.0) * 0.2;
        let chime2 = sin_at(t, 1200.0) * hits(t, 0.5, 5.0) * 0.1;
        let ambience = sin_at(t, 300.0 + 10.0 * sin_at(t, 0.1)) * 0.08;
        blend(&[hum, hum2, chime, chime2, ambience])
    })
}

// ---------------------------------------------------------------------------
// Colonist loss milestones
// ---------------------------------------------------------------------------

/// First losses: warning tone, slow heartbeat, somber pad.
pub fn casualties_mount(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_LOSS, rng, |t, _, _| {
        let warn = sin_at(t, 500.0 + 100.0 * sin_at(t, 1.5)) * 0.3;
        let beat = sin_at(t, 80.0) * hits(t, 1.0, 8.0) * 0.35;
        let pad = sin_at(t, 220.0) * 0.15 + sin_at(t, 330.0) * 0.1;
        blend(&[warn, beat, pad])
    })
}

/// Losses mounting: heavier alarm, strain, faster heartbeat, dissonance.
pub fn weight_of_command(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_LOSS, rng, |t, _, _| {
        let alarm = sin_at(t, 400.0 + 150.0 * sin_at(t, 2.0)) * 0.35;
        let strain = sin_at(t, 60.0 + 20.0 * sin_at(t, 0.8)) * 0.3;
        let beat = sin_at(t, 70.0) * hits(t, 1.5, 6.0) * 0.3;
        let dissonance = sin_at(t, 310.0) * 0.1 + sin_at(t, 317.0) * 0.1;
        blend(&[alarm, strain, beat, dissonance])
    })
}

/// Critical losses: fast alarm, dying systems, chaos noise, bass dread.
pub fn desperation(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_LOSS, rng, |t, dur, rng| {
        let alarm = sin_at(t, 700.0) * 0.3 * gate(t, 5.0, 0.5);
        let dying = sin_at(t, 200.0 - 100.0 * (t / dur)) * 0.3;
        let chaos = noise(rng, 0.2) * (0.5 + 0.5 * sin_at(t, 3.0));
        let dread = sin_at(t, 45.0) * 0.35;
        blend(&[alarm, dying, chaos, dread])
    })
}

/// Near-total failure: wailing siren, descending systems, building static.
pub fn all_hope_lost(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_LOSS, rng, |t, dur, rng| {
        let siren = sin_at(t, 500.0 + 400.0 * sin_at(t, 3.0)) * 0.3;
        let failing = sin_at(t, 300.0 - 200.0 * (t / dur)) * 0.25;
        let static_ = noise(rng, 0.3) * (t / dur) * 0.4;
        let bass = sin_at(t, 35.0) * 0.4;
        blend(&[siren, failing, static_, bass])
    })
}

/// The end of the colony: powerdown, last heartbeat, flatline.
pub fn extinction(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_LOSS, rng, |t, dur, _| {
        let progress = t / dur;
        let powerdown = sin_at(t, 300.0 * (1.0 - progress * 0.8)) * 0.3 * (1.0 - progress);
        let beat = if t < dur * 0.3 {
            sin_at(t, 60.0) * hits(t, 0.8, 8.0) * 0.4
        } else {
            0.0
        };
        let flatline = if progress > 0.6 {
            sin_at(t, 1000.0) * 0.15 * (progress - 0.6) / 0.4
        } else {
            0.0
        };
        let hum = sin_at(t, 100.0) * 0.2 * (1.0 - progress);
        blend(&[powerdown, beat, flatline, hum])
    })
}

// ---------------------------------------------------------------------------
// Mission scenes
// ---------------------------------------------------------------------------

/// Station deployment: airlock hiss, rising beam, metallic clunk.
pub fn mission_station(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_MISSION, rng, |t, dur, rng| {
        let progress = t / dur;
        let hiss = if progress < 0.4 {
            noise(rng, 0.35) * (1.0 - progress * 3.0).max(0.0)
        } else {
            0.0
        };
        let beam = if t > 0.3 {
            let beam_progress = (t - 0.3) / (dur - 0.3);
            sin_at(t, 300.0 + 700.0 * beam_progress) * 0.35
                + sin_at(t, 600.0 + 1400.0 * beam_progress) * 0.15
        } else {
            0.0
        };
        let clunk = if t < 0.2 {
            sin_at(t, 150.0) * (1.0 - t * 10.0).max(0.0) * 0.4
        } else {
            0.0
        };
        let ambience = sin_at(t, 90.0) * 0.1;
        blend(&[hiss, beam, clunk, ambience])
    })
}

/// Asteroid deployment: rumble, drill hint, whoosh, metallic echoes.
pub fn mission_asteroid(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_MISSION, rng, |t, dur, rng| {
        let rumble = sin_at(t, 50.0 + 20.0 * sin_at(t, 0.5)) * 0.35;
        let drill = saw_at(t, 300.0 + 100.0 * sin_at(t, 4.0)) * 0.15;
        let progress = t / dur;
        let whoosh = noise(rng, 0.3) * (1.0 - (progress - 0.5).abs() * 4.0).max(0.0) * 0.3;
        let echo = sin_at(t, 800.0) * hits(t, 3.0, 8.0) * 0.15;
        blend(&[rumble, drill, whoosh, echo])
    })
}

/// Planet deployment: atmospheric entry, heat, wind, alien ambience.
pub fn mission_planet(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_MISSION, rng, |t, dur, rng| {
        let progress = t / dur;
        let atmo = noise(rng, 0.3) * (0.5 + 0.5 * sin_at(t, 0.5)) * 0.3;
        let heat =
            sin_at(t, 200.0 + 300.0 * (1.0 - (progress - 0.4).abs() * 4.0).max(0.0)) * 0.25;
        let wind = noise(rng, 0.2) * sin_at(t, 0.3).abs() * 0.25;
        let alien = sin_at(t, 250.0 + 30.0 * sin_at(t, 0.2)) * 0.15;
        let alien2 = sin_at(t, 370.0 + 20.0 * sin_at(t, 0.15)) * 0.1;
        blend(&[atmo, heat, wind, alien, alien2])
    })
}

// ---------------------------------------------------------------------------
// Objective, elimination, arrivals, game over, intro
// ---------------------------------------------------------------------------

/// Objective complete: ascending C5 E5 G5 C6 chime.
pub fn objective_complete(rng: &mut Pcg32) -> MixerOutput {
    render(2.5, &ENV_OBJECTIVE, rng, |t, dur, _| {
        let progress = t / dur;
        let note_freq = if progress < 0.25 {
            523.0
        } else if progress < 0.5 {
            659.0
        } else if progress < 0.75 {
            784.0
        } else {
            1047.0
        };
        let chime = sin_at(t, note_freq) * 0.3;
        let harmonic = sin_at(t, note_freq * 2.0) * 0.1;
        let sparkle = sin_at(t, note_freq * 3.0) * 0.05 * sin_at(t, 8.0).abs();
        let confirm = if progress > 0.85 { sin_at(t, 1200.0) * 0.1 } else { 0.0 };
        blend(&[chime, harmonic, sparkle, confirm])
    })
}

/// Combat over: last shot fades, then an ascending victory tone.
pub fn all_hostiles_eliminated(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_ELIMINATION, rng, |t, dur, rng| {
        let progress = t / dur;
        let shot = if progress < 0.3 {
            noise(rng, 0.3) * (1.0 - progress / 0.3) * 0.3
                + sin_at(t, 150.0) * (1.0 - progress / 0.3) * 0.2
        } else {
            0.0
        };
        let victory = if progress > 0.4 {
            let vic_progress = (progress - 0.4) / 0.6;
            let vic_freq = 400.0 + 400.0 * vic_progress;
            sin_at(t, vic_freq) * 0.3 + sin_at(t, vic_freq * 1.5) * 0.1
        } else {
            0.0
        };
        let clear = if progress > 0.7 {
            sin_at(t, 880.0) * 0.2 * gate(t, 3.0, 0.15)
        } else {
            0.0
        };
        blend(&[shot, victory, clear])
    })
}

/// Triumphant arrival at New Earth.
pub fn arrival_perfect(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_ARRIVAL, rng, |t, dur, _| {
        let progress = t / dur;
        let c = sin_at(t, 262.0) * 0.2;
        let e = sin_at(t, 330.0) * 0.15;
        let g = sin_at(t, 392.0) * 0.15;
        let sweep = sin_at(t, 200.0 + 600.0 * progress) * 0.15;
        let sparkle = sin_at(t, 1500.0 + 500.0 * sin_at(t, 6.0)) * 0.1 * sin_at(t, 4.0).abs();
        let horn = sin_at(t, 523.0 + 262.0 * progress) * 0.2;
        blend(&[c, e, g, sweep, sparkle, horn])
    })
}

/// Cautiously hopeful arrival.
pub fn arrival_good(rng: &mut Pcg32) -> MixerOutput {
    render(3.0, &ENV_ARRIVAL, rng, |t, dur, rng| {
        let progress = t / dur;
        let relief = noise(rng, 0.15) * (1.0 - progress * 2.0).max(0.0) * 0.2;
        let hope = sin_at(t, 330.0 + 50.0 * progress) * 0.25;
        let hope2 = sin_at(t, 440.0 + 30.0 * progress) * 0.15;
        let chime = sin_at(t, 800.0) * hits(t, 0.7, 5.0) * 0.2;
        let stable = sin_at(t, 150.0) * 0.1;
        blend(&[relief, hope, hope2, chime, stable])
    })
}

/// Bittersweet arrival against the odds.
pub fn arrival_bad(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_ARRIVAL, rng, |t, _, _| {
        let a = sin_at(t, 220.0) * 0.2;
        let c = sin_at(t, 262.0) * 0.15;
        let e = sin_at(t, 330.0) * 0.15;
        let pad = sin_at(t, 165.0) * 0.2;
        let hum = sin_at(t, 80.0 + 10.0 * sin_at(t, 0.2)) * 0.15;
        let chime = sin_at(t, 600.0) * hits(t, 0.4, 6.0) * 0.1;
        blend(&[a, c, e, pad, hum, chime])
    })
}

/// Game over, everyone is gone: dying systems, last breath, flatline.
pub fn game_over_extinction(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_GAME_OVER, rng, |t, dur, rng| {
        let progress = t / dur;
        let dying = sin_at(t, 200.0 * (1.0 - progress * 0.9)) * 0.3 * (1.0 - progress * 0.8);
        let breath = noise(rng, 0.2) * (1.0 - progress * 1.5).max(0.0) * 0.25;
        let flatline = if progress > 0.5 {
            sin_at(t, 1000.0) * 0.2 * ((progress - 0.5) / 0.2).min(1.0)
        } else {
            0.0
        };
        let void = sin_at(t, 40.0) * 0.3 * (1.0 - progress);
        blend(&[dying, breath, flatline, void])
    })
}

/// Catastrophic hull breach and explosion.
pub fn ship_destroyed(rng: &mut Pcg32) -> MixerOutput {
    render(3.5, &ENV_GAME_OVER, rng, |t, dur, rng| {
        let progress = t / dur;
        let explosion = if progress < 0.4 {
            noise(rng, 0.6) * (1.0 - progress / 0.4) * 0.5
                + sin_at(t, 60.0 + 40.0 * sin_at(t, 2.0)) * (1.0 - progress / 0.4) * 0.4
        } else {
            0.0
        };
        let breach = noise(rng, 0.3) * (1.0 - (progress - 0.3).abs() * 4.0).max(0.0) * 0.3;
        let tear =
            saw_at(t, 150.0 + 100.0 * sin_at(t, 5.0)) * 0.2 * (1.0 - progress * 2.0).max(0.0);
        let debris = noise(rng, 0.1) * (progress - 0.5).max(0.0) * 0.2;
        blend(&[explosion, breach, tear, debris])
    })
}

/// Loss of command: somber tones over a fading heartbeat.
pub fn captain_died(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_GAME_OVER, rng, |t, dur, _| {
        let progress = t / dur;
        let somber = sin_at(t, 150.0) * 0.25;
        let somber2 = sin_at(t, 225.0) * 0.15;
        let beat = if progress < 0.5 {
            sin_at(t, 60.0) * hits(t, 0.8, 8.0) * 0.3 * (1.0 - progress * 2.0)
        } else {
            0.0
        };
        let hum = sin_at(t, 90.0) * 0.15 * (1.0 - progress * 0.5).max(0.0);
        let mourn = sin_at(t, 440.0 * (1.0 - progress * 0.1)) * 0.1;
        blend(&[somber, somber2, beat, hum, mourn])
    })
}

/// The voyage begins: engines building, hopeful ascending tones.
pub fn voyage_intro(rng: &mut Pcg32) -> MixerOutput {
    render(4.0, &ENV_INTRO, rng, |t, dur, rng| {
        let progress = t / dur;
        let engine = sin_at(t, 80.0 + 120.0 * progress) * 0.3;
        let engine_rumble = noise(rng, 0.2) * (0.3 + 0.7 * progress) * 0.25;
        let hope = sin_at(t, 262.0 + 200.0 * progress) * 0.2;
        let hope2 = sin_at(t, 330.0 + 200.0 * progress) * 0.12;
        let whoosh = noise(rng, 0.3) * (1.0 - (progress - 0.5).abs() * 3.0).max(0.0) * 0.2;
        let sparkle = sin_at(t, 2000.0 + 500.0 * sin_at(t, 5.0)) * 0.05 * progress;
        blend(&[engine, engine_rumble, hope, hope2, whoosh, sparkle])
    })
}
