//! Last Light Odyssey Audio Core
//!
//! Deterministic procedural synthesis for the game's audio assets. Every
//! track and sound effect ships as a generated file; nothing is recorded.
//!
//! # Overview
//!
//! Composers build sounds from a small set of primitives that can be
//! layered together:
//!
//! - **Oscillators** - Sine, square, sawtooth, frequency sweeps
//! - **Noise** - White and pink noise
//! - **Filters** - One-pole RC low-pass, high-pass, band-pass
//! - **Envelope** - Buffer-length ADSR with graceful degradation
//! - **Effects** - Comb reverb, loop-seam fades, Haas stereo widening
//!
//! # Determinism
//!
//! Given the same base seed, output is byte-identical across runs on the
//! same platform. All randomness flows through PCG32 streams whose seeds
//! are derived per asset via BLAKE3 hashing, so regenerating one asset
//! never changes another.
//!
//! # Crate Structure
//!
//! - [`oscillator`] - Waveform and noise generators
//! - [`filter`] - One-pole IIR filters
//! - [`envelope`] - ADSR envelope over fixed-length buffers
//! - [`effects`] - Reverb, fades, stereo widening
//! - [`mixer`] - Layer mixing, normalization, clipping
//! - [`wav`] - Deterministic 16-bit PCM WAV writer
//! - [`rng`] - Seeded RNG with per-asset derivation

pub mod effects;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod mixer;
pub mod oscillator;
pub mod rng;
pub mod wav;

pub use envelope::AdsrParams;
pub use error::{AudioError, AudioResult};
pub use mixer::{Layer, Mixer, MixerOutput, StereoOutput};
pub use wav::WavResult;
