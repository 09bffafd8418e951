//! Deterministic 16-bit PCM WAV output.
//!
//! Hand-rolled RIFF writer so the bytes are identical across platforms and
//! library versions. Asset hashes are computed over the PCM payload.

mod format;
mod result;
mod writer;

pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{samples_to_pcm16, stereo_to_pcm16, write_wav, write_wav_to_vec};
