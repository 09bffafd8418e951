//! WAV format parameters.

/// Format parameters for a 16-bit PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Mono format at the given sample rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
        }
    }

    /// Stereo format at the given sample rate.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
        }
    }

    /// Bits per sample; everything here is 16-bit PCM.
    pub const BITS_PER_SAMPLE: u16 = 16;

    /// Bytes per sample frame across all channels.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * (Self::BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
