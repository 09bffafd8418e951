//! Finished WAV asset with its PCM hash.

use std::path::Path;

use crate::error::AudioResult;
use crate::mixer::{MixerOutput, StereoOutput};

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, stereo_to_pcm16, write_wav_to_vec};

/// A rendered WAV file plus metadata for validation and reporting.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload (header excluded).
    pub pcm_hash: String,
    /// Whether the output is stereo.
    pub is_stereo: bool,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Renders mono samples to a WAV file.
    pub fn from_mono(samples: &[f64], sample_rate: u32, gain: f64) -> Self {
        let pcm = samples_to_pcm16(samples, gain);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            is_stereo: false,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Renders a stereo pair to a WAV file.
    pub fn from_stereo(stereo: &StereoOutput, sample_rate: u32, gain: f64) -> Self {
        let pcm = stereo_to_pcm16(&stereo.left, &stereo.right, gain);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::stereo(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            is_stereo: true,
            sample_rate,
            num_samples: stereo.len(),
        }
    }

    /// Renders either mixer output variant.
    pub fn from_output(output: &MixerOutput, sample_rate: u32, gain: f64) -> Self {
        match output {
            MixerOutput::Mono(samples) => Self::from_mono(samples, sample_rate, gain),
            MixerOutput::Stereo(stereo) => Self::from_stereo(stereo, sample_rate, gain),
        }
    }

    /// Duration of the rendered audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to a file.
    pub fn write_to_file(&self, path: &Path) -> AudioResult<()> {
        std::fs::write(path, &self.wav_data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_metadata() {
        let result = WavResult::from_mono(&[0.0; 22050], 22050, 1.0);
        assert!(!result.is_stereo);
        assert_eq!(result.num_samples, 22050);
        assert!((result.duration_seconds() - 1.0).abs() < 1e-12);
        assert_eq!(result.wav_data.len(), 44 + 22050 * 2);
    }

    #[test]
    fn test_stereo_metadata() {
        let stereo = StereoOutput::from_mono(vec![0.1; 100]);
        let result = WavResult::from_stereo(&stereo, 44100, 1.0);
        assert!(result.is_stereo);
        assert_eq!(result.num_samples, 100);
        assert_eq!(result.wav_data.len(), 44 + 100 * 4);
    }

    #[test]
    fn test_pcm_hash_is_stable_and_content_sensitive() {
        let a = WavResult::from_mono(&[0.1, 0.2, 0.3], 22050, 1.0);
        let b = WavResult::from_mono(&[0.1, 0.2, 0.3], 22050, 1.0);
        let c = WavResult::from_mono(&[0.1, 0.2, 0.4], 22050, 1.0);
        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_ne!(a.pcm_hash, c.pcm_hash);
    }

    #[test]
    fn test_gain_changes_pcm_hash() {
        let a = WavResult::from_mono(&[0.5; 64], 44100, 1.0);
        let b = WavResult::from_mono(&[0.5; 64], 44100, 0.95);
        assert_ne!(a.pcm_hash, b.pcm_hash);
    }
}
