//! RIFF chunk writing and PCM quantization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Writes a complete WAV file (44-byte header plus PCM payload).
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;

    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&WavFormat::BITS_PER_SAMPLE.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec cannot fail");
    buffer
}

/// Quantizes one f64 sample to a 16-bit value.
///
/// Clamp happens before the gain, so a gain below 1.0 guarantees the
/// integer result stays inside [-32768, 32767] with no wraparound.
fn quantize(sample: f64, gain: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0 * gain).round() as i16
}

/// Converts mono f64 samples to little-endian 16-bit PCM bytes.
///
/// `gain` is a final scale applied at quantization time; 1.0 for the game
/// set, below 1.0 for families mastered hotter upstream.
pub fn samples_to_pcm16(samples: &[f64], gain: f64) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample, gain).to_le_bytes());
    }
    pcm
}

/// Converts stereo f64 samples to interleaved little-endian 16-bit PCM bytes.
pub fn stereo_to_pcm16(left: &[f64], right: &[f64], gain: f64) -> Vec<u8> {
    let len = left.len().min(right.len());
    let mut pcm = Vec::with_capacity(len * 4);
    for i in 0..len {
        pcm.extend_from_slice(&quantize(left[i], gain).to_le_bytes());
        pcm.extend_from_slice(&quantize(right[i], gain).to_le_bytes());
    }
    pcm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let format = WavFormat::mono(22050);
        let pcm = samples_to_pcm16(&[0.0, 0.5, -0.5], 1.0);
        let wav = write_wav_to_vec(&format, &pcm);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(wav.len(), 44 + pcm.len());

        // Channel count and sample rate land at fixed offsets
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 22050);
    }

    #[test]
    fn test_quantization_values() {
        let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0], 1.0);
        let values: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(values, vec![0, 32767, -32767]);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let pcm = samples_to_pcm16(&[2.0, -3.0], 1.0);
        let values: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(values, vec![32767, -32767]);
    }

    #[test]
    fn test_quantization_gain() {
        let pcm = samples_to_pcm16(&[1.0], 0.95);
        let value = i16::from_le_bytes([pcm[0], pcm[1]]);
        assert_eq!(value, (32767.0f64 * 0.95).round() as i16);
    }

    #[test]
    fn test_stereo_interleaving() {
        let pcm = stereo_to_pcm16(&[1.0, 0.0], &[-1.0, 0.5], 1.0);
        let values: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(values, vec![32767, -32767, 0, 16384]);
    }
}
